use chrono::Local;
use dotenvy::dotenv;
use staff_roster::{
    config,
    core::{
        directory::DirectoryFilters,
        session::{Account, FileSessionStore, SessionManager},
    },
    errors::Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; ROSTER_CONFIG may come from there
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration and seed the directory
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    let directory = app_config.seed_directory();

    // 4. Restore the session, falling back to the configured company scope
    let store = FileSessionStore::new(&app_config.session.path);
    let mut session = SessionManager::with_keys(
        store,
        app_config.session.admin_key.as_str(),
        app_config.session.worker_key.as_str(),
    );
    let account = session
        .restore_or_login(Account {
            id: "default".to_string(),
            company_code: app_config.company_code.clone(),
        })
        .inspect_err(|e| error!("Session could not be restored, aborting: {}", e))?;

    if let Some(target) = app_config.session.worker_target {
        match session.switch_to_worker(target, &directory) {
            Ok(worker) => info!(employee = %worker.name, store = %worker.store_id, "Acting as worker"),
            Err(e) => warn!("Worker switch skipped: {}", e),
        }
    }

    // 5. Print the roster of every store the account can reach
    let today = Local::now().date_naive();
    for store in directory.accessible_stores(&account.company_code) {
        let filters = DirectoryFilters::for_scope(&directory, Some(&store.store_id));
        info!(
            store = %store.name,
            positions = filters.position.len(),
            "Store roster"
        );
        for employee in directory.scoped_employees(Some(&store.store_id)) {
            info!(
                name = %employee.name,
                status = %employee.status,
                career = %employee.career(today),
                phone = %employee.masked_phone(),
                "  employee"
            );
        }
        let records = directory.scoped_attendance(Some(&store.store_id));
        info!(records = records.len(), "  attendance");
    }

    Ok(())
}
