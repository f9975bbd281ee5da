//! Durable session markers.
//!
//! The logged-in admin account and the "acting as worker" context survive reloads under
//! two named keys. Storage sits behind [`SessionStore`] so the manager can run against
//! memory in tests and a TOML file in the binary. Payloads are TOML documents; one that
//! does not parse is reported as [`Error::MalformedSession`] and nothing is changed.

use crate::{
    core::directory::RecordDirectory,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default key of the admin account marker
pub const ADMIN_KEY: &str = "roster.admin";
/// Default key of the worker session marker
pub const WORKER_KEY: &str = "roster.worker";

/// Key/value storage for session markers.
pub trait SessionStore {
    /// Payload stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Stores `value` under `key`, replacing any previous payload.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removes `key`. Removing a missing key is not an error.
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// Session store that lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Session store persisted as one TOML table of key to payload.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        toml::from_str(&contents).map_err(|e| Error::MalformedSession {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(values).map_err(|e| Error::SessionEncode {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.write(&values)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.write(&values)?;
        }
        Ok(())
    }
}

/// Logged-in admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account id
    pub id: String,
    /// Company the account is scoped to
    pub company_code: String,
}

/// Admin acting as one of the store's workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSession {
    /// Employee the admin acts as
    pub employee_id: i64,
    /// Employee's display name
    pub name: String,
    /// Employee's store
    pub store_id: String,
}

/// Reads and writes session markers through an injected store.
#[derive(Debug, Clone)]
pub struct SessionManager<S: SessionStore> {
    store: S,
    admin_key: String,
    worker_key: String,
}

impl<S: SessionStore> SessionManager<S> {
    /// Manager using the default key names.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, ADMIN_KEY, WORKER_KEY)
    }

    /// Manager using custom key names.
    pub fn with_keys(store: S, admin_key: impl Into<String>, worker_key: impl Into<String>) -> Self {
        Self {
            store,
            admin_key: admin_key.into(),
            worker_key: worker_key.into(),
        }
    }

    /// Underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(payload) = self.store.get(key)? else {
            return Ok(None);
        };
        toml::from_str(&payload).map(Some).map_err(|e| {
            warn!(key, "Malformed session payload");
            Error::MalformedSession {
                key: key.to_string(),
                message: e.to_string(),
            }
        })
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let payload = toml::to_string(value).map_err(|e| Error::SessionEncode {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(key, &payload)
    }

    /// Records `account` as logged in.
    pub fn login(&mut self, account: &Account) -> Result<()> {
        let key = self.admin_key.clone();
        self.write(&key, account)?;
        info!(account = %account.id, company_code = %account.company_code, "Admin logged in");
        Ok(())
    }

    /// Logged-in account, if any.
    pub fn current_account(&self) -> Result<Option<Account>> {
        self.read(&self.admin_key)
    }

    /// Logged-in account, logging `fallback` in when nobody is.
    ///
    /// A malformed marker is returned as an error and left in place; the fallback is
    /// not written over it.
    pub fn restore_or_login(&mut self, fallback: Account) -> Result<Account> {
        if let Some(account) = self.current_account()? {
            debug!(account = %account.id, "Session restored");
            return Ok(account);
        }
        self.login(&fallback)?;
        Ok(fallback)
    }

    /// Clears the admin marker.
    pub fn logout(&mut self) -> Result<()> {
        let key = self.admin_key.clone();
        self.store.clear(&key)?;
        info!("Admin logged out");
        Ok(())
    }

    /// Switches into the worker context of `employee_id`.
    ///
    /// Nothing is written when the employee does not exist.
    pub fn switch_to_worker(
        &mut self,
        employee_id: i64,
        directory: &RecordDirectory,
    ) -> Result<WorkerSession> {
        let employee = directory.employee(employee_id).ok_or_else(|| {
            warn!(employee_id, "Role switch target missing");
            Error::EmployeeNotFound { id: employee_id }
        })?;
        let session = WorkerSession {
            employee_id,
            name: employee.name.clone(),
            store_id: employee.store_id.clone(),
        };
        let key = self.worker_key.clone();
        self.write(&key, &session)?;
        debug!(employee_id, "Switched to worker context");
        Ok(session)
    }

    /// Active worker context, if any.
    pub fn worker_session(&self) -> Result<Option<WorkerSession>> {
        self.read(&self.worker_key)
    }

    /// Leaves the worker context.
    pub fn end_worker_session(&mut self) -> Result<()> {
        let key = self.worker_key.clone();
        self.store.clear(&key)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{init_test_tracing, sample_directory};

    fn account() -> Account {
        Account {
            id: "admin01".to_string(),
            company_code: "ACME".to_string(),
        }
    }

    #[test]
    fn test_login_logout_round_trip() {
        let mut session = SessionManager::new(MemorySessionStore::default());
        assert_eq!(session.current_account().unwrap(), None);

        session.login(&account()).unwrap();
        assert_eq!(session.current_account().unwrap(), Some(account()));

        session.logout().unwrap();
        assert_eq!(session.current_account().unwrap(), None);
    }

    #[test]
    fn test_malformed_payload_is_reported() {
        let mut store = MemorySessionStore::default();
        store.set(ADMIN_KEY, "{not toml").unwrap();
        let session = SessionManager::new(store);

        let result = session.current_account();
        assert!(matches!(result, Err(Error::MalformedSession { ref key, .. }) if key == ADMIN_KEY));
        assert!(session.store().get(ADMIN_KEY).unwrap().is_some());
    }

    #[test]
    fn test_restore_or_login() {
        let mut session = SessionManager::new(MemorySessionStore::default());
        let fallback = Account {
            id: "default".to_string(),
            company_code: "OTHER".to_string(),
        };

        assert_eq!(session.restore_or_login(fallback.clone()).unwrap(), fallback);
        assert_eq!(session.current_account().unwrap(), Some(fallback));

        session.login(&account()).unwrap();
        let restored = session
            .restore_or_login(Account {
                id: "ignored".to_string(),
                company_code: "ACME".to_string(),
            })
            .unwrap();
        assert_eq!(restored, account());
    }

    #[test]
    fn test_restore_aborts_on_malformed_marker() {
        let mut store = MemorySessionStore::default();
        store.set(ADMIN_KEY, "{not toml").unwrap();
        let mut session = SessionManager::new(store);

        let result = session.restore_or_login(account());
        assert!(matches!(result, Err(Error::MalformedSession { .. })));
        assert_eq!(session.store().get(ADMIN_KEY).unwrap().as_deref(), Some("{not toml"));
    }

    #[test]
    fn test_unencodable_payload_is_encode_error() {
        let mut session = SessionManager::new(MemorySessionStore::default());

        let result = session.write(ADMIN_KEY, &42_i64);
        assert!(matches!(result, Err(Error::SessionEncode { ref key, .. }) if key == ADMIN_KEY));
        assert_eq!(session.store().get(ADMIN_KEY).unwrap(), None);
    }

    #[test]
    fn test_switch_to_worker() {
        init_test_tracing();
        let directory = sample_directory();
        let target = directory.employees()[0].clone();
        let mut session = SessionManager::new(MemorySessionStore::default());

        let worker = session.switch_to_worker(target.id, &directory).unwrap();
        assert_eq!(worker.name, target.name);
        assert_eq!(session.worker_session().unwrap(), Some(worker));

        session.end_worker_session().unwrap();
        assert_eq!(session.worker_session().unwrap(), None);
    }

    #[test]
    fn test_switch_to_missing_worker_writes_nothing() {
        let directory = sample_directory();
        let mut session = SessionManager::new(MemorySessionStore::default());

        let result = session.switch_to_worker(-1, &directory);
        assert!(matches!(result, Err(Error::EmployeeNotFound { id: -1 })));
        assert_eq!(session.store().get(WORKER_KEY).unwrap(), None);
    }

    #[test]
    fn test_logout_keeps_worker_marker() {
        let directory = sample_directory();
        let mut session = SessionManager::new(MemorySessionStore::default());
        session.login(&account()).unwrap();
        session.switch_to_worker(directory.employees()[0].id, &directory).unwrap();

        session.logout().unwrap();
        assert!(session.worker_session().unwrap().is_some());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("session.toml");

        let mut session = SessionManager::with_keys(FileSessionStore::new(&path), "admin", "worker");
        session.login(&account()).unwrap();
        assert!(path.exists());

        let reloaded = SessionManager::with_keys(FileSessionStore::new(&path), "admin", "worker");
        assert_eq!(reloaded.current_account().unwrap(), Some(account()));

        let mut reloaded = reloaded;
        reloaded.logout().unwrap();
        let again = SessionManager::with_keys(FileSessionStore::new(&path), "admin", "worker");
        assert_eq!(again.current_account().unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "= broken").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(matches!(store.get(ADMIN_KEY), Err(Error::MalformedSession { .. })));
    }
}
