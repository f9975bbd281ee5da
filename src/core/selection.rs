//! Multi-select toggle state.
//!
//! [`SelectionSet`] backs both the filter menus (position, status, info status) and the
//! export column picker. Keys are fixed when the set is built.

use std::collections::BTreeMap;

/// Mapping from each key of a fixed enumeration to whether it is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<K: Ord> {
    entries: BTreeMap<K, bool>,
}

impl<K: Ord + Clone> SelectionSet<K> {
    /// Builds a set over `keys` with every key set to `selected`.
    pub fn new<I>(keys: I, selected: bool) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            entries: keys.into_iter().map(|key| (key, selected)).collect(),
        }
    }

    /// Flips membership of `key`. Returns the new state, or `None` for an unknown key.
    pub fn toggle(&mut self, key: &K) -> Option<bool> {
        let entry = self.entries.get_mut(key)?;
        *entry = !*entry;
        Some(*entry)
    }

    /// Sets every key to `selected`.
    pub fn select_all(&mut self, selected: bool) {
        self.entries.values_mut().for_each(|value| *value = selected);
    }

    /// Whether `key` is selected. Unknown keys are not.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.entries.get(key).copied().unwrap_or(false)
    }

    /// Selected keys in key order.
    #[must_use]
    pub fn selected(&self) -> Vec<K> {
        self.entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Whether at least one key is selected.
    #[must_use]
    pub fn any_selected(&self) -> bool {
        self.entries.values().any(|selected| *selected)
    }

    /// Whether every key is selected.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.entries.values().all(|selected| *selected)
    }

    /// Every key with its state.
    pub fn iter(&self) -> impl Iterator<Item = (&K, bool)> {
        self.entries.iter().map(|(key, selected)| (key, *selected))
    }

    /// Number of keys in the enumeration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the enumeration has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Filter menu over one dimension. Starts with nothing selected, which filters nothing.
pub type FilterMenu<K> = SelectionSet<K>;

impl<K: Ord + Clone> FilterMenu<K> {
    /// Builds an empty filter menu over `keys`.
    pub fn unselected<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self::new(keys, false)
    }
}
