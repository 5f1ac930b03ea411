//! Submitted field values.
//!
//! This module provides [`ValueStore`], the ordered list of `(name, value)`
//! pairs a form decodes from.

/// An ordered list of submitted `(name, value)` pairs.
///
/// `ValueStore` is a sequence rather than a map: a name may appear any number
/// of times and entries are never merged. Entries are kept most recent first,
/// so `add_*` methods put new entries at the front and single-value lookups
/// return the most recently added value.
///
/// # Example
///
/// ```rust
/// use inquest::ValueStore;
///
/// let mut values = ValueStore::new();
/// values.add_int("one", 100);
/// values.add_string("one", "Hello");
///
/// assert_eq!(values.field_value("one"), "Hello");
/// assert_eq!(values.field_values("one"), vec!["Hello", "100"]);
/// assert_eq!(values.field_value("two"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStore {
    entries: Vec<(String, String)>,
}

impl ValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string value in front of the existing entries.
    pub fn add_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(0, (name.into(), value.into()));
    }

    /// Adds an integer value, formatted in base 10, in front of the existing
    /// entries.
    pub fn add_int(&mut self, name: impl Into<String>, value: i64) {
        self.add_string(name, value.to_string());
    }

    /// Adds a batch of values in front of the existing entries.
    ///
    /// The batch keeps its own order.
    pub fn add_values<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        entries.append(&mut self.entries);
        self.entries = entries;
    }

    /// Replaces every entry with the given pairs.
    pub fn set_values<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
    }

    /// Returns the most recent value for `name`, or `None` if it is absent.
    pub fn latest(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the most recent value for `name`, or an empty string if it is
    /// absent.
    pub fn field_value(&self, name: &str) -> String {
        self.latest(name).unwrap_or_default().to_string()
    }

    /// Returns every value for `name`, most recent first.
    pub fn field_values(&self, name: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Returns true if at least one entry has the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Returns all entries, most recent first.
    pub fn all(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ValueStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.set_values(iter);
        store
    }
}
