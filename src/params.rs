use std::collections::BTreeMap;

/// Parameter naming the organisation that provides the plugin.
pub const PLUGIN_PROVIDER: &str = "plugin_provider";

/// Parameter naming the plugin itself.
pub const PLUGIN_NAME: &str = "plugin_name";

/// The named values substituted into templates for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    values: BTreeMap<String, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the parameter set used by the plugin catalogue.
    pub fn plugin(provider: impl Into<String>, name: impl Into<String>) -> Self {
        let mut params = Self::new();
        params.insert(PLUGIN_PROVIDER, provider);
        params.insert(PLUGIN_NAME, name);
        params
    }

    /// Binds `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
