use crate::error::Result;
use crate::template::Template;

/// One output file: a template for its relative path and one for its content.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    key: Template,
    body: Template,
}

impl TemplateEntry {
    pub fn key(&self) -> &Template {
        &self.key
    }

    pub fn body(&self) -> &Template {
        &self.body
    }
}

/// Ordered catalogue of template entries.
///
/// Entries are rendered in registration order. Parameter names are not checked
/// here since the parameter set is only known at render time.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    entries: Vec<TemplateEntry>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry after parsing both templates.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::MalformedTemplate` if either template has
    /// invalid placeholder markup; the registry is left unchanged.
    pub fn register(&mut self, key_template: &str, body_template: &str) -> Result<&mut Self> {
        let key = Template::parse(key_template)?;
        let body = Template::parse(body_template)?;
        self.entries.push(TemplateEntry { key, body });
        Ok(self)
    }

    pub fn entries(&self) -> std::slice::Iter<'_, TemplateEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateRegistry {
    type Item = &'a TemplateEntry;
    type IntoIter = std::slice::Iter<'a, TemplateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;

    #[test]
    fn test_register_preserves_order() {
        let mut registry = TemplateRegistry::new();
        registry
            .register("b.txt", "second")
            .unwrap()
            .register("a.txt", "first")
            .unwrap()
            .register("b.txt", "third")
            .unwrap();

        let keys: Vec<&str> = registry.entries().map(|e| e.key().as_str()).collect();
        assert_eq!(keys, vec!["b.txt", "a.txt", "b.txt"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_entries_restartable() {
        let mut registry = TemplateRegistry::new();
        registry.register("{name}.txt", "{name}").unwrap();
        registry.register("other.txt", "x").unwrap();

        assert_eq!(registry.entries().count(), 2);
        assert_eq!(registry.entries().count(), 2);
        assert_eq!((&registry).into_iter().count(), 2);
    }

    #[test]
    fn test_register_malformed_fails_fast() {
        let mut registry = TemplateRegistry::new();
        let err = registry.register("{name.txt", "body").unwrap_err();
        assert!(matches!(err, ScaffoldError::MalformedTemplate { .. }));

        let err = registry.register("ok.txt", "int main() { }").unwrap_err();
        assert!(matches!(err, ScaffoldError::MalformedTemplate { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_does_not_check_parameters() {
        let mut registry = TemplateRegistry::new();
        assert!(registry.register("{anything}", "{whatever}").is_ok());
    }
}
