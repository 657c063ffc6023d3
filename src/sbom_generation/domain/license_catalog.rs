use std::collections::HashSet;

/// Immutable lookup set of SPDX license and exception identifiers.
///
/// Built once per run from the license-list data and passed by reference
/// to every classification.
#[derive(Debug, Clone, Default)]
pub struct LicenseCatalog {
    identifiers: HashSet<String>,
    license_count: usize,
    exception_count: usize,
    license_list_version: Option<String>,
}

impl LicenseCatalog {
    /// Merges license and exception identifiers into one lookup set
    pub fn new<L, E>(licenses: L, exceptions: E) -> Self
    where
        L: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        let mut identifiers = HashSet::new();
        let mut license_count = 0;
        let mut exception_count = 0;

        for id in licenses {
            license_count += 1;
            identifiers.insert(id);
        }
        for id in exceptions {
            exception_count += 1;
            identifiers.insert(id);
        }

        Self {
            identifiers,
            license_count,
            exception_count,
            license_list_version: None,
        }
    }

    pub fn with_license_list_version(mut self, version: Option<String>) -> Self {
        self.license_list_version = version.filter(|v| !v.is_empty());
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.identifiers.contains(id)
    }

    /// Number of distinct identifiers in the lookup set
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn license_count(&self) -> usize {
        self.license_count
    }

    pub fn exception_count(&self) -> usize {
        self.exception_count
    }

    pub fn license_list_version(&self) -> Option<&str> {
        self.license_list_version.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_merges_licenses_and_exceptions() {
        let catalog = LicenseCatalog::new(
            vec!["MIT".to_string(), "Apache-2.0".to_string()],
            vec!["LLVM-exception".to_string()],
        );

        assert!(catalog.contains("MIT"));
        assert!(catalog.contains("Apache-2.0"));
        assert!(catalog.contains("LLVM-exception"));
        assert!(!catalog.contains("mit"));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.license_count(), 2);
        assert_eq!(catalog.exception_count(), 1);
    }

    #[test]
    fn test_catalog_deduplicates() {
        let catalog = LicenseCatalog::new(
            vec!["MIT".to_string(), "MIT".to_string()],
            Vec::<String>::new(),
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = LicenseCatalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("MIT"));
        assert!(catalog.license_list_version().is_none());
    }

    #[test]
    fn test_license_list_version() {
        let catalog = LicenseCatalog::new(vec!["MIT".to_string()], Vec::<String>::new())
            .with_license_list_version(Some("3.24".to_string()));
        assert_eq!(catalog.license_list_version(), Some("3.24"));

        let blank = LicenseCatalog::default().with_license_list_version(Some(String::new()));
        assert!(blank.license_list_version().is_none());
    }
}
