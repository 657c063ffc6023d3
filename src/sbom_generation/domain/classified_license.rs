/// Outcome of checking a raw license string against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseClassification {
    Recognized,
    Unrecognized,
}

impl LicenseClassification {
    pub fn is_recognized(self) -> bool {
        matches!(self, LicenseClassification::Recognized)
    }
}

/// A raw license string reconciled against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLicense {
    /// The string as given; every identifier in it is on the catalog
    Valid(String),
    /// A generated `LicenseRef-` identifier standing in for `original_text`
    Extracted {
        license_ref: String,
        original_text: String,
    },
}

impl ClassifiedLicense {
    /// The string to put in a package's declared-license field
    pub fn declared(&self) -> &str {
        match self {
            ClassifiedLicense::Valid(expression) => expression,
            ClassifiedLicense::Extracted { license_ref, .. } => license_ref,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ClassifiedLicense::Valid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_valid() {
        let license = ClassifiedLicense::Valid("MIT OR Apache-2.0".to_string());
        assert_eq!(license.declared(), "MIT OR Apache-2.0");
        assert!(license.is_valid());
    }

    #[test]
    fn test_declared_extracted() {
        let license = ClassifiedLicense::Extracted {
            license_ref: "LicenseRef-Custom".to_string(),
            original_text: "Custom".to_string(),
        };
        assert_eq!(license.declared(), "LicenseRef-Custom");
        assert!(!license.is_valid());
    }

    #[test]
    fn test_classification_is_recognized() {
        assert!(LicenseClassification::Recognized.is_recognized());
        assert!(!LicenseClassification::Unrecognized.is_recognized());
    }
}
