/// An "other license" entry: a generated identifier together with the
/// license text it replaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLicenseEntry {
    license_id: String,
    extracted_text: String,
    comment: String,
}

impl ExtractedLicenseEntry {
    pub fn new(license_id: String, extracted_text: String) -> Self {
        let comment = format!(
            "Represents the license expression '{}' which is not on the SPDX License List",
            extracted_text
        );
        Self {
            license_id,
            extracted_text,
            comment,
        }
    }

    pub fn license_id(&self) -> &str {
        &self.license_id
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    /// Human-readable name; the original text itself
    pub fn license_name(&self) -> &str {
        &self.extracted_text
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_license_entry_new() {
        let entry = ExtractedLicenseEntry::new(
            "LicenseRef-Some-Custom-License".to_string(),
            "Some Custom License".to_string(),
        );

        assert_eq!(entry.license_id(), "LicenseRef-Some-Custom-License");
        assert_eq!(entry.extracted_text(), "Some Custom License");
        assert_eq!(entry.license_name(), "Some Custom License");
        assert_eq!(
            entry.comment(),
            "Represents the license expression 'Some Custom License' which is not on the SPDX License List"
        );
    }
}
