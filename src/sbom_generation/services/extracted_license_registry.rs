use crate::sbom_generation::domain::ExtractedLicenseEntry;
use std::collections::{HashMap, HashSet};

const LICENSE_REF_PREFIX: &str = "LicenseRef-";
const UNKNOWN_SUFFIX: &str = "Unknown";

/// ExtractedLicenseRegistry hands out `LicenseRef-` identifiers for license
/// text that is not on the catalog.
///
/// Each distinct text maps to exactly one identifier for the lifetime of the
/// registry, and no identifier is handed out twice. Entries are kept in the
/// order their text was first seen.
///
/// Not meant for concurrent callers: uniqueness relies on every earlier
/// resolution being visible to the next one.
#[derive(Debug, Default)]
pub struct ExtractedLicenseRegistry {
    by_text: HashMap<String, String>,
    taken: HashSet<String>,
    entries: Vec<ExtractedLicenseEntry>,
}

impl ExtractedLicenseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier for `original_text`, minting one on first use.
    ///
    /// A fresh identifier is derived from the text; if another text already
    /// owns it, `-1`, `-2`, ... is appended until a free one is found.
    pub fn resolve(&mut self, original_text: &str) -> String {
        if let Some(existing) = self.by_text.get(original_text) {
            return existing.clone();
        }

        let base = Self::base_license_ref(original_text);
        let mut license_ref = base.clone();
        let mut suffix = 1u64;
        while self.taken.contains(&license_ref) {
            license_ref = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        self.taken.insert(license_ref.clone());
        self.by_text
            .insert(original_text.to_string(), license_ref.clone());
        self.entries.push(ExtractedLicenseEntry::new(
            license_ref.clone(),
            original_text.to_string(),
        ));

        license_ref
    }

    pub fn entries(&self) -> &[ExtractedLicenseEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ExtractedLicenseEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `LicenseRef-` followed by the text, with each run of characters
    /// outside `[A-Za-z0-9.]` collapsed into a single `-`
    pub fn base_license_ref(original_text: &str) -> String {
        let mut idstring = String::with_capacity(original_text.len());
        let mut pending_dash = false;

        for c in original_text.chars() {
            if c.is_ascii_alphanumeric() || c == '.' {
                if pending_dash && !idstring.is_empty() {
                    idstring.push('-');
                }
                pending_dash = false;
                idstring.push(c);
            } else {
                pending_dash = true;
            }
        }

        if idstring.is_empty() {
            idstring.push_str(UNKNOWN_SUFFIX);
        }
        format!("{}{}", LICENSE_REF_PREFIX, idstring)
    }
}
