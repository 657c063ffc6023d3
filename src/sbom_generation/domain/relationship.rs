use super::Package;

const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";

/// SPDX element identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpdxId(String);

impl SpdxId {
    /// The identifier of the document itself
    pub fn document() -> Self {
        Self(DOCUMENT_SPDX_ID.to_string())
    }

    /// `SPDXRef-<name>-<version>`, with characters outside `[A-Za-z0-9.-]`
    /// replaced by `-`
    ///
    /// Distinct packages can share a base identifier (`a_b` and `a-b`), so
    /// document ids are handed out by `PackageIdRegistry`.
    pub fn base_for_package(package: &Package) -> Self {
        let raw = format!("{}-{}", package.name(), package.version());
        let sanitized: String = raw
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        Self(format!("SPDXRef-{}", sanitized))
    }

    /// This identifier with `-<suffix>` appended
    pub fn with_suffix(&self, suffix: u64) -> Self {
        Self(format!("{}-{}", self.0, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpdxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    /// document → root package
    Describes,
    /// runtime dependency → dependent
    PrerequisiteFor,
    /// development dependency → dependent
    BuildToolOf,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Describes => "DESCRIBES",
            RelationshipKind::PrerequisiteFor => "PREREQUISITE_FOR",
            RelationshipKind::BuildToolOf => "BUILD_TOOL_OF",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed edge: `subject <kind> object`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRecord {
    subject: SpdxId,
    kind: RelationshipKind,
    object: SpdxId,
}

impl RelationshipRecord {
    pub fn new(subject: SpdxId, kind: RelationshipKind, object: SpdxId) -> Self {
        Self {
            subject,
            kind,
            object,
        }
    }

    pub fn describes(root: &SpdxId) -> Self {
        Self::new(SpdxId::document(), RelationshipKind::Describes, root.clone())
    }

    pub fn prerequisite_for(dependency: &SpdxId, dependent: &SpdxId) -> Self {
        Self::new(
            dependency.clone(),
            RelationshipKind::PrerequisiteFor,
            dependent.clone(),
        )
    }

    pub fn build_tool_of(dependency: &SpdxId, dependent: &SpdxId) -> Self {
        Self::new(
            dependency.clone(),
            RelationshipKind::BuildToolOf,
            dependent.clone(),
        )
    }

    pub fn subject(&self) -> &SpdxId {
        &self.subject
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    pub fn object(&self) -> &SpdxId {
        &self.object
    }
}
