/// Document-level creation metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationInfo {
    spdx_version: String,
    data_license: String,
    document_name: String,
    document_namespace: String,
    license_list_version: String,
    creators: Vec<String>,
    created: String,
}

impl CreationInfo {
    pub fn new(
        spdx_version: String,
        data_license: String,
        document_name: String,
        document_namespace: String,
        license_list_version: String,
        creators: Vec<String>,
        created: String,
    ) -> Self {
        Self {
            spdx_version,
            data_license,
            document_name,
            document_namespace,
            license_list_version,
            creators,
            created,
        }
    }

    pub fn spdx_version(&self) -> &str {
        &self.spdx_version
    }

    pub fn data_license(&self) -> &str {
        &self.data_license
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn document_namespace(&self) -> &str {
        &self.document_namespace
    }

    pub fn license_list_version(&self) -> &str {
        &self.license_list_version
    }

    pub fn creators(&self) -> &[String] {
        &self.creators
    }

    pub fn created(&self) -> &str {
        &self.created
    }
}
