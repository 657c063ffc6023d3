use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Destination name that selects standard output
pub const STDOUT_DESTINATION: &str = "-";

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// Maps an output path argument to a presenter, `-` meaning stdout
    pub fn for_destination(destination: &Path) -> Self {
        if destination.as_os_str() == STDOUT_DESTINATION {
            PresenterType::Stdout
        } else {
            PresenterType::File(destination.to_path_buf())
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use npm_sbom::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_for_destination_dash_is_stdout() {
        assert_eq!(
            PresenterType::for_destination(Path::new("-")),
            PresenterType::Stdout
        );
    }

    #[test]
    fn test_for_destination_path_is_file() {
        assert_eq!(
            PresenterType::for_destination(Path::new("out/sbom.spdx")),
            PresenterType::File(PathBuf::from("out/sbom.spdx"))
        );
    }

    #[test]
    fn test_create_file_presenter_writes_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.json");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("{}").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
