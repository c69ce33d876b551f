//! The failures reported by the build targets store

use std::fmt::{self, Display};
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::project::ContainerPath;

#[derive(Debug, Error)]
pub enum TargetsError {
    /// The targets file couldn't be read, parsed or written
    #[error("{message}{}", path_suffix(.path))]
    Persistence {
        message: &'static str,
        path: Option<PathBuf>,
        #[source]
        source: PersistenceCause,
    },

    /// A `target` element that can't be turned into a build target
    #[error("malformed target element #{index} at {position}: {reason}")]
    MalformedTarget {
        index: usize,
        position: String,
        reason: MalformedReason,
    },

    #[error("the build target '{name}' already exists in '{container}'")]
    DuplicateTarget {
        container: ContainerPath,
        name: String,
    },

    #[error("the container '{container}' does not belong to the project '{project}'")]
    ForeignContainer {
        project: String,
        container: ContainerPath,
    },

    #[error("'{name}' can't name a project: it must be a plain file name")]
    InvalidProjectName { name: String },
}

#[derive(Debug, Error)]
pub enum PersistenceCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),
    #[error(transparent)]
    Write(#[from] quick_xml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    MissingAttribute(&'static str),
    EmptyName,
    InvalidBoolean { element: &'static str, value: String },
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingAttribute(attribute) => {
                write!(f, "missing the required attribute '{attribute}'")
            }
            MalformedReason::EmptyName => f.write_str("the 'name' attribute is empty"),
            MalformedReason::InvalidBoolean { element, value } => {
                write!(f, "'{value}' is not a valid boolean for <{element}>")
            }
        }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(": {p:?}"))
        .unwrap_or_default()
}

impl TargetsError {
    pub(crate) fn persistence(
        message: &'static str,
        path: Option<PathBuf>,
        source: impl Into<PersistenceCause>,
    ) -> Self {
        TargetsError::Persistence {
            message,
            path,
            source: source.into(),
        }
    }
}
