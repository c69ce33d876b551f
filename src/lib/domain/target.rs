//! The build targets that a project declares for its containers

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::project::ContainerPath;

/// A named, configurable build invocation attached to a container
///
/// Two targets are the same target when they live in the same container and share the
/// same name. That pair is fixed at construction, so a target can't silently move
/// across the entries of a [`crate::targets::ProjectTargets`] index.
///
/// ### Tests
///
/// ```rust
/// use buildtargets::domain::{project::Project, target::BuildTarget};
///
/// let project = Project::new("P");
/// let mut debug = BuildTarget::new(project.container_for("src"), "Debug");
/// debug.set_build_arguments(Some("-j4 all"));
///
/// assert_eq!(debug.target_id(), "src");
/// assert_eq!(debug.build_arguments(), Some("-j4 all"));
/// assert_eq!(debug, BuildTarget::new(project.container_for("src"), "Debug"));
/// assert_ne!(debug, BuildTarget::new(project.root(), "Debug"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct BuildTarget {
    container: ContainerPath,
    target_id: String,
    name: String,
    stop_on_error: bool,
    use_default_build_command: bool,
    build_command: Option<PathBuf>,
    build_arguments: Option<String>,
}

impl BuildTarget {
    pub fn new(container: ContainerPath, name: impl Into<String>) -> Self {
        Self {
            target_id: container.relative_path().to_owned(),
            container,
            name: name.into(),
            stop_on_error: false,
            use_default_build_command: false,
            build_command: None,
            build_arguments: None,
        }
    }

    pub fn container(&self) -> &ContainerPath {
        &self.container
    }

    /// The container relative path that identifies the target on the persisted file
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stop_on_error(&self) -> bool {
        self.stop_on_error
    }

    pub fn set_stop_on_error(&mut self, stop: bool) {
        self.stop_on_error = stop;
    }

    pub fn use_default_build_command(&self) -> bool {
        self.use_default_build_command
    }

    pub fn set_use_default_build_command(&mut self, use_default: bool) {
        self.use_default_build_command = use_default;
    }

    pub fn build_command(&self) -> Option<&Path> {
        self.build_command.as_deref()
    }

    /// Empty paths are stored as no override at all
    pub fn set_build_command<P: Into<PathBuf>>(&mut self, command: Option<P>) {
        self.build_command = command
            .map(Into::into)
            .filter(|path| !path.as_os_str().is_empty());
    }

    pub fn build_arguments(&self) -> Option<&str> {
        self.build_arguments.as_deref()
    }

    /// Empty argument strings are stored as no arguments at all
    pub fn set_build_arguments<S: Into<String>>(&mut self, arguments: Option<S>) {
        self.build_arguments = arguments.map(Into::into).filter(|args| !args.is_empty());
    }
}

impl PartialEq for BuildTarget {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container && self.name == other.name
    }
}

impl Eq for BuildTarget {}
