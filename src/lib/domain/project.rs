//! Project and container identities
//!
//! A container is either the root of a project or a folder inside it. Both are plain
//! values here: resolving a container never touches the file system.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::targets::error::TargetsError;

/// The project that owns a set of build targets.
///
/// It also acts as the resolver of container identities, mapping relative path strings
/// to the [`ContainerPath`] that they name inside the project.
///
/// ### Tests
///
/// ```rust
/// use buildtargets::domain::project::Project;
///
/// let project = Project::new("P");
/// assert_eq!(project.container_for(""), project.root());
/// assert_eq!(project.container_for("./src/"), project.container_for("src"));
/// assert_eq!(project.container_for("src\\lib").to_string(), "P/src/lib");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Project {
    name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Like [`Project::new`], but only for names that can be used as a file name on their
    /// own: not empty, not `.` or `..`, and without path separators
    ///
    /// ```rust
    /// use buildtargets::domain::project::Project;
    ///
    /// assert!(Project::try_new("demo").is_ok());
    /// assert!(Project::try_new("../demo").is_err());
    /// ```
    pub fn try_new(name: impl Into<String>) -> Result<Self, TargetsError> {
        let name = name.into();
        let is_valid = !matches!(name.as_str(), "" | "." | "..")
            && !name.contains(['/', '\\', '\0']);
        if is_valid {
            Ok(Self { name })
        } else {
            Err(TargetsError::InvalidProjectName { name })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The container that represents the project itself
    pub fn root(&self) -> ContainerPath {
        ContainerPath {
            project: self.name.clone(),
            relative: String::new(),
        }
    }

    /// Resolves *relative_path* to a folder of this project, or to the project root when
    /// the path is empty once normalized
    pub fn container_for(&self, relative_path: &str) -> ContainerPath {
        ContainerPath {
            project: self.name.clone(),
            relative: normalize_relative_path(relative_path).into_owned(),
        }
    }

    /// Whether *container* lives inside this project
    pub fn owns(&self, container: &ContainerPath) -> bool {
        container.project == self.name
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Opaque identity of a container: the owning project name plus a normalized relative
/// path, empty for the project root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContainerPath {
    project: String,
    relative: String,
}

impl ContainerPath {
    pub fn project_name(&self) -> &str {
        &self.project
    }

    /// The path of the container relative to its project root
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    pub fn is_project_root(&self) -> bool {
        self.relative.is_empty()
    }
}

impl Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative.is_empty() {
            f.write_str(&self.project)
        } else {
            write!(f, "{}/{}", self.project, self.relative)
        }
    }
}

/// Unifies separators to `/` and drops empty and `.` segments, so `./src//lib/` and
/// `src\lib` name the same folder
fn normalize_relative_path(path: &str) -> Cow<'_, str> {
    let is_clean = !path.contains('\\')
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != ".");
    if is_clean {
        return Cow::Borrowed(path);
    }

    let segments: Vec<&str> = path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();
    Cow::Owned(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_relative_path_resolves_to_the_root() {
        let project = Project::new("demo");

        for path in ["", ".", "./", "/", "//"] {
            let container = project.container_for(path);
            assert!(container.is_project_root(), "{path:?} should be the root");
            assert_eq!(container, project.root());
        }
    }

    #[test]
    fn test_folder_paths_are_normalized() {
        let project = Project::new("demo");
        let expected = project.container_for("src/lib");

        assert_eq!(expected.relative_path(), "src/lib");
        assert_eq!(project.container_for("./src/lib/"), expected);
        assert_eq!(project.container_for("/src//lib"), expected);
        assert_eq!(project.container_for("src\\lib"), expected);
        assert_ne!(project.container_for("src"), expected);
    }

    #[test]
    fn test_containers_of_different_projects_differ() {
        let a = Project::new("a");
        let b = Project::new("b");

        assert_ne!(a.root(), b.root());
        assert!(a.owns(&a.container_for("x")));
        assert!(!a.owns(&b.container_for("x")));
    }

    #[test]
    fn test_project_names_that_escape_the_state_location_are_rejected() {
        for name in ["", ".", "..", "../P", "a/b", "a\\b", "/etc/passwd", "C:\\P"] {
            assert!(
                matches!(
                    Project::try_new(name),
                    Err(TargetsError::InvalidProjectName { .. })
                ),
                "{name:?} should be rejected"
            );
        }

        for name in ["P", "my.project", "..P", "with space"] {
            assert_eq!(Project::try_new(name).ok(), Some(Project::new(name)));
        }
    }

    #[test]
    fn test_display() {
        let project = Project::new("demo");
        assert_eq!(project.root().to_string(), "demo");
        assert_eq!(project.container_for("src").to_string(), "demo/src");
    }
}
