//! The per-project store of build targets, and its persistence to a targets file

pub mod error;
mod reader;
mod writer;

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use self::error::TargetsError;
use crate::domain::{
    project::{ContainerPath, Project},
    target::BuildTarget,
};
use crate::utils::constants::error_messages;

/// What happens when a `target` element can't be loaded, either because it is malformed
/// or because it duplicates a previous one
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// The whole load fails with the offending element's error
    #[default]
    Fail,
    /// The element is reported as a warning and the load goes on
    Skip,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub on_malformed: MalformedPolicy,
}

/// The build targets of a single project, grouped by the container that owns them.
///
/// Containers keep the order in which they received their first target, and the targets
/// of a container keep their insertion order, so serializing the store is deterministic.
///
/// The store is *dirty* while it holds changes that weren't persisted. Loading leaves it
/// clean, every successful [`ProjectTargets::add`] or effective [`ProjectTargets::remove`]
/// makes it dirty, and whoever persists it calls [`ProjectTargets::mark_clean`] (or uses
/// [`ProjectTargets::save_to_file`], which does it).
///
/// ### Tests
///
/// ```rust
/// use buildtargets::domain::{project::Project, target::BuildTarget};
/// use buildtargets::targets::ProjectTargets;
///
/// let project = Project::new("P");
/// let mut store = ProjectTargets::new(project.clone());
///
/// store.add(BuildTarget::new(project.root(), "all")).unwrap();
/// assert!(store.is_dirty());
/// assert!(store.add(BuildTarget::new(project.root(), "all")).is_err());
///
/// let names: Vec<&str> = store.get(&project.root()).iter().map(|t| t.name()).collect();
/// assert_eq!(names, vec!["all"]);
/// assert!(store.get(&project.container_for("src")).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ProjectTargets {
    project: Project,
    targets: IndexMap<ContainerPath, Vec<BuildTarget>>,
    dirty: bool,
}

impl ProjectTargets {
    /// An empty, clean store for *project*
    pub fn new(project: Project) -> Self {
        Self {
            project,
            targets: IndexMap::new(),
            dirty: false,
        }
    }

    /// Loads the store of *project* from the targets file at *path*.
    ///
    /// Failing to read or to parse the file is a [`TargetsError::Persistence`]. The
    /// caller may go on with an empty store for the project.
    pub fn from_file(
        project: Project,
        path: &Path,
        options: &LoadOptions,
    ) -> Result<Self, TargetsError> {
        log::debug!("Loading the build targets of {project} from {path:?}");
        let text = fs::read_to_string(path).map_err(|e| {
            TargetsError::persistence(
                error_messages::READ_TARGETS_FILE,
                Some(path.to_path_buf()),
                e,
            )
        })?;

        Self::load(project, &text, options).map_err(|e| match e {
            TargetsError::Persistence {
                message,
                path: None,
                source,
            } => TargetsError::Persistence {
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    /// Loads the store of *project* from the text of a targets file
    pub fn from_xml_str(
        project: Project,
        text: &str,
        options: &LoadOptions,
    ) -> Result<Self, TargetsError> {
        Self::load(project, text, options)
    }

    fn load(project: Project, text: &str, options: &LoadOptions) -> Result<Self, TargetsError> {
        let parsed = reader::read_targets(&project, text)
            .map_err(|e| TargetsError::persistence(error_messages::READ_TARGETS_FILE, None, e))?;

        let mut store = Self::new(project);
        for target in parsed {
            if let Err(error) = target.and_then(|target| store.insert(target)) {
                match options.on_malformed {
                    MalformedPolicy::Fail => return Err(error),
                    MalformedPolicy::Skip => {
                        log::warn!("Skipping a build target of {}: {error}", store.project)
                    }
                }
            }
        }

        log::debug!(
            "Loaded {} build targets in {} containers for {}",
            store.len(),
            store.targets.len(),
            store.project
        );
        Ok(store)
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The targets registered under exactly *container*, in insertion order
    pub fn get(&self, container: &ContainerPath) -> &[BuildTarget] {
        self.targets
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find(&self, container: &ContainerPath, name: &str) -> Option<&BuildTarget> {
        self.get(container).iter().find(|t| t.name() == name)
    }

    /// The containers that own at least one target
    pub fn containers(&self) -> impl Iterator<Item = &ContainerPath> {
        self.targets.keys()
    }

    /// Every target of the project, container by container
    pub fn iter(&self) -> impl Iterator<Item = &BuildTarget> {
        self.targets.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Whether the store holds a target equal to *target*, which is exactly when
    /// [`ProjectTargets::add`] fails with [`TargetsError::DuplicateTarget`].
    ///
    /// It is always `false` for a container of another project, since those never hold
    /// targets here. Use [`ProjectTargets::check_add`] to know whether an `add` would
    /// succeed at all.
    pub fn contains(&self, target: &BuildTarget) -> bool {
        self.get(target.container()).contains(target)
    }

    /// The error that [`ProjectTargets::add`] would fail with for *target*, if any
    pub fn check_add(&self, target: &BuildTarget) -> Result<(), TargetsError> {
        let container = target.container();
        if !self.project.owns(container) {
            return Err(TargetsError::ForeignContainer {
                project: self.project.name().to_owned(),
                container: container.clone(),
            });
        }
        if self.contains(target) {
            return Err(TargetsError::DuplicateTarget {
                container: container.clone(),
                name: target.name().to_owned(),
            });
        }
        Ok(())
    }

    /// Appends *target* to the targets of its container and marks the store as dirty.
    ///
    /// Fails, leaving the store untouched, when the container already holds an equal
    /// target or when it belongs to another project.
    pub fn add(&mut self, target: BuildTarget) -> Result<(), TargetsError> {
        self.insert(target)?;
        self.dirty = true;
        Ok(())
    }

    /// Removes the target equal to *target*, returning it. Containers left without
    /// targets are dropped from the index.
    pub fn remove(&mut self, target: &BuildTarget) -> Option<BuildTarget> {
        let container = target.container();
        let list = self.targets.get_mut(container)?;
        let position = list.iter().position(|t| t == target)?;
        let removed = list.remove(position);

        if list.is_empty() {
            self.targets.shift_remove(container);
        }
        self.dirty = true;

        Some(removed)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Records that the current state matches the persisted one
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// The store as the text of a targets file
    pub fn to_xml(&self) -> Result<String, TargetsError> {
        writer::write_targets(self.iter())
            .map_err(|e| TargetsError::persistence(error_messages::SERIALIZE_TARGETS, None, e))
    }

    /// Writes the store to *path*, creating the missing parent directories, and marks it
    /// clean
    pub fn save_to_file(&mut self, path: &Path) -> Result<(), TargetsError> {
        let document = self.to_xml()?;
        let write_error = |e: std::io::Error| {
            TargetsError::persistence(
                error_messages::WRITE_TARGETS_FILE,
                Some(path.to_path_buf()),
                e,
            )
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, document).map_err(write_error)?;

        log::debug!("Saved {} build targets to {path:?}", self.len());
        self.mark_clean();
        Ok(())
    }

    fn insert(&mut self, target: BuildTarget) -> Result<(), TargetsError> {
        self.check_add(&target)?;
        self.targets
            .entry(target.container().clone())
            .or_default()
            .push(target);
        Ok(())
    }
}
