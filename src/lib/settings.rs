//! The resolved runtime configuration, once the configuration file and the command line
//! arguments are merged together

use std::path::{Path, PathBuf};

use crate::domain::project::Project;
use crate::targets::LoadOptions;
use crate::utils::constants::TARGETS_FILE_EXT;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Settings {
    /// Absolute or working directory based path of the targets files directory
    pub state_location: PathBuf,
    pub load: LoadOptions,
}

impl Settings {
    /// Where the targets file of *project* lives
    pub fn targets_file_for(&self, project: &Project) -> PathBuf {
        targets_file_in(&self.state_location, project)
    }
}

pub fn targets_file_in(state_location: &Path, project: &Project) -> PathBuf {
    state_location.join(format!("{}.{TARGETS_FILE_EXT}", project.name()))
}
