use crate::cli::input::CliArgs;
use crate::config_file::TargetsConfigFile;
use crate::domain::project::Project;
use crate::settings::Settings;
use crate::targets::{LoadOptions, MalformedPolicy};
use crate::utils::constants::{DEFAULT_STATE_LOCATION, TARGETS_FILE_EXT};
use color_eyre::{eyre::Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Details about a targets file found on the state location
#[derive(Debug, PartialEq, Eq)]
pub struct TargetFile {
    pub project: Project,
    pub path: PathBuf,
}

/// Looks for the `<project>.targets` files that live directly under *state_location*,
/// and returns them sorted by project name.
///
/// A state location that doesn't exist yet just holds no files
pub fn find_target_files(state_location: &Path) -> Result<Vec<TargetFile>> {
    log::debug!("Searching for targets files on {state_location:?}");
    if !state_location.exists() {
        return Ok(Vec::new());
    }

    let mut files = vec![];
    for entry in WalkDir::new(state_location)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Could not inspect the state location {state_location:?}"))?;
        let path = entry.path();

        let is_targets_file = entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == TARGETS_FILE_EXT);
        let project_name = path.file_stem().and_then(|stem| stem.to_str());

        if let (true, Some(project_name)) = (is_targets_file, project_name) {
            match Project::try_new(project_name) {
                Ok(project) => files.push(TargetFile {
                    project,
                    path: path.to_path_buf(),
                }),
                Err(e) => log::debug!("Skipping {path:?}: {e}"),
            }
        }
    }

    Ok(files)
}

/// Merges the configuration file, when there's one, and the command line arguments, the
/// latter taking precedence. Relative state locations are based on *working_dir*
pub fn build_settings(
    config: Option<&TargetsConfigFile<'_>>,
    cli_args: &CliArgs,
    working_dir: &Path,
) -> Settings {
    let state_location = cli_args
        .state_dir
        .clone()
        .or_else(|| {
            config
                .and_then(|cfg| cfg.state_location.as_deref())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_LOCATION));

    let on_malformed = if cli_args.skip_malformed {
        MalformedPolicy::Skip
    } else {
        config
            .and_then(|cfg| cfg.load)
            .and_then(|load| load.on_malformed)
            .unwrap_or_default()
    };

    Settings {
        state_location: working_dir.join(state_location),
        load: LoadOptions { on_malformed },
    }
}
