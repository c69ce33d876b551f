pub mod cli;
pub mod config_file;
pub mod domain;
pub mod settings;
pub mod targets;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::io::Write;
    use std::path::Path;

    use color_eyre::{
        eyre::{eyre, Context},
        Result,
    };

    use crate::{
        cli::{
            input::{AddArgs, CliArgs, Command},
            output,
        },
        config_file::{self, TargetsConfigFile},
        domain::{project::Project, target::BuildTarget},
        settings::Settings,
        targets::{error::TargetsError, ProjectTargets},
        utils::{
            self,
            constants::{error_messages, CONFIG_FILE_NAME},
        },
    };

    /// The main work of the project. Runs the command inputted in the CLI against the
    /// targets files of the state location, writing the results on *out*
    pub fn run_buildtargets(
        cli_args: &CliArgs,
        working_dir: &Path,
        out: &mut dyn Write,
    ) -> Result<()> {
        let cfg_path = cli_args
            .config
            .as_deref()
            .map(|cfg| working_dir.join(cfg))
            .unwrap_or_else(|| working_dir.join(CONFIG_FILE_NAME));

        let raw_cfg = utils::fs::read_if_exists(&cfg_path)?;
        if raw_cfg.is_none() && cli_args.config.is_some() {
            return Err(eyre!("{}: {cfg_path:?}", error_messages::READ_CFG_FILE));
        }

        let config: Option<TargetsConfigFile<'_>> = raw_cfg
            .as_deref()
            .map(config_file::targets_cfg_from_file)
            .transpose()
            .with_context(|| error_messages::PARSE_CFG_FILE)?;

        let settings = utils::reader::build_settings(config.as_ref(), cli_args, working_dir);
        log::debug!("Working with the targets files under {:?}", settings.state_location);

        do_main_work_based_on_cli_input(&cli_args.command, &settings, out)
    }

    fn do_main_work_based_on_cli_input(
        command: &Command,
        settings: &Settings,
        out: &mut dyn Write,
    ) -> Result<()> {
        match command {
            Command::List {
                project,
                container,
                json,
            } => {
                let project = Project::try_new(project.as_str())?;
                let store = helpers::load_store(settings, project, true)?;
                let container = container
                    .as_deref()
                    .map(|c| store.project().container_for(c));

                let rendered = if *json {
                    output::render_json(&store, container.as_ref())?
                } else {
                    output::render_listing(&store, container.as_ref())
                };
                writeln!(out, "{}", rendered.trim_end())?;
            }
            Command::Add(args) => {
                let project = Project::try_new(args.project.as_str())?;
                let mut store = helpers::load_store(settings, project, false)?;
                let target = helpers::target_from_args(store.project(), args);
                let description = format!("'{}' on {}", target.name(), target.container());

                store
                    .add(target)
                    .with_context(|| error_messages::ADDING_TARGET)?;
                helpers::save_store(settings, &mut store)?;

                log::info!("Added the build target {description}");
                writeln!(out, "Added {description}")?;
            }
            Command::Remove {
                project,
                name,
                container,
            } => {
                let project = Project::try_new(project.as_str())?;
                let mut store = helpers::load_store(settings, project, false)?;
                let target =
                    BuildTarget::new(store.project().container_for(container), name.as_str());

                match store.remove(&target) {
                    Some(removed) => {
                        helpers::save_store(settings, &mut store)?;
                        log::info!(
                            "Removed the build target '{}' from {}",
                            removed.name(),
                            removed.container()
                        );
                        writeln!(
                            out,
                            "Removed '{}' from {}",
                            removed.name(),
                            removed.container()
                        )?;
                    }
                    None => writeln!(
                        out,
                        "No build target '{name}' found on {}",
                        target.container()
                    )?,
                }
            }
            Command::Show { project } => {
                let project = Project::try_new(project.as_str())?;
                let store = helpers::load_store(settings, project, true)?;
                write!(out, "{}", store.to_xml()?)?;
            }
            Command::Scan => {
                let files = utils::reader::find_target_files(&settings.state_location)?;
                if files.is_empty() {
                    writeln!(out, "No targets files found on {:?}", settings.state_location)?;
                }
                for file in files {
                    let store = helpers::load_store(settings, file.project, true)?;
                    writeln!(
                        out,
                        "{}\t{} targets\t{}",
                        store.project(),
                        store.len(),
                        file.path.display()
                    )?;
                }
            }
        }

        Ok(())
    }

    mod helpers {
        use super::*;

        /// Loads the store of *project* from its targets file. A project without a targets
        /// file has no targets yet.
        ///
        /// When *recover* is set, a targets file that can't be read or parsed is reported and
        /// replaced by an empty store. Commands that save the store don't recover, so a
        /// damaged file is never overwritten.
        pub(crate) fn load_store(
            settings: &Settings,
            project: Project,
            recover: bool,
        ) -> Result<ProjectTargets> {
            let path = settings.targets_file_for(&project);
            if !path.exists() {
                log::debug!("No targets file for {project} on {path:?}, starting empty");
                return Ok(ProjectTargets::new(project));
            }

            match ProjectTargets::from_file(project.clone(), &path, &settings.load) {
                Ok(store) => Ok(store),
                Err(e @ TargetsError::Persistence { .. }) if recover => {
                    log::warn!("{e}. Going on with no targets for {project}");
                    Ok(ProjectTargets::new(project))
                }
                Err(e) => Err(e).with_context(|| {
                    format!("{}: {project}", error_messages::LOADING_TARGETS)
                }),
            }
        }

        pub(crate) fn save_store(settings: &Settings, store: &mut ProjectTargets) -> Result<()> {
            if !store.is_dirty() {
                return Ok(());
            }
            let path = settings.targets_file_for(store.project());
            store.save_to_file(&path).with_context(|| {
                format!("{}: {}", error_messages::SAVING_TARGETS, store.project())
            })
        }

        pub(crate) fn target_from_args(project: &Project, args: &AddArgs) -> BuildTarget {
            let mut target =
                BuildTarget::new(project.container_for(&args.container), args.name.as_str());
            target.set_stop_on_error(args.stop_on_error);
            target.set_use_default_build_command(args.use_default_command);
            target.set_build_command(args.build_command.clone());
            target.set_build_arguments(args.build_arguments.clone());
            target
        }
    }

}
