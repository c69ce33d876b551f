use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use buildtargets::cli::input::{CliArgs, Command};
///
/// let parser = CliArgs::parse_from(["", "-v", "scan"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Scan);
///
/// let parser = CliArgs::parse_from(["", "--state-dir", "meta", "show", "--project", "P"]);
/// assert_eq!(parser.state_dir.unwrap().to_str(), Some("meta"));
/// assert_eq!(parser.command, Command::Show { project: "P".to_owned() });
/// ```
#[derive(Parser, Debug)]
#[command(name = "buildtargets")]
#[command(author = "Zero Day Code")]
#[command(version = "0.1.0")]
#[command(
    about = "Inspects and edits the build targets stored for each project",
    long_about = "Every project keeps its build targets, grouped by the folder that owns them, \
    in a <project>.targets XML file under the state location directory"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Maximum allowed verbosity level is: '-v'"
    )]
    pub verbose: u8,

    #[arg(long, help = "The configuration file. Defaults to ./buildtargets.toml, when present")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "The directory that holds the targets files")]
    pub state_dir: Option<PathBuf>,

    #[arg(
        long,
        help = "Skip the malformed or duplicated target elements instead of failing"
    )]
    pub skip_malformed: bool,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Lists the build targets of a project
    List {
        #[arg(long, help = "The project that owns the targets")]
        project: String,
        #[arg(long, help = "Only list the targets of this project relative folder")]
        container: Option<String>,
        #[arg(long, help = "Print the targets as JSON")]
        json: bool,
    },
    /// Adds a new build target to a project
    Add(AddArgs),
    /// Removes a build target from a project
    Remove {
        #[arg(long)]
        project: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "", help = "The project relative folder of the target")]
        container: String,
    },
    /// Prints the targets file of a project as it would be saved
    Show {
        #[arg(long)]
        project: String,
    },
    /// Lists the projects that have a targets file in the state location
    Scan,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct AddArgs {
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "", help = "The project relative folder of the target")]
    pub container: String,
    #[arg(long)]
    pub stop_on_error: bool,
    #[arg(long)]
    pub use_default_command: bool,
    #[arg(long, help = "Overrides the build executable")]
    pub build_command: Option<PathBuf>,
    #[arg(long, allow_hyphen_values = true)]
    pub build_arguments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_command() {
        let args = CliArgs::parse_from([
            "",
            "add",
            "--project",
            "P",
            "--name",
            "Debug",
            "--stop-on-error",
            "--build-command",
            "/usr/bin/make",
            "--build-arguments",
            "-j4 all",
        ]);

        assert_eq!(
            args.command,
            Command::Add(AddArgs {
                project: "P".to_owned(),
                name: "Debug".to_owned(),
                container: String::new(),
                stop_on_error: true,
                use_default_command: false,
                build_command: Some(PathBuf::from("/usr/bin/make")),
                build_arguments: Some("-j4 all".to_owned()),
            })
        );
        assert!(!args.skip_malformed);
    }

    #[test]
    fn test_remove_command_with_container() {
        let args = CliArgs::parse_from([
            "",
            "--skip-malformed",
            "remove",
            "--project",
            "P",
            "--name",
            "all",
            "--container",
            "src",
        ]);

        assert!(args.skip_malformed);
        assert_eq!(
            args.command,
            Command::Remove {
                project: "P".to_owned(),
                name: "all".to_owned(),
                container: "src".to_owned(),
            }
        );
    }
}
