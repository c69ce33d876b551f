//! Renders the stores for the user

use std::fmt::Write;

use color_eyre::{eyre::Context, Result};

use crate::domain::{project::ContainerPath, target::BuildTarget};
use crate::targets::ProjectTargets;

/// A human readable listing of *store*, restricted to *container* when given
pub fn render_listing(store: &ProjectTargets, container: Option<&ContainerPath>) -> String {
    let mut out = String::new();

    let containers: Vec<&ContainerPath> = match container {
        Some(c) => vec![c],
        None => store.containers().collect(),
    };

    for container in containers {
        let targets = store.get(container);
        if targets.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{container}:");
        for target in targets {
            let _ = writeln!(out, "  {}", describe_target(target));
        }
    }

    if out.is_empty() {
        let _ = writeln!(out, "No build targets found for {}", store.project());
    }
    out
}

/// The targets of *store* as a pretty printed JSON array
pub fn render_json(store: &ProjectTargets, container: Option<&ContainerPath>) -> Result<String> {
    let targets: Vec<&BuildTarget> = match container {
        Some(c) => store.get(c).iter().collect(),
        None => store.iter().collect(),
    };
    serde_json::to_string_pretty(&targets).with_context(|| "Error rendering the targets as JSON")
}

fn describe_target(target: &BuildTarget) -> String {
    let mut line = target.name().to_owned();

    if target.stop_on_error() {
        line.push_str(" [stop on error]");
    }
    if target.use_default_build_command() {
        line.push_str(" [default command]");
    }
    if let Some(command) = target.build_command() {
        let _ = write!(line, " command: {}", command.display());
    }
    if let Some(arguments) = target.build_arguments() {
        let _ = write!(line, " arguments: {arguments}");
    }

    line
}
