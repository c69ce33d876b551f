use buildtargets::cli::input::CliArgs;
use buildtargets::domain::project::Project;
use buildtargets::targets::{LoadOptions, ProjectTargets};
use clap::Parser;
use color_eyre::Result;
use std::path::Path;
use tempfile::tempdir;

fn run(args: &[&str], working_dir: &Path) -> Result<String> {
    let mut out = Vec::new();
    let cli_args = CliArgs::parse_from(std::iter::once("").chain(args.iter().copied()));
    buildtargets::worker::run_buildtargets(&cli_args, working_dir, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_full_program_add_list_remove() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path();

    run(
        &[
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
        ],
        root,
    )?;
    run(&["add", "--project", "P", "--name", "lib", "--container", "src/lib"], root)?;
    run(&["add", "--project", "P", "--name", "clean"], root)?;

    // The same target twice is rejected
    assert!(run(&["add", "--project", "P", "--name", "clean"], root).is_err());

    let targets_file = root.join(".targets").join("P.targets");
    let store =
        ProjectTargets::from_file(Project::new("P"), &targets_file, &LoadOptions::default())?;
    let project = store.project().clone();

    let root_names: Vec<&str> = store.get(&project.root()).iter().map(|t| t.name()).collect();
    assert_eq!(root_names, vec!["Debug", "clean"]);
    assert_eq!(store.get(&project.container_for("src/lib")).len(), 1);

    let debug = &store.get(&project.root())[0];
    assert!(debug.stop_on_error());
    assert_eq!(debug.build_command(), Some(Path::new("/usr/bin/make")));
    assert_eq!(debug.build_arguments(), Some("-j4 all"));

    let listing = run(&["list", "--project", "P", "--container", "src/lib"], root)?;
    assert_eq!(listing.lines().collect::<Vec<_>>(), vec!["P/src/lib:", "  lib"]);

    let removed = run(
        &["remove", "--project", "P", "--name", "lib", "--container", "src/lib"],
        root,
    )?;
    assert!(removed.starts_with("Removed 'lib'"));
    let not_found = run(
        &["remove", "--project", "P", "--name", "lib", "--container", "src/lib"],
        root,
    )?;
    assert!(not_found.starts_with("No build target 'lib'"));

    let shown = run(&["show", "--project", "P"], root)?;
    assert!(shown.contains(r#"<target targetID="" name="clean">"#));
    assert!(!shown.contains("src/lib"));

    let scanned = run(&["scan"], root)?;
    assert!(scanned.starts_with("P\t2 targets\t"));

    Ok(temp.close()?)
}

#[test]
fn test_show_of_a_project_without_targets() -> Result<()> {
    let temp = tempdir()?;

    let shown = run(&["show", "--project", "empty"], temp.path())?;
    assert_eq!(shown.lines().last(), Some("<buildTargets/>"));
    assert!(!temp.path().join(".targets").exists());

    Ok(temp.close()?)
}

#[test]
fn test_skip_malformed_elements() -> Result<()> {
    let temp = tempdir()?;
    let state = temp.path().join("state");
    std::fs::create_dir(&state)?;
    std::fs::write(
        state.join("P.targets"),
        r#"<buildTargets>
            <target targetID="" name="ok"/>
            <target name="missing-id"/>
        </buildTargets>"#,
    )?;

    // A malformed element fails the load unless it's asked to be skipped
    assert!(run(&["--state-dir", "state", "list", "--project", "P"], temp.path()).is_err());

    let lenient = run(
        &["--state-dir", "state", "--skip-malformed", "list", "--project", "P", "--json"],
        temp.path(),
    )?;
    let value: serde_json::Value = serde_json::from_str(&lenient)?;
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["name"], "ok");

    Ok(temp.close()?)
}
