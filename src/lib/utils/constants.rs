//! Constant value definitions to use across the whole program

/// The vocabulary of the persisted targets files
pub mod xml {
    pub const BUILD_TARGETS_ELEMENT: &str = "buildTargets";
    pub const TARGET_ELEMENT: &str = "target";

    pub const TARGET_ID_ATTR: &str = "targetID";
    pub const NAME_ATTR: &str = "name";

    pub const STOP_ON_ERROR: &str = "stopOnError";
    pub const USE_DEFAULT_COMMAND: &str = "useDefaultCommand";
    pub const BUILD_COMMAND: &str = "buildCommand";
    pub const BUILD_ARGUMENTS: &str = "buildArguments";

    pub const INDENT_SIZE: usize = 2;
}

pub mod debug_messages {
    pub const UNKNOWN_ROOT_ELEMENT: &str =
        "The targets file has an unknown root element, loading it as an empty store";
}

pub mod error_messages {
    pub const READ_TARGETS_FILE: &str = "Error reading target file";
    pub const WRITE_TARGETS_FILE: &str = "Error writing target file";
    pub const SERIALIZE_TARGETS: &str = "Error serializing the build targets";
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const LOADING_TARGETS: &str = "Failed to load the build targets of the project";
    pub const SAVING_TARGETS: &str = "Failed to save the build targets of the project";
    pub const ADDING_TARGET: &str = "Failed to add the build target";
}

pub const CONFIG_FILE_NAME: &str = "buildtargets.toml";
pub const DEFAULT_STATE_LOCATION: &str = ".targets";
pub const TARGETS_FILE_EXT: &str = "targets";

pub const LINE_SEPARATOR: &str = if cfg!(target_os = "windows") {
    "\r\n"
} else {
    "\n"
};

pub const CONFIG_FILE_MOCK: &str = r#"
state_location = ".metadata/targets"

[load]
on_malformed = "skip"
"#;

pub const TARGETS_FILE_MOCK: &str = r#"<buildTargets>
  <target targetID="" name="Debug">
    <stopOnError>true</stopOnError>
    <useDefaultCommand>false</useDefaultCommand>
    <buildCommand>/usr/bin/make</buildCommand>
    <buildArguments>-j4 all</buildArguments>
  </target>
</buildTargets>
"#;
