use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// [`config_logger`] The configuration for `env_logger`. `RUST_LOG` is honoured, but the
/// verbosity of the command line sets the global filter
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let level = level_for(verbose_level)?;

    Builder::from_default_env()
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis()
        .filter(None, level)
        .try_init()
        .with_context(|| "buildtargets wasn't able to set up the logger")
}

fn level_for(verbose_level: u8) -> Result<LevelFilter> {
    match verbose_level {
        0 => Ok(LevelFilter::Info),
        1 => Ok(LevelFilter::Debug),
        _ => Err(eyre!(
            "buildtargets maximum allowed verbosity level is: '-v'"
        )),
    }
}
