//! How the targets files must be loaded
use serde::*;

use crate::targets::MalformedPolicy;

/// [`LoadAttribute`] - Tunes the loading of the targets files
/// * `on_malformed` - What to do with a `target` element that is malformed or a duplicate.
/// `fail` aborts the load of the whole file, `skip` warns about it and goes on
///
/// ### Tests
///
/// ```rust
/// use buildtargets::config_file::load::LoadAttribute;
/// use buildtargets::targets::MalformedPolicy;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[load]
///     on_malformed = 'skip'
/// "#;
///
/// let config: LoadAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the buildtargets toml file");
///
/// assert_eq!(config.on_malformed, Some(MalformedPolicy::Skip));
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct LoadAttribute {
    pub on_malformed: Option<MalformedPolicy>,
}
