//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod load;

use std::borrow::Cow;

use serde::Deserialize;

use self::load::LoadAttribute;

/// ```rust
/// use buildtargets::config_file::{self, TargetsConfigFile};
/// use buildtargets::targets::MalformedPolicy;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     state_location = '.metadata/targets'
///
///     [load]
///     on_malformed = 'fail'
/// "#;
///
/// let config: TargetsConfigFile = config_file::targets_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the buildtargets toml file");
///
/// assert_eq!(config.state_location.as_deref(), Some(".metadata/targets"));
/// assert_eq!(config.load.unwrap().on_malformed, Some(MalformedPolicy::Fail));
/// ```
/// The [`TargetsConfigFile`] is the type that holds
/// the whole hierarchy of the configuration file attributes
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct TargetsConfigFile<'a> {
    /// The directory that holds one `<project>.targets` file per project
    #[serde(borrow)]
    pub state_location: Option<Cow<'a, str>>,
    pub load: Option<LoadAttribute>,
}

pub fn targets_cfg_from_file(cfg: &'_ str) -> Result<TargetsConfigFile<'_>, toml::de::Error> {
    <TargetsConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::MalformedPolicy;
    use crate::utils::constants::CONFIG_FILE_MOCK;
    use color_eyre::Result;

    #[test]
    fn test_full_config_file() -> Result<()> {
        let config = targets_cfg_from_file(CONFIG_FILE_MOCK)?;

        assert_eq!(config.state_location.as_deref(), Some(".metadata/targets"));
        assert_eq!(
            config.load,
            Some(LoadAttribute {
                on_malformed: Some(MalformedPolicy::Skip)
            })
        );

        Ok(())
    }

    #[test]
    fn test_empty_config_file() -> Result<()> {
        assert_eq!(targets_cfg_from_file("")?, TargetsConfigFile::default());
        Ok(())
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(targets_cfg_from_file("[load]\non_malformed = 'ignore'").is_err());
    }
}
