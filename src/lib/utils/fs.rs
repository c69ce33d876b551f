use std::{fs, path::Path};

use color_eyre::{eyre::Context, Result};

use super::constants::error_messages;

/// Reads the whole file at *path*, or [`None`] when there's no such file
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("{}: {path:?}", error_messages::READ_CFG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_if_exists() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("buildtargets.toml");

        assert_eq!(read_if_exists(&path)?, None);

        fs::write(&path, "state_location = 'x'")?;
        assert_eq!(read_if_exists(&path)?.as_deref(), Some("state_location = 'x'"));

        Ok(())
    }
}
