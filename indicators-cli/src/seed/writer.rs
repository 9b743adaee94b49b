//! Write a finished seed document to disk

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Replace `path` with the seed text in a single write
pub fn write_seed(path: &Path, sql: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(path, sql).with_context(|| format!("Failed to write seed to: {}", path.display()))?;

    log::info!("Seed written to {} ({} bytes)", path.display(), sql.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_seed_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("migrations").join("seed.sql");

        write_seed(&path, "-- first\n").unwrap();
        write_seed(&path, "-- second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "-- second\n");
    }
}
