//! Credential file loading
//!
//! The weather provider key lives in a plain file outside the config so it
//! never shows up in config dumps or environment listings.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a credential file
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The file could not be read
    #[error("Failed to read credential file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file holds nothing but whitespace
    #[error("Credential file {0} is empty")]
    Empty(PathBuf),
}

/// Read an API key from `path`, trimming surrounding whitespace
///
/// # Errors
///
/// Returns an error if the file is unreadable or blank.
pub fn load_api_key(path: impl AsRef<Path>) -> Result<SecretString, CredentialError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CredentialError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let key = contents.trim();
    if key.is_empty() {
        return Err(CredentialError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), "Loaded API key");
    Ok(SecretString::from(key.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn reads_and_trims_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  abc123def456  ").unwrap();

        let key = load_api_key(file.path()).unwrap();
        assert_eq!(key.expose_secret(), "abc123def456");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_api_key(dir.path().join("open_weather_key")).unwrap_err();

        assert!(matches!(err, CredentialError::Read { .. }));
        assert!(err.to_string().contains("open_weather_key"));
    }

    #[test]
    fn blank_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();

        let err = load_api_key(file.path()).unwrap_err();
        assert!(matches!(err, CredentialError::Empty(_)));
    }

    #[test]
    fn debug_does_not_leak_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "super-secret").unwrap();

        let key = load_api_key(file.path()).unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));
    }
}
