use crate::error::{PickerError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key/value secrets for one distributor, read from `<dir>/<name>.cred`.
///
/// The file holds one whitespace separated `key value` pair per line:
///
/// ```text
/// web_api_key 123456789ABCDEF
/// user_id someone
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    distributor: String,
    values: HashMap<String, String>,
}

impl Credentials {
    /// Path of the credential file for `name` inside `dir`
    pub fn file_path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.cred", name))
    }

    /// Load the credential file for `name`
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = Self::file_path(dir, name);
        if !path.exists() {
            return Err(PickerError::MissingCredentials {
                distributor: name.to_string(),
                missing: format!("no credential file at {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let credentials = Self::parse(name, &path, &content)?;
        if credentials.is_empty() {
            log::warn!("Credential file {} has no entries", path.display());
        } else {
            log::debug!("Loaded {} credential entries for {}", credentials.len(), name);
        }
        Ok(credentials)
    }

    fn parse(name: &str, path: &Path, content: &str) -> Result<Self> {
        let mut values = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => {
                    values.insert(key.to_string(), value.to_string());
                }
                _ => {
                    return Err(PickerError::InvalidCredentials {
                        path: path.to_path_buf(),
                        line: index + 1,
                    })
                }
            }
        }

        Ok(Self {
            distributor: name.to_string(),
            values,
        })
    }

    /// Build credentials in memory instead of reading a file
    pub fn from_pairs<I, K, V>(distributor: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            distributor: distributor.to_string(),
            values: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a value that the distributor cannot work without
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| PickerError::MissingCredentials {
            distributor: self.distributor.clone(),
            missing: format!("key '{}'", key),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_cred(dir: &Path, name: &str, content: &str) {
        std::fs::write(Credentials::file_path(dir, name), content).unwrap();
    }

    #[test]
    fn loads_existing_credentials() {
        let dir = TempDir::new().unwrap();
        write_cred(
            dir.path(),
            "distributor",
            "client_id 123456789ABCDEF\nclient_secret ABCDEF123456789ABCDEF\ntoken thisissomecrazystring",
        );

        let credentials = Credentials::load(dir.path(), "distributor").unwrap();
        assert_eq!(credentials.len(), 3);
        assert_eq!(credentials.get("client_id"), Some("123456789ABCDEF"));
        assert_eq!(credentials.get("client_secret"), Some("ABCDEF123456789ABCDEF"));
        assert_eq!(credentials.get("token"), Some("thisissomecrazystring"));
    }

    #[test]
    fn missing_file_is_missing_credentials() {
        let dir = TempDir::new().unwrap();
        let result = Credentials::load(dir.path(), "bad_file_name");
        match result {
            Err(PickerError::MissingCredentials { distributor, .. }) => {
                assert_eq!(distributor, "bad_file_name");
            }
            other => panic!("Expected PickerError::MissingCredentials, got: {other:?}"),
        }
    }

    #[test]
    fn empty_file_has_no_entries() {
        let dir = TempDir::new().unwrap();
        write_cred(dir.path(), "1", "");
        let credentials = Credentials::load(dir.path(), "1").unwrap();
        assert!(credentials.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        write_cred(dir.path(), "steam", "\nweb_api_key abc\n\n   \nuser_id me\n");
        let credentials = Credentials::load(dir.path(), "steam").unwrap();
        assert_eq!(credentials.len(), 2);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let dir = TempDir::new().unwrap();
        write_cred(dir.path(), "steam", "web_api_key abc\njust_a_key\n");
        match Credentials::load(dir.path(), "steam") {
            Err(PickerError::InvalidCredentials { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected PickerError::InvalidCredentials, got: {other:?}"),
        }
    }

    #[test]
    fn require_missing_key() {
        let dir = TempDir::new().unwrap();
        write_cred(dir.path(), "steam", "web_api_key abc\n");
        let credentials = Credentials::load(dir.path(), "steam").unwrap();

        assert_eq!(credentials.require("web_api_key").unwrap(), "abc");
        assert!(matches!(
            credentials.require("user_id"),
            Err(PickerError::MissingCredentials { .. })
        ));
    }
}
