/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

/// The key the access token is stored under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not access the session file")]
    Io(#[from] std::io::Error),
    #[error("the session file is not valid TOML")]
    Parse(#[from] toml::de::Error),
    #[error("could not write the session file")]
    Serialize(#[from] toml::ser::Error),
}

/// Read access to the access token.
///
/// The store is owned by whoever performs login and logout;
/// the API client only ever reads from it.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Result<Option<String>, StoreError>;
}

/// A token kept in process memory.
#[derive(Default, Debug)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token<S: Into<String>>(token: S) -> Self {
        MemoryTokenStore {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set<S: Into<String>>(&self, token: S) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

/// A token persisted in a TOML session file, e.g.
///
/// ```toml
/// accessToken = "eyJhbGciOi..."
/// ```
///
/// A missing file, or a file without the key, means there is no token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
}

impl FileTokenStore {
    pub fn new<P: Into<PathBuf>, K: Into<String>>(path: P, key: K) -> Self {
        FileTokenStore {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self, token: &str) -> Result<(), StoreError> {
        let mut table = self.read_table()?.unwrap_or_default();
        table.insert(self.key.clone(), toml::Value::String(token.to_string()));
        self.write_table(&table)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        let Some(mut table) = self.read_table()? else {
            return Ok(());
        };
        if table.remove(&self.key).is_some() {
            self.write_table(&table)?;
        }
        Ok(())
    }

    /// Only the owner may read the session file, even if it existed before.
    fn write_table(&self, table: &toml::Table) -> Result<(), StoreError> {
        let contents = toml::to_string(table)?;
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            let file = options.open(&self.path)?;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
            write_all(file, &contents)
        }
        #[cfg(not(unix))]
        {
            write_all(options.open(&self.path)?, &contents)
        }
    }

    fn read_table(&self) -> Result<Option<toml::Table>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(toml::from_str(&contents)?))
    }
}

fn write_all(mut file: fs::File, contents: &str) -> Result<(), StoreError> {
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Result<Option<String>, StoreError> {
        let token = self
            .read_table()?
            .and_then(|mut table| table.remove(&self.key))
            .and_then(|value| match value {
                toml::Value::String(token) => Some(token),
                _ => None,
            });
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_file() -> PathBuf {
        std::env::temp_dir().join(format!("internship_client-{}.toml", uuid::Uuid::new_v4()))
    }

    #[test]
    fn memory_store_follows_owner() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token().unwrap(), None);
        store.set("abc");
        assert_eq!(store.token().unwrap().as_deref(), Some("abc"));
        store.clear();
        assert_eq!(store.token().unwrap(), None);
    }

    #[test]
    fn missing_session_file_has_no_token() {
        let store = FileTokenStore::new(temp_session_file(), ACCESS_TOKEN_KEY);
        assert_eq!(store.token().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn session_file_keeps_other_keys() {
        let path = temp_session_file();
        fs::write(&path, "refreshToken = \"r\"\n").unwrap();
        let store = FileTokenStore::new(&path, ACCESS_TOKEN_KEY);

        store.store("t1").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("t1"));

        store.clear().unwrap();
        assert_eq!(store.token().unwrap(), None);
        let other = FileTokenStore::new(&path, "refreshToken");
        assert_eq!(other.token().unwrap().as_deref(), Some("r"));

        fs::remove_file(path).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private_to_the_owner() {
        use std::os::unix::fs::PermissionsExt;

        let path = temp_session_file();
        fs::write(&path, "").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        let store = FileTokenStore::new(&path, ACCESS_TOKEN_KEY);

        store.store("secret").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);

        store.clear().unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);

        fs::remove_file(path).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn new_session_file_is_private_to_the_owner() {
        use std::os::unix::fs::PermissionsExt;

        let path = temp_session_file();
        FileTokenStore::new(&path, ACCESS_TOKEN_KEY).store("secret").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn broken_session_file_is_an_error() {
        let path = temp_session_file();
        fs::write(&path, "accessToken = ").unwrap();
        let store = FileTokenStore::new(&path, ACCESS_TOKEN_KEY);
        assert!(matches!(store.token(), Err(StoreError::Parse(_))));
        fs::remove_file(path).unwrap();
    }
}
