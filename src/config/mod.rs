/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::storage::ACCESS_TOKEN_KEY;

pub const DEFAULT_CONFIG_FILE: &str = "internship_client.config.toml";
pub const DEFAULT_SECRETS_FILE: &str = "internship_client.secrets.toml";
pub const DEFAULT_SESSION_FILE: &str = "internship_client.session.toml";

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Base address of the internship service (e.g. "https://internships.example.com/api")
    pub base_url: String,
    /// Session file holding the access token (default: ./internship_client.session.toml)
    pub session_file: Option<PathBuf>,
    /// Key of the access token in the session file (default: accessToken)
    pub token_key: Option<String>,
}

impl Config {
    pub fn session_file(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE))
    }

    pub fn token_key(&self) -> &str {
        self.token_key.as_deref().unwrap_or(ACCESS_TOKEN_KEY)
    }
}

/// Identification of this app towards the service.
#[derive(Deserialize, Clone, Debug)]
pub struct Secrets {
    pub app_id: String,
    pub app_key: String,
}

pub fn parse_toml<T: DeserializeOwned>(path: &Path, contents: String) -> Result<T, ConfigError> {
    match toml::from_str(&contents) {
        Ok(value) => Ok(value),
        Err(err) => Err(ConfigError::parse(path, contents, err)),
    }
}

pub async fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ConfigError::read(path, err))?;
    parse_toml(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_omitted() {
        let config: Config = parse_toml(
            Path::new("test.toml"),
            "base_url = \"https://internships.example.com\"".to_string(),
        )
        .unwrap();

        assert_eq!(config.base_url, "https://internships.example.com");
        assert_eq!(config.session_file(), PathBuf::from(DEFAULT_SESSION_FILE));
        assert_eq!(config.token_key(), "accessToken");
    }

    #[test]
    fn explicit_session_settings_win() {
        let config: Config = parse_toml(
            Path::new("test.toml"),
            "base_url = \"http://localhost\"\nsession_file = \"/tmp/s.toml\"\ntoken_key = \"jwt\""
                .to_string(),
        )
        .unwrap();

        assert_eq!(config.session_file(), PathBuf::from("/tmp/s.toml"));
        assert_eq!(config.token_key(), "jwt");
    }

    #[test]
    fn parse_error_points_at_the_problem() {
        let contents = "app_id = \"x\"\napp_key = \n".to_string();
        let err = parse_toml::<Secrets>(Path::new("secrets.toml"), contents).unwrap_err();

        let span = err.span().expect("toml errors carry a span");
        assert!(span.offset() >= "app_id = \"x\"\n".len());
        assert!(err.to_string().starts_with("Could not parse secrets.toml"));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let err = load_toml::<Config>(Path::new("/nonexistent/internship_client.toml"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Could not read"));
    }
}
