/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt::Display;
use std::path::Path;

use miette::{Diagnostic, LabeledSpan, SourceCode, SourceSpan};
use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

use crate::storage::StoreError;

/// Any failure of an API call.
///
/// Transport failures, including non-2xx responses, are passed through
/// untouched in [`ClientError::Transport`].
#[derive(Error, Diagnostic, Debug)]
pub enum ClientError {
    #[error("request failed")]
    #[diagnostic(code(internship_client::transport))]
    Transport(#[from] reqwest::Error),

    #[error("could not read the stored access token")]
    #[diagnostic(
        code(internship_client::credential),
        help("the request was not sent")
    )]
    Credential(#[source] StoreError),

    #[error("invalid value for header {name}")]
    #[diagnostic(code(internship_client::header))]
    InvalidHeader {
        name: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

impl ClientError {
    /// The HTTP status of a rejected response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// A configuration file that could not be read or parsed.
///
/// Parse errors keep the file contents and the offending span
/// so that miette can point at the broken line.
#[derive(Error, Debug)]
#[error("{msg}")]
pub struct ConfigError {
    msg: String,
    source_code: Option<String>,
    span: Option<SourceSpan>,
    help: Option<String>,
    #[source]
    cause: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl ConfigError {
    pub fn read(path: &Path, cause: std::io::Error) -> Self {
        ConfigError {
            msg: format!("Could not read {}", path.display()),
            source_code: None,
            span: None,
            help: None,
            cause: Some(Box::new(cause)),
        }
    }

    pub fn parse(path: &Path, contents: String, cause: toml::de::Error) -> Self {
        ConfigError {
            msg: format!("Could not parse {}: {}", path.display(), cause.message()),
            source_code: Some(contents),
            span: cause.span().map(SourceSpan::from),
            help: Some(String::from(
                "the config file takes base_url, session_file and token_key; \
                 the secrets file takes app_id and app_key",
            )),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn span(&self) -> Option<SourceSpan> {
        self.span
    }
}

// Cannot derive because the derive macro doesn't support
// optional source codes.
impl Diagnostic for ConfigError {
    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help.as_ref().map(|help| Box::new(help) as Box<dyn Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.source_code.as_ref().map(|code| code as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.span.map(|span| {
            let labeled = LabeledSpan::new_with_span(Some("here".to_string()), span);
            Box::new(vec![labeled].into_iter()) as Box<dyn Iterator<Item = LabeledSpan> + '_>
        })
    }
}
