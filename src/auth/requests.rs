/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use reqwest::Method;

use crate::auth::{LoginForm, DEFAULT_SCOPE};
use crate::requests::ApiRequest;

pub struct Login {
    pub username: String,
    pub password: String,
    pub scope: String,
}

impl Login {
    pub fn new(username: &str, password: &str, scope: Option<&str>) -> Self {
        Login {
            username: username.to_string(),
            password: password.to_string(),
            scope: scope.unwrap_or(DEFAULT_SCOPE).to_string(),
        }
    }
}

impl ApiRequest for Login {
    type Body = LoginForm;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/login".to_string()
    }

    fn body(&self) -> Option<LoginForm> {
        Some(LoginForm {
            grant_type: "password",
            username: self.username.clone(),
            password: self.password.clone(),
            scope: self.scope.clone(),
        })
    }
}

pub struct Logout;

impl ApiRequest for Logout {
    type Body = ();

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/logout".to_string()
    }

    fn body(&self) -> Option<()> {
        None
    }
}
