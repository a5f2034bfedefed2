/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use reqwest::Method;
use serde_json::Value;

use crate::requests::ApiRequest;

const PROFILE_PATH: &str = "/profile";

pub struct GetDashboard;

impl ApiRequest for GetDashboard {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/dashboard".to_string()
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct GetSupervisorProfile;

impl ApiRequest for GetSupervisorProfile {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        PROFILE_PATH.to_string()
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct UpdateSupervisorProfile {
    pub profile: Value,
}

impl ApiRequest for UpdateSupervisorProfile {
    type Body = Value;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        PROFILE_PATH.to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(self.profile.clone())
    }
}

pub struct DeleteSupervisorProfile;

impl ApiRequest for DeleteSupervisorProfile {
    type Body = ();

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        PROFILE_PATH.to_string()
    }

    fn body(&self) -> Option<()> {
        None
    }
}
