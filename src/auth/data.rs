/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::Serialize;

/// Permission scope requested when the caller does not pick one.
pub const DEFAULT_SCOPE: &str = "R-WR-R-R";

/// The password grant sent to `/login`.
#[derive(Serialize, Debug, Clone)]
pub struct LoginForm {
    pub grant_type: &'static str,
    pub username: String,
    pub password: String,
    pub scope: String,
}
