/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::Serialize;

/// A supervisor's verdict on a logbook entry.
/// `comments` is sent as `null` when there are none.
#[derive(Serialize, Debug, Clone)]
pub struct LogbookMark {
    pub status: String,
    pub comments: Option<String>,
}
