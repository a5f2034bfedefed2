/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::Serialize;

/// Maximum distance in meters between a student and the company
/// for the student to count as present.
pub const DEFAULT_MAX_DISTANCE: u32 = 200;

/// Body of the student and visit status updates.
#[derive(Serialize, Debug, Clone)]
pub struct StatusUpdate {
    pub status: String,
}
