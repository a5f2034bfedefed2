/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::Serialize;

pub const DEFAULT_CHAT_LIMIT: u32 = 50;
pub const DEFAULT_CHAT_SKIP: u32 = 0;

#[derive(Serialize, Debug, Clone)]
pub struct ZoneAssignment {
    pub zone_id: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ChatMessage {
    pub content: String,
}
