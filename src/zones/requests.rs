/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use reqwest::Method;

use crate::requests::ApiRequest;
use crate::zones::{ChatMessage, ZoneAssignment};

/// Moves a supervisor into a zone.
///
/// The supervisor, not the zone, is addressed by the path:
/// `PUT /zones/{supervisor_id}/assign` with `{ "zone_id": ... }`.
pub struct AssignSupervisorToZone {
    pub supervisor_id: String,
    pub zone_id: String,
}

impl ApiRequest for AssignSupervisorToZone {
    type Body = ZoneAssignment;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("/zones/{}/assign", self.supervisor_id)
    }

    fn body(&self) -> Option<ZoneAssignment> {
        Some(ZoneAssignment {
            zone_id: self.zone_id.clone(),
        })
    }
}

pub struct GetSupervisorsInZone {
    pub zone_id: String,
}

impl ApiRequest for GetSupervisorsInZone {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/zones/{}/supervisors", self.zone_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct BalanceSupervisorWorkload {
    pub zone_id: String,
}

impl ApiRequest for BalanceSupervisorWorkload {
    type Body = ();

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("/zones/{}/balance-workload", self.zone_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct GetZoneChat {
    pub zone_id: String,
}

impl ApiRequest for GetZoneChat {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/zones/{}/chat", self.zone_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

/// One page of a zone's chat history.
pub struct GetZoneChatMessages {
    pub zone_id: String,
    pub limit: u32,
    pub skip: u32,
}

impl ApiRequest for GetZoneChatMessages {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/zones/{}/chat/messages", self.zone_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("skip", self.skip.to_string()),
        ]
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct AddMessageToZoneChat {
    pub zone_id: String,
    pub content: String,
}

impl ApiRequest for AddMessageToZoneChat {
    type Body = ChatMessage;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/zones/{}/chat/message", self.zone_id)
    }

    fn body(&self) -> Option<ChatMessage> {
        Some(ChatMessage {
            content: self.content.clone(),
        })
    }
}
