/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use reqwest::Method;
use serde_json::Value;

use crate::requests::ApiRequest;
use crate::students::StatusUpdate;

const VISIT_LOCATIONS_PATH: &str = "/visit-locations";

pub struct GetVisitLocations;

impl ApiRequest for GetVisitLocations {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        VISIT_LOCATIONS_PATH.to_string()
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct CreateVisitLocation {
    pub visit: Value,
}

impl ApiRequest for CreateVisitLocation {
    type Body = Value;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        VISIT_LOCATIONS_PATH.to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(self.visit.clone())
    }
}

pub struct UpdateVisitLocation {
    pub visit_location_id: String,
    pub visit: Value,
}

impl ApiRequest for UpdateVisitLocation {
    type Body = Value;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("{}/{}", VISIT_LOCATIONS_PATH, self.visit_location_id)
    }

    fn body(&self) -> Option<Value> {
        Some(self.visit.clone())
    }
}

pub struct DeleteVisitLocation {
    pub visit_location_id: String,
}

impl ApiRequest for DeleteVisitLocation {
    type Body = ();

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("{}/{}", VISIT_LOCATIONS_PATH, self.visit_location_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct UpdateVisitStatus {
    pub visit_id: String,
    pub status: String,
}

impl ApiRequest for UpdateVisitStatus {
    type Body = StatusUpdate;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("{}/{}/status", VISIT_LOCATIONS_PATH, self.visit_id)
    }

    fn body(&self) -> Option<StatusUpdate> {
        Some(StatusUpdate {
            status: self.status.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::requests::test_support::{json_body, prepare};

    fn visit() -> Value {
        json!({
            "internship_id": "i1",
            "scheduled_date": "2024-03-01T09:00:00Z",
            "latitude": -1.2921,
            "longitude": 36.8219,
        })
    }

    #[test]
    fn list_and_create_share_collection_path() {
        let list = prepare(&GetVisitLocations);
        let create = prepare(&CreateVisitLocation { visit: visit() });

        assert_eq!(list.method(), Method::GET);
        assert_eq!(create.method(), Method::POST);
        assert_eq!(list.url().path(), "/api/visit-locations");
        assert_eq!(create.url().path(), "/api/visit-locations");
        assert_eq!(json_body(&create), visit());
    }

    #[test]
    fn update_and_delete_address_one_location() {
        let update = prepare(&UpdateVisitLocation {
            visit_location_id: "v7".to_string(),
            visit: visit(),
        });
        let delete = prepare(&DeleteVisitLocation {
            visit_location_id: "v7".to_string(),
        });

        assert_eq!(update.method(), Method::PUT);
        assert_eq!(delete.method(), Method::DELETE);
        assert_eq!(update.url().path(), "/api/visit-locations/v7");
        assert_eq!(delete.url().path(), "/api/visit-locations/v7");
        assert_eq!(json_body(&update), visit());
        assert!(delete.body().is_none());
    }

    #[test]
    fn visit_status() {
        let request = prepare(&UpdateVisitStatus {
            visit_id: "v7".to_string(),
            status: "completed".to_string(),
        });

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/api/visit-locations/v7/status");
        assert_eq!(json_body(&request), json!({ "status": "completed" }));
    }
}
