/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use reqwest::Method;

use crate::requests::ApiRequest;
use crate::students::StatusUpdate;

pub struct SearchStudents {
    pub query: String,
}

impl ApiRequest for SearchStudents {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/students/search".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("query", self.query.clone())]
    }

    fn body(&self) -> Option<()> {
        None
    }
}

/// Lists the supervisor's students, optionally filtered by status.
pub struct GetStudentList {
    pub status: Option<String>,
}

impl ApiRequest for GetStudentList {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/students".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.status
            .iter()
            .map(|status| ("status", status.clone()))
            .collect()
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct UpdateStudentStatus {
    pub student_id: String,
    pub status: String,
}

impl ApiRequest for UpdateStudentStatus {
    type Body = StatusUpdate;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("/students/{}/status", self.student_id)
    }

    fn body(&self) -> Option<StatusUpdate> {
        Some(StatusUpdate {
            status: self.status.clone(),
        })
    }
}

pub struct GetStudentLocation {
    pub student_id: String,
}

impl ApiRequest for GetStudentLocation {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/students/{}/location", self.student_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

/// Checks whether the student's last known position lies within
/// `max_distance` meters of the company.
pub struct IsStudentAtCompany {
    pub student_id: String,
    pub company_id: String,
    pub max_distance: u32,
}

impl ApiRequest for IsStudentAtCompany {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!(
            "/students/{}/at-company/{}",
            self.student_id, self.company_id
        )
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("max_distance", self.max_distance.to_string())]
    }

    fn body(&self) -> Option<()> {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::requests::test_support::{json_body, path_and_query, prepare};
    use crate::students::DEFAULT_MAX_DISTANCE;

    #[test]
    fn search_passes_query() {
        let request = prepare(&SearchStudents {
            query: "wanjiru".to_string(),
        });
        assert_eq!(request.method(), Method::GET);
        assert_eq!(path_and_query(&request), "/api/students/search?query=wanjiru");
    }

    #[test]
    fn student_list_without_status_has_no_filter() {
        let request = prepare(&GetStudentList { status: None });
        assert_eq!(path_and_query(&request), "/api/students");

        let request = prepare(&GetStudentList {
            status: Some("ongoing".to_string()),
        });
        assert_eq!(path_and_query(&request), "/api/students?status=ongoing");
    }

    #[test]
    fn status_update_goes_in_the_body() {
        let request = prepare(&UpdateStudentStatus {
            student_id: 42.to_string(),
            status: "active".to_string(),
        });

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(path_and_query(&request), "/api/students/42/status");
        assert_eq!(json_body(&request), json!({ "status": "active" }));
    }

    #[test]
    fn location() {
        let request = prepare(&GetStudentLocation {
            student_id: "65a1".to_string(),
        });
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().path(), "/api/students/65a1/location");
    }

    #[test]
    fn at_company_sends_max_distance() {
        let request = prepare(&IsStudentAtCompany {
            student_id: "s1".to_string(),
            company_id: "c9".to_string(),
            max_distance: DEFAULT_MAX_DISTANCE,
        });

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            path_and_query(&request),
            "/api/students/s1/at-company/c9?max_distance=200"
        );
        assert!(request.body().is_none());
    }
}
