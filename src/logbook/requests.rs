/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use reqwest::Method;

use crate::logbook::LogbookMark;
use crate::requests::ApiRequest;

/// Log records of one student, e.g. `log_type = "daily"` or `"monthly"`.
pub struct GetStudentLogs {
    pub student_id: String,
    pub log_type: String,
}

impl ApiRequest for GetStudentLogs {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/logs/{}/{}", self.student_id, self.log_type)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct MarkLogbookEntry {
    pub logbook_id: String,
    pub status: String,
    pub comments: Option<String>,
}

impl ApiRequest for MarkLogbookEntry {
    type Body = LogbookMark;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("/logs/{}/mark", self.logbook_id)
    }

    fn body(&self) -> Option<LogbookMark> {
        Some(LogbookMark {
            status: self.status.clone(),
            comments: self.comments.clone(),
        })
    }
}
