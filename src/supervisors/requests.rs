/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use reqwest::Method;

use crate::requests::ApiRequest;
use crate::supervisors::StudentAssignment;

pub struct AssignStudentsToSupervisor {
    pub supervisor_id: String,
    pub student_ids: Vec<String>,
}

impl ApiRequest for AssignStudentsToSupervisor {
    type Body = StudentAssignment;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("/supervisors/{}/assign-students", self.supervisor_id)
    }

    fn body(&self) -> Option<StudentAssignment> {
        Some(StudentAssignment {
            student_ids: self.student_ids.clone(),
        })
    }
}

pub struct GetAssignedStudents {
    pub supervisor_id: String,
}

impl ApiRequest for GetAssignedStudents {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/supervisors/{}/assigned-students", self.supervisor_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct GetSupervisorWorkload {
    pub supervisor_id: String,
}

impl ApiRequest for GetSupervisorWorkload {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/supervisors/{}/workload", self.supervisor_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

/// Reorganizes workload across all supervisors.
pub struct ManageSupervisorWorkload;

impl ApiRequest for ManageSupervisorWorkload {
    type Body = ();

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        "/workload/manage".to_string()
    }

    fn body(&self) -> Option<()> {
        None
    }
}
