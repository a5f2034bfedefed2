/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use crate::auth::{Login, Logout};
use crate::config::{Config, Secrets};
use crate::error::ClientError;
use crate::logbook::{GetStudentLogs, MarkLogbookEntry};
use crate::profile::{
    DeleteSupervisorProfile, GetDashboard, GetSupervisorProfile, UpdateSupervisorProfile,
};
use crate::reports::{
    CreateEvaluation, CreateFinalReport, DeleteFinalReport, GenerateEvaluationReport,
    GetFinalReport, UpdateFinalReport,
};
use crate::requests::{ApiRequest, BearerAuth, Context, StaticHeaders};
use crate::storage::TokenStore;
use crate::students::{
    GetStudentList, GetStudentLocation, IsStudentAtCompany, SearchStudents, UpdateStudentStatus,
    DEFAULT_MAX_DISTANCE,
};
use crate::supervisors::{
    AssignStudentsToSupervisor, GetAssignedStudents, GetSupervisorWorkload,
    ManageSupervisorWorkload,
};
use crate::visits::{
    CreateVisitLocation, DeleteVisitLocation, GetVisitLocations, UpdateVisitLocation,
    UpdateVisitStatus,
};
use crate::zones::{
    AddMessageToZoneChat, AssignSupervisorToZone, BalanceSupervisorWorkload, GetSupervisorsInZone,
    GetZoneChat, GetZoneChatMessages, DEFAULT_CHAT_LIMIT, DEFAULT_CHAT_SKIP,
};

const USER_AGENT: &str = concat!("internship_client/", env!("CARGO_PKG_VERSION"));

/// The supervisor-facing API of the internship service.
///
/// Every call returns the response body as it was received.
#[derive(Clone)]
pub struct ApiClient {
    context: Context,
}

impl ApiClient {
    pub fn new(
        config: &Config,
        secrets: &Secrets,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_client(client, &config.base_url, secrets, store)
    }

    /// Uses `client` as the transport, with the identification headers
    /// and bearer token attached to every request.
    pub fn with_client(
        client: Client,
        base_url: &str,
        secrets: &Secrets,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, ClientError> {
        let context = Context::new(client, base_url)
            .with_hook(StaticHeaders::new(secrets)?)
            .with_hook(BearerAuth::new(store));
        Ok(Self::from_context(context))
    }

    pub fn from_context(context: Context) -> Self {
        ApiClient { context }
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
        scope: Option<&str>,
    ) -> Result<Value, ClientError> {
        Login::new(username, password, scope).request(&self.context).await
    }

    pub async fn logout(&self) -> Result<Value, ClientError> {
        Logout.request(&self.context).await
    }

    pub async fn get_dashboard(&self) -> Result<Value, ClientError> {
        GetDashboard.request(&self.context).await
    }

    pub async fn search_students(&self, query: &str) -> Result<Value, ClientError> {
        SearchStudents {
            query: query.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn get_student_list(&self, status: Option<&str>) -> Result<Value, ClientError> {
        GetStudentList {
            status: status.map(str::to_string),
        }
        .request(&self.context)
        .await
    }

    pub async fn update_student_status(
        &self,
        student_id: impl ToString,
        status: &str,
    ) -> Result<Value, ClientError> {
        UpdateStudentStatus {
            student_id: student_id.to_string(),
            status: status.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn get_student_location(
        &self,
        student_id: impl ToString,
    ) -> Result<Value, ClientError> {
        GetStudentLocation {
            student_id: student_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    /// `max_distance` is in meters and defaults to [`DEFAULT_MAX_DISTANCE`].
    pub async fn is_student_at_company(
        &self,
        student_id: impl ToString,
        company_id: impl ToString,
        max_distance: Option<u32>,
    ) -> Result<Value, ClientError> {
        IsStudentAtCompany {
            student_id: student_id.to_string(),
            company_id: company_id.to_string(),
            max_distance: max_distance.unwrap_or(DEFAULT_MAX_DISTANCE),
        }
        .request(&self.context)
        .await
    }

    pub async fn get_visit_locations(&self) -> Result<Value, ClientError> {
        GetVisitLocations.request(&self.context).await
    }

    pub async fn create_visit_location(&self, visit: Value) -> Result<Value, ClientError> {
        CreateVisitLocation { visit }.request(&self.context).await
    }

    pub async fn update_visit_location(
        &self,
        visit_location_id: impl ToString,
        visit: Value,
    ) -> Result<Value, ClientError> {
        UpdateVisitLocation {
            visit_location_id: visit_location_id.to_string(),
            visit,
        }
        .request(&self.context)
        .await
    }

    pub async fn delete_visit_location(
        &self,
        visit_location_id: impl ToString,
    ) -> Result<Value, ClientError> {
        DeleteVisitLocation {
            visit_location_id: visit_location_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn update_visit_status(
        &self,
        visit_id: impl ToString,
        status: &str,
    ) -> Result<Value, ClientError> {
        UpdateVisitStatus {
            visit_id: visit_id.to_string(),
            status: status.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn get_supervisor_profile(&self) -> Result<Value, ClientError> {
        GetSupervisorProfile.request(&self.context).await
    }

    pub async fn update_supervisor_profile(&self, profile: Value) -> Result<Value, ClientError> {
        UpdateSupervisorProfile { profile }
            .request(&self.context)
            .await
    }

    pub async fn delete_supervisor_profile(&self) -> Result<Value, ClientError> {
        DeleteSupervisorProfile.request(&self.context).await
    }

    pub async fn get_student_logs(
        &self,
        student_id: impl ToString,
        log_type: &str,
    ) -> Result<Value, ClientError> {
        GetStudentLogs {
            student_id: student_id.to_string(),
            log_type: log_type.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn mark_logbook_entry(
        &self,
        logbook_id: impl ToString,
        status: &str,
        comments: Option<&str>,
    ) -> Result<Value, ClientError> {
        MarkLogbookEntry {
            logbook_id: logbook_id.to_string(),
            status: status.to_string(),
            comments: comments.map(str::to_string),
        }
        .request(&self.context)
        .await
    }

    pub async fn create_final_report(
        &self,
        student_id: impl ToString,
        report: Value,
    ) -> Result<Value, ClientError> {
        CreateFinalReport {
            student_id: student_id.to_string(),
            report,
        }
        .request(&self.context)
        .await
    }

    pub async fn get_final_report(&self, report_id: impl ToString) -> Result<Value, ClientError> {
        GetFinalReport {
            report_id: report_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn update_final_report(
        &self,
        report_id: impl ToString,
        report: Value,
    ) -> Result<Value, ClientError> {
        UpdateFinalReport {
            report_id: report_id.to_string(),
            report,
        }
        .request(&self.context)
        .await
    }

    pub async fn delete_final_report(
        &self,
        report_id: impl ToString,
    ) -> Result<Value, ClientError> {
        DeleteFinalReport {
            report_id: report_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn create_evaluation(
        &self,
        student_id: impl ToString,
        evaluation: Value,
    ) -> Result<Value, ClientError> {
        CreateEvaluation {
            student_id: student_id.to_string(),
            evaluation,
        }
        .request(&self.context)
        .await
    }

    pub async fn generate_evaluation_report(
        &self,
        student_id: impl ToString,
    ) -> Result<Value, ClientError> {
        GenerateEvaluationReport {
            student_id: student_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn assign_supervisor_to_zone(
        &self,
        supervisor_id: impl ToString,
        zone_id: impl ToString,
    ) -> Result<Value, ClientError> {
        AssignSupervisorToZone {
            supervisor_id: supervisor_id.to_string(),
            zone_id: zone_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn get_supervisors_in_zone(
        &self,
        zone_id: impl ToString,
    ) -> Result<Value, ClientError> {
        GetSupervisorsInZone {
            zone_id: zone_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn assign_students_to_supervisor<I>(
        &self,
        supervisor_id: impl ToString,
        student_ids: I,
    ) -> Result<Value, ClientError>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        AssignStudentsToSupervisor {
            supervisor_id: supervisor_id.to_string(),
            student_ids: student_ids.into_iter().map(|id| id.to_string()).collect(),
        }
        .request(&self.context)
        .await
    }

    pub async fn get_assigned_students(
        &self,
        supervisor_id: impl ToString,
    ) -> Result<Value, ClientError> {
        GetAssignedStudents {
            supervisor_id: supervisor_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn get_supervisor_workload(
        &self,
        supervisor_id: impl ToString,
    ) -> Result<Value, ClientError> {
        GetSupervisorWorkload {
            supervisor_id: supervisor_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn balance_supervisor_workload(
        &self,
        zone_id: impl ToString,
    ) -> Result<Value, ClientError> {
        BalanceSupervisorWorkload {
            zone_id: zone_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    pub async fn manage_supervisor_workload(&self) -> Result<Value, ClientError> {
        ManageSupervisorWorkload.request(&self.context).await
    }

    pub async fn get_zone_chat(&self, zone_id: impl ToString) -> Result<Value, ClientError> {
        GetZoneChat {
            zone_id: zone_id.to_string(),
        }
        .request(&self.context)
        .await
    }

    /// Defaults to the first [`DEFAULT_CHAT_LIMIT`] messages.
    pub async fn get_zone_chat_messages(
        &self,
        zone_id: impl ToString,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<Value, ClientError> {
        GetZoneChatMessages {
            zone_id: zone_id.to_string(),
            limit: limit.unwrap_or(DEFAULT_CHAT_LIMIT),
            skip: skip.unwrap_or(DEFAULT_CHAT_SKIP),
        }
        .request(&self.context)
        .await
    }

    pub async fn add_message_to_zone_chat(
        &self,
        zone_id: impl ToString,
        content: &str,
    ) -> Result<Value, ClientError> {
        AddMessageToZoneChat {
            zone_id: zone_id.to_string(),
            content: content.to_string(),
        }
        .request(&self.context)
        .await
    }
}
