/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::env::VarError;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use serde_json::Value;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use internship_client::config::{load_toml, Config, Secrets, DEFAULT_CONFIG_FILE, DEFAULT_SECRETS_FILE};
use internship_client::progress::request_spinner;
use internship_client::storage::FileTokenStore;
use internship_client::{ApiClient, ClientError};

#[derive(Parser)]
#[command(version)]
struct Args {
    /// Config file (default: ./internship_client.config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Secrets file (default: ./internship_client.secrets.toml)
    #[arg(short, long, value_name = "FILE")]
    secrets: Option<PathBuf>,
    /// Use secrets from the INTERNSHIP_APP_ID and INTERNSHIP_APP_KEY environment variables.
    /// This also happens when the secrets file does not exist.
    #[arg(long)]
    env_secrets: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and keep the access token in the session file
    Login {
        username: String,
        /// Password (default: the INTERNSHIP_PASSWORD environment variable)
        #[arg(long)]
        password: Option<String>,
        /// Permission scope (default: R-WR-R-R)
        #[arg(long)]
        scope: Option<String>,
    },
    /// Log out and forget the stored access token
    Logout,
    Dashboard,
    SearchStudents {
        query: String,
    },
    ListStudents {
        #[arg(long)]
        status: Option<String>,
    },
    UpdateStudentStatus {
        student_id: String,
        status: String,
    },
    StudentLocation {
        student_id: String,
    },
    StudentAtCompany {
        student_id: String,
        company_id: String,
        /// Maximum distance in meters (default: 200)
        #[arg(long)]
        max_distance: Option<u32>,
    },
    VisitLocations,
    CreateVisitLocation {
        /// Visit location as JSON
        #[arg(value_parser = parse_json)]
        visit: Value,
    },
    UpdateVisitLocation {
        visit_location_id: String,
        #[arg(value_parser = parse_json)]
        visit: Value,
    },
    DeleteVisitLocation {
        visit_location_id: String,
    },
    UpdateVisitStatus {
        visit_id: String,
        status: String,
    },
    Profile,
    UpdateProfile {
        #[arg(value_parser = parse_json)]
        profile: Value,
    },
    DeleteProfile,
    StudentLogs {
        student_id: String,
        /// e.g. daily or monthly
        log_type: String,
    },
    MarkLogbookEntry {
        logbook_id: String,
        status: String,
        #[arg(long)]
        comments: Option<String>,
    },
    CreateFinalReport {
        student_id: String,
        #[arg(value_parser = parse_json)]
        report: Value,
    },
    FinalReport {
        report_id: String,
    },
    UpdateFinalReport {
        report_id: String,
        #[arg(value_parser = parse_json)]
        report: Value,
    },
    DeleteFinalReport {
        report_id: String,
    },
    CreateEvaluation {
        student_id: String,
        #[arg(value_parser = parse_json)]
        evaluation: Value,
    },
    EvaluationReport {
        student_id: String,
    },
    AssignSupervisorToZone {
        supervisor_id: String,
        zone_id: String,
    },
    ZoneSupervisors {
        zone_id: String,
    },
    AssignStudents {
        supervisor_id: String,
        #[arg(required = true)]
        student_ids: Vec<String>,
    },
    AssignedStudents {
        supervisor_id: String,
    },
    Workload {
        supervisor_id: String,
    },
    BalanceWorkload {
        zone_id: String,
    },
    ManageWorkload,
    ZoneChat {
        zone_id: String,
    },
    ZoneChatMessages {
        zone_id: String,
        /// default: 50
        #[arg(long)]
        limit: Option<u32>,
        /// default: 0
        #[arg(long)]
        skip: Option<u32>,
    },
    PostZoneChat {
        zone_id: String,
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = Args::parse();
    if let Command::Login {
        password: password @ None,
        ..
    } = &mut args.command
    {
        let from_env = get_env("INTERNSHIP_PASSWORD")
            .wrap_err("Pass --password or set INTERNSHIP_PASSWORD")?;
        *password = Some(from_env);
    }

    let config_path = args.config.unwrap_or(PathBuf::from(DEFAULT_CONFIG_FILE));
    let config: Config = load_toml(&config_path).await?;
    let secrets_path = args.secrets.unwrap_or(PathBuf::from(DEFAULT_SECRETS_FILE));
    let secrets: Secrets = if args.env_secrets || !secrets_path.as_path().exists() {
        Secrets {
            app_id: get_env("INTERNSHIP_APP_ID").wrap_err("No secrets file was found")?,
            app_key: get_env("INTERNSHIP_APP_KEY").wrap_err("No secrets file was found")?,
        }
    } else {
        load_toml(&secrets_path).await?
    };

    let store = Arc::new(FileTokenStore::new(config.session_file(), config.token_key()));
    let api = ApiClient::new(&config, &secrets, store.clone())?;

    let spinner = request_spinner(format!("Waiting for {}", config.base_url));
    let result = run(&api, &args.command).await;
    spinner.finish_and_clear();
    let body = result?;

    match &args.command {
        Command::Login { .. } => match body.get("access_token").and_then(Value::as_str) {
            Some(token) => store
                .store(token)
                .into_diagnostic()
                .wrap_err_with(|| format!("Could not save token to {}", store.path().display()))?,
            None => warn!("login response did not contain an access token"),
        },
        Command::Logout => store
            .clear()
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not clear {}", store.path().display()))?,
        _ => {}
    }

    println!("{}", serde_json::to_string_pretty(&body).into_diagnostic()?);
    Ok(())
}

async fn run(api: &ApiClient, command: &Command) -> Result<Value, ClientError> {
    match command {
        Command::Login {
            username,
            password,
            scope,
        } => {
            let password = password.as_deref().unwrap_or_default();
            api.login(username, password, scope.as_deref()).await
        }
        Command::Logout => api.logout().await,
        Command::Dashboard => api.get_dashboard().await,
        Command::SearchStudents { query } => api.search_students(query).await,
        Command::ListStudents { status } => api.get_student_list(status.as_deref()).await,
        Command::UpdateStudentStatus { student_id, status } => {
            api.update_student_status(student_id, status).await
        }
        Command::StudentLocation { student_id } => api.get_student_location(student_id).await,
        Command::StudentAtCompany {
            student_id,
            company_id,
            max_distance,
        } => {
            api.is_student_at_company(student_id, company_id, *max_distance)
                .await
        }
        Command::VisitLocations => api.get_visit_locations().await,
        Command::CreateVisitLocation { visit } => api.create_visit_location(visit.clone()).await,
        Command::UpdateVisitLocation {
            visit_location_id,
            visit,
        } => {
            api.update_visit_location(visit_location_id, visit.clone())
                .await
        }
        Command::DeleteVisitLocation { visit_location_id } => {
            api.delete_visit_location(visit_location_id).await
        }
        Command::UpdateVisitStatus { visit_id, status } => {
            api.update_visit_status(visit_id, status).await
        }
        Command::Profile => api.get_supervisor_profile().await,
        Command::UpdateProfile { profile } => api.update_supervisor_profile(profile.clone()).await,
        Command::DeleteProfile => api.delete_supervisor_profile().await,
        Command::StudentLogs {
            student_id,
            log_type,
        } => api.get_student_logs(student_id, log_type).await,
        Command::MarkLogbookEntry {
            logbook_id,
            status,
            comments,
        } => {
            api.mark_logbook_entry(logbook_id, status, comments.as_deref())
                .await
        }
        Command::CreateFinalReport { student_id, report } => {
            api.create_final_report(student_id, report.clone()).await
        }
        Command::FinalReport { report_id } => api.get_final_report(report_id).await,
        Command::UpdateFinalReport { report_id, report } => {
            api.update_final_report(report_id, report.clone()).await
        }
        Command::DeleteFinalReport { report_id } => api.delete_final_report(report_id).await,
        Command::CreateEvaluation {
            student_id,
            evaluation,
        } => {
            api.create_evaluation(student_id, evaluation.clone())
                .await
        }
        Command::EvaluationReport { student_id } => {
            api.generate_evaluation_report(student_id).await
        }
        Command::AssignSupervisorToZone {
            supervisor_id,
            zone_id,
        } => api.assign_supervisor_to_zone(supervisor_id, zone_id).await,
        Command::ZoneSupervisors { zone_id } => api.get_supervisors_in_zone(zone_id).await,
        Command::AssignStudents {
            supervisor_id,
            student_ids,
        } => {
            api.assign_students_to_supervisor(supervisor_id, student_ids)
                .await
        }
        Command::AssignedStudents { supervisor_id } => {
            api.get_assigned_students(supervisor_id).await
        }
        Command::Workload { supervisor_id } => api.get_supervisor_workload(supervisor_id).await,
        Command::BalanceWorkload { zone_id } => api.balance_supervisor_workload(zone_id).await,
        Command::ManageWorkload => api.manage_supervisor_workload().await,
        Command::ZoneChat { zone_id } => api.get_zone_chat(zone_id).await,
        Command::ZoneChatMessages {
            zone_id,
            limit,
            skip,
        } => api.get_zone_chat_messages(zone_id, *limit, *skip).await,
        Command::PostZoneChat { zone_id, content } => {
            api.add_message_to_zone_chat(zone_id, content).await
        }
    }
}

fn parse_json(input: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(input)
}

fn get_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Err(miette!("Environment variable {} is not set", key)),
        Err(err) => Err(err)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to get environment variable {}", key)),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn login_password_may_come_from_the_environment() {
        let args = Args::try_parse_from(["internship_client", "login", "alice"]).unwrap();
        match args.command {
            Command::Login {
                username, password, ..
            } => {
                assert_eq!(username, "alice");
                assert_eq!(password, None);
            }
            _ => panic!("expected the login command"),
        }
    }

    #[test]
    fn login_password_can_be_passed() {
        let args = Args::try_parse_from([
            "internship_client",
            "login",
            "alice",
            "--password",
            "pw",
            "--scope",
            "R-R-R-R",
        ])
        .unwrap();
        match args.command {
            Command::Login { password, scope, .. } => {
                assert_eq!(password.as_deref(), Some("pw"));
                assert_eq!(scope.as_deref(), Some("R-R-R-R"));
            }
            _ => panic!("expected the login command"),
        }
    }
}
