/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use reqwest::Method;
use serde_json::Value;

use crate::requests::{with_student_id, ApiRequest};

const FINAL_REPORTS_PATH: &str = "/final-reports";

/// Creates a final report; `report` fields are merged over `student_id`.
pub struct CreateFinalReport {
    pub student_id: String,
    pub report: Value,
}

impl ApiRequest for CreateFinalReport {
    type Body = Value;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        FINAL_REPORTS_PATH.to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(with_student_id(&self.student_id, &self.report))
    }
}

pub struct GetFinalReport {
    pub report_id: String,
}

impl ApiRequest for GetFinalReport {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("{}/{}", FINAL_REPORTS_PATH, self.report_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

pub struct UpdateFinalReport {
    pub report_id: String,
    pub report: Value,
}

impl ApiRequest for UpdateFinalReport {
    type Body = Value;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        format!("{}/{}", FINAL_REPORTS_PATH, self.report_id)
    }

    fn body(&self) -> Option<Value> {
        Some(self.report.clone())
    }
}

pub struct DeleteFinalReport {
    pub report_id: String,
}

impl ApiRequest for DeleteFinalReport {
    type Body = ();

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("{}/{}", FINAL_REPORTS_PATH, self.report_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

/// Creates an evaluation; `evaluation` fields are merged over `student_id`.
pub struct CreateEvaluation {
    pub student_id: String,
    pub evaluation: Value,
}

impl ApiRequest for CreateEvaluation {
    type Body = Value;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/evaluations".to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(with_student_id(&self.student_id, &self.evaluation))
    }
}

pub struct GenerateEvaluationReport {
    pub student_id: String,
}

impl ApiRequest for GenerateEvaluationReport {
    type Body = ();

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/evaluations/{}/report", self.student_id)
    }

    fn body(&self) -> Option<()> {
        None
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::requests::test_support::{json_body, prepare};

    #[test]
    fn create_final_report_carries_student_id() {
        let request = prepare(&CreateFinalReport {
            student_id: "s1".to_string(),
            report: json!({ "report_url": "https://files.example.com/r.pdf", "status": "submitted" }),
        });

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/api/final-reports");
        assert_eq!(
            json_body(&request),
            json!({
                "student_id": "s1",
                "report_url": "https://files.example.com/r.pdf",
                "status": "submitted",
            })
        );
    }

    #[test]
    fn final_report_by_id() {
        let get = prepare(&GetFinalReport {
            report_id: "r2".to_string(),
        });
        let update = prepare(&UpdateFinalReport {
            report_id: "r2".to_string(),
            report: json!({ "department_grade": 71.5 }),
        });
        let delete = prepare(&DeleteFinalReport {
            report_id: "r2".to_string(),
        });

        assert_eq!(get.method(), Method::GET);
        assert_eq!(update.method(), Method::PUT);
        assert_eq!(delete.method(), Method::DELETE);
        for request in [&get, &update, &delete] {
            assert_eq!(request.url().path(), "/api/final-reports/r2");
        }
        assert_eq!(json_body(&update), json!({ "department_grade": 71.5 }));
    }

    #[test]
    fn create_evaluation_carries_student_id() {
        let request = prepare(&CreateEvaluation {
            student_id: "s1".to_string(),
            evaluation: json!({ "evaluation_type": "final", "total_score": 88.0 }),
        });

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/api/evaluations");
        assert_eq!(
            json_body(&request),
            json!({ "student_id": "s1", "evaluation_type": "final", "total_score": 88.0 })
        );
    }

    #[test]
    fn evaluation_report() {
        let request = prepare(&GenerateEvaluationReport {
            student_id: "s1".to_string(),
        });
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().path(), "/api/evaluations/s1/report");
    }
}
