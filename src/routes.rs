use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::json;
use shortlist::eligibility::{
    ensure_unique_ids, BatchRunner, EligibilityRules, JobId, ShortlistReportView, StudentRecord,
};
use shortlist::error::AppError;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct ShortlistRequest {
    pub(crate) job_id: String,
    #[serde(default)]
    pub(crate) rules: EligibilityRules,
    #[serde(default)]
    pub(crate) students: Vec<StudentRecord>,
    #[serde(default = "include_eligible_default")]
    pub(crate) include_eligible: bool,
}

fn include_eligible_default() -> bool {
    true
}

pub(crate) fn shortlist_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/shortlist", post(shortlist_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn shortlist_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ShortlistRequest>,
) -> Result<Json<ShortlistReportView>, AppError> {
    let ShortlistRequest {
        job_id,
        rules,
        students,
        include_eligible,
    } = payload;

    ensure_unique_ids(&students)?;
    let runner = BatchRunner::from_rules(&rules)?.with_parallel(state.shortlist.parallel);
    debug!(%job_id, students = students.len(), "shortlist request accepted");

    let report = runner.run(&students, &JobId(job_id));
    Ok(Json(report.view(include_eligible)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use shortlist::config::ShortlistConfig;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            shortlist: ShortlistConfig {
                parallel: false,
                preview_rows: 5,
            },
        }
    }

    fn app(ready: bool) -> Router {
        shortlist_router().layer(Extension(app_state(ready)))
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body readable");
        serde_json::from_slice(&body).expect("body is json")
    }

    fn post_json(payload: Value) -> Request<Body> {
        Request::post("/api/v1/shortlist")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn shortlist_endpoint_evaluates_students() {
        let payload = json!({
            "job_id": "upskalor-tech",
            "rules": {
                "branches": ["CSE"],
                "min_cgpa": 7.5,
                "allow_backlogs": false,
                "req_skills": ["Python", "SQL", "ML"],
                "projects_min": 2
            },
            "students": [
                {"student_id": "S001", "branch": "CSE", "cgpa": 8.0, "backlogs": 0,
                 "passout_year": 2025, "skills": ["Python", "SQL"], "projects": 3},
                {"student_id": "S002", "branch": "CSE", "cgpa": 8.0, "backlogs": 0,
                 "passout_year": 2025, "skills": ["Python"], "projects": 3},
                {"student_id": "S003", "branch": "CSE", "cgpa": 8.0, "backlogs": 1,
                 "passout_year": 2025, "skills": ["Python", "SQL"], "projects": 3}
            ]
        });

        let response = app(true)
            .oneshot(post_json(payload))
            .await
            .expect("request handled");
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_json_body(response).await;
        assert_eq!(body["summary"]["total"], 3);
        assert_eq!(body["summary"]["eligible"], 1);
        assert_eq!(body["summary"]["rejected"], 2);
        assert_eq!(body["decisions"][0]["eligible"], true);
        assert_eq!(body["decisions"][0]["reasons"], json!([]));
        assert_eq!(
            body["decisions"][1]["reasons"],
            json!(["Required skill hits (1) below threshold (2)."])
        );
        assert_eq!(
            body["decisions"][2]["reasons"],
            json!(["Backlogs not allowed."])
        );
        assert_eq!(body["decisions"][2]["job_id"], "upskalor-tech");
    }

    #[tokio::test]
    async fn shortlist_endpoint_defaults_missing_rules_and_skills() {
        let payload = json!({
            "job_id": "open-drive",
            "include_eligible": false,
            "students": [
                {"student_id": "S010", "branch": "MECH", "cgpa": 5.1, "backlogs": 4,
                 "passout_year": 2021, "projects": 0}
            ]
        });

        let response = app(true)
            .oneshot(post_json(payload))
            .await
            .expect("request handled");
        let body = read_json_body(response).await;

        assert_eq!(body["summary"]["eligible"], 1);
        assert_eq!(body["decisions"], json!([]));
        assert_eq!(body["rule_breakdown"], json!([]));
    }

    #[tokio::test]
    async fn shortlist_endpoint_rejects_duplicate_students() {
        let student = json!({"student_id": "S001", "branch": "CSE", "cgpa": 8.0, "backlogs": 0,
            "passout_year": 2025, "projects": 3});
        let payload = json!({ "job_id": "dup", "students": [student.clone(), student] });

        let response = app(true)
            .oneshot(post_json(payload))
            .await
            .expect("request handled");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json_body(response).await;
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.contains("S001")));
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = app(false)
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request handled");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let Json(health) = healthcheck().await;
        assert_eq!(health["status"], "ok");
    }
}
