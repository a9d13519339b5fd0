pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_resume))
        .route("/api/v1/jobs/parse", post(handlers::handle_parse_job))
        .route("/api/v1/vocabulary", get(handlers::handle_vocabulary))
        // Matching
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/match/validate", post(handlers::handle_validate))
        // Full run: match + drafts + audit
        .route("/api/v1/runs", post(handlers::handle_run))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::path::Path;
    use tower::ServiceExt;

    const RESUME: &str = "Jane Doe\nPython, AWS, Docker, Flask and Kubernetes.";
    const JOB: &str = "Job Title: Cloud Backend Engineer\nLocation: Seattle, WA\nPython, AWS, GCP, Azure, Docker.";

    fn router(run_log: &Path) -> Router {
        let run_log = run_log.display().to_string();
        let config = Config::from_lookup(|key| match key {
            "RUN_LOG_PATH" => Some(run_log.clone()),
            _ => None,
        })
        .expect("config");
        build_router(AppState::from_config(config).expect("state"))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_json(router(&dir.path().join("runs.jsonl")), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobmatch");
    }

    #[tokio::test]
    async fn test_parse_resume() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            router(&dir.path().join("runs.jsonl")),
            "/api/v1/resumes/parse",
            json!({ "resume_text": "Name: Ada Lovelace\nWorked with Python and SQL." }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ada Lovelace");
        assert_eq!(body["skills"], json!(["python", "sql"]));
    }

    #[tokio::test]
    async fn test_parse_job() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            router(&dir.path().join("runs.jsonl")),
            "/api/v1/jobs/parse",
            json!({ "job_text": JOB }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Cloud Backend Engineer");
        assert_eq!(body["location"], "Seattle, WA");
        assert_eq!(body["required_skills"], json!(["aws", "azure", "docker", "gcp", "python"]));
    }

    #[tokio::test]
    async fn test_non_string_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            router(&dir.path().join("runs.jsonl")),
            "/api/v1/match",
            json!({ "resume_text": RESUME, "job_text": 42 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INPUT_TYPE_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("job_text"));
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            router(&dir.path().join("runs.jsonl")),
            "/api/v1/resumes/parse",
            json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INPUT_TYPE_ERROR");
    }

    #[tokio::test]
    async fn test_match() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            router(&dir.path().join("runs.jsonl")),
            "/api/v1/match",
            json!({ "resume_text": RESUME, "job_text": JOB }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["score"], 0.6);
        assert_eq!(body["result"]["overlapping_skills"], json!(["aws", "docker", "python"]));
        assert_eq!(body["result"]["missing_skills"], json!(["azure", "gcp"]));
        assert_eq!(body["result"]["candidate_name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_validate_repairs_loose_payload() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = post_json(
            router(&dir.path().join("runs.jsonl")),
            "/api/v1/match/validate",
            json!({
                "score": "1.7",
                "overlapping_skills": ["Python", "python", "cobol"],
                "missing_skills": ["python", "AWS"],
                "candidate_name": "  ",
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 1.0);
        assert_eq!(body["overlapping_skills"], json!(["python"]));
        assert_eq!(body["missing_skills"], json!(["aws"]));
        assert_eq!(body["candidate_name"], "Unknown Candidate");
        assert_eq!(body["role_title"], "Unknown Role");
    }

    #[tokio::test]
    async fn test_vocabulary_lists_categories() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get_json(router(&dir.path().join("runs.jsonl")), "/api/v1/vocabulary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"]["database"], json!(["mongodb", "mysql", "postgresql", "sql"]));
        assert!(body["total"].as_u64().unwrap() > 30);
    }

    #[tokio::test]
    async fn test_run_returns_report_and_appends_audit_line() {
        let dir = tempfile::tempdir().unwrap();
        let run_log = dir.path().join("runs.jsonl");
        let (status, body) = post_json(
            router(&run_log),
            "/api/v1/runs",
            json!({ "resume_text": RESUME, "job_text": JOB }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["drafter_backend"], "template");
        assert_eq!(body["audit_logged"], true);
        assert!(body["drafts"]["email"]
            .as_str()
            .unwrap()
            .starts_with("Subject: Interest in Cloud Backend Engineer"));

        let log = std::fs::read_to_string(&run_log).unwrap();
        assert_eq!(log.lines().count(), 1);
        let line: Value = serde_json::from_str(log.trim_end()).unwrap();
        assert_eq!(line["run_id"], body["run_id"]);
    }
}
