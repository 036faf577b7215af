//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::recommend::ranking::RankedStudent;
use crate::recommend::RecommendRequest;
use crate::roster::Student;
use crate::state::AppState;

/// POST /recommend
///
/// Ranks the roster against the company requirement and returns the ordered
/// top-K matches. An empty array is a valid response: nobody met the grade
/// floor, no required skills were given, or a non-positive count was asked
/// for. Malformed bodies are rejected by the `Json` extractor before the
/// core is reached.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Vec<RankedStudent>>, AppError> {
    let results = state.engine.recommend(&request);

    info!(
        role = %request.role,
        required = request.req_skills.len(),
        matches = results.len(),
        "Ranked placement request"
    );

    Ok(Json(results))
}

/// GET /students
///
/// Full roster snapshot, in load order.
pub async fn handle_list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.engine.roster().to_vec())
}

/// GET /students/:id
pub async fn handle_get_student(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Student>, AppError> {
    state
        .engine
        .student(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No student with id {id}")))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::recommend::vocabulary::SkillVocabulary;
    use crate::recommend::weights::RoleWeightTable;
    use crate::recommend::RecommendEngine;
    use crate::roster::Student;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn owned(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn test_app() -> axum::Router {
        let vocabulary =
            SkillVocabulary::new(owned(&["python", "react", "sql", "docker"])).unwrap();
        let roster = vec![
            Student {
                id: 1,
                name: "Asha".to_string(),
                cgpa: 8.0,
                skills: owned(&["python", "sql", "docker"]),
            },
            Student {
                id: 2,
                name: "Bilal".to_string(),
                cgpa: 9.5,
                skills: owned(&["python"]),
            },
        ];
        let engine = RecommendEngine::new(vocabulary, RoleWeightTable::standard(), roster);
        build_router(AppState {
            engine: Arc::new(engine),
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_recommend(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_recommend_returns_ordered_matches() {
        let response = test_app()
            .oneshot(post_recommend(json!({
                "role": "backend",
                "req_skills": ["python", "sql"],
                "pref_skills": ["docker"],
                "min_cgpa": 7.0,
                "count": 2
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 2);
        // Asha's skill coverage outweighs Bilal's higher cgpa
        assert_eq!(results[0]["id"], 1);
        assert_eq!(results[1]["id"], 2);
        assert!(results[0]["score"].as_f64().unwrap() > results[1]["score"].as_f64().unwrap());
    }

    #[tokio::test]
    async fn test_recommend_empty_required_skills_yields_empty_array() {
        let response = test_app()
            .oneshot(post_recommend(json!({
                "role": "backend",
                "req_skills": [],
                "min_cgpa": 0.0,
                "count": 10
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_recommend_rejects_malformed_body() {
        let response = test_app()
            .oneshot(post_recommend(json!({ "role": "backend" })))
            .await
            .unwrap();

        // Missing fields never reach the core
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_list_students_returns_roster() {
        let response = test_app()
            .oneshot(Request::builder().uri("/students").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_student_is_404() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/students/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_health_reports_online() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "online");
    }
}
