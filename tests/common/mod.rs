use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use coursebook::router::init_router;
use coursebook::state::AppState;
use coursebook_config::{CorsConfig, JwtConfig};
use coursebook_data::Directory;
use coursebook_models::{Course, Instructor, User};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn user(id: i64, name: &str, interests: &[&str]) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        company: "Acme".to_string(),
        interests: strings(interests),
    }
}

fn instructor(id: i64, name: &str, expertise: &[&str]) -> Instructor {
    Instructor {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        company: "Acme".to_string(),
        expertise: strings(expertise),
    }
}

fn course(id: i64, instructor_id: i64, topics: &[&str], attendees: &[i64]) -> Course {
    Course {
        id,
        instructor_id,
        name: format!("Course {id}"),
        topics: strings(topics),
        attendees: attendees.to_vec(),
    }
}

/// Fixture shared by the integration tests.
///
/// - users: 1 `[go, rust]`, 2 `[python]`, 3 `[Rust, GO, chess]`
/// - instructors: 1 `[databases]`, 2 `[compilers, go]`
/// - courses: 1 (instructor 2) `[go]` attendees `[1, 3]`,
///   2 (instructor 1) `[sql, go]` attendees `[2]`,
///   3 (instructor 2) `[compilers]` attendees `[]`
pub fn test_directory() -> Directory {
    Directory::new(
        vec![
            user(1, "Ada", &["go", "rust"]),
            user(2, "Guido", &["python"]),
            user(3, "Linus", &["Rust", "GO", "chess"]),
        ],
        vec![
            instructor(1, "Edgar", &["databases"]),
            instructor(2, "Ken", &["compilers", "go"]),
        ],
        vec![
            course(1, 2, &["go"], &[1, 3]),
            course(2, 1, &["sql", "go"], &[2]),
            course(3, 2, &["compilers"], &[]),
        ],
    )
}

#[allow(dead_code)]
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn setup_test_app() -> Router {
    let state = AppState::new(test_directory(), test_jwt_config(), CorsConfig::default());
    init_router(state)
}

/// Sends `GET uri` with an optional raw `Authorization` value and returns the
/// status and JSON body.
pub async fn get(app: Router, uri: &str, authorization: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, body)
}

#[allow(dead_code)]
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_i64().unwrap())
        .collect()
}
