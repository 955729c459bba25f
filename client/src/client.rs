//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TaskClient` holds only a `base_url` and carries no mutable state between
//! calls. Each API operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! the caller executes the round-trip in between. The four pairs cover the
//! whole API surface: list, create, update, delete.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTask, Task, UpdateTask};

/// Stateless client for the task API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
}

impl TaskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/tasks", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_task(&self, input: &CreateTask) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/tasks", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_task(&self, id: i64, input: &UpdateTask) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/tasks/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_task(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/tasks/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_task(&self, response: HttpResponse) -> Result<Task, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TaskClient {
        TaskClient::new("http://localhost:3005")
    }

    #[test]
    fn build_list_tasks_produces_correct_request() {
        let req = client().build_list_tasks();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3005/tasks");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_task_produces_correct_request() {
        let input = CreateTask {
            title: "Buy milk".to_string(),
            description: "two litres".to_string(),
        };
        let req = client().build_create_task(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3005/tasks");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["description"], "two litres");
    }

    #[test]
    fn build_update_task_omits_absent_fields() {
        let input = UpdateTask {
            title: Some("Updated".to_string()),
            ..UpdateTask::default()
        };
        let req = client().build_update_task(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3005/tasks/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Updated");
        assert!(body.get("description").is_none());
        assert!(body.get("completed").is_none());
    }

    #[test]
    fn build_delete_task_produces_correct_request() {
        let req = client().build_delete_task(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3005/tasks/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_tasks_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"title":"Test","description":"","completed":false}]"#.to_string(),
        };
        let tasks = client().parse_list_tasks(response).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[0].title, "Test");
    }

    #[test]
    fn parse_list_tasks_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_tasks(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_task_success() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":1,"title":"New","description":"","completed":false}"#.to_string(),
        };
        let task = client().parse_create_task(response).unwrap();
        assert_eq!(task.title, "New");
    }

    #[test]
    fn parse_create_task_validation_failure() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: r#"{"error":"title is required"}"#.to_string(),
        };
        let err = client().parse_create_task(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 400, .. }));
    }

    #[test]
    fn parse_update_task_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":1,"title":"Updated","description":"","completed":true}"#.to_string(),
        };
        let task = client().parse_update_task(response).unwrap();
        assert_eq!(task.title, "Updated");
        assert!(task.completed);
    }

    #[test]
    fn parse_update_task_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"error":"task 1 not found"}"#.to_string(),
        };
        let err = client().parse_update_task(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_task_success() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(client().parse_delete_task(response).is_ok());
    }

    #[test]
    fn parse_delete_task_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_delete_task(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_tasks_server_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: r#"{"error":"storage error: disk I/O error"}"#.to_string(),
        };
        let err = client().parse_list_tasks(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TaskClient::new("http://localhost:3005/");
        let req = client.build_list_tasks();
        assert_eq!(req.path, "http://localhost:3005/tasks");
    }
}
