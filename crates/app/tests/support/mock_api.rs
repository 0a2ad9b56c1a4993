//! In-memory users/tasks API served by axum on a loopback port.
//!
//! By default implements the contract the suite checks: ids are returned
//! as plain text, deletes are soft, and malformed bodies are answered with
//! 400. [`Faults`] switches individual rules off.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{Json, Router};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Debug, Default)]
struct Store {
    next_id: u64,
    users: BTreeMap<String, UserRecord>,
    tasks: BTreeMap<String, TaskRecord>,
}

#[derive(Debug)]
struct UserRecord {
    email: String,
    active: bool,
}

#[derive(Debug)]
struct TaskRecord {
    user_id: String,
    description: String,
    active: bool,
}

impl Store {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

/// Contract rules the mock can be told to break.
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    /// `POST /user` without an email creates a user instead of answering 400.
    pub accept_user_without_email: bool,
    /// `DELETE /user/{id}` answers 200 but leaves the user active.
    pub keep_deleted_users_active: bool,
    /// `DELETE /tasks/{id}` succeeds even when the owner is inactive.
    pub delete_tasks_of_inactive_users: bool,
}

#[derive(Debug, Clone, Default)]
struct ApiState {
    store: Arc<Mutex<Store>>,
    faults: Faults,
}

/// Binds a conforming mock API to `127.0.0.1` on a free port and serves it
/// in the background. Returns the base URL, ending in `/`.
pub async fn spawn() -> String {
    spawn_with(Faults::default()).await
}

/// Like [`spawn`], but with the given contract rules broken.
pub async fn spawn_with(faults: Faults) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock api bind failed");
    let addr: SocketAddr = listener.local_addr().expect("mock api local addr");

    let app = Router::new()
        .route("/user", post(create_user))
        .route("/user/{id}", get(get_user).delete(delete_user))
        .route("/user/{id}/tasks", post(create_task).get(list_tasks))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .with_state(ApiState {
            store: Arc::default(),
            faults,
        });

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock api server failed");
    });

    format!("http://{addr}/")
}

/// Extracts a non-empty string field from a JSON object body.
fn string_field(body: &[u8], field: &str) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

async fn create_user(State(state): State<ApiState>, body: Bytes) -> Response {
    let email = match string_field(&body, "email") {
        Some(email) => email,
        None if state.faults.accept_user_without_email => String::new(),
        None => return StatusCode::BAD_REQUEST.into_response(),
    };
    let mut store = state.store.lock().expect("store poisoned");
    let id = store.next_id("user");
    store.users.insert(id.clone(), UserRecord { email, active: true });
    id.into_response()
}

async fn get_user(State(state): State<ApiState>, Path(id): Path<String>) -> Response {
    let store = state.store.lock().expect("store poisoned");
    match store.users.get(&id) {
        Some(user) => Json(json!({
            "id": id,
            "email": user.email,
            "active": user.active,
        }))
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_user(State(state): State<ApiState>, Path(id): Path<String>) -> StatusCode {
    let mut store = state.store.lock().expect("store poisoned");
    match store.users.get_mut(&id) {
        Some(user) => {
            if !state.faults.keep_deleted_users_active {
                user.active = false;
            }
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn create_task(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
    body: Bytes,
) -> Response {
    let Some(description) = string_field(&body, "description") else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut store = state.store.lock().expect("store poisoned");
    if !store.users.contains_key(&user_id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let id = store.next_id("task");
    store.tasks.insert(
        id.clone(),
        TaskRecord {
            user_id,
            description,
            active: true,
        },
    );
    id.into_response()
}

async fn list_tasks(State(state): State<ApiState>, Path(user_id): Path<String>) -> Response {
    let store = state.store.lock().expect("store poisoned");
    if !store.users.contains_key(&user_id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let tasks: Vec<Value> = store
        .tasks
        .iter()
        .filter(|(_, task)| task.user_id == user_id)
        .map(|(id, task)| {
            json!({
                "id": id,
                "description": task.description,
                "active": task.active,
            })
        })
        .collect();
    Json(tasks).into_response()
}

async fn update_task(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    body: Bytes,
) -> StatusCode {
    let Some(description) = string_field(&body, "description") else {
        return StatusCode::BAD_REQUEST;
    };
    let mut store = state.store.lock().expect("store poisoned");
    match store.tasks.get_mut(&id) {
        Some(task) => {
            task.description = description;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_task(State(state): State<ApiState>, Path(id): Path<String>) -> StatusCode {
    let mut store = state.store.lock().expect("store poisoned");
    let Some(owner) = store.tasks.get(&id).map(|task| task.user_id.clone()) else {
        return StatusCode::NOT_FOUND;
    };
    let owner_active = store.users.get(&owner).is_some_and(|user| user.active);
    if !owner_active && !state.faults.delete_tasks_of_inactive_users {
        return StatusCode::BAD_REQUEST;
    }
    if let Some(task) = store.tasks.get_mut(&id) {
        task.active = false;
    }
    StatusCode::OK
}
