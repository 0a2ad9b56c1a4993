//! The users/tasks API suite.
//!
//! Cases run in the order they are registered and share the server's
//! state: nothing is reset between them. Each case creates its own users
//! and tasks, so no case reads data another case created, but the first
//! case assumes no user with id `123` has been created yet.

use serde_json::json;
use taskcheck_application::{HttpClient, Probe, Suite};
use taskcheck_domain::{CaseResult, Task, User, assert_true};

/// Builds the suite covering every endpoint of the users/tasks API.
#[must_use]
pub fn user_task_suite<C: HttpClient + 'static>() -> Suite<Probe<C>> {
    let mut suite = Suite::new("users and tasks");
    suite
        .test("GET /user when user does not exist returns 404", |probe| {
            Box::pin(missing_user_returns_404(probe))
        })
        .test("POST /user creates a new user", |probe| {
            Box::pin(post_user_creates_user(probe))
        })
        .test("GET /user/{userId} returns user after creating one", |probe| {
            Box::pin(get_user_after_create(probe))
        })
        .test("DELETE /user/{userId} deactivates a user", |probe| {
            Box::pin(delete_user_deactivates(probe))
        })
        .test("POST /user/{userid}/tasks creates a task for a user", |probe| {
            Box::pin(post_task_creates_task(probe))
        })
        .test("PUT /tasks/{taskId} updates an existing task", |probe| {
            Box::pin(put_task_updates_description(probe))
        })
        .test("DELETE /tasks/{taskid} performs a soft-delete of the tasks", |probe| {
            Box::pin(delete_task_soft_deletes(probe))
        })
        .test(
            "Endpoints return a Bad Request (400) status code for malformed requests",
            |probe| Box::pin(malformed_post_is_bad_request(probe)),
        )
        .test("Tasks for inactive users should not be able to be deleted", |probe| {
            Box::pin(inactive_user_task_cannot_be_deleted(probe))
        });
    suite
}

async fn missing_user_returns_404<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let response = probe.get("user/123").await?;

    assert_true(
        response.is_status(404),
        format!("HTTP status should be 404 but was {}", response.status),
    )
}

async fn post_user_creates_user<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let response = probe
        .post("user", json!({ "email": "john@nodomain.com" }))
        .await?;

    assert_true(
        response.is_ok(),
        format!("Expected POST to succeed with 200, got {}", response.status),
    )?;
    assert_true(
        !response.is_empty(),
        format!(
            "Request body should contain an ID, did not find it in '{}'",
            response.text()
        ),
    )
}

async fn get_user_after_create<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let user_id = probe.fixtures().create_user("john@nodomain.com").await?;

    let response = probe.get(&format!("user/{user_id}")).await?;

    assert_true(response.is_ok(), "User created should have been found")?;
    assert_true(response.is_json(), "Response should be a JSON response")?;
    let user: User = response.json()?;
    assert_true(
        user.email == "john@nodomain.com",
        "The returned user needs to match the original user created",
    )?;
    assert_true(
        user.active,
        format!("User needs to be created as active but got {}", response.text()),
    )
}

async fn delete_user_deactivates<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let user_id = probe.fixtures().create_user("someuser@nodomain.com").await?;

    let response = probe.delete(&format!("user/{user_id}")).await?;

    assert_true(response.is_ok(), "DELETE should succeed with a 200")?;
    let response = probe.get(&format!("user/{user_id}")).await?;
    assert_true(
        response.is_ok(),
        "User should have been found even if deactivated",
    )?;
    let user: User = response.json()?;
    assert_true(!user.active, "User should no longer be active")
}

async fn post_task_creates_task<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let user_id = probe.fixtures().create_user("mike@rowe.com").await?;

    let response = probe
        .post(
            &format!("user/{user_id}/tasks"),
            json!({ "description": "Drycleaning" }),
        )
        .await?;

    assert_true(response.is_ok(), "Creating a task should have returned OK")?;
    assert_true(
        !response.is_empty(),
        "The response should have a length of at least 1",
    )?;
    let tasks_response = probe.get(&format!("user/{user_id}/tasks")).await?;
    let tasks: Vec<Task> = tasks_response.json()?;
    assert_true(
        tasks.len() == 1,
        format!("User should have 1 task but has {}", tasks_response.text()),
    )?;
    assert_true(
        tasks.first().is_some_and(|task| task.active),
        format!(
            "Tasks should be created as active but was not {}",
            tasks_response.text()
        ),
    )
}

async fn put_task_updates_description<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let fixtures = probe.fixtures();
    let user_id = fixtures.create_user("mike@nodomain.com").await?;
    let task_id = fixtures
        .create_task("pick up the kids", Some(&user_id))
        .await?;

    let response = probe
        .put(
            &format!("tasks/{task_id}"),
            json!({ "description": "pick up the cats" }),
        )
        .await?;

    assert_true(response.is_ok(), "Updating a task should have returned OK")?;
    let tasks_response = probe.get(&format!("user/{user_id}/tasks")).await?;
    let tasks: Vec<Task> = tasks_response.json()?;
    assert_true(
        !tasks.is_empty(),
        "Tasks should not be empty for user after updating",
    )?;
    assert_true(
        tasks
            .first()
            .is_some_and(|task| task.description == "pick up the cats"),
        format!(
            "Task should have been updated but was not {}",
            tasks_response.text()
        ),
    )
}

async fn delete_task_soft_deletes<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let fixtures = probe.fixtures();
    let user_id = fixtures.create_user("mike@nodomain.com").await?;
    let task_id = fixtures
        .create_task("pick up the kids", Some(&user_id))
        .await?;

    let response = probe.delete(&format!("tasks/{task_id}")).await?;

    assert_true(response.is_ok(), "Deleting a task should have returned OK")?;
    let tasks_response = probe.get(&format!("user/{user_id}/tasks")).await?;
    let tasks: Vec<Task> = tasks_response.json()?;
    assert_true(
        tasks.first().is_some_and(|task| !task.active),
        "Task should have been set to inactive, not deleted",
    )
}

async fn malformed_post_is_bad_request<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let response = probe
        .post("user", json!({ "notExistentField": "bad value" }))
        .await?;

    assert_true(
        response.is_bad_request(),
        format!(
            "Malformed POST /user should produce a bad request (400) but produced {}",
            response.status
        ),
    )
}

async fn inactive_user_task_cannot_be_deleted<C: HttpClient>(probe: &Probe<C>) -> CaseResult {
    let fixtures = probe.fixtures();
    let user_id = fixtures.create_user("someuser@nodomain.com").await?;
    let task_id = fixtures
        .create_task("pick up the kids", Some(&user_id))
        .await?;

    probe.delete(&format!("user/{user_id}")).await?;

    let response = probe.delete(&format!("tasks/{task_id}")).await?;
    assert_true(
        response.is_bad_request(),
        format!(
            "Should not be able to delete a task for an inactive user, got {}",
            response.status
        ),
    )
}
