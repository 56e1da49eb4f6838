use actix_web::http::{header, StatusCode};
use actix_web::test::{self, TestRequest};
use actix_web::App;
use serde_json::{json, Value};

use crate::db;
use crate::routes::routes::api_configure;
use crate::state::AppState;

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(App::new().configure(|cfg| api_configure(cfg, &$state))).await
    };
}

async fn sql_state() -> AppState {
    AppState::new(db::connect_in_memory().await.unwrap())
}

#[actix_web::test]
async fn root_greets() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn lists_on_empty_tables_are_empty_arrays() {
    let state = sql_state().await;
    let app = init_app!(state);

    for uri in ["/api/v1/users", "/api/v1/tasks", "/api/v1/projects"] {
        let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]), "{}", uri);
    }
}

#[actix_web::test]
async fn user_lifecycle_keeps_email_on_update() {
    let state = sql_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"full_name": "A", "email": "a@x.com", "user_role": "developer"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/api/v1/users/1");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "Created successfully"}));

    let resp = test::call_service(&app, TestRequest::get().uri("/api/v1/users/1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["user_role"], "developer");
    assert!(user["register_date"].is_string());

    let resp = test::call_service(
        &app,
        TestRequest::put()
            .uri("/api/v1/users/1")
            .set_json(json!({"full_name": "B", "user_role": "admin"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"msg": "Updated successfully"}));

    let resp = test::call_service(&app, TestRequest::get().uri("/api/v1/users/1").to_request()).await;
    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["full_name"], "B");
    assert_eq!(user["user_role"], "admin");
    assert_eq!(user["email"], "a@x.com");
}

#[actix_web::test]
async fn project_tasks_require_an_existing_project() {
    let state = sql_state().await;
    let app = init_app!(state);

    let requests = [
        (
            "/api/v1/users",
            json!({"full_name": "Dev", "email": "dev@x.com", "user_role": "developer"}),
        ),
        (
            "/api/v1/projects",
            json!({"title": "Launch", "descript": "Q3 launch", "manager_id": 1}),
        ),
        (
            "/api/v1/tasks",
            json!({
                "title": "Deploy Service",
                "descript": "roll out v2",
                "task_type": "high",
                "task_priority": "new",
                "user_id": 1,
                "project_id": 1
            }),
        ),
    ];
    for (uri, body) in requests {
        let resp = test::call_service(&app, TestRequest::post().uri(uri).set_json(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "{}", uri);
    }

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/projects/1/tasks").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let tasks: Value = test::read_body_json(resp).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["title"], "Deploy Service");
    assert_eq!(tasks[0]["task_priority"], "new");

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/users/1/tasks").to_request(),
    )
    .await;
    let tasks: Value = test::read_body_json(resp).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/projects/999999/tasks").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "failed to get project by id: project not found");

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/users/42/tasks").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn task_search_dispatches_on_the_first_parameter() {
    let state = sql_state().await;
    let app = init_app!(state);

    test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"full_name": "Dev", "email": "dev@x.com", "user_role": "developer"}))
            .to_request(),
    )
    .await;
    test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/projects")
            .set_json(json!({"title": "Ops", "manager_id": 1}))
            .to_request(),
    )
    .await;
    for (title, task_type) in [("Deploy Service", "high"), ("Write report", "low")] {
        test::call_service(
            &app,
            TestRequest::post()
                .uri("/api/v1/tasks")
                .set_json(json!({
                    "title": title,
                    "task_type": task_type,
                    "task_priority": "in_process",
                    "user_id": 1,
                    "project_id": 1
                }))
                .to_request(),
        )
        .await;
    }

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/tasks/search?title=deploy").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Value = test::read_body_json(resp).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["title"], "Deploy Service");

    // `priority` filters the low/medium/high column
    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/tasks/search?priority=low&assignee=1").to_request(),
    )
    .await;
    let found: Value = test::read_body_json(resp).await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["title"], "Write report");

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/tasks/search?status=in_process").to_request(),
    )
    .await;
    let found: Value = test::read_body_json(resp).await;
    assert_eq!(found.as_array().unwrap().len(), 2);

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/tasks/search?assignee=me").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn search_without_parameters_is_a_bad_request() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    for uri in [
        "/api/v1/users/search",
        "/api/v1/tasks/search",
        "/api/v1/projects/search?title=",
    ] {
        let resp = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string(), "{}", uri);
    }
}

#[actix_web::test]
async fn invalid_bodies_are_rejected_before_the_store() {
    let state = sql_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"full_name": "A"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "invalid payload: missing required fields: email, user_role"
    );

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/projects")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"full_name": "A", "email": "a@x.com", "user_role": "intern"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(&app, TestRequest::get().uri("/api/v1/users").to_request()).await;
    let users: Value = test::read_body_json(resp).await;
    assert_eq!(users, json!([]));
}

#[actix_web::test]
async fn lookups_distinguish_bad_ids_from_missing_rows() {
    let state = sql_state().await;
    let app = init_app!(state);

    let resp = test::call_service(&app, TestRequest::get().uri("/api/v1/tasks/abc").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid id: abc");

    let resp = test::call_service(&app, TestRequest::get().uri("/api/v1/tasks/7").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "failed to get task by id: task not found");
}

#[actix_web::test]
async fn mutations_of_missing_ids_succeed() {
    let state = sql_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        TestRequest::put()
            .uri("/api/v1/projects/55")
            .set_json(json!({"title": "X", "descript": "Y", "manager_id": 1}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    for _ in 0..2 {
        let resp = test::call_service(
            &app,
            TestRequest::delete().uri("/api/v1/projects/55").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"msg": "Deleted successfully"}));
    }
}

#[actix_web::test]
async fn persistence_failures_are_internal_errors() {
    let state = sql_state().await;
    let app = init_app!(state);

    // no such project or user
    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/tasks")
            .set_json(json!({
                "title": "Orphan",
                "task_type": "low",
                "task_priority": "new",
                "user_id": 3,
                "project_id": 9
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("FOREIGN KEY"));
}

#[actix_web::test]
async fn in_memory_state_serves_the_same_routes() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"full_name": "Pat", "email": "pat@x.com", "user_role": "manager"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/projects")
            .set_json(json!({"title": "Mobile App", "manager_id": 1}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/api/v1/projects/1");

    let resp = test::call_service(
        &app,
        TestRequest::post()
            .uri("/api/v1/projects")
            .set_json(json!({"title": "Orphan", "manager_id": 4}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("FOREIGN KEY"));

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/projects/search?manager=1").to_request(),
    )
    .await;
    let found: Value = test::read_body_json(resp).await;
    assert_eq!(found[0]["title"], "Mobile App");
    assert_eq!(found[0]["descript"], "");

    let resp = test::call_service(
        &app,
        TestRequest::get().uri("/api/v1/projects/1/tasks").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let tasks: Value = test::read_body_json(resp).await;
    assert_eq!(tasks, json!([]));

    let resp = test::call_service(
        &app,
        TestRequest::delete().uri("/api/v1/users/1").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn malformed_query_strings_use_the_error_envelope() {
    let state = sql_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        TestRequest::get()
            .uri("/api/v1/tasks/search?title=a&title=b")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("duplicate field"));
}
