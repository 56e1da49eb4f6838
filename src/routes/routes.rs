use actix_web::{web, HttpResponse};

use crate::state::AppState;
use crate::utils::{json_config, query_config};

use super::projects::projects_handlers;
use super::tasks::tasks_handlers;
use super::users::users_handlers;

pub const API_PREFIX: &str = "/api/v1";

/// Mounts every entity under the versioned prefix, plus the `/` greeting.
pub fn api_configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::Data::from(state.users.clone()))
        .app_data(web::Data::from(state.tasks.clone()))
        .app_data(web::Data::from(state.projects.clone()))
        .app_data(web::Data::new(state.validator))
        .app_data(json_config())
        .app_data(query_config())
        .route(
            "/",
            web::get().to(|| async { HttpResponse::Ok().body("Hello, this is the PM service.") }),
        )
        .service(
            web::scope(API_PREFIX)
                .configure(users_configure)
                .configure(tasks_configure)
                .configure(projects_configure),
        );
}

pub fn users_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(users_handlers::list_users))
            .route("", web::post().to(users_handlers::create_user))
            .route("/search", web::get().to(users_handlers::search_users))
            .route("/{id}", web::get().to(users_handlers::get_user_by_id))
            .route("/{id}", web::put().to(users_handlers::update_user))
            .route("/{id}", web::delete().to(users_handlers::delete_user))
            .route("/{id}/tasks", web::get().to(users_handlers::get_user_tasks)),
    );
}

pub fn tasks_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .route("", web::get().to(tasks_handlers::list_tasks))
            .route("", web::post().to(tasks_handlers::create_task))
            .route("/search", web::get().to(tasks_handlers::search_tasks))
            .route("/{id}", web::get().to(tasks_handlers::get_task_by_id))
            .route("/{id}", web::put().to(tasks_handlers::update_task))
            .route("/{id}", web::delete().to(tasks_handlers::delete_task)),
    );
}

pub fn projects_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects_handlers::list_projects))
            .route("", web::post().to(projects_handlers::create_project))
            .route("/search", web::get().to(projects_handlers::search_projects))
            .route("/{id}", web::get().to(projects_handlers::get_project_by_id))
            .route("/{id}", web::put().to(projects_handlers::update_project))
            .route("/{id}", web::delete().to(projects_handlers::delete_project))
            .route("/{id}/tasks", web::get().to(projects_handlers::get_project_tasks)),
    );
}
