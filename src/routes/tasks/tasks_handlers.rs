use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};
use log::{error, info};

use super::tasks_models::{CreateTaskPayload, TaskSearchQuery, UpdateTaskPayload};
use crate::routes::routes::API_PREFIX;
use crate::store::TaskStore;
use crate::utils::{
    parse_id, store_error_status, write_error, write_message, write_store_error, MessageResponse,
    Validator,
};

// Handler to list every task
pub async fn list_tasks(store: web::Data<dyn TaskStore>) -> HttpResponse {
    info!("Received request to list tasks");

    match store.list_tasks().await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(e) => {
            error!("Failed to list tasks: {}", e);
            write_store_error(&e)
        }
    }
}

// Handler to create a task
pub async fn create_task(
    store: web::Data<dyn TaskStore>,
    validator: web::Data<Validator>,
    payload: web::Json<CreateTaskPayload>,
) -> HttpResponse {
    info!(
        "Received request to create task '{}' in project {}",
        payload.title, payload.project_id
    );

    let task = match validator.validate(payload.into_inner()) {
        Ok(task) => task,
        Err(e) => {
            info!("Rejected task payload: {}", e);
            return write_error(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match store.create_task(task).await {
        Ok(task_id) => {
            info!("Task {} created", task_id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, format!("{}/tasks/{}", API_PREFIX, task_id)))
                .json(MessageResponse {
                    msg: "Created successfully".into(),
                })
        }
        Err(e) => {
            error!("Failed to create task: {}", e);
            write_store_error(&e)
        }
    }
}

// Handler to get a task by id
pub async fn get_task_by_id(
    store: web::Data<dyn TaskStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let task_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to get task {}", task_id);

    match store.get_task_by_id(task_id).await {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(e) => {
            info!("Failed to get task {}: {}", task_id, e);
            write_error(
                store_error_status(&e),
                format!("failed to get task by id: {}", e),
            )
        }
    }
}

// Handler to replace the fields of a task
pub async fn update_task(
    store: web::Data<dyn TaskStore>,
    validator: web::Data<Validator>,
    path: web::Path<String>,
    payload: web::Json<UpdateTaskPayload>,
) -> HttpResponse {
    let task_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to update task {}", task_id);

    let task = match validator.validate(payload.into_inner()) {
        Ok(task) => task,
        Err(e) => {
            info!("Rejected task payload: {}", e);
            return write_error(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match store.update_task(task_id, task).await {
        Ok(()) => write_message(StatusCode::OK, "Updated successfully"),
        Err(e) => {
            error!("Failed to update task {}: {}", task_id, e);
            write_store_error(&e)
        }
    }
}

// Handler to delete a task
pub async fn delete_task(
    store: web::Data<dyn TaskStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let task_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to delete task {}", task_id);

    match store.delete_task(task_id).await {
        Ok(()) => write_message(StatusCode::OK, "Deleted successfully"),
        Err(e) => {
            error!("Failed to delete task {}: {}", task_id, e);
            write_store_error(&e)
        }
    }
}

// Handler to search tasks by title, status, priority, assignee or project
pub async fn search_tasks(
    store: web::Data<dyn TaskStore>,
    query: web::Query<TaskSearchQuery>,
) -> HttpResponse {
    let (query_type, value) = match query.discriminator() {
        Some(found) => found,
        None => return write_error(StatusCode::BAD_REQUEST, "invalid query parameters"),
    };
    info!("Received request to search tasks by {}: {}", query_type, value);

    match store.get_tasks_by_query(query_type, value).await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(e) => {
            error!("Failed to search tasks by {}: {}", query_type, e);
            write_store_error(&e)
        }
    }
}
