use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};
use log::{error, info};

use super::projects_models::{CreateProjectPayload, ProjectSearchQuery, UpdateProjectPayload};
use crate::routes::routes::API_PREFIX;
use crate::store::ProjectStore;
use crate::utils::{
    parse_id, store_error_status, write_error, write_message, write_store_error, MessageResponse,
    Validator,
};

// Handler to list every project
pub async fn list_projects(store: web::Data<dyn ProjectStore>) -> HttpResponse {
    info!("Received request to list projects");

    match store.list_projects().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            write_store_error(&e)
        }
    }
}

// Handler to create a project
pub async fn create_project(
    store: web::Data<dyn ProjectStore>,
    validator: web::Data<Validator>,
    payload: web::Json<CreateProjectPayload>,
) -> HttpResponse {
    info!("Received request to create project: {}", payload.title);

    let project = match validator.validate(payload.into_inner()) {
        Ok(project) => project,
        Err(e) => {
            info!("Rejected project payload: {}", e);
            return write_error(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match store.create_project(project).await {
        Ok(project_id) => {
            info!("Project {} created", project_id);
            HttpResponse::Created()
                .insert_header((
                    header::LOCATION,
                    format!("{}/projects/{}", API_PREFIX, project_id),
                ))
                .json(MessageResponse {
                    msg: "Created successfully".into(),
                })
        }
        Err(e) => {
            error!("Failed to create project: {}", e);
            write_store_error(&e)
        }
    }
}

// Handler to search projects by title or manager
pub async fn search_projects(
    store: web::Data<dyn ProjectStore>,
    query: web::Query<ProjectSearchQuery>,
) -> HttpResponse {
    let (query_type, value) = match query.discriminator() {
        Some(found) => found,
        None => return write_error(StatusCode::BAD_REQUEST, "invalid query parameters"),
    };
    info!("Received request to search projects by {}: {}", query_type, value);

    match store.get_projects_by_query(query_type, value).await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => {
            error!("Failed to search projects by {}: {}", query_type, e);
            write_store_error(&e)
        }
    }
}

// Handler to get a project by id
pub async fn get_project_by_id(
    store: web::Data<dyn ProjectStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let project_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to get project {}", project_id);

    match store.get_project_by_id(project_id).await {
        Ok(project) => HttpResponse::Ok().json(project),
        Err(e) => {
            info!("Failed to get project {}: {}", project_id, e);
            write_error(
                store_error_status(&e),
                format!("failed to get project by id: {}", e),
            )
        }
    }
}

// Handler to replace the fields of a project
pub async fn update_project(
    store: web::Data<dyn ProjectStore>,
    validator: web::Data<Validator>,
    path: web::Path<String>,
    payload: web::Json<UpdateProjectPayload>,
) -> HttpResponse {
    let project_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to update project {}", project_id);

    let project = match validator.validate(payload.into_inner()) {
        Ok(project) => project,
        Err(e) => {
            info!("Rejected project payload: {}", e);
            return write_error(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match store.update_project(project_id, project).await {
        Ok(()) => write_message(StatusCode::OK, "Updated successfully"),
        Err(e) => {
            error!("Failed to update project {}: {}", project_id, e);
            write_store_error(&e)
        }
    }
}

// Handler to delete a project
pub async fn delete_project(
    store: web::Data<dyn ProjectStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let project_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to delete project {}", project_id);

    match store.delete_project(project_id).await {
        Ok(()) => write_message(StatusCode::OK, "Deleted successfully"),
        Err(e) => {
            error!("Failed to delete project {}: {}", project_id, e);
            write_store_error(&e)
        }
    }
}

// Handler to list the tasks of a project
pub async fn get_project_tasks(
    store: web::Data<dyn ProjectStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let project_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to list tasks of project {}", project_id);

    if let Err(e) = store.get_project_by_id(project_id).await {
        info!("Failed to get project {}: {}", project_id, e);
        return write_error(
            store_error_status(&e),
            format!("failed to get project by id: {}", e),
        );
    }

    match store.get_project_tasks(project_id).await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(e) => {
            error!("Failed to fetch tasks for project {}: {}", project_id, e);
            write_store_error(&e)
        }
    }
}
