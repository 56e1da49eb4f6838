use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};
use log::{error, info};

use super::users_models::{CreateUserPayload, UpdateUserPayload, UserSearchQuery};
use crate::routes::routes::API_PREFIX;
use crate::store::UserStore;
use crate::utils::{
    parse_id, store_error_status, write_error, write_message, write_store_error, MessageResponse,
    Validator,
};

// Handler to list every user
pub async fn list_users(store: web::Data<dyn UserStore>) -> HttpResponse {
    info!("Received request to list users");

    match store.list_users().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            error!("Failed to list users: {}", e);
            write_store_error(&e)
        }
    }
}

// Handler to register a user
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    validator: web::Data<Validator>,
    payload: web::Json<CreateUserPayload>,
) -> HttpResponse {
    info!("Received request to create user: {}", payload.email);

    let user = match validator.validate(payload.into_inner()) {
        Ok(user) => user,
        Err(e) => {
            info!("Rejected user payload: {}", e);
            return write_error(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match store.create_user(user).await {
        Ok(user_id) => {
            info!("User {} created", user_id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, format!("{}/users/{}", API_PREFIX, user_id)))
                .json(MessageResponse {
                    msg: "Created successfully".into(),
                })
        }
        Err(e) => {
            error!("Failed to create user: {}", e);
            write_store_error(&e)
        }
    }
}

// Handler to get a user by id
pub async fn get_user_by_id(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let user_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to get user {}", user_id);

    match store.get_user_by_id(user_id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            info!("Failed to get user {}: {}", user_id, e);
            write_error(
                store_error_status(&e),
                format!("failed to get user by id: {}", e),
            )
        }
    }
}

// Handler to update name and role of a user
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    validator: web::Data<Validator>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserPayload>,
) -> HttpResponse {
    let user_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to update user {}", user_id);

    let changes = match validator.validate(payload.into_inner()) {
        Ok(changes) => changes,
        Err(e) => return write_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match store.update_user(user_id, changes).await {
        Ok(()) => write_message(StatusCode::OK, "Updated successfully"),
        Err(e) => {
            error!("Failed to update user {}: {}", user_id, e);
            write_store_error(&e)
        }
    }
}

// Handler to delete a user
pub async fn delete_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let user_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to delete user {}", user_id);

    match store.delete_user(user_id).await {
        Ok(()) => write_message(StatusCode::OK, "Deleted successfully"),
        Err(e) => {
            error!("Failed to delete user {}: {}", user_id, e);
            write_store_error(&e)
        }
    }
}

// Handler to list the tasks assigned to a user
pub async fn get_user_tasks(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let user_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!("Received request to list tasks of user {}", user_id);

    if let Err(e) = store.get_user_by_id(user_id).await {
        info!("Failed to get user {}: {}", user_id, e);
        return write_error(
            store_error_status(&e),
            format!("failed to get user by id: {}", e),
        );
    }

    match store.get_user_tasks(user_id).await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(e) => {
            error!("Failed to fetch tasks for user {}: {}", user_id, e);
            write_store_error(&e)
        }
    }
}

// Handler to search users by name or email
pub async fn search_users(
    store: web::Data<dyn UserStore>,
    query: web::Query<UserSearchQuery>,
) -> HttpResponse {
    let (query_type, value) = match query.discriminator() {
        Some(found) => found,
        None => {
            return write_error(
                StatusCode::BAD_REQUEST,
                "either name or email query parameter is required",
            )
        }
    };
    info!("Received request to search users by {}: {}", query_type, value);

    match store.get_users_by_query(query_type, value).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            error!("Failed to search users by {}: {}", query_type, e);
            write_store_error(&e)
        }
    }
}
