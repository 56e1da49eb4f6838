// src/routes.rs

pub mod routes;

pub mod users {
    pub mod users_handlers;
    pub mod users_models;
}

pub mod tasks {
    pub mod tasks_handlers;
    pub mod tasks_models;
}

pub mod projects {
    pub mod projects_handlers;
    pub mod projects_models;
}

#[cfg(test)]
mod api_tests;
