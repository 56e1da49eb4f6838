use actix_web::{middleware::Logger, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use pm_service::config::Config;
use pm_service::db;
use pm_service::routes::routes::api_configure;
use pm_service::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match db::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Db init error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::ping(&pool).await {
        error!("Db connection error: {}", e);
        std::process::exit(1);
    }
    info!("Db connected successfully!");

    let state = AppState::new(pool);
    let server_address = config.server_address();
    info!("Server running at http://{}", server_address);

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| api_configure(cfg, &state))
    })
    .bind(server_address)?
    .run()
    .await
}
