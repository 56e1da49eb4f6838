use std::env;
use std::process;

use env_logger::Env;
use log::{error, info};

use pm_service::config::Config;
use pm_service::db;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Reads `<up|down>` from the arguments after the program name. Anything else,
/// including extra arguments, is a usage error.
fn parse_direction(mut args: impl Iterator<Item = String>) -> Option<Direction> {
    let direction = match args.next()?.as_str() {
        "up" => Direction::Up,
        "down" => Direction::Down,
        _ => return None,
    };
    match args.next() {
        Some(_) => None,
        None => Some(direction),
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let direction = match parse_direction(env::args().skip(1)) {
        Some(direction) => direction,
        None => {
            eprintln!("usage: migrate <up|down>");
            process::exit(2);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let pool = match db::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Db init error: {}", e);
            process::exit(1);
        }
    };

    let result = match direction {
        Direction::Up => db::migrate_up(&pool).await,
        Direction::Down => db::migrate_down(&pool).await,
    };

    match result {
        Ok(()) => info!("Migrations {:?} applied", direction),
        Err(e) => {
            error!("Migration err: {}", e);
            process::exit(1);
        }
    }
}
