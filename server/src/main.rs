#[macro_use]
extern crate log;

use std::io;

use actix_cors::Cors;
use actix_web::{
    http,
    middleware::{Condition, Logger},
    web, App, HttpServer,
};
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod routes;
#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::routes::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    let pool = db::new_pool(&config.database_url).map_err(|err| {
        error!("Failed to open database {} - {}", config.database_url, err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;

    info!(
        "Server running on {}:{} using {}",
        config.host, config.port, config.database_url
    );

    let client_host = config.client_host.clone();
    HttpServer::new(move || {
        let cors = match &client_host {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
                .max_age(3600),
            None => Cors::default(),
        };

        App::new()
            .wrap(Condition::new(client_host.is_some(), cors))
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
