#[cfg(test)]
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::env;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use env_logger;

mod routes;
mod tests;

use crate::routes::routes;
use db;
use errors::ErrorResponse;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();

    info!("polls server listening on 0.0.0.0:8080");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&env::var("CLIENT_HOST").unwrap())
            .allow_any_method()
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .data(pool.clone())
            .configure(routes)
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
            }))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
