//! HTTP handlers and route configuration.

mod auth;
mod health;
mod workouts;


use actix_web::{HttpRequest, HttpResponse, web};
use tracker_shared::ErrorResponse;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Public routes
        .route("/", web::get().to(health::welcome))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                // Auth routes
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(auth::signup))
                        .route("/login", web::post().to(auth::login))
                        .route("/user", web::get().to(auth::current_user)),
                )
                // Protected workout routes
                .service(
                    web::scope("/workouts")
                        .route("", web::get().to(workouts::list))
                        .route("", web::post().to(workouts::create))
                        .route("/{id}", web::put().to(workouts::update))
                        .route("/{id}", web::delete().to(workouts::delete)),
                ),
        )
        .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    let body = ErrorResponse::not_found(format!("Route {} {} not found", req.method(), req.path()))
        .with_instance(req.path());
    HttpResponse::NotFound().json(body)
}
