//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    }))
    .route("/health", web::get().to(health::health_check))
    .route("/", web::get().to(posts::list))
    .service(
        web::scope("/blog")
            .route("", web::get().to(posts::list))
            .service(
                web::resource(["/new", "/newpost"])
                    .route(web::get().to(posts::new_form))
                    .route(web::post().to(posts::create)),
            )
            .route(r"/{id:\d+}", web::get().to(posts::view)),
    );
}
