// src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the API tests) to configure services for the
// Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/auth").route("/me", web::get().to(crate::web::handlers::user_handlers::me_handler)),
      )
      .route(
        "/library",
        web::get().to(crate::web::handlers::library_handlers::get_library_handler),
      )
      .service(
        web::scope("/books")
          .route(
            "",
            web::post().to(crate::web::handlers::book_handlers::create_book_handler),
          )
          .route(
            "/{book_id}",
            web::get().to(crate::web::handlers::book_handlers::get_book_handler),
          )
          .route(
            "/{book_id}",
            web::put().to(crate::web::handlers::book_handlers::update_book_handler),
          )
          .route(
            "/{book_id}",
            web::delete().to(crate::web::handlers::book_handlers::delete_book_handler),
          )
          .route(
            "/{book_id}/access",
            web::get().to(crate::web::handlers::access_handlers::book_access_handler),
          )
          .route(
            "/{book_id}/reader",
            web::get().to(crate::web::handlers::reader_handlers::open_reader_handler),
          ),
      ),
  );
}
