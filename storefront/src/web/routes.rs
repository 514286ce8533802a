// storefront/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{cart_handlers, checkout_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Registers every storefront route. Called from `main.rs` and from tests.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    // Catalog
    .route("/", web::get().to(product_handlers::list_products_handler))
    .route("/search", web::get().to(product_handlers::search_products_handler))
    .route("/product/{product_id}", web::get().to(product_handlers::get_product_handler))
    // Cart
    .route("/add_to_cart/{product_id}", web::post().to(cart_handlers::add_to_cart_handler))
    .route("/cart", web::get().to(cart_handlers::view_cart_handler))
    .route("/update_cart/{product_id}", web::post().to(cart_handlers::update_cart_handler))
    .route(
      "/remove_from_cart/{product_id}",
      web::post().to(cart_handlers::remove_from_cart_handler),
    )
    // Checkout
    .route("/checkout", web::get().to(checkout_handlers::checkout_summary_handler))
    .route("/process_order", web::post().to(checkout_handlers::process_order_handler));
}
