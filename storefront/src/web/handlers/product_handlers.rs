// storefront/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use storefront_core::{ProductFilter, ProductId};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

/// Raw search parameters. Kept as text so a bad number can be dropped
/// instead of failing the whole request.
#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
  pub category_id: Option<String>,
  pub keyword: Option<String>,
  pub from_price: Option<String>,
  pub to_price: Option<String>,
}

impl SearchQuery {
  pub fn to_filter(&self) -> ProductFilter {
    ProductFilter::from_params(
      self.category_id.as_deref(),
      self.keyword.as_deref(),
      self.from_price.as_deref(),
      self.to_price.as_deref(),
    )
  }
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list(None);
  info!("Listing all {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "products": products,
      "categories": app_state.catalog.categories(),
  })))
}

#[instrument(name = "handler::search_products", skip(app_state, query), fields(query = ?query.0))]
pub async fn search_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
  let filter = query.to_filter();
  let products = app_state.catalog.list(Some(&filter));
  info!(matches = products.len(), "Product search finished.");

  Ok(HttpResponse::Ok().json(json!({
      "products": products,
      "categories": app_state.catalog.categories(),
      "filter": {
          "category_id": filter.category_id,
          "keyword": filter.keyword_value(),
          "from_price": filter.min_price,
          "to_price": filter.max_price,
      },
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = *path))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.catalog.get(product_id) {
    Some(product) => {
      let category = app_state.catalog.category(product.category_id);
      Ok(HttpResponse::Ok().json(json!({
          "product": product,
          "category": category,
      })))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product {} does not exist.", product_id)))
    }
  }
}
