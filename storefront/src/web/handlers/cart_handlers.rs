// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use storefront_core::{CartSummary, ContextData, FlowOutcome, ProductId};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::pipelines::contexts::AddToCartCtxData;
use crate::state::AppState;
use crate::web::session::CartSession;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form body of the cart mutation routes. `quantity` defaults to 1.
#[derive(Deserialize, Debug, Default)]
pub struct QuantityForm {
  pub quantity: Option<String>,
}

impl QuantityForm {
  /// Parses the request body. An empty body means no form at all; anything
  /// else must be url-encoded form data.
  pub fn from_body(req: &HttpRequest, body: &web::Bytes) -> Result<Option<Self>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
      return Ok(None);
    }
    if !req.content_type().eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
      return Err(AppError::Validation(format!(
        "Expected a {} body, got '{}'.",
        FORM_CONTENT_TYPE,
        req.content_type()
      )));
    }
    let raw = std::str::from_utf8(body)
      .map_err(|_| AppError::Validation("Form body is not valid UTF-8.".to_string()))?;
    web::Query::<QuantityForm>::from_query(raw)
      .map(|form| Some(form.into_inner()))
      .map_err(|e| AppError::Validation(format!("Malformed form body: {}", e)))
  }

  pub fn quantity(form: Option<&QuantityForm>) -> Result<i64, AppError> {
    match form.and_then(|f| f.quantity.as_deref()).map(str::trim) {
      None | Some("") => Ok(1),
      Some(raw) => raw
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Quantity '{}' is not a whole number.", raw))),
    }
  }
}

fn cart_summary(app_state: &AppState, session: &CartSession) -> CartSummary {
  app_state
    .carts
    .existing(session.id)
    .map(|cart| cart.read().summarize(&app_state.catalog))
    .unwrap_or_default()
}

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, path, req, body, session),
  fields(session_id = %session.id, product_id = *path)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  req: HttpRequest,
  body: web::Bytes,
  session: CartSession,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let requested_quantity = QuantityForm::quantity(QuantityForm::from_body(&req, &body)?.as_ref())?;

  let ctx_data = ContextData::new(AddToCartCtxData::new(
    app_state.get_ref().clone(),
    session.id,
    product_id,
    requested_quantity,
  ));

  match app_state.flows.run(ctx_data.clone()).await? {
    FlowOutcome::Completed => {
      let line = ctx_data.read().updated_line.ok_or_else(|| {
        warn!("Add to Cart flow completed but no line was recorded.");
        AppError::Internal("Cart update completed, but the line is unavailable.".to_string())
      })?;
      info!(line_quantity = line.quantity, "Item added to cart.");

      Ok(session.respond().json(json!({
          "message": "Item added to cart.",
          "line": line,
          "cart": cart_summary(&app_state, &session),
      })))
    }
    FlowOutcome::Stopped => {
      warn!("Add to Cart flow was stopped by a handler.");
      Err(AppError::Internal("Adding the item to the cart was halted.".to_string()))
    }
  }
}

#[instrument(name = "handler::view_cart", skip(app_state, session), fields(session_id = %session.id))]
pub async fn view_cart_handler(app_state: web::Data<AppState>, session: CartSession) -> Result<HttpResponse, AppError> {
  let summary = cart_summary(&app_state, &session);
  Ok(session.respond().json(json!({ "cart": summary })))
}

#[instrument(
  name = "handler::update_cart",
  skip(app_state, path, req, body, session),
  fields(session_id = %session.id, product_id = *path)
)]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  req: HttpRequest,
  body: web::Bytes,
  session: CartSession,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let requested = QuantityForm::quantity(QuantityForm::from_body(&req, &body)?.as_ref())?;
  // Zero and below remove the line.
  let quantity = u32::try_from(requested.max(0))
    .map_err(|_| AppError::Validation(format!("Quantity {} is too large.", requested)))?;

  let line = match app_state.carts.existing(session.id) {
    Some(cart) => cart.write().update(product_id, quantity),
    None => None,
  };
  info!(quantity, removed = line.is_none(), "Cart line updated.");

  Ok(session.respond().json(json!({
      "message": "Cart updated.",
      "line": line,
      "cart": cart_summary(&app_state, &session),
  })))
}

#[instrument(
  name = "handler::remove_from_cart",
  skip(app_state, path, session),
  fields(session_id = %session.id, product_id = *path)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<ProductId>,
  session: CartSession,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let removed = app_state
    .carts
    .existing(session.id)
    .and_then(|cart| cart.write().remove(product_id));
  info!(removed = removed.is_some(), "Cart line removed.");

  Ok(session.respond().json(json!({
      "message": "Item removed from cart.",
      "cart": cart_summary(&app_state, &session),
  })))
}
