// storefront/src/web/session.rs

//! Resolves which cart a request belongs to.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{dev::Payload, FromRequest, HttpRequest, HttpResponse, HttpResponseBuilder};
use futures_util::future::{ready, Ready};
use storefront_core::SessionId;
use tracing::debug;

use crate::errors::AppError;

pub const SESSION_HEADER: &str = "X-Session-ID";
pub const SESSION_COOKIE: &str = "storefront_session";

/// The visitor's session, taken from the `X-Session-ID` header or the
/// `storefront_session` cookie. A request carrying neither (or a malformed
/// id) starts a new session.
#[derive(Debug, Clone, Copy)]
pub struct CartSession {
  pub id: SessionId,
  pub is_new: bool,
}

impl CartSession {
  /// A 200 response builder that hands the session id back to the client:
  /// always as a header, and as a cookie when the session was just opened.
  pub fn respond(&self) -> HttpResponseBuilder {
    let mut builder = HttpResponse::Ok();
    builder.insert_header((SESSION_HEADER, self.id.to_string()));
    if self.is_new {
      builder.cookie(
        Cookie::build(SESSION_COOKIE, self.id.to_string())
          .path("/")
          .http_only(true)
          .same_site(SameSite::Lax)
          .finish(),
      );
    }
    builder
  }
}

impl FromRequest for CartSession {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let from_header = req
      .headers()
      .get(SESSION_HEADER)
      .and_then(|value| value.to_str().ok())
      .and_then(|raw| raw.parse::<SessionId>().ok());
    let from_cookie = || {
      req
        .cookie(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok())
    };

    let session = match from_header.or_else(from_cookie) {
      Some(id) => CartSession { id, is_new: false },
      None => {
        let id = SessionId::generate();
        debug!(session_id = %id, "No usable session id on request, opening a new session.");
        CartSession { id, is_new: true }
      }
    };
    ready(Ok(session))
  }
}
