// storefront_core/src/cart/sessions.rs

use crate::cart::Cart;
use crate::flow::ContextData;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Identifies one visitor's cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
  pub fn generate() -> Self {
    SessionId(Uuid::new_v4())
  }

  pub fn as_uuid(&self) -> &Uuid {
    &self.0
  }
}

impl From<Uuid> for SessionId {
  fn from(id: Uuid) -> Self {
    SessionId(id)
  }
}

impl FromStr for SessionId {
  type Err = uuid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s.trim()).map(SessionId)
  }
}

impl fmt::Display for SessionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// One cart per session. Handles are shared: every request of a session
/// locks the same `Cart`, and no session can reach another's.
#[derive(Debug, Default)]
pub struct CartSessions {
  carts: RwLock<HashMap<SessionId, ContextData<Cart>>>,
}

impl CartSessions {
  pub fn new() -> Self {
    Self::default()
  }

  /// The session's cart, created empty on first use.
  pub fn cart(&self, session: SessionId) -> ContextData<Cart> {
    if let Some(existing) = self.carts.read().get(&session) {
      return existing.clone();
    }
    let mut carts = self.carts.write();
    carts
      .entry(session)
      .or_insert_with(|| {
        debug!(%session, "Opening cart for new session.");
        ContextData::new(Cart::new())
      })
      .clone()
  }

  /// The session's cart if it already has one.
  pub fn existing(&self, session: SessionId) -> Option<ContextData<Cart>> {
    self.carts.read().get(&session).cloned()
  }

  /// Drops the session's cart entirely.
  pub fn discard(&self, session: SessionId) -> bool {
    self.carts.write().remove(&session).is_some()
  }

  pub fn len(&self) -> usize {
    self.carts.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.carts.read().is_empty()
  }
}
