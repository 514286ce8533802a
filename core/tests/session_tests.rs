// tests/session_tests.rs
mod common;

use common::*;
use std::sync::Arc;
use storefront_core::{CartSessions, SessionId};

#[test]
fn test_sessions_do_not_share_carts() {
  let store = sample_store();
  let sessions = CartSessions::new();
  let alice = SessionId::generate();
  let bob = SessionId::generate();

  sessions.cart(alice).write().add(&store, 1, 2).unwrap();
  sessions.cart(bob).write().add(&store, 10, 1).unwrap();

  assert_eq!(sessions.len(), 2);
  assert_eq!(sessions.cart(alice).read().item_count(), 2);
  assert!(sessions.cart(bob).read().line(1).is_none());
}

#[test]
fn test_same_session_gets_same_cart() {
  let sessions = CartSessions::new();
  let id = SessionId::generate();
  let first = sessions.cart(id);
  let second = sessions.cart(id);
  assert!(first.ptr_eq(&second));
  assert_eq!(sessions.len(), 1);
}

#[test]
fn test_existing_does_not_create() {
  let sessions = CartSessions::new();
  let id = SessionId::generate();
  assert!(sessions.existing(id).is_none());
  assert!(sessions.is_empty());
  sessions.cart(id);
  assert!(sessions.existing(id).is_some());
  assert!(sessions.discard(id));
  assert!(!sessions.discard(id));
}

#[test]
fn test_session_id_parses_uuid_text() {
  let id = SessionId::generate();
  let parsed: SessionId = format!(" {id} ").parse().unwrap();
  assert_eq!(parsed, id);
  assert!("not-a-session".parse::<SessionId>().is_err());
}

#[test]
fn test_concurrent_adds_in_one_session_all_land() {
  let store = Arc::new(sample_store());
  let sessions = Arc::new(CartSessions::new());
  let id = SessionId::generate();

  let workers: Vec<_> = (0..8)
    .map(|_| {
      let store = Arc::clone(&store);
      let sessions = Arc::clone(&sessions);
      std::thread::spawn(move || {
        for _ in 0..50 {
          sessions.cart(id).write().add(&store, 2, 1).unwrap();
        }
      })
    })
    .collect();
  for worker in workers {
    worker.join().unwrap();
  }

  assert_eq!(sessions.cart(id).read().line(2).map(|l| l.quantity), Some(400));
}
