use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::domain::cart::Cart;

/// Registry of per-session carts.
///
/// Each ordering session gets its own cart behind its own mutex, so
/// concurrent customers never share state and concurrent requests for the
/// same session are serialized. Sessions live for the process lifetime;
/// checkout clears the cart but keeps the session usable for a follow-up
/// order.
#[derive(Default)]
pub struct CartSessions {
    carts: Mutex<HashMap<String, Arc<Mutex<Cart>>>>,
}

impl CartSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a fresh session token with an empty cart.
    pub fn open(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.carts
            .lock()
            .expect("cart registry poisoned")
            .insert(token.clone(), Arc::new(Mutex::new(Cart::new())));
        token
    }

    /// The cart for `token`, or `None` for unknown/expired sessions.
    pub fn get(&self, token: &str) -> Option<Arc<Mutex<Cart>>> {
        self.carts
            .lock()
            .expect("cart registry poisoned")
            .get(token)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::domain::product::Product;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            unit_price: BigDecimal::from_str("2.00").expect("valid decimal"),
            category: "Test".to_string(),
            image: None,
        }
    }

    #[test]
    fn open_returns_distinct_tokens_with_empty_carts() {
        let sessions = CartSessions::new();
        let a = sessions.open();
        let b = sessions.open();
        assert_ne!(a, b);

        let cart = sessions.get(&a).expect("session exists");
        assert!(cart.lock().expect("cart poisoned").is_empty());
    }

    #[test]
    fn carts_are_isolated_between_sessions() {
        let sessions = CartSessions::new();
        let a = sessions.open();
        let b = sessions.open();

        sessions
            .get(&a)
            .expect("session exists")
            .lock()
            .expect("cart poisoned")
            .add(product("PAN1"));

        assert!(sessions
            .get(&b)
            .expect("session exists")
            .lock()
            .expect("cart poisoned")
            .is_empty());
    }

    #[test]
    fn unknown_token_yields_none() {
        let sessions = CartSessions::new();
        assert!(sessions.get("nope").is_none());
    }

    #[test]
    fn concurrent_adds_to_one_session_are_not_lost() {
        let sessions = Arc::new(CartSessions::new());
        let token = sessions.open();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sessions = Arc::clone(&sessions);
                let token = token.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        sessions
                            .get(&token)
                            .expect("session exists")
                            .lock()
                            .expect("cart poisoned")
                            .add(product("PAN1"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread panicked");
        }

        let cart = sessions.get(&token).expect("session exists");
        let cart = cart.lock().expect("cart poisoned");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 400);
    }
}
