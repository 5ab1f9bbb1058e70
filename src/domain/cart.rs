use bigdecimal::BigDecimal;

use super::product::Product;

/// One product in the cart together with the quantity selected so far.
///
/// A line with quantity 0 never exists: decrementing past 1 removes the line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal at the product's current unit price.
    pub fn subtotal(&self) -> BigDecimal {
        &self.product.unit_price * BigDecimal::from(self.quantity)
    }
}

/// A customer's in-progress selection, one line per product id.
///
/// The cart is a pure in-memory aggregate; it knows nothing about storage or
/// HTTP. Serialized access for a shared cart is the owner's concern (see
/// `application::cart_sessions`).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`: bumps the existing line's quantity, or
    /// appends a new line with quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            product,
            quantity: 1,
        });
    }

    /// Removes one unit of the product with `product_id`. The line disappears
    /// when its quantity reaches 0. Unknown ids are a no-op.
    pub fn decrement(&mut self, product_id: &str) {
        if let Some(idx) = self.lines.iter().position(|l| l.product.id == product_id) {
            if self.lines[idx].quantity <= 1 {
                self.lines.remove(idx);
            } else {
                self.lines[idx].quantity -= 1;
            }
        }
    }

    /// Cart total, recomputed on every call. Product prices can change in the
    /// catalog while a cart is open, so the total is never cached.
    pub fn total(&self) -> BigDecimal {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .sum::<BigDecimal>()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empties the cart. Idempotent; called by the ledger once a commit has
    /// definitely succeeded.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {id}"),
            description: String::new(),
            unit_price: BigDecimal::from_str(price).expect("valid decimal"),
            category: "Test".to_string(),
            image: None,
        }
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), dec("0"));
    }

    #[test]
    fn add_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add(product("PAN1", "6.50"));
        cart.add(product("PAN1", "6.50"));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), dec("13.00"));
    }

    #[test]
    fn total_sums_across_lines() {
        let mut cart = Cart::new();
        cart.add(product("PAN1", "6.50"));
        cart.add(product("PAN1", "6.50"));
        cart.add(product("BEV2", "3.00"));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total(), dec("16.00"));
    }

    #[test]
    fn decrement_removes_line_at_zero() {
        let mut cart = Cart::new();
        cart.add(product("PAN1", "6.50"));
        cart.decrement("PAN1");

        assert!(cart.is_empty());
        assert_eq!(cart.total(), dec("0"));
    }

    #[test]
    fn add_then_decrement_restores_prior_state() {
        let mut cart = Cart::new();
        cart.add(product("PAN1", "6.50"));
        cart.add(product("BEV1", "1.50"));
        let before = cart.clone();

        cart.add(product("BEV1", "1.50"));
        cart.decrement("BEV1");

        assert_eq!(cart, before);
    }

    #[test]
    fn decrement_unknown_product_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(product("PAN1", "6.50"));
        let before = cart.clone();

        cart.decrement("MISSING");

        assert_eq!(cart, before);
    }

    #[test]
    fn no_line_ever_reaches_quantity_zero() {
        let mut cart = Cart::new();
        cart.add(product("PAN1", "6.50"));
        cart.add(product("PAN1", "6.50"));
        cart.decrement("PAN1");
        cart.decrement("PAN1");
        cart.decrement("PAN1");

        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(product("PAN1", "6.50"));
        cart.clear();
        cart.clear();

        assert!(cart.is_empty());
    }

    #[test]
    fn mixed_sequence_keeps_total_consistent_with_lines() {
        let mut cart = Cart::new();
        cart.add(product("PAN1", "6.50"));
        cart.add(product("BEV2", "3.00"));
        cart.add(product("PAN1", "6.50"));
        cart.decrement("BEV2");
        cart.add(product("CON1", "2.50"));

        let expected: BigDecimal = cart.lines().iter().map(CartLine::subtotal).sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), dec("15.50"));
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }
}
