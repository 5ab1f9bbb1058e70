use super::cart::Cart;
use super::errors::LedgerError;
use super::order::{CustomerDetails, Order};
use super::product::Product;
use super::status::OrderStatus;

/// Persistence-facing component owning commit, query, and status-update
/// operations over orders. Nothing else writes the `orders` or
/// `order_lines` tables.
pub trait OrderLedger: Send + Sync + 'static {
    /// Atomically turns `cart` into a persisted order (header, backfilled
    /// public code, one line per cart line) and clears the cart. On failure
    /// nothing is persisted and the cart is left untouched so the customer
    /// can retry.
    fn commit_cart(&self, cart: &mut Cart, details: CustomerDetails)
        -> Result<Order, LedgerError>;

    /// All orders, newest first.
    fn list_orders(&self) -> Result<Vec<Order>, LedgerError>;

    /// Exact match on the public order code.
    fn find_by_code(&self, code: &str) -> Result<Order, LedgerError>;

    /// Advances an order one step, gated by the state machine. The sole
    /// mutator of order status.
    fn update_status(&self, order_id: i64, requested: OrderStatus) -> Result<(), LedgerError>;
}

/// Read-only product lookup backing the menu and cart handlers.
pub trait ProductCatalog: Send + Sync + 'static {
    fn all_products(&self) -> Result<Vec<Product>, LedgerError>;

    fn find_by_id(&self, id: &str) -> Result<Option<Product>, LedgerError>;
}
