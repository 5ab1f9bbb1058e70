use crate::domain::cart::Cart;
use crate::domain::errors::LedgerError;
use crate::domain::order::{CustomerDetails, Order};
use crate::domain::ports::OrderLedger;
use crate::domain::status::OrderStatus;

/// Thin façade the handlers talk to; all order semantics live behind the
/// [`OrderLedger`] port.
pub struct OrderService<L> {
    ledger: L,
}

impl<L: OrderLedger> OrderService<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    pub fn checkout(
        &self,
        cart: &mut Cart,
        details: CustomerDetails,
    ) -> Result<Order, LedgerError> {
        self.ledger.commit_cart(cart, details)
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, LedgerError> {
        self.ledger.list_orders()
    }

    pub fn find_by_code(&self, code: &str) -> Result<Order, LedgerError> {
        self.ledger.find_by_code(code)
    }

    pub fn advance_status(
        &self,
        order_id: i64,
        requested: OrderStatus,
    ) -> Result<(), LedgerError> {
        self.ledger.update_status(order_id, requested)
    }
}
