use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::status::OrderStatus;

/// Prefix of the public order code handed to the customer.
///
/// The full code is `ORD-{id}` with the storage-assigned numeric id; the
/// format is an external contract and must not change.
pub const ORDER_CODE_PREFIX: &str = "ORD";

pub fn order_code(id: i64) -> String {
    format!("{ORDER_CODE_PREFIX}-{id}")
}

/// A committed order as returned by the ledger.
///
/// `total` is the amount snapshotted at commit time and is never recomputed
/// from current catalog prices. Instances are independent copies of the
/// stored row; mutating one does not affect storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub code: String,
    pub customer_name: String,
    pub contact: String,
    pub note: Option<String>,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Customer fields collected at checkout.
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub customer_name: String,
    pub contact: String,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_code_is_prefix_dash_id() {
        assert_eq!(order_code(12), "ORD-12");
        assert_eq!(order_code(1), "ORD-1");
        assert_eq!(order_code(40021), "ORD-40021");
    }
}
