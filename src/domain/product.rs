use bigdecimal::BigDecimal;

/// A menu product as loaded from the catalog.
///
/// Immutable once loaded; the cart holds a copy of the product taken at the
/// moment it was added, so order lines snapshot the price the customer saw.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unit_price: BigDecimal,
    pub category: String,
    pub image: Option<String>,
}
