use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::order::Order;
use crate::domain::product::Product;
use crate::schema::{order_lines, orders, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub code: String,
    pub customer_name: String,
    pub contact: String,
    pub note: Option<String>,
    pub total: BigDecimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub code: String,
    pub customer_name: String,
    pub contact: String,
    pub note: Option<String>,
    pub total: BigDecimal,
    pub status: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_lines)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderLineRow {
    pub id: i64,
    pub order_id: i64,
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_lines)]
pub struct NewOrderLineRow {
    pub order_id: i64,
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: String,
    pub image: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            unit_price: row.price,
            category: row.category,
            image: row.image,
        }
    }
}

impl OrderRow {
    /// Rehydrates the domain order. The stored status string must be one the
    /// state machine knows.
    pub fn into_order(self) -> Result<Order, crate::domain::status::UnknownStatus> {
        let status = self.status.parse()?;
        Ok(Order {
            id: self.id,
            code: self.code,
            customer_name: self.customer_name,
            contact: self.contact,
            note: self.note,
            total: self.total,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
