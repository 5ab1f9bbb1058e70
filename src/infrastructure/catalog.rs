use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::LedgerError;
use crate::domain::ports::ProductCatalog;
use crate::domain::product::Product;
use crate::schema::products;

use super::models::ProductRow;

/// Read-only menu lookup. Order pricing never goes back through here: the
/// cart carries the product copy it resolved at add time.
pub struct DieselProductCatalog {
    pool: DbPool,
}

impl DieselProductCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductCatalog for DieselProductCatalog {
    fn all_products(&self) -> Result<Vec<Product>, LedgerError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .select(ProductRow::as_select())
            .order((products::category.asc(), products::name.asc()))
            .load::<ProductRow>(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Product>, LedgerError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .find(id)
            .select(ProductRow::as_select())
            .first::<ProductRow>(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }
}
