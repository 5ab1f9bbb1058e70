use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::ProductCatalog;
use crate::domain::product::Product;
use crate::errors::AppError;
use crate::infrastructure::catalog::DieselProductCatalog;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "6.50"
    pub unit_price: String,
    pub category: String,
    pub image: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            name: p.name,
            description: p.description,
            unit_price: p.unit_price.to_string(),
            category: p.category,
            image: p.image,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuResponse {
    pub items: Vec<ProductResponse>,
}

/// GET /menu
///
/// The full product menu, ordered by category and name.
#[utoipa::path(
    get,
    path = "/menu",
    responses(
        (status = 200, description = "Product menu", body = MenuResponse),
        (status = 503, description = "Storage unavailable"),
    ),
    tag = "menu"
)]
pub async fn get_menu(
    catalog: web::Data<DieselProductCatalog>,
) -> Result<HttpResponse, AppError> {
    let products = web::block(move || catalog.all_products())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(MenuResponse {
        items: products.into_iter().map(ProductResponse::from).collect(),
    }))
}
