use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::cart_sessions::CartSessions;
use crate::application::order_service::OrderService;
use crate::domain::cart::Cart;
use crate::domain::order::CustomerDetails;
use crate::domain::ports::ProductCatalog;
use crate::errors::AppError;
use crate::infrastructure::catalog::DieselProductCatalog;
use crate::infrastructure::order_ledger::DieselOrderLedger;

use super::orders::OrderResponse;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OpenCartResponse {
    pub session_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub product_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub contact: String,
    pub note: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineResponse {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "6.50"
    pub unit_price: String,
    pub subtotal: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub total: String,
}

impl CartResponse {
    fn from_cart(cart: &Cart) -> Self {
        CartResponse {
            lines: cart
                .lines()
                .iter()
                .map(|l| CartLineResponse {
                    product_id: l.product.id.clone(),
                    name: l.product.name.clone(),
                    quantity: l.quantity,
                    unit_price: l.product.unit_price.to_string(),
                    subtotal: l.subtotal().to_string(),
                })
                .collect(),
            total: cart.total().to_string(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /cart
///
/// Opens a fresh ordering session with an empty cart.
#[utoipa::path(
    post,
    path = "/cart",
    responses(
        (status = 201, description = "Session opened", body = OpenCartResponse),
    ),
    tag = "cart"
)]
pub async fn open_cart(sessions: web::Data<CartSessions>) -> HttpResponse {
    let session_id = sessions.open();
    HttpResponse::Created().json(OpenCartResponse { session_id })
}

/// GET /cart/{session_id}
///
/// Current lines and the recomputed total for the session's cart.
#[utoipa::path(
    get,
    path = "/cart/{session_id}",
    params(
        ("session_id" = String, Path, description = "Cart session token"),
    ),
    responses(
        (status = 200, description = "Cart contents", body = CartResponse),
        (status = 404, description = "Unknown session"),
    ),
    tag = "cart"
)]
pub async fn get_cart(
    sessions: web::Data<CartSessions>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let cart = sessions.get(&path.into_inner()).ok_or(AppError::NotFound)?;
    let cart = cart.lock().expect("cart poisoned");
    Ok(HttpResponse::Ok().json(CartResponse::from_cart(&cart)))
}

/// POST /cart/{session_id}/items
///
/// Adds one unit of a menu product to the cart, resolving the product
/// against the catalog first.
#[utoipa::path(
    post,
    path = "/cart/{session_id}/items",
    params(
        ("session_id" = String, Path, description = "Cart session token"),
    ),
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 404, description = "Unknown session or product"),
        (status = 503, description = "Storage unavailable"),
    ),
    tag = "cart"
)]
pub async fn add_item(
    sessions: web::Data<CartSessions>,
    catalog: web::Data<DieselProductCatalog>,
    path: web::Path<String>,
    body: web::Json<AddItemRequest>,
) -> Result<HttpResponse, AppError> {
    let cart = sessions.get(&path.into_inner()).ok_or(AppError::NotFound)?;
    let product_id = body.into_inner().product_id;

    let response = web::block(move || {
        let product = catalog.find_by_id(&product_id)?.ok_or(AppError::NotFound)?;
        let mut cart = cart.lock().expect("cart poisoned");
        cart.add(product);
        Ok::<_, AppError>(CartResponse::from_cart(&cart))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(response))
}

/// POST /cart/{session_id}/items/{product_id}/decrement
///
/// Removes one unit of the product; the line disappears at quantity 0.
/// Unknown product ids are a no-op, mirroring the cart semantics.
#[utoipa::path(
    post,
    path = "/cart/{session_id}/items/{product_id}/decrement",
    params(
        ("session_id" = String, Path, description = "Cart session token"),
        ("product_id" = String, Path, description = "Menu product id"),
    ),
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 404, description = "Unknown session"),
    ),
    tag = "cart"
)]
pub async fn decrement_item(
    sessions: web::Data<CartSessions>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (session_id, product_id) = path.into_inner();
    let cart = sessions.get(&session_id).ok_or(AppError::NotFound)?;

    let mut cart = cart.lock().expect("cart poisoned");
    cart.decrement(&product_id);
    Ok(HttpResponse::Ok().json(CartResponse::from_cart(&cart)))
}

/// POST /cart/{session_id}/checkout
///
/// Commits the cart into a persisted order. The commit is atomic; on
/// failure the cart keeps its lines so the customer can retry.
#[utoipa::path(
    post,
    path = "/cart/{session_id}/checkout",
    params(
        ("session_id" = String, Path, description = "Cart session token"),
    ),
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Order committed", body = OrderResponse),
        (status = 400, description = "Missing customer name or contact"),
        (status = 404, description = "Unknown session"),
        (status = 500, description = "Commit failed, cart untouched"),
        (status = 503, description = "Storage unavailable"),
    ),
    tag = "cart"
)]
pub async fn checkout(
    sessions: web::Data<CartSessions>,
    service: web::Data<OrderService<DieselOrderLedger>>,
    path: web::Path<String>,
    body: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    let cart = sessions.get(&path.into_inner()).ok_or(AppError::NotFound)?;
    let body = body.into_inner();

    let customer_name = body.customer_name.trim().to_string();
    if customer_name.is_empty() {
        return Err(AppError::BadRequest("customer_name must not be empty".to_string()));
    }
    let contact = body.contact.trim().to_string();
    if contact.is_empty() {
        return Err(AppError::BadRequest("contact must not be empty".to_string()));
    }

    let details = CustomerDetails {
        customer_name,
        contact,
        note: body.note.filter(|n| !n.trim().is_empty()),
    };

    let order = web::block(move || {
        let mut cart = cart.lock().expect("cart poisoned");
        service.checkout(&mut cart, details)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!("committed order {} for {}", order.code, order.customer_name);

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}
