use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::Order;
use crate::domain::status::OrderStatus;
use crate::errors::AppError;
use crate::infrastructure::order_ledger::DieselOrderLedger;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    /// Public order code handed to the customer, e.g. "ORD-12"
    pub code: String,
    pub customer_name: String,
    pub contact: String,
    pub note: Option<String>,
    /// Decimal total as a string to avoid floating-point issues, e.g. "16.00"
    pub total: String,
    pub status: OrderStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse {
            id: o.id,
            code: o.code,
            customer_name: o.customer_name,
            contact: o.contact,
            note: o.note,
            total: o.total.to_string(),
            status: o.status,
            created_at: o.created_at.to_rfc3339(),
            updated_at: o.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    pub items: Vec<OrderResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateStatusResponse {
    pub id: i64,
    pub status: OrderStatus,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// All orders, newest first. Backs the staff dashboard.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders, newest first", body = ListOrdersResponse),
        (status = 503, description = "Storage unavailable"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<OrderService<DieselOrderLedger>>,
) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ListOrdersResponse {
        items: orders.into_iter().map(OrderResponse::from).collect(),
    }))
}

/// GET /orders/{code}
///
/// Status poll by public order code. Deliberately unauthenticated: the code
/// itself is the customer's handle on the order.
#[utoipa::path(
    get,
    path = "/orders/{code}",
    params(
        ("code" = String, Path, description = "Public order code, e.g. ORD-12"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Unknown order code"),
        (status = 503, description = "Storage unavailable"),
    ),
    tag = "orders"
)]
pub async fn get_order_by_code(
    service: web::Data<OrderService<DieselOrderLedger>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();

    let order = web::block(move || service.find_by_code(&code))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// POST /orders/{id}/status
///
/// Advances an order one lifecycle step. Anything other than the immediate
/// successor of the current status is refused with 409 and the status is
/// left untouched.
#[utoipa::path(
    post,
    path = "/orders/{id}/status",
    params(
        ("id" = i64, Path, description = "Internal order id"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status advanced", body = UpdateStatusResponse),
        (status = 404, description = "Unknown order id"),
        (status = 409, description = "Illegal status transition"),
        (status = 503, description = "Storage unavailable"),
    ),
    tag = "orders"
)]
pub async fn update_status(
    service: web::Data<OrderService<DieselOrderLedger>>,
    path: web::Path<i64>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let requested = body.into_inner().status;

    web::block(move || service.advance_status(order_id, requested))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(UpdateStatusResponse {
        id: order_id,
        status: requested,
    }))
}
