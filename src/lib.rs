pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::cart_sessions::CartSessions;
use application::order_service::OrderService;
use infrastructure::catalog::DieselProductCatalog;
use infrastructure::order_ledger::DieselOrderLedger;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::menu::get_menu,
        handlers::cart::open_cart,
        handlers::cart::get_cart,
        handlers::cart::add_item,
        handlers::cart::decrement_item,
        handlers::cart::checkout,
        handlers::orders::list_orders,
        handlers::orders::get_order_by_code,
        handlers::orders::update_status,
    ),
    tags(
        (name = "menu", description = "Product menu"),
        (name = "cart", description = "Session carts and checkout"),
        (name = "orders", description = "Order tracking and staff operations"),
    )
)]
pub struct ApiDoc;

/// Shared application state: one cart registry, one catalog, one order
/// service, cloned into every worker.
#[derive(Clone)]
pub struct AppState {
    pub sessions: web::Data<CartSessions>,
    pub catalog: web::Data<DieselProductCatalog>,
    pub orders: web::Data<OrderService<DieselOrderLedger>>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        AppState {
            sessions: web::Data::new(CartSessions::new()),
            catalog: web::Data::new(DieselProductCatalog::new(pool.clone())),
            orders: web::Data::new(OrderService::new(DieselOrderLedger::new(pool))),
        }
    }
}

/// Registers all routes and shared state. Used by `build_server` and by the
/// HTTP-level integration tests.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state.sessions)
            .app_data(state.catalog)
            .app_data(state.orders)
            .route("/menu", web::get().to(handlers::menu::get_menu))
            .service(
                web::scope("/cart")
                    .route("", web::post().to(handlers::cart::open_cart))
                    .route("/{session_id}", web::get().to(handlers::cart::get_cart))
                    .route(
                        "/{session_id}/items",
                        web::post().to(handlers::cart::add_item),
                    )
                    .route(
                        "/{session_id}/items/{product_id}/decrement",
                        web::post().to(handlers::cart::decrement_item),
                    )
                    .route(
                        "/{session_id}/checkout",
                        web::post().to(handlers::cart::checkout),
                    ),
            )
            .service(
                web::scope("/orders")
                    .route("", web::get().to(handlers::orders::list_orders))
                    .route("/{code}", web::get().to(handlers::orders::get_order_by_code))
                    .route(
                        "/{id}/status",
                        web::post().to(handlers::orders::update_status),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let state = AppState::new(pool);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure(state.clone()))
    })
    .bind((host.to_string(), port))?
    .run())
}
