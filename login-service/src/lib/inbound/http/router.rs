use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_product::create_product;
use super::handlers::delete_product::delete_product;
use super::handlers::get_product::get_product;
use super::handlers::list_products::list_products;
use super::handlers::login::login;
use super::handlers::update_product::update_product;
use super::middleware::authenticate;
use super::middleware::require_authentication;
use crate::domain::login::ports::AuthenticationPort;
use crate::domain::login::ports::UserDirectory;
use crate::domain::product::ports::ProductServicePort;

/// Application state shared by handlers and the authentication filter.
///
/// Ports are held as trait objects so the same router serves the PostgreSQL
/// adapters in production and in-memory adapters in tests.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthenticationPort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub token_service: Arc<TokenService>,
    pub user_directory: Arc<dyn UserDirectory>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthenticationPort>,
    product_service: Arc<dyn ProductServicePort>,
    token_service: Arc<TokenService>,
    user_directory: Arc<dyn UserDirectory>,
) -> Router {
    let state = AppState {
        auth_service,
        product_service,
        token_service,
        user_directory,
    };

    let public_routes = Router::new().route("/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:product_id",
            get(get_product)
                .put(update_product)
                .delete(delete_product),
        )
        .route_layer(middleware::from_fn(require_authentication));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
