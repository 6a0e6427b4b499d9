mod cors;

use axum::Router;
use axum::routing::{get, post};
use roster_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState, frontend_url: Option<&str>) -> Result<Router, AppError> {
    let employee_routes = Router::new()
        .route(
            "/employee",
            post(handlers::employees::create_employee_handler),
        )
        .route(
            "/employee/{employee_id}",
            get(handlers::employees::get_employee_handler)
                .put(handlers::employees::update_employee_handler),
        )
        .route(
            "/employee/{employee_id}/reporting-structure",
            get(handlers::employees::reporting_structure_handler),
        );

    let compensation_routes = Router::new()
        .route(
            "/employee/{employee_id}/compensation",
            get(handlers::compensation::get_compensation_handler)
                .post(handlers::compensation::append_compensation_handler),
        )
        .route(
            "/employee/{employee_id}/compensation/history",
            get(handlers::compensation::compensation_history_handler),
        );

    let router = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(employee_routes)
        .merge(compensation_routes)
        .layer(TraceLayer::new_for_http());

    let router = match frontend_url {
        Some(frontend_url) => router.layer(cors::build_cors_layer(frontend_url)?),
        None => router,
    };

    Ok(router.with_state(app_state))
}
