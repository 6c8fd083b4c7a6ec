use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::{
    model::{api::ErrorDto, status::ServerStatusDto},
    server::{
        controller::status::{self, get_status},
        middleware::api_key::require_api_key,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(status::get_status),
    components(schemas(ServerStatusDto, ErrorDto)),
    tags((name = "status", description = "Live game-server status"))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(get_status))
        .route_layer(from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .merge(protected)
        .route("/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
