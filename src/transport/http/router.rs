use crate::domain::movie::Movie;
use crate::domain::page::MoviePage;
use crate::domain::stats::Stats;
use crate::transport::http::cors::with_cors;
use crate::transport::http::handlers::{common, health, movies, stats};
use crate::transport::http::types::{
    AppState, DeleteResponse, ErrorResponse, HealthResponse, MoviePayload,
};
use axum::handler::HandlerWithoutStateExt;
use axum::routing::{get, put};
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        movies::list_movies_handler,
        movies::create_movie_handler,
        movies::update_movie_handler,
        movies::delete_movie_handler,
        stats::stats_handler
    ),
    components(schemas(
        Movie,
        MoviePage,
        MoviePayload,
        Stats,
        DeleteResponse,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

/// Builds the full application: API routes, Swagger UI, and (when
/// `frontend_dir` is given) the static browser client as the fallback.
pub fn create_router(app_state: AppState, frontend_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/movies",
            get(movies::list_movies_handler)
                .post(movies::create_movie_handler)
                .fallback(common::route_not_found_handler),
        )
        .route(
            "/movies/:id",
            put(movies::update_movie_handler)
                .delete(movies::delete_movie_handler)
                .fallback(common::route_not_found_handler),
        )
        .route(
            "/stats",
            get(stats::stats_handler).fallback(common::route_not_found_handler),
        )
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let router = match frontend_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(common::route_not_found_handler.into_service()),
        ),
        None => router.fallback(common::route_not_found_handler),
    };

    with_cors(router).layer(TraceLayer::new_for_http())
}
