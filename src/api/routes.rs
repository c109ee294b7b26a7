//! API route configuration.

use std::path::Path;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::{delete, get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateNoteRequest, HealthResponse, NoteResponse, UpdateNoteRequest,
};
use super::{AppState, ErrorResponse};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "0.1.0",
        description = "Short text notes with an importance flag",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_notes,
        handlers::get_note,
        handlers::create_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(
        schemas(
            HealthResponse,
            NoteResponse,
            CreateNoteRequest,
            UpdateNoteRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "notes", description = "Note management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation.
///
/// When `static_dir` is given, unmatched paths are looked up as files in
/// that directory before falling through to the unknown-endpoint 404.
pub fn create_router<D: Database + 'static>(
    state: AppState<D>,
    static_dir: Option<&Path>,
) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Note routes (generic over Database)
    let note_routes = routes!(D => {
        get "/api/notes" => handlers::list_notes,
        get "/api/notes/{id}" => handlers::get_note,
        post "/api/notes" => handlers::create_note,
        put "/api/notes/{id}" => handlers::update_note,
        delete "/api/notes/{id}" => handlers::delete_note,
    });

    let router = system_routes
        .merge(note_routes)
        .merge(Scalar::with_url("/docs", api))
        .method_not_allowed_fallback(handlers::unknown_endpoint);

    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(handlers::unknown_endpoint.into_service()),
        ),
        None => router.fallback(handlers::unknown_endpoint),
    };

    router.with_state(state).layer(CorsLayer::permissive())
}
