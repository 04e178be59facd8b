/// API route modules
pub mod docs;
pub mod health;
pub mod usuario;

pub use docs::ApiDoc;

use crate::{config::DocsSettings, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router
///
/// Documentation routes are mounted only when `docs.enabled` is set.
pub fn create_router(app_state: AppState, docs: &DocsSettings) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health))
        .route("/usuario", post(usuario::create_user))
        .route("/usuario/:id", get(usuario::get_user))
        .with_state(app_state);

    if docs.enabled {
        router = router.merge(
            SwaggerUi::new(docs.path.clone())
                .url(docs.openapi_path.clone(), docs::openapi(&docs.server_url)),
        );
    }

    router
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
}
