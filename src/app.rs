use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::{AuthState, DataState, auth_router, data_router};
use crate::middlewares::TokenState;
use crate::repositories::ReadingRepository;
use crate::services::{CredentialService, TokenService};

pub async fn create_app(settings: &Arc<Settings>) -> Router {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default())
            .await
            .unwrap(),
    );

    let credential_service = Arc::new(CredentialService::new(&settings.auth.password));
    let token_service = Arc::new(TokenService::new(settings.auth.clone()));
    let reading_repository = Arc::new(ReadingRepository::new(storage.clone()));

    let token_state = TokenState {
        token_service: token_service.clone(),
    };

    Router::new()
        .merge(auth_router(AuthState {
            credential_service,
            token_service,
        }))
        .merge(data_router(DataState { reading_repository }, token_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
