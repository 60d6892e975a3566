use std::sync::Arc;

use axum::Router;
use time::OffsetDateTime;

use dendash_server::configs::schema::SchemaManager;
use dendash_server::configs::settings::{Auth, Database};
use dendash_server::configs::storage::Storage;
use dendash_server::handles::{AuthState, DataState, auth_router, data_router};
use dendash_server::middlewares::TokenState;
use dendash_server::repositories::ReadingRepository;
use dendash_server::services::{CredentialService, TokenService};

pub const TEST_PASSWORD: &str = "secret123";
pub const TEST_SECRET: &str = "test";
pub const TEST_EXPIRATION: u64 = 1000;

pub struct MockApp {
    pub router: Router,
    pub storage: Arc<Storage>,
    pub token_service: Arc<TokenService>,
    pub token: String,
}

impl MockApp {
    pub async fn new() -> Self {
        // Unique shared-cache name per test so parallel tests stay isolated
        let url = format!(
            "sqlite:file:{}?mode=memory&cache=shared",
            uuid::Uuid::new_v4()
        );

        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url,
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let credential_service = Arc::new(CredentialService::new(TEST_PASSWORD));
        let token_service = Arc::new(TokenService::new(Auth {
            password: String::from(TEST_PASSWORD),
            secret: Some(String::from(TEST_SECRET)),
            expiration: TEST_EXPIRATION,
        }));
        let reading_repository = Arc::new(ReadingRepository::new(storage.clone()));

        let router = Router::new()
            .merge(auth_router(AuthState {
                credential_service,
                token_service: token_service.clone(),
            }))
            .merge(data_router(
                DataState { reading_repository },
                TokenState {
                    token_service: token_service.clone(),
                },
            ));

        let token = token_service.generate_token().unwrap().token;

        Self {
            router,
            storage,
            token_service,
            token,
        }
    }

    pub async fn seed_reading(&self, timestamp: OffsetDateTime, temperature: f64) {
        sqlx::query(
            r#"
            INSERT INTO readings (timestamp, temperature, humidity, voc_index, voc_raw)
            VALUES ($1, $2, 45.0, 100.0, 30000.0)
            "#,
        )
        .bind(timestamp)
        .bind(temperature)
        .execute(self.storage.get_pool())
        .await
        .unwrap();
    }
}
