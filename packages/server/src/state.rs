use sea_orm::DatabaseConnection;

/// Shared handler state. The connection pool is handed to every handler
/// explicitly through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
