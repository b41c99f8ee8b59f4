/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is the process-wide data-access handle, passed
/// explicitly into every repository call.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: escola_db::DbPool,
}
