use axum::extract::FromRef;
use deadpool_sqlite::Pool;

use crate::warmups::WarmUpClient;

#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: Pool,
    pub warm_ups: WarmUpClient,
}

impl FromRef<AppState> for Pool {
    fn from_ref(state: &AppState) -> Self {
        // pool uses an Arc internally so clone is cheap
        state.pool.clone()
    }
}

impl FromRef<AppState> for WarmUpClient {
    fn from_ref(state: &AppState) -> Self {
        state.warm_ups.clone()
    }
}
