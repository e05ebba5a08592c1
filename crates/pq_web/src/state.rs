use std::sync::Arc;
use pq_state::AppCoordinator;

pub struct WebState {
    pub coordinator: Arc<AppCoordinator>,
}
