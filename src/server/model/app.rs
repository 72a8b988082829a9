use std::sync::Arc;

use crate::server::{
    config::Config,
    service::dashboard::{DashboardState, SqlDashboardService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dashboard: Arc<DashboardState<SqlDashboardService>>,
}

impl AppState {
    /// Creates a new instance of [`AppState`] reading every region configured in `config`
    pub fn new(config: Config) -> Self {
        let dashboard = DashboardState::new(SqlDashboardService::from_config(&config));

        Self {
            config: Arc::new(config),
            dashboard: Arc::new(dashboard),
        }
    }
}
