use crate::di::DependenciesInject;
use shared::config::ConnectionPool;

#[derive(Debug, Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(db: ConnectionPool) -> Self {
        let di_container = DependenciesInject::new(db);

        Self { di_container }
    }
}
