use sqlx::SqlitePool;
use uc_db::UserRepository;
use uc_service::UserService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    /// Only used for health probes
    pub pool: SqlitePool,
}

impl AppState {
    /// Wire repository -> service over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        let users = UserService::new(UserRepository::new(pool.clone()));
        Self { users, pool }
    }
}
