use hearth_dns_infrastructure::directory::InMemoryDirectory;
use hearth_dns_infrastructure::repositories::SqliteDirectoryRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub directory: Arc<InMemoryDirectory>,
    pub directory_repo: Arc<SqliteDirectoryRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            directory: Arc::new(InMemoryDirectory::new()),
            directory_repo: Arc::new(SqliteDirectoryRepository::new(pool)),
        }
    }
}
