use async_trait::async_trait;
use hearth_dns_application::ports::DirectoryRepository;
use hearth_dns_domain::{DirectoryEntry, DomainError};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type DirectoryRow = (String, String, Option<i64>, Option<i64>);

pub struct SqliteDirectoryRepository {
    pool: SqlitePool,
}

impl SqliteDirectoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: DirectoryRow) -> DirectoryEntry {
        let (domain, ip, ttl, expires_at) = row;
        DirectoryEntry {
            domain: Arc::from(domain.as_str()),
            ip: Arc::from(ip.as_str()),
            ttl: ttl.and_then(|t| u32::try_from(t).ok()),
            expires_at,
        }
    }
}

#[async_trait]
impl DirectoryRepository for SqliteDirectoryRepository {
    #[instrument(skip(self, entry), fields(domain = %entry.domain))]
    async fn save(&self, entry: &DirectoryEntry) -> Result<(), DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query(
            "INSERT INTO directory_entries (domain, ip, ttl, expires_at, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(domain) DO UPDATE SET
                ip = excluded.ip,
                ttl = excluded.ttl,
                expires_at = excluded.expires_at,
                updated_at = excluded.updated_at",
        )
        .bind(entry.domain.as_ref())
        .bind(entry.ip.as_ref())
        .bind(entry.ttl.map(i64::from))
        .bind(entry.expires_at)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to save directory entry");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, domain: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM directory_entries WHERE domain = ?")
            .bind(domain)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete directory entry");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<DirectoryEntry>, DomainError> {
        let rows = sqlx::query_as::<_, DirectoryRow>(
            "SELECT domain, ip, ttl, expires_at FROM directory_entries ORDER BY domain",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load directory entries");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_entry).collect())
    }

    #[instrument(skip(self))]
    async fn delete_expired(&self, now: i64) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "DELETE FROM directory_entries WHERE expires_at IS NOT NULL AND expires_at <= ?",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to purge expired directory entries");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected())
    }
}
