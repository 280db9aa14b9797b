use std::future::Future;
use std::time::Duration;

use sea_orm::DbErr;

/// Bounds a storage call so a stalled connection cannot hold a request open.
pub async fn with_timeout<T, F>(limit: Duration, fut: F) -> Result<T, DbErr>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(DbErr::Custom(format!(
            "query timed out after {}ms",
            limit.as_millis()
        ))),
    }
}
