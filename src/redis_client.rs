use redis::aio::ConnectionManager;
use redis::RedisResult;
use tracing::info;

/// Creates a single `ConnectionManager` that auto-reconnects on failure.
///
/// `ConnectionManager` is cheaply cloneable. The depth source and the sample
/// store each hold a clone, and every clone shares the same multiplexed TCP
/// connection.
pub async fn connect(url: &str) -> RedisResult<ConnectionManager> {
    let client = redis::Client::open(url)?;
    let manager = ConnectionManager::new(client).await?;
    info!(url, "connected to redis");
    Ok(manager)
}
