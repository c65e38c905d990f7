use async_trait::async_trait;
use inforecon_application::ports::CacheStore;
use inforecon_domain::config::RedisConfig;
use inforecon_domain::DomainError;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::info;

/// Redis-backed store: `GET` and `SET key value EX ttl` over a multiplexed,
/// auto-reconnecting connection.
pub struct RedisCacheStore {
    connection: ConnectionManager,
}

impl RedisCacheStore {
    pub async fn connect(config: &RedisConfig) -> Result<Self, DomainError> {
        let client = redis::Client::open(config.url())
            .map_err(|e| DomainError::Cache(format!("Invalid Redis URL: {}", e)))?;

        let connection = ConnectionManager::new(client).await.map_err(|e| {
            DomainError::Cache(format!(
                "Failed to connect to Redis at {}:{}: {}",
                config.host, config.port, e
            ))
        })?;

        info!(host = %config.host, port = config.port, db = config.db, "Connected to Redis");

        Ok(Self { connection })
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let mut conn = self.connection.clone();
        conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(|e| DomainError::Cache(format!("Redis GET failed: {}", e)))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), DomainError> {
        // EX 0 is rejected by Redis
        let seconds = ttl.as_secs().max(1);
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(|e| DomainError::Cache(format!("Redis SET failed: {}", e)))
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
