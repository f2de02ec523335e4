//! Redis 캐시 계층.
//!
//! [`redis::RedisClient`] 하나로 끝나는 얇은 모듈입니다. 값은 JSON
//! 문자열로 저장하고, 꺼낼 때 제네릭으로 역직렬화합니다. 어떤 키에
//! 무엇이 들어가는지는 [`redis`] 모듈 문서의 키 규약 절을 보세요.
//!
//! ```rust,ignore
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("driver:123", &driver, 600).await?;
//! let hit: Option<Driver> = cache.get("driver:123").await?;
//! ```
//!
//! 접속 주소는 `REDIS_URL` 하나로 정해지며 기본값은
//! `redis://localhost:6379`입니다.

pub mod redis;
