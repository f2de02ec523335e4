//! 데이터 액세스 계층.
//!
//! 컬렉션마다 `#[repository]`가 붙은 구조체 하나씩입니다. MongoDB가
//! 원본이고 Redis가 그 앞단 캐시이며, 캐시 키 규약은
//! [`crate::caching`] 문서에 있습니다. 서비스 계층은 엔티티만 주고받고,
//! BSON 문서 조립과 ObjectId 파싱은 전부 이 안에서 끝냅니다.
//!
//! ```rust,ignore
//! let repo = DriverRepository::instance();
//! let driver = repo.find_by_license_number("ABC12345").await?;
//! ```

pub mod cars;
pub mod drivers;
