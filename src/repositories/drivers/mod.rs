//! 기사 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`DriverRepository`](driver_repo::DriverRepository)를 통해 MongoDB 기반 기사 데이터 관리와
//! Redis 캐싱을 제공합니다. `#[repository]` 매크로를 사용하여 싱글톤으로 관리됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::drivers::driver_repo::DriverRepository;
//!
//! let driver_repo = DriverRepository::instance();
//! let driver = driver_repo.find_by_username("kim_driver").await?;
//! ```

pub mod driver_repo;
