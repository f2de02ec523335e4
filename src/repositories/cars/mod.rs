//! 차량 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`CarRepository`](car_repo::CarRepository)를 통해 MongoDB 기반 차량 데이터 관리와
//! Redis 캐싱을 제공합니다. `#[repository]` 매크로를 사용하여 싱글톤으로 관리됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::cars::car_repo::CarRepository;
//!
//! let car_repo = CarRepository::instance();
//! let car = car_repo.find_by_id("665f1f77bcf86cd799439022").await?;
//! ```

pub mod car_repo;
