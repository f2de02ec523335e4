//! Drivers Entity Module
//!
//! 기사 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 로그인 계정 정보와 운전면허 정보를 하나의 문서로 관리합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::drivers::Driver;
//!
//! let driver = Driver::new(
//!     "john_doe".to_string(),
//!     "John".to_string(),
//!     "Doe".to_string(),
//!     "ABC12345".to_string(),
//!     hashed_password,
//! );
//! ```

pub mod driver;

pub use driver::*;
