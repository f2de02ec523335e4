//! Cars Entity Module
//!
//! 차량 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 차량 속성과 배정된 기사들의 ObjectId 참조 집합을 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::cars::Car;
//!
//! // 기사가 아직 배정되지 않은 차량도 유효합니다
//! let car = Car::new("Model S".to_string(), "Tesla".to_string(), vec![]);
//! ```

pub mod car;

pub use car::*;
