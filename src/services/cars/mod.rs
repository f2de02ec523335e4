//! 차량 관리 서비스 모듈
//!
//! 차량 생명주기와 기사 배정에 관련된 비즈니스 로직을 담당하는 서비스들을 제공합니다.
//! 차량 등록, 수정, 조회, 삭제와 배정 기사의 참조 무결성 검증을 구현합니다.
//!
//! # Features
//!
//! - 차량 등록 및 전체 수정 (동일 폼 공유)
//! - 배정 기사 ID 존재 여부 검증 (참조 무결성)
//! - 배정 목록 중복 제거
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::cars::car_service::CarService;
//! use crate::domain::dto::cars::request::SaveCarRequest;
//!
//! let car_service = CarService::instance();
//! let request = SaveCarRequest { /* ... */ };
//! let response = car_service.save_car(request).await?;
//! ```

pub mod car_service;
