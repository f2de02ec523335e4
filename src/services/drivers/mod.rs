//! 기사 관리 서비스 모듈
//!
//! 기사 생명주기와 관련된 비즈니스 로직을 담당하는 서비스들을 제공합니다.
//! 기사 등록, 조회, 면허번호 변경, 삭제 등의 핵심 기능을 구현합니다.
//!
//! # Features
//!
//! - 기사 등록 및 검증
//! - 비밀번호 해싱 (bcrypt)
//! - 면허번호 변경 (부분 업데이트)
//! - 계정 상태 관리
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 사용자명/면허번호 중복 방지
//! - 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::drivers::DriverService;
//! use crate::domain::dto::drivers::request::CreateDriverRequest;
//!
//! let driver_service = DriverService::instance();
//! let request = CreateDriverRequest { /* ... */ };
//! let response = driver_service.create_driver(request).await?;
//! ```

pub mod driver_service;
