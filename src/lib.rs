//! 택시 회사의 기사와 차량을 관리하는 백엔드 서비스.
//!
//! 기사 등록(운전면허번호 형식 검증 포함), 면허번호 변경, 차량 등록과
//! 기사 다중 배정을 REST API로 제공합니다. 저장은 MongoDB, ID 단건
//! 조회 캐시는 Redis, 컴포넌트 조립은 `singleton_macro` 기반 DI가
//! 맡습니다.
//!
//! # 요청이 흐르는 길
//!
//! ```text
//! HTTP 요청
//!   → routes      URL과 메서드를 핸들러에 연결
//!   → handlers    역직렬화, 형식 검증, 상태 코드 결정
//!   → services    중복 검사 · 참조 무결성 · 해싱 같은 업무 규칙
//!   → repositories  MongoDB 읽기/쓰기와 Redis 캐시 관리
//! ```
//!
//! 계층 사이는 전부 `Result<_, AppError>`로 이어지고, 에러는
//! [`core::errors`]의 `ResponseError` 구현이 한 곳에서 HTTP 응답으로
//! 바꿉니다.
//!
//! # 바깥에서 쓰는 법
//!
//! ```rust,ignore
//! use taxi_fleet_backend::services::drivers::driver_service::DriverService;
//!
//! let service = DriverService::instance();
//! let driver = service.create_driver(request).await?;
//! ```
//!
//! `instance()`가 동작하려면 기동 시
//! [`core::registry::ServiceLocator::initialize_all`]이 먼저 불려야
//! 합니다. `main`이 하는 일이 그것입니다.

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
