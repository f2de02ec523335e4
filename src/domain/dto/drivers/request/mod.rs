//! # 기사 관련 요청 DTO 모듈
//!
//! 이 모듈은 기사 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@RequestBody` + `@Valid` 조합과 유사한 역할을 하며,
//! 클라이언트 입력의 타입 안전성과 유효성 검증을 담당합니다.
//!
//! ## 주요 특징
//!
//! - **자동 역직렬화**: JSON 요청 본문을 Rust 구조체로 자동 변환
//! - **선언적 유효성 검증**: `#[validate]` 어노테이션 기반 검증
//! - **공유 검증 규칙**: 면허번호 규칙은 `domain::validation`에 단일 정의
//! - **명시적 에러 메시지**: 검증 실패 시 클라이언트에 그대로 노출

pub mod create_driver;
pub mod update_license;

pub use create_driver::CreateDriverRequest;
pub use update_license::UpdateLicenseRequest;
