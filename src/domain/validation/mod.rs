//! # 도메인 검증 규칙 모듈
//!
//! 여러 요청 DTO가 공유하는 도메인 수준 검증 규칙을 모아둔 모듈입니다.
//! 각 규칙은 상태 없는 순수 함수로 작성되어 `validator` 크레이트의
//! `#[validate(custom(function = "..."))]` 속성에서 직접 참조됩니다.
//!
//! ## 설계 원칙
//!
//! - **단일 정의**: 등록 폼과 갱신 폼이 같은 규칙 함수를 공유
//! - **순수 함수**: 입출력 외 부수 효과 없음, 동시 호출 안전
//! - **정확한 메시지**: 클라이언트에 그대로 노출되는 메시지를 규칙이 소유
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::validation::validate_license_number;
//!
//! #[derive(Deserialize, Validate)]
//! pub struct UpdateLicenseRequest {
//!     #[validate(custom(function = "crate::domain::validation::validate_license_number"))]
//!     pub license_number: String,
//! }
//! ```

pub mod license;

pub use license::*;
