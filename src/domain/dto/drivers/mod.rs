//! 기사 API의 요청·응답 타입.
//!
//! 화면 기준으로 두 가지 폼을 다룹니다.
//!
//! **등록 폼**은 [`request::CreateDriverRequest`]로 들어와
//! [`response::CreateDriverResponse`]로 나갑니다. 계정 정보
//! (사용자명·비밀번호)와 기사 정보(이름·운전면허번호)를 한 제출로
//! 받고, 성공하면 생성된 기사와 완료 메시지를 함께 돌려줍니다.
//!
//! ```text
//! POST /api/v1/drivers
//! { "username": "kim_driver", "password": "SecurePass123",
//!   "password_confirm": "SecurePass123", "first_name": "Minjun",
//!   "last_name": "Kim", "license_number": "ABC12345" }
//!
//! 201 Created
//! { "driver": { "id": "64f1c09e8d3a5b0001a2f4d7",
//!               "username": "kim_driver", "first_name": "Minjun",
//!               "last_name": "Kim", "license_number": "ABC12345",
//!               "is_active": true, ... },
//!   "message": "Driver registered successfully" }
//! ```
//!
//! **면허 갱신 폼**은 [`request::UpdateLicenseRequest`] 필드 하나짜리
//! 본문으로 PATCH를 보내고, 반영된 [`response::DriverResponse`]를
//! 받습니다. 면허번호 형식 규칙은 등록 폼과 같은 함수를 씁니다.
//!
//! ```text
//! PATCH /api/v1/drivers/64f1c09e8d3a5b0001a2f4d7/license
//! { "license_number": "XYZ98765" }
//! ```
//!
//! 어느 폼이든 형식 검증에 걸리면 400과 함께 필드별 메시지가
//! 내려갑니다. 자세한 본문 구조는 상위 [`crate::domain::dto`] 문서에
//! 있습니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
