//! 차량 API의 요청·응답 타입.
//!
//! 차량은 등록 화면과 수정 화면이 같은 폼이라 요청 DTO가
//! `SaveCarRequest` 하나뿐입니다. POST(생성)와 PUT(전체 교체)이
//! 같은 계약을 공유합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! cars/
//! ├── request/
//! │   └── save_car.rs        # 차량 등록/수정 공용 요청
//! └── response/
//!     └── car_response.rs    # 차량 정보 응답 (배정 기사 포함)
//! ```
//!
//! ## 배정 기사 (drivers) 필드
//!
//! 차량 폼의 `drivers` 필드는 다중 선택(multi-select)에 해당합니다.
//!
//! - **빈 배열 유효**: 아직 기사가 배정되지 않은 차량도 정상 등록 가능
//! - **필드 생략 가능**: JSON에서 `drivers`를 생략하면 빈 배열로 처리
//! - **참조 무결성**: 존재하지 않는 기사 ID는 서비스 계층에서 거부
//! - **면허번호 무관**: 배정 기사의 면허번호 검증은 이 폼의 책임이 아님
//!
//! ## 등록과 수정의 왕복 예
//!
//! ```text
//! POST /api/v1/cars
//! { "model": "Sonata", "manufacturer": "Hyundai",
//!   "drivers": ["64f1c09e8d3a5b0001a2f4d7"] }
//!
//! 201 Created
//! { "id": "665f1f77bcf86cd799439022", "model": "Sonata",
//!   "manufacturer": "Hyundai",
//!   "drivers": ["64f1c09e8d3a5b0001a2f4d7"], ... }
//!
//! PUT /api/v1/cars/665f1f77bcf86cd799439022     배정 전부 해제
//! { "model": "Sonata", "manufacturer": "Hyundai", "drivers": [] }
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
