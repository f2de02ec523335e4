//! # DTO 모듈
//!
//! HTTP 경계에서 오가는 JSON의 모양을 정의합니다. 요청 본문은
//! `request/` 아래 구조체로 역직렬화되고, 응답은 `response/` 아래
//! 구조체를 직렬화해 내보냅니다. Spring이라면 `@RequestBody`에
//! `@Valid`를 붙이고 `ResponseEntity<T>`를 돌려주는 자리입니다.
//!
//! ## 왜 엔티티를 그대로 내보내지 않는가
//!
//! 기사 엔티티에는 비밀번호 해시가 있습니다. 응답 전용 타입을
//! 거치면 민감 필드가 구조적으로 빠지고, ObjectId를 16진 문자열로
//! 바꾸는 변환도 한 곳(`From<Driver>` / `From<Car>`)에 모입니다.
//! 내부 스키마를 바꿔도 API 계약은 DTO를 고치기 전까지 그대로입니다.
//!
//! ## 구조
//!
//! ```text
//! dto/
//! ├── drivers/
//! │   ├── request/   create_driver.rs, update_license.rs
//! │   └── response/  driver_response.rs
//! └── cars/
//!     ├── request/   save_car.rs (등록·수정 공용)
//!     └── response/  car_response.rs
//! ```
//!
//! ## 검증이 도는 방식
//!
//! 요청 DTO는 전부 `validator::Validate`를 derive하고, 핸들러가
//! 본문을 받자마자 `payload.validate()?`를 부릅니다. 실패하면
//! `AppError::FieldValidation`을 타고 400이 나가며, 본문 구조는
//! 항상 같습니다. 필드 규칙은 필드 이름 아래, 비밀번호 확인처럼
//! 필드 두 개를 보는 구조체 수준 규칙은 `__all__` 아래 모입니다.
//!
//! ```json
//! {
//!   "error": "Validation failed",
//!   "details": {
//!     "license_number": ["License number must be exactly 8 characters long"],
//!     "__all__": ["Passwords do not match"]
//!   }
//! }
//! ```
//!
//! 검증 메시지는 클라이언트 화면에 그대로 노출되는 영문 문장이므로
//! 임의로 바꾸면 프런트엔드와의 계약이 깨집니다.
//!
//! ## 핸들러에서의 전형적인 사용
//!
//! ```rust,ignore
//! #[actix_web::post("")]
//! async fn create_driver(
//!     payload: web::Json<CreateDriverRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let driver = DriverService::instance()
//!         .create_driver(payload.into_inner())
//!         .await?;
//!     Ok(HttpResponse::Created().json(DriverResponse::from(driver)))
//! }
//! ```

pub mod cars;
pub mod drivers;

pub use cars::*;
pub use drivers::*;
