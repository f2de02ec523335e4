//! # HTTP 핸들러 모듈
//!
//! Spring MVC의 컨트롤러에 해당하는 계층입니다. 핸들러 한 개가 하는
//! 일은 세 가지로 고정되어 있습니다. 본문/경로를 타입으로 받고,
//! `validate()?`를 부르고, 서비스 결과를 상태 코드에 실어 내보내는
//! 것. 업무 판단이 핸들러 안에 보이면 서비스로 내려보내야 합니다.
//!
//! ## 엔드포인트 전체 목록
//!
//! `/api/v1` 스코프 아래에 마운트됩니다 (라우팅은 [`crate::routes`]).
//!
//! | 메서드 | 경로 | 핸들러 | 성공 |
//! |--------|------|--------|------|
//! | POST | `/drivers` | [`drivers::create_driver`] | 201 |
//! | GET | `/drivers` | [`drivers::list_drivers`] | 200 |
//! | GET | `/drivers/{driver_id}` | [`drivers::get_driver`] | 200 |
//! | PATCH | `/drivers/{driver_id}/license` | [`drivers::update_license`] | 200 |
//! | DELETE | `/drivers/{driver_id}` | [`drivers::delete_driver`] | 204 |
//! | POST | `/cars` | [`cars::save_car`] | 201 |
//! | GET | `/cars` | [`cars::list_cars`] | 200 |
//! | GET | `/cars/{car_id}` | [`cars::get_car`] | 200 |
//! | PUT | `/cars/{car_id}` | [`cars::update_car`] | 200 |
//! | DELETE | `/cars/{car_id}` | [`cars::delete_car`] | 204 |
//!
//! 실패는 핸들러가 직접 만들지 않습니다. `AppError`를 `?`로 올리면
//! `ResponseError` 구현이 400(검증·ID 형식) / 404(없음) / 409(중복)
//! / 500으로 바꿉니다.
//!
//! ## 핸들러의 표준형
//!
//! Spring에서 이렇게 쓰던 것이:
//!
//! ```java
//! @PatchMapping("/{id}/license")
//! public ResponseEntity<DriverResponse> updateLicense(
//!     @PathVariable String id, @Valid @RequestBody UpdateLicenseRequest req) {
//!     return ResponseEntity.ok(driverService.updateLicense(id, req));
//! }
//! ```
//!
//! 여기서는 이렇게 됩니다:
//!
//! ```rust,ignore
//! #[patch("/{driver_id}/license")]
//! pub async fn update_license(
//!     driver_id: web::Path<String>,
//!     payload: web::Json<UpdateLicenseRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let driver = DriverService::instance()
//!         .update_license(&driver_id, payload.into_inner())
//!         .await?;
//!     Ok(HttpResponse::Ok().json(driver))
//! }
//! ```
//!
//! `@Autowired` 필드 대신 싱글톤 `instance()`를 호출 시점에 꺼내는
//! 것이 유일한 구조 차이입니다.
//!
//! ## 핸들러가 하지 않는 일
//!
//! * 중복 검사, 기사 존재 확인 같은 DB를 봐야 아는 규칙 → 서비스
//! * ObjectId 문자열 파싱 → 아래 계층 (`Invalid driver ID format`도 거기서 남)
//! * CORS, 요청 제한 → `main.rs`의 미들웨어 설정

pub mod cars;
pub mod drivers;
