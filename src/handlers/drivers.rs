//! # Driver Management HTTP Handlers
//!
//! 기사 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 기사 등록, 조회, 면허번호 변경, 삭제를 REST 관례에 맞춰 제공합니다.
//!
//! ## 엔드포인트
//!
//! ### 제공 중
//! | 메서드 | 경로 | 동작 | 성공 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/drivers` | 새 기사 등록 | 201 Created |
//! | `GET` | `/drivers` | 기사 목록 조회 | 200 OK |
//! | `GET` | `/drivers/{id}` | 기사 조회 | 200 OK |
//! | `PATCH` | `/drivers/{id}/license` | 면허번호 변경 | 200 OK |
//! | `DELETE` | `/drivers/{id}` | 기사 삭제 | 204 No Content |
//!
//! ### 향후 구현 예정
//! | 메서드 | 경로 | 동작 |
//! |--------|------|------|
//! | `PUT` | `/drivers/{id}` | 기사 전체 정보 수정 |
//! | `GET` | `/drivers/{id}/cars` | 기사에게 배정된 차량 목록 조회 |
//! | `PATCH` | `/drivers/{id}/deactivate` | 기사 비활성화 (Soft Delete) |
//!
//! ## Spring Boot 대비
//!
//! ### Java라면
//! ```java
//! @RestController
//! @RequestMapping("/api/v1/drivers")
//! @Validated
//! public class DriverController {
//!
//!     @Autowired
//!     private DriverService driverService;
//!
//!     @PostMapping
//!     public ResponseEntity<CreateDriverResponse> createDriver(
//!         @Valid @RequestBody CreateDriverRequest request
//!     ) {
//!         CreateDriverResponse response = driverService.createDriver(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(response);
//!     }
//!
//!     @PatchMapping("/{id}/license")
//!     public ResponseEntity<DriverResponse> updateLicense(
//!         @PathVariable String id,
//!         @Valid @RequestBody UpdateLicenseRequest request
//!     ) {
//!         DriverResponse driver = driverService.updateLicense(id, request);
//!         return ResponseEntity.ok(driver);
//!     }
//! }
//! ```
//!
//! ### 여기서는
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, post, patch};
//! use crate::services::drivers::driver_service::DriverService;
//!
//! #[post("")]
//! pub async fn create_driver(
//!     payload: web::Json<CreateDriverRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let service = DriverService::instance(); // 싱글톤 패턴
//!     let response = service.create_driver(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//!
//! #[patch("/{driver_id}/license")]
//! pub async fn update_license(
//!     driver_id: web::Path<String>,
//!     payload: web::Json<UpdateLicenseRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let service = DriverService::instance();
//!     let driver = service.update_license(&driver_id, payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(driver))
//! }
//! ```
//!
//! ## 입력 검증
//!
//! 모든 요청 DTO는 `validator` 크레이트의 선언적 검증을 거칩니다.
//! 핸들러는 `payload.validate()?` 한 줄만 호출하며, 실패 시
//! `AppError::FieldValidation`으로 자동 변환되어 400 응답이 생성됩니다.
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::validation::validate_license_number;
//!
//! #[derive(Deserialize, Validate)]
//! pub struct UpdateLicenseRequest {
//!     #[validate(custom(function = "validate_license_number"))]
//!     pub license_number: String,
//! }
//! ```
//!
//! 면허번호 검증은 길이 검사를 먼저 수행하고, 8자인 경우에만
//! 형식 검사(대문자 3자 + 숫자 5자)로 진행합니다. 두 실패는
//! 상호 배타적이므로 한 번의 요청에서 하나의 면허번호 에러만 반환됩니다.
//!
//! ## 에러 처리 패턴
//!
//! ### AppError와 상태 코드
//! ```rust,ignore
//! // AppError 변형 → HTTP 상태 코드 자동 매핑 (ResponseError 구현)
//! AppError::FieldValidation(_)  // → 400 Bad Request (필드별 상세 포함)
//! AppError::ValidationError(_)  // → 400 Bad Request
//! AppError::NotFound(_)         // → 404 Not Found
//! AppError::ConflictError(_)    // → 409 Conflict
//! AppError::DatabaseError(_)    // → 500 Internal Server Error
//! ```
//!
//! ### 에러 본문 형식
//!
//! 폼 검증 실패는 필드명 → 메시지 목록 구조로 내려갑니다:
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
//! 비즈니스 에러는 단일 메시지 형식을 따릅니다:
//!
//! ```json
//! { "error": "Conflict error: License number is already registered" }
//! ```
//!
//! ## 보안 고려사항
//!
//! - 비밀번호는 bcrypt 해시 후 저장되며, 평문은 로그에 기록되지 않음
//! - 응답 DTO에서 `password_hash` 필드 제외
//! - Governor 미들웨어의 Rate limiting으로 스팸 등록 방지

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::drivers::request::{CreateDriverRequest, UpdateLicenseRequest};
use crate::services::drivers::driver_service::DriverService;

/// 기사 등록 핸들러
///
/// 새로운 기사를 등록합니다. 사용자명과 면허번호의 고유성을 검증하며,
/// 비밀번호는 bcrypt로 해시되어 저장됩니다.
///
/// # 엔드포인트
///
/// `POST /drivers`
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "kim_driver",
///   "password": "SecurePass123",
///   "password_confirm": "SecurePass123",
///   "first_name": "Minsu",
///   "last_name": "Kim",
///   "license_number": "ABC12345"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "driver": {
///     "id": "507f1f77bcf86cd799439011",
///     "username": "kim_driver",
///     "first_name": "Minsu",
///     "last_name": "Kim",
///     "license_number": "ABC12345",
///     "is_active": true,
///     "created_at": "2025-02-03T08:12:45Z",
///     "updated_at": "2025-02-03T08:12:45Z"
///   },
///   "message": "Driver registered successfully"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 폼 검증 실패 (400 Bad Request)
///
/// 면허번호 길이 오류: 길이 검사가 형식 검사보다 먼저 수행됩니다:
/// ```json
/// {
///   "error": "Validation failed",
///   "details": {
///     "license_number": ["License number must be exactly 8 characters long"]
///   }
/// }
/// ```
///
/// 면허번호 형식 오류: 8자이지만 패턴이 맞지 않는 경우:
/// ```json
/// {
///   "error": "Validation failed",
///   "details": {
///     "license_number": ["License number must consist of 3 uppercase letters followed by 5 digits (e.g., ABC12345)"]
///   }
/// }
/// ```
///
/// 비밀번호 확인 불일치: 구조체 수준 검증은 `__all__` 키로 내려갑니다:
/// ```json
/// {
///   "error": "Validation failed",
///   "details": {
///     "__all__": ["Passwords do not match"]
///   }
/// }
/// ```
///
/// ### 중복 사용자명 (409 Conflict)
/// ```json
/// { "error": "Conflict error: Username is already taken" }
/// ```
///
/// ### 중복 면허번호 (409 Conflict)
/// ```json
/// { "error": "Conflict error: License number is already registered" }
/// ```
///
/// # 비즈니스 규칙
///
/// - 사용자명은 전체 기사 중에서 유일해야 함
/// - 면허번호는 전체 기사 중에서 유일해야 함
/// - 면허번호는 정확히 8자: 대문자 3자 + 숫자 5자 (예: `ABC12345`)
/// - 면허번호는 입력 그대로 검증/저장되며 대소문자 변환이나 공백 제거를 하지 않음
/// - 비밀번호는 bcrypt 해시로만 저장됨
/// - 활성 상태로 생성 (`is_active: true`)
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/drivers \
///   -H "Content-Type: application/json" \
///   -d '{
///     "username": "kim_driver",
///     "password": "SecurePass123",
///     "password_confirm": "SecurePass123",
///     "first_name": "Minsu",
///     "last_name": "Kim",
///     "license_number": "ABC12345"
///   }'
/// ```
#[post("")]
pub async fn create_driver(
    payload: web::Json<CreateDriverRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()?;

    let service = DriverService::instance();
    let response = service.create_driver(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 기사 목록 조회 핸들러
///
/// 등록된 모든 기사를 최신 등록 순으로 조회합니다.
/// 차량 등록 폼의 기사 선택 목록을 채우는 용도로도 사용됩니다.
///
/// # 엔드포인트
///
/// `GET /drivers`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// [
///   {
///     "id": "507f1f77bcf86cd799439011",
///     "username": "kim_driver",
///     "first_name": "Minsu",
///     "last_name": "Kim",
///     "license_number": "ABC12345",
///     "is_active": true,
///     "created_at": "2025-02-04T10:41:02Z",
///     "updated_at": "2025-02-04T10:41:02Z"
///   },
///   {
///     "id": "507f1f77bcf86cd799439012",
///     "username": "lee_driver",
///     "first_name": "Younghee",
///     "last_name": "Lee",
///     "license_number": "XYZ98765",
///     "is_active": true,
///     "created_at": "2025-02-03T08:12:45Z",
///     "updated_at": "2025-02-03T08:12:45Z"
///   }
/// ]
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X GET http://localhost:8080/api/v1/drivers
/// ```
#[get("")]
pub async fn list_drivers() -> Result<HttpResponse, AppError> {
    let service = DriverService::instance();
    let drivers = service.list_drivers().await?;

    Ok(HttpResponse::Ok().json(drivers))
}

/// 기사 조회 핸들러
///
/// 지정된 ID의 기사 정보를 조회합니다.
/// 비밀번호 해시 등 민감한 정보는 응답에서 제외됩니다.
///
/// # 엔드포인트
///
/// `GET /drivers/{driver_id}`
///
/// # 경로 파라미터
///
/// - `driver_id`: 조회할 기사의 고유 ID (MongoDB ObjectId)
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "username": "kim_driver",
///   "first_name": "Minsu",
///   "last_name": "Kim",
///   "license_number": "ABC12345",
///   "is_active": true,
///   "created_at": "2025-02-03T08:12:45Z",
///   "updated_at": "2025-02-03T08:12:45Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 기사 없음 (404 Not Found)
/// ```json
/// { "error": "Not found: Driver not found" }
/// ```
///
/// ### ObjectId 형식 오류 (400 Bad Request)
/// ```json
/// { "error": "Validation error: Invalid driver ID format" }
/// ```
///
/// # 캐싱 정책
///
/// - ID 기반 조회는 Redis에 10분간 캐싱됨
/// - 면허번호 변경/삭제 시 캐시 자동 무효화
///
/// # 사용 예제
///
/// ```bash
/// curl -X GET http://localhost:8080/api/v1/drivers/507f1f77bcf86cd799439011
/// ```
#[get("/{driver_id}")]
pub async fn get_driver(
    driver_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = DriverService::instance();
    let driver = service.get_driver_by_id(&driver_id).await?;

    Ok(HttpResponse::Ok().json(driver))
}

/// 면허번호 변경 핸들러
///
/// 지정된 기사의 면허번호만 변경합니다. 부분 수정(PATCH) 시맨틱을 따르며,
/// `license_number`와 `updated_at` 외의 어떤 필드도 변경하지 않습니다.
///
/// # 엔드포인트
///
/// `PATCH /drivers/{driver_id}/license`
///
/// # 경로 파라미터
///
/// - `driver_id`: 면허번호를 변경할 기사의 고유 ID (MongoDB ObjectId)
///
/// # 요청 본문
///
/// ```json
/// { "license_number": "XYZ98765" }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
///
/// 변경이 반영된 기사 정보를 반환합니다:
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "username": "kim_driver",
///   "first_name": "Minsu",
///   "last_name": "Kim",
///   "license_number": "XYZ98765",
///   "is_active": true,
///   "created_at": "2025-02-03T08:12:45Z",
///   "updated_at": "2025-02-19T16:27:33Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 폼 검증 실패 (400 Bad Request)
///
/// 새 면허번호도 등록 시와 동일한 규칙으로 검증됩니다:
/// ```json
/// {
///   "error": "Validation failed",
///   "details": {
///     "license_number": ["License number must consist of 3 uppercase letters followed by 5 digits (e.g., ABC12345)"]
///   }
/// }
/// ```
///
/// ### 기사 없음 (404 Not Found)
/// ```json
/// { "error": "Not found: Driver not found" }
/// ```
///
/// ### 다른 기사가 사용 중인 면허번호 (409 Conflict)
/// ```json
/// { "error": "Conflict error: License number is already registered" }
/// ```
///
/// # 비즈니스 규칙
///
/// - 면허번호 외의 필드(사용자명, 이름, 비밀번호 등)는 수정 대상이 아님
/// - 본인이 이미 사용 중인 면허번호로의 변경은 허용됨 (멱등성)
/// - 다른 기사에게 등록된 면허번호로는 변경 불가
///
/// # 사용 예제
///
/// ```bash
/// curl -X PATCH http://localhost:8080/api/v1/drivers/507f1f77bcf86cd799439011/license \
///   -H "Content-Type: application/json" \
///   -d '{ "license_number": "XYZ98765" }'
/// ```
#[patch("/{driver_id}/license")]
pub async fn update_license(
    driver_id: web::Path<String>,
    payload: web::Json<UpdateLicenseRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()?;

    let service = DriverService::instance();
    let driver = service.update_license(&driver_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(driver))
}

/// 기사 삭제 핸들러
///
/// 지정된 ID의 기사 문서를 데이터베이스에서 바로 지웁니다.
/// 복구 경로는 없습니다.
///
/// # 엔드포인트
///
/// `DELETE /drivers/{driver_id}`
///
/// # 경로 파라미터
///
/// - `driver_id`: 삭제할 기사의 고유 ID (MongoDB ObjectId)
///
/// # 응답
///
/// ## 성공 (204 No Content)
/// ```bash,ignore
/// HTTP/1.1 204 No Content
/// Content-Length: 0
/// ```
///
/// ## 실패 사례
///
/// ### 기사 없음 (404 Not Found)
/// ```json
/// { "error": "Not found: Driver not found" }
/// ```
///
/// # 삭제 정책
///
/// 지금은 문서를 물리적으로 지웁니다 (Hard Delete). 문서 제거와 함께
/// 관련 캐시가 무효화되며, 지운 데이터는 되돌릴 수 없습니다.
///
/// Soft Delete 전환은 추후 과제입니다:
/// - `is_active: false`로 전환하는 비활성화 엔드포인트 분리 예정
/// - 차량에 배정된 기사 삭제 시 배정 해제 처리 추가 예정
///
/// # 사용 예제
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/v1/drivers/507f1f77bcf86cd799439011
/// ```
#[delete("/{driver_id}")]
pub async fn delete_driver(
    driver_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = DriverService::instance();
    service.delete_driver(&driver_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
