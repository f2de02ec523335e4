//! # Car Management HTTP Handlers
//!
//! 차량 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 차량 등록, 조회, 수정, 삭제와 기사 배정을 REST 관례에 맞춰 제공합니다.
//!
//! ## 엔드포인트
//!
//! ### 제공 중
//! | 메서드 | 경로 | 동작 | 성공 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/cars` | 새 차량 등록 | 201 Created |
//! | `GET` | `/cars` | 차량 목록 조회 | 200 OK |
//! | `GET` | `/cars/{id}` | 차량 조회 | 200 OK |
//! | `PUT` | `/cars/{id}` | 차량 정보 수정 | 200 OK |
//! | `DELETE` | `/cars/{id}` | 차량 삭제 | 204 No Content |
//!
//! ### 향후 구현 예정
//! | 메서드 | 경로 | 동작 |
//! |--------|------|------|
//! | `POST` | `/cars/{id}/drivers` | 기사 개별 배정 |
//! | `DELETE` | `/cars/{id}/drivers/{driver_id}` | 기사 배정 해제 |
//!
//! ## 기사 배정 모델
//!
//! 차량 폼의 `drivers` 필드는 다중 선택(multi-select)으로, 기사 ID
//! 문자열 배열을 받습니다. HTML 폼에서 아무것도 선택하지 않으면 필드
//! 자체가 제출되지 않으므로 `#[serde(default)]`로 빈 배열을 기본값으로
//! 처리합니다. 빈 선택은 유효합니다 (기사 미배정 차량).
//!
//! ```rust,ignore
//! #[derive(Deserialize, Validate)]
//! pub struct SaveCarRequest {
//!     #[validate(length(min = 1, max = 100, message = "..."))]
//!     pub model: String,
//!     #[validate(length(min = 1, max = 100, message = "..."))]
//!     pub manufacturer: String,
//!     #[serde(default)]
//!     pub drivers: Vec<String>, // 기사 ObjectId 문자열 목록
//! }
//! ```
//!
//! 제출된 모든 기사 ID는 저장 전에 존재 여부를 검증합니다.
//! 하나라도 존재하지 않으면 400 응답과 함께 저장이 거부됩니다.
//!
//! ## Spring Boot 대비
//!
//! ### Java라면
//! ```java
//! @RestController
//! @RequestMapping("/api/v1/cars")
//! @Validated
//! public class CarController {
//!
//!     @Autowired
//!     private CarService carService;
//!
//!     @PostMapping
//!     public ResponseEntity<CarResponse> saveCar(
//!         @Valid @RequestBody SaveCarRequest request
//!     ) {
//!         CarResponse response = carService.saveCar(request);
//!         return ResponseEntity.status(HttpStatus.CREATED).body(response);
//!     }
//!
//!     @PutMapping("/{id}")
//!     public ResponseEntity<CarResponse> updateCar(
//!         @PathVariable String id,
//!         @Valid @RequestBody SaveCarRequest request
//!     ) {
//!         return ResponseEntity.ok(carService.updateCar(id, request));
//!     }
//! }
//! ```
//!
//! ### 여기서는
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, post, put};
//! use crate::services::cars::car_service::CarService;
//!
//! #[post("")]
//! pub async fn save_car(
//!     payload: web::Json<SaveCarRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let service = CarService::instance(); // 싱글톤 패턴
//!     let response = service.save_car(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 에러 처리 패턴
//!
//! ### 에러 본문 형식
//!
//! 폼 검증 실패는 필드별 상세와 함께 내려갑니다:
//!
//! ```json
//! {
//!   "error": "Validation failed",
//!   "details": {
//!     "model": ["Model must be between 1 and 100 characters long"]
//!   }
//! }
//! ```
//!
//! 존재하지 않는 기사 배정은 서비스 계층에서 걸러집니다:
//!
//! ```json
//! { "error": "Validation error: Unknown driver ids: 507f1f77bcf86cd799439099" }
//! ```

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::cars::request::SaveCarRequest;
use crate::services::cars::car_service::CarService;

/// 차량 등록 핸들러
///
/// 새로운 차량을 등록합니다. 기사 배정은 선택 사항이며,
/// 배정된 기사 ID는 모두 존재하는 기사여야 합니다.
///
/// # 엔드포인트
///
/// `POST /cars`
///
/// # 요청 본문
///
/// ```json
/// {
///   "model": "Sonata",
///   "manufacturer": "Hyundai",
///   "drivers": ["507f1f77bcf86cd799439011", "507f1f77bcf86cd799439012"]
/// }
/// ```
///
/// `drivers`는 생략 가능하며, 생략 시 기사 미배정 차량으로 등록됩니다:
///
/// ```json
/// {
///   "model": "Sonata",
///   "manufacturer": "Hyundai"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "65a1b2c3d4e5f60718293a4b",
///   "model": "Sonata",
///   "manufacturer": "Hyundai",
///   "drivers": ["507f1f77bcf86cd799439011", "507f1f77bcf86cd799439012"],
///   "created_at": "2025-02-03T08:12:45Z",
///   "updated_at": "2025-02-03T08:12:45Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 폼 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "Validation failed",
///   "details": {
///     "model": ["Model must be between 1 and 100 characters long"]
///   }
/// }
/// ```
///
/// ### 존재하지 않는 기사 배정 (400 Bad Request)
/// ```json
/// { "error": "Validation error: Unknown driver ids: 507f1f77bcf86cd799439099" }
/// ```
///
/// ### 잘못된 기사 ID 형식 (400 Bad Request)
/// ```json
/// { "error": "Validation error: Invalid driver id format: not-an-oid" }
/// ```
///
/// # 비즈니스 규칙
///
/// - 모델명과 제조사는 1자 이상 100자 이하
/// - 기사 선택은 비어 있어도 유효함
/// - 제출된 기사 ID는 전부 존재해야 하며, 하나라도 없으면 저장하지 않음
/// - 중복 제출된 기사 ID는 한 번만 배정됨
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/cars \
///   -H "Content-Type: application/json" \
///   -d '{
///     "model": "Sonata",
///     "manufacturer": "Hyundai",
///     "drivers": ["507f1f77bcf86cd799439011"]
///   }'
/// ```
#[post("")]
pub async fn save_car(
    payload: web::Json<SaveCarRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()?;

    let service = CarService::instance();
    let response = service.save_car(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 차량 목록 조회 핸들러
///
/// 등록된 모든 차량을 최신 등록 순으로 조회합니다.
///
/// # 엔드포인트
///
/// `GET /cars`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// [
///   {
///     "id": "65a1b2c3d4e5f60718293a4b",
///     "model": "Sonata",
///     "manufacturer": "Hyundai",
///     "drivers": ["507f1f77bcf86cd799439011"],
///     "created_at": "2025-02-04T10:41:02Z",
///     "updated_at": "2025-02-04T10:41:02Z"
///   },
///   {
///     "id": "65a1b2c3d4e5f60718293a4c",
///     "model": "K5",
///     "manufacturer": "Kia",
///     "drivers": [],
///     "created_at": "2025-02-03T08:12:45Z",
///     "updated_at": "2025-02-03T08:12:45Z"
///   }
/// ]
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X GET http://localhost:8080/api/v1/cars
/// ```
#[get("")]
pub async fn list_cars() -> Result<HttpResponse, AppError> {
    let service = CarService::instance();
    let cars = service.list_cars().await?;

    Ok(HttpResponse::Ok().json(cars))
}

/// 차량 조회 핸들러
///
/// 지정된 ID의 차량 정보를 조회합니다.
///
/// # 엔드포인트
///
/// `GET /cars/{car_id}`
///
/// # 경로 파라미터
///
/// - `car_id`: 조회할 차량의 고유 ID (MongoDB ObjectId)
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "65a1b2c3d4e5f60718293a4b",
///   "model": "Sonata",
///   "manufacturer": "Hyundai",
///   "drivers": ["507f1f77bcf86cd799439011"],
///   "created_at": "2025-02-03T08:12:45Z",
///   "updated_at": "2025-02-03T08:12:45Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 차량 없음 (404 Not Found)
/// ```json
/// { "error": "Not found: Car not found" }
/// ```
///
/// ### ObjectId 형식 오류 (400 Bad Request)
/// ```json
/// { "error": "Validation error: Invalid car ID format" }
/// ```
///
/// # 캐싱 정책
///
/// - ID 기반 조회는 Redis에 10분간 캐싱됨
/// - 수정/삭제 시 캐시 자동 무효화
///
/// # 사용 예제
///
/// ```bash
/// curl -X GET http://localhost:8080/api/v1/cars/65a1b2c3d4e5f60718293a4b
/// ```
#[get("/{car_id}")]
pub async fn get_car(
    car_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = CarService::instance();
    let car = service.get_car_by_id(&car_id).await?;

    Ok(HttpResponse::Ok().json(car))
}

/// 차량 수정 핸들러
///
/// 지정된 차량의 모델, 제조사, 기사 배정을 수정합니다.
/// 등록과 동일한 폼(`SaveCarRequest`)을 사용하며, `drivers` 배열이
/// 배정 목록 전체를 대체합니다.
///
/// # 엔드포인트
///
/// `PUT /cars/{car_id}`
///
/// # 경로 파라미터
///
/// - `car_id`: 수정할 차량의 고유 ID (MongoDB ObjectId)
///
/// # 요청 본문
///
/// ```json
/// {
///   "model": "Sonata Hybrid",
///   "manufacturer": "Hyundai",
///   "drivers": ["507f1f77bcf86cd799439012"]
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "65a1b2c3d4e5f60718293a4b",
///   "model": "Sonata Hybrid",
///   "manufacturer": "Hyundai",
///   "drivers": ["507f1f77bcf86cd799439012"],
///   "created_at": "2025-02-03T08:12:45Z",
///   "updated_at": "2025-02-19T16:27:33Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 차량 없음 (404 Not Found)
/// ```json
/// { "error": "Not found: Car not found" }
/// ```
///
/// ### 존재하지 않는 기사 배정 (400 Bad Request)
/// ```json
/// { "error": "Validation error: Unknown driver ids: 507f1f77bcf86cd799439099" }
/// ```
///
/// # 비즈니스 규칙
///
/// - `drivers`를 빈 배열로 보내면 모든 기사 배정이 해제됨
/// - 기사 존재 검증에 실패하면 어떤 필드도 수정되지 않음
///
/// # 사용 예제
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/v1/cars/65a1b2c3d4e5f60718293a4b \
///   -H "Content-Type: application/json" \
///   -d '{
///     "model": "Sonata Hybrid",
///     "manufacturer": "Hyundai",
///     "drivers": []
///   }'
/// ```
#[put("/{car_id}")]
pub async fn update_car(
    car_id: web::Path<String>,
    payload: web::Json<SaveCarRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()?;

    let service = CarService::instance();
    let car = service.update_car(&car_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(car))
}

/// 차량 삭제 핸들러
///
/// 지정된 ID의 차량 문서를 데이터베이스에서 바로 지웁니다 (Hard Delete).
/// 기사 문서는 건드리지 않습니다. 배정 관계만 차량과 함께 사라집니다.
///
/// # 엔드포인트
///
/// `DELETE /cars/{car_id}`
///
/// # 경로 파라미터
///
/// - `car_id`: 삭제할 차량의 고유 ID (MongoDB ObjectId)
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
/// ### 차량 없음 (404 Not Found)
/// ```json
/// { "error": "Not found: Car not found" }
/// ```
///
/// # 삭제 정책
///
/// - 차량 데이터를 데이터베이스에서 완전 제거
/// - 관련 캐시 무효화
/// - 기사 엔티티는 영향받지 않음 (배정 관계만 사라짐)
///
/// # 사용 예제
///
/// ```bash
/// curl -X DELETE http://localhost:8080/api/v1/cars/65a1b2c3d4e5f60718293a4b
/// ```
#[delete("/{car_id}")]
pub async fn delete_car(
    car_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = CarService::instance();
    service.delete_car(&car_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
