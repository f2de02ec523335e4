//! URL 배치도.
//!
//! 각 핸들러는 자기 경로를 어트리뷰트(`#[post("")]` 등)로 들고 있고,
//! 이 모듈은 그 핸들러들을 스코프에 묶어 앱에 다는 일만 합니다.
//!
//! ```text
//! /health                       상태 확인 (버전 관리 밖)
//! /api/v1/drivers   + 하위 경로   기사 등록·조회·면허 변경·삭제
//! /api/v1/cars      + 하위 경로   차량 등록·조회·수정·삭제 (기사 배정 포함)
//! ```
//!
//! 진입점은 [`configure_all_routes`] 하나이고 `main.rs`의
//! `App::new().configure(...)`에서 불립니다. 새 도메인을 추가할 때는
//! `configure_<도메인>_routes` 함수를 만들어 아래에 한 줄 더하면
//! 됩니다. 핸들러를 스코프 두 곳에 겹쳐 달면 actix가 기동 시점이
//! 아니라 첫 요청에서야 이상하게 동작하므로 주의하세요.

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 헬스체크와 도메인별 라우트 그룹을 전부 등록합니다.
///
/// ```rust,ignore
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_driver_routes(cfg);
    configure_car_routes(cfg);
}

/// `/api/v1/drivers` 스코프.
///
/// 등록(POST), 목록(GET), 단건 조회(GET `{id}`), 면허번호 변경
/// (PATCH `{id}/license`), 삭제(DELETE `{id}`)가 들어 있습니다.
/// 면허번호 변경이 전체 수정(PUT)이 아니라 별도 하위 경로인 것은
/// 의도입니다. 기사 수정 화면에서 바꿀 수 있는 필드가 면허번호뿐이기
/// 때문입니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/drivers \
///   -H "Content-Type: application/json" \
///   -d '{"username":"kim_driver","password":"SecurePass123","password_confirm":"SecurePass123","first_name":"Minsu","last_name":"Kim","license_number":"ABC12345"}'
///
/// curl -X PATCH http://localhost:8080/api/v1/drivers/507f1f77bcf86cd799439011/license \
///   -H "Content-Type: application/json" \
///   -d '{"license_number":"XYZ98765"}'
/// ```
fn configure_driver_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/drivers")
            .service(handlers::drivers::create_driver)
            .service(handlers::drivers::list_drivers)
            .service(handlers::drivers::get_driver)
            .service(handlers::drivers::update_license)
            .service(handlers::drivers::delete_driver)
    );
}

/// `/api/v1/cars` 스코프.
///
/// 등록(POST), 목록(GET), 단건 조회(GET `{id}`), 수정(PUT `{id}`),
/// 삭제(DELETE `{id}`). 등록과 수정 본문의 `drivers` 배열은 생략,
/// 빈 배열, 기사 ID 목록 모두 유효하며 존재하지 않는 ID는 서비스
/// 계층이 걸러 400으로 돌려보냅니다. PUT은 배정 목록을 통째로
/// 대체합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/cars \
///   -H "Content-Type: application/json" \
///   -d '{"model":"Sonata","manufacturer":"Hyundai","drivers":["507f1f77bcf86cd799439011"]}'
///
/// curl -X POST http://localhost:8080/api/v1/cars \
///   -H "Content-Type: application/json" \
///   -d '{"model":"K5","manufacturer":"Kia"}'
/// ```
fn configure_car_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/cars")
            .service(handlers::cars::save_car)
            .service(handlers::cars::list_cars)
            .service(handlers::cars::get_car)
            .service(handlers::cars::update_car)
            .service(handlers::cars::delete_car)
    );
}

/// 로드밸런서용 상태 확인.
///
/// 프로세스가 살아서 요청을 받을 수 있는지만 답합니다. MongoDB나
/// Redis까지 찔러 보지 않으므로 의존 스토어 장애 중에도 200이
/// 나옵니다. 배포 확인용으로 서비스 이름, 빌드 버전, 응답 시각을
/// 함께 돌려줍니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "taxi_fleet_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "taxi_fleet_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
