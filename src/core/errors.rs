//! # 통합 에러 처리
//!
//! 모든 계층이 공유하는 단일 에러 타입 [`AppError`]와, 이를 HTTP 응답으로
//! 바꾸는 `ResponseError` 구현을 담습니다. 핸들러는 `Result<_, AppError>`만
//! 반환하면 되고, 상태 코드와 응답 본문 형식은 이 모듈이 한 곳에서
//! 결정합니다. Spring에서 전역 `@ExceptionHandler` 하나로 에러 응답을
//! 통일하는 것과 같은 접근입니다.
//!
//! ## 응답 계약
//!
//! 일반 에러는 메시지 하나짜리 JSON입니다:
//!
//! ```json
//! { "error": "Not found: Driver not found" }
//! ```
//!
//! 폼 검증 실패(`FieldValidation`)만 필드별 상세를 포함합니다:
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
//! ## 상태 코드 매핑
//!
//! | AppError | HTTP Status | 대표 시나리오 |
//! |----------|-------------|---------------|
//! | `FieldValidation` | 400 Bad Request | DTO 검증 실패 (면허번호 형식 등) |
//! | `ValidationError` | 400 Bad Request | 미등록 기사 배정, ObjectId 형식 오류 |
//! | `NotFound` | 404 Not Found | 없는 기사/차량 조회 |
//! | `ConflictError` | 409 Conflict | 사용자명/면허번호 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 연산 실패 |
//! | `RedisError` | 500 Internal Server Error | 캐시 연산 실패 |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패 등 기타 |
//!
//! ## 전파 패턴
//!
//! ```rust,ignore
//! // 핸들러: validator 에러는 #[from] 변환 덕분에 ? 하나로 끝난다
//! payload.validate()?;
//!
//! // 리포지토리: 외부 에러는 문자열로 감싼다
//! collection.find_one(filter).await
//!     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 변형의 `#[error]` 문자열이 그대로 응답 본문의 `error` 필드가 되므로,
/// 접두어(`Not found: `, `Conflict error: ` 등)는 클라이언트와의 계약이며
/// 함부로 바꾸면 안 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 실패. 연결 끊김, 쿼리 오류, BSON 변환 실패 등
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 연산 실패
    ///
    /// 조회 캐싱 경로에서는 리포지토리가 에러를 무시하고 DB로 폴백하므로
    /// 이 변형이 응답까지 올라오는 일은 드뭅니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// DTO(폼) 검증 실패
    ///
    /// `validator`의 [`ValidationErrors`](validator::ValidationErrors)를
    /// 구조 그대로 보존하여, 필드명 → 메시지 목록 매핑이 응답의
    /// `details`로 내려갑니다. 구조체 수준 검증(비밀번호 일치 등)은
    /// `__all__` 키 아래에 나타납니다.
    ///
    /// `#[from]` 변환이 있으므로 핸들러에서는 `payload.validate()?`만
    /// 쓰면 됩니다.
    #[error("Validation failed")]
    FieldValidation(#[from] validator::ValidationErrors),

    /// 서비스 계층의 의미 검증 실패
    ///
    /// 형식은 맞지만 저장할 수 없는 입력입니다. 존재하지 않는 기사를
    /// 차량에 배정하려는 경우와 경로 파라미터의 ObjectId 형식 오류가
    /// 여기에 해당합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 대상 리소스 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 고유성 규칙 충돌
    ///
    /// 이미 등록된 사용자명이나 다른 기사에게 귀속된 면허번호로
    /// 쓰기를 시도한 경우입니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 그 밖의 내부 오류. 비밀번호 해싱 실패 등
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// `AppError`를 HTTP 응답으로 렌더링합니다.
    ///
    /// 상태 코드 매핑은 의도적으로 모든 변형을 나열합니다.
    /// 새 변형을 추가하면 여기서 컴파일 에러가 나며, 상태 코드를
    /// 정하지 않고 지나칠 수 없습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::FieldValidation(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::RedisError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match self {
            AppError::FieldValidation(errors) => serde_json::json!({
                "error": self.to_string(),
                "details": field_error_map(errors),
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

/// `ValidationErrors`를 필드명 → 메시지 목록 JSON 객체로 평탄화합니다.
///
/// 각 검증 에러는 선언 시 지정한 메시지로 렌더링되며(`Display` 구현),
/// 메시지가 없는 에러는 코드 기반 기본 표현으로 대체됩니다.
/// 중첩 구조체 검증은 현재 DTO에서 사용하지 않으므로 필드 에러만 수집합니다.
fn field_error_map(errors: &validator::ValidationErrors) -> serde_json::Value {
    let mut details = serde_json::Map::new();

    for (field, kind) in errors.errors() {
        if let validator::ValidationErrorsKind::Field(field_errors) = kind {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|error| error.to_string())
                .collect();
            details.insert(field.to_string(), serde_json::Value::from(messages));
        }
    }

    serde_json::Value::Object(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[derive(Validate)]
    struct LoginForm {
        #[validate(length(min = 3, message = "Username is too short"))]
        username: String,
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Unknown driver id".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_validation_error_response() {
        let form = LoginForm {
            username: "ab".to_string(),
        };
        let errors = form.validate().unwrap_err();
        let error = AppError::FieldValidation(errors);
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_field_error_map_preserves_messages() {
        let form = LoginForm {
            username: "ab".to_string(),
        };
        let errors = form.validate().unwrap_err();
        let details = field_error_map(&errors);

        let messages = details["username"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], "Username is too short");
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Driver not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("License number already registered".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_prefixes_match_response_contract() {
        assert_eq!(
            AppError::NotFound("Car not found".to_string()).to_string(),
            "Not found: Car not found"
        );
        assert_eq!(
            AppError::ValidationError("Invalid driver ID format".to_string()).to_string(),
            "Validation error: Invalid driver ID format"
        );
        assert_eq!(
            AppError::ConflictError("Username is already taken".to_string()).to_string(),
            "Conflict error: Username is already taken"
        );
    }
}
