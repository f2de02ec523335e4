//! 기사 등록 폼의 요청 본문.
//!
//! 등록 화면이 보내는 여섯 필드를 받아 형식 규칙을 적용합니다.
//! 규칙 요약:
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `username` | 3~30자, 영문·숫자·언더스코어 |
//! | `password` | 8자 이상, 대문자·소문자·숫자 각 1개 이상 |
//! | `password_confirm` | `password`와 동일 (구조체 수준 검증) |
//! | `first_name` / `last_name` | 각 1~50자 |
//! | `license_number` | 정확히 8자, 대문자 3 + 숫자 5 |
//!
//! 면허번호 규칙의 본체는 [`crate::domain::validation`]에 하나만
//! 있고, 이 폼과 면허번호 변경 폼이 같은 함수를 참조합니다. 길이
//! 검사가 형식 검사보다 먼저라서 한 제출에 두 면허번호 에러가 같이
//! 나오는 일은 없습니다.
//!
//! 여기서 판정할 수 없는 것, 즉 사용자명과 면허번호가 이미 쓰이고
//! 있는지는 서비스 계층이 DB를 보고 따로 검사합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::validation::validate_license_number;

/// 기사 등록 요청.
///
/// `web::Json`으로 역직렬화된 뒤 핸들러가 `validate()?`를 부릅니다.
/// 실패 응답은 필드별로 모입니다. 비밀번호 불일치만 특정 필드의
/// 잘못이 아니라서 `__all__` 키로 갑니다.
///
/// ```json
/// {
///   "username": "kim_driver",
///   "password": "SecurePass123",
///   "password_confirm": "SecurePass123",
///   "first_name": "Minjun",
///   "last_name": "Kim",
///   "license_number": "ABC12345"
/// }
/// ```
///
/// 검증 실패 시 400 본문:
///
/// ```json
/// {
///   "error": "Validation failed",
///   "details": {
///     "license_number": ["License number must be exactly 8 characters long"],
///     "__all__": ["Passwords do not match"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct CreateDriverRequest {
    /// 로그인 ID. URL 경로에 들어갈 수 있는 문자만 받습니다.
    #[validate(length(
        min = 3,
        max = 30,
        message = "Username must be between 3 and 30 characters long"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 평문 비밀번호. 서비스 계층이 bcrypt로 해싱한 뒤 버리며,
    /// 이 평문이 저장되거나 로그에 남는 일은 없습니다.
    #[validate(length(
        min = 8,
        message = "Password must be at least 8 characters long"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 오타 방지용 재입력. 일치 검사는 구조체 수준 검증이 합니다.
    pub password_confirm: String,

    /// 이름. 한글 등 유니코드 전부 허용.
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters long"
    ))]
    pub first_name: String,

    /// 성.
    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters long"
    ))]
    pub last_name: String,

    /// 운전면허번호. 형식 규칙은 면허번호 변경 폼과 공유합니다.
    #[validate(custom(function = "validate_license_number"))]
    pub license_number: String,
}

/// `password` == `password_confirm` 구조체 수준 검사.
/// 실패는 코드 `passwords_mismatch`, `__all__` 키로 보고됩니다.
fn validate_passwords_match(req: &CreateDriverRequest) -> Result<(), ValidationError> {
    if req.password != req.password_confirm {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("Passwords do not match".into()));
    }
    Ok(())
}

/// 사용자명 문자 집합 검사 (코드 `invalid_username`).
///
/// `kim_driver123`은 통과, `kim-driver`나 `kim@taxi`는 거절.
/// URL 인코딩 없이 경로에 넣을 수 있는 범위로 제한한 것입니다.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("Username may only contain letters, digits, and underscores".into()));
    }
    Ok(())
}

/// 비밀번호 복잡성 검사 (코드 `weak_password`).
///
/// 대문자·소문자·숫자 세 종류가 모두 있어야 통과합니다. 특수문자는
/// 요구하지 않습니다. 길이 하한(8자)은 필드 어트리뷰트가 따로
/// 검사하므로 여기는 구성만 봅니다.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_digit(10));

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("Password must contain uppercase, lowercase letters and digits".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationErrorsKind;

    /// 모든 필드가 유효한 기준 요청을 생성한다.
    fn base_request() -> CreateDriverRequest {
        CreateDriverRequest {
            username: "kim_driver".to_string(),
            password: "SecurePass123".to_string(),
            password_confirm: "SecurePass123".to_string(),
            first_name: "Minjun".to_string(),
            last_name: "Kim".to_string(),
            license_number: "ABC12345".to_string(),
        }
    }

    /// 특정 키에 수집된 에러 메시지 목록을 꺼낸다.
    fn messages_for(errors: &validator::ValidationErrors, key: &str) -> Vec<String> {
        errors
            .errors()
            .iter()
            .filter(|(field, _)| field.as_ref() == key)
            .flat_map(|(_, kind)| match kind {
                ValidationErrorsKind::Field(field_errors) => field_errors
                    .iter()
                    .map(|error| error.to_string())
                    .collect::<Vec<_>>(),
                _ => Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_license_length_error_reported_under_license_field() {
        let mut request = base_request();
        request.license_number = "ABCD12345".to_string();

        let errors = request.validate().unwrap_err();
        let messages = messages_for(&errors, "license_number");
        assert_eq!(
            messages,
            vec!["License number must be exactly 8 characters long".to_string()]
        );
    }

    #[test]
    fn test_license_format_error_reported_under_license_field() {
        let mut request = base_request();
        request.license_number = "abc12345".to_string();

        let errors = request.validate().unwrap_err();
        let messages = messages_for(&errors, "license_number");
        assert_eq!(
            messages,
            vec![
                "License number must consist of 3 uppercase letters followed by 5 digits (e.g., ABC12345)"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_password_mismatch_reported_under_all_key() {
        let mut request = base_request();
        request.password_confirm = "DifferentPass123".to_string();

        let errors = request.validate().unwrap_err();
        let messages = messages_for(&errors, "__all__");
        assert_eq!(messages, vec!["Passwords do not match".to_string()]);

        // 필드 자체는 유효하므로 다른 키로는 에러가 보고되지 않는다
        assert!(messages_for(&errors, "password").is_empty());
        assert!(messages_for(&errors, "password_confirm").is_empty());
    }

    #[test]
    fn test_weak_password_rejected() {
        let mut request = base_request();
        request.password = "alllowercase1".to_string();
        request.password_confirm = "alllowercase1".to_string();

        let errors = request.validate().unwrap_err();
        let messages = messages_for(&errors, "password");
        assert_eq!(
            messages,
            vec!["Password must contain uppercase, lowercase letters and digits".to_string()]
        );
    }

    #[test]
    fn test_username_with_forbidden_characters_rejected() {
        let mut request = base_request();
        request.username = "kim-driver".to_string();

        let errors = request.validate().unwrap_err();
        let messages = messages_for(&errors, "username");
        assert_eq!(
            messages,
            vec!["Username may only contain letters, digits, and underscores".to_string()]
        );
    }

    #[test]
    fn test_json_deserialization_matches_form_fields() {
        let payload = serde_json::json!({
            "username": "kim_driver",
            "password": "SecurePass123",
            "password_confirm": "SecurePass123",
            "first_name": "Minjun",
            "last_name": "Kim",
            "license_number": "ABC12345"
        });

        let request: CreateDriverRequest = serde_json::from_value(payload).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.license_number, "ABC12345");
    }
}
