//! # 면허번호 변경 요청 DTO
//!
//! 기존 기사의 운전 면허번호만 변경하기 위한 단일 필드 요청 구조입니다.
//! 면허 갱신으로 번호가 바뀌는 실무 시나리오를 담당하며,
//! 기사 등록 폼과 정확히 동일한 면허번호 검증 규칙을 재사용합니다.
//!
//! ## 부분 수정 계약
//!
//! 이 요청으로는 `license_number` 외의 어떤 필드도 변경되지 않습니다.
//! 서비스 계층은 이 DTO를 받아 면허번호 필드만 `$set` 하는 부분 업데이트를
//! 수행하므로, 이름/사용자명/활성 상태 등은 기존 값이 그대로 유지됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::validation::validate_license_number;

/// 면허번호 변경 요청 DTO
///
/// 등록 폼의 `license_number` 필드와 동일한 규칙으로 검증됩니다.
/// 규칙이 한 곳(`domain::validation`)에 정의되어 있으므로
/// 두 폼의 검증 동작이 어긋날 수 없습니다.
///
/// # JSON 예제
///
/// ```json
/// { "license_number": "XYZ98765" }
/// ```
///
/// # 에러 응답 예제
///
/// ```json
/// {
///   "error": "Validation failed",
///   "details": {
///     "license_number": ["License number must consist of 3 uppercase letters followed by 5 digits (e.g., ABC12345)"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateLicenseRequest {
    /// 새 운전 면허번호
    ///
    /// - 형식: 대문자 3자 + 숫자 5자 (예: `XYZ98765`)
    /// - 유일성은 서비스 계층에서 별도 검증
    #[validate(custom(function = "validate_license_number"))]
    pub license_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_license_passes() {
        let request = UpdateLicenseRequest {
            license_number: "XYZ98765".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_same_inputs_as_registration_form() {
        // 등록 폼과 동일한 규칙을 공유하는지 확인
        for invalid in ["ABC1234", "ABCD12345", "abc12345", "AB123456", ""] {
            let request = UpdateLicenseRequest {
                license_number: invalid.to_string(),
            };
            assert!(
                request.validate().is_err(),
                "'{}' should be rejected",
                invalid
            );
        }
    }

    #[test]
    fn test_json_round_trip() {
        let payload = serde_json::json!({ "license_number": "ABC12345" });
        let request: UpdateLicenseRequest = serde_json::from_value(payload).unwrap();
        assert!(request.validate().is_ok());
    }
}
