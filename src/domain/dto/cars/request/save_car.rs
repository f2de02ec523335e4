//! # 차량 등록/수정 요청 DTO
//!
//! 차량 생성(`POST /api/v1/cars`)과 전체 수정(`PUT /api/v1/cars/{car_id}`)이
//! 공유하는 요청 구조입니다. 모델명과 제조사는 필수이며, 배정 기사 목록은
//! 비어 있어도 유효합니다.
//!
//! ## 검증 책임 분리
//!
//! - **이 DTO**: 모델/제조사 길이 제약 (형식 검증)
//! - **서비스 계층**: `drivers`에 담긴 기사 ID의 존재 여부 (참조 무결성)
//!
//! 기사 ID는 ObjectId 16진수 문자열로 전달되며, 형식이 잘못되었거나
//! 존재하지 않는 ID가 포함되면 서비스 계층이 쓰기 없이 요청을 거부합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 차량 등록/수정 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "model": "Sonata",
///   "manufacturer": "Hyundai",
///   "drivers": ["507f1f77bcf86cd799439011", "507f1f77bcf86cd799439012"]
/// }
/// ```
///
/// `drivers`는 생략 가능하며, 생략 시 빈 배열로 역직렬화됩니다.
/// 배정 기사가 없는 차량도 정상적인 상태입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveCarRequest {
    /// 차량 모델명 (예: `Sonata`)
    #[validate(length(
        min = 1,
        max = 100,
        message = "Model must be between 1 and 100 characters long"
    ))]
    pub model: String,

    /// 제조사 (예: `Hyundai`)
    #[validate(length(
        min = 1,
        max = 100,
        message = "Manufacturer must be between 1 and 100 characters long"
    ))]
    pub manufacturer: String,

    /// 배정할 기사 ID 목록 (ObjectId 16진수 문자열)
    ///
    /// - 다중 선택 폼 필드에 해당
    /// - 빈 배열 또는 필드 생략 모두 유효
    /// - 존재 여부는 서비스 계층에서 검증
    #[serde(default)]
    pub drivers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_with_drivers_passes() {
        let request = SaveCarRequest {
            model: "Sonata".to_string(),
            manufacturer: "Hyundai".to_string(),
            drivers: vec!["507f1f77bcf86cd799439011".to_string()],
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_driver_selection_is_valid() {
        let request = SaveCarRequest {
            model: "Model 3".to_string(),
            manufacturer: "Tesla".to_string(),
            drivers: Vec::new(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_drivers_field_deserializes_to_empty() {
        let payload = serde_json::json!({
            "model": "Sonata",
            "manufacturer": "Hyundai"
        });

        let request: SaveCarRequest = serde_json::from_value(payload).unwrap();
        assert!(request.drivers.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_model_rejected() {
        let request = SaveCarRequest {
            model: String::new(),
            manufacturer: "Hyundai".to_string(),
            drivers: Vec::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_manufacturer_rejected() {
        let request = SaveCarRequest {
            model: "Sonata".to_string(),
            manufacturer: String::new(),
            drivers: Vec::new(),
        };
        assert!(request.validate().is_err());
    }
}
