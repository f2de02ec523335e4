use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::drivers::driver::Driver;

/// 기사 응답 DTO
///
/// 비밀번호 해시를 제외한 기사 정보를 클라이언트에 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,

    /// 운전 면허번호 (대문자 3자 + 숫자 5자)
    pub license_number: String,

    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        let Driver {
            id,
            username,
            first_name,
            last_name,
            license_number,
            is_active,
            created_at,
            updated_at,
            ..
        } = driver;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            first_name,
            last_name,
            license_number,
            is_active,
            created_at,
            updated_at,
        }
    }
}

/// 기사 등록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDriverResponse {
    pub driver: DriverResponse,
    pub message: String,
}

impl CreateDriverResponse {
    /// 등록 완료 응답 생성
    pub fn new(driver: Driver) -> Self {
        Self {
            driver: DriverResponse::from(driver),
            message: "Driver registered successfully".to_string(),
        }
    }
}
