use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::cars::car::Car;

/// 차량 응답 DTO
///
/// 배정 기사는 ObjectId 16진수 문자열 배열로 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarResponse {
    pub id: String,
    pub model: String,
    pub manufacturer: String,

    /// 배정된 기사 ID 목록 (빈 배열일 수 있음)
    pub drivers: Vec<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        let Car {
            id,
            model,
            manufacturer,
            drivers,
            created_at,
            updated_at,
        } = car;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            model,
            manufacturer,
            drivers: drivers.iter().map(|driver_id| driver_id.to_hex()).collect(),
            created_at,
            updated_at,
        }
    }
}
