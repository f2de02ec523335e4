//! Car Entity Implementation
//!
//! 차량 엔티티의 핵심 구현체입니다.
//! 기사와의 다대다 관계는 기사 `ObjectId` 배열 참조로 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 차량 엔티티
///
/// 차량 속성과 배정된 기사 집합을 표현하는 도메인 엔티티입니다.
/// `drivers` 필드는 집합 의미론을 가지며 순서에 의미가 없고,
/// 비어 있는 상태(배정된 기사 없음)도 유효합니다.
/// 배정된 각 ObjectId가 실제 기사를 가리키는지는 저장 시점에
/// 서비스 계층에서 검증됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 차량 모델명
    pub model: String,
    /// 제조사
    pub manufacturer: String,
    /// 배정된 기사들의 ObjectId 참조 (중복 없음, 빈 배열 허용)
    #[serde(default)]
    pub drivers: Vec<ObjectId>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Car {
    /// 새 차량 생성
    ///
    /// 저장 요청이 검증을 통과한 뒤 호출되는 팩토리 메서드입니다.
    /// 기사 ID 목록은 호출 전에 중복이 제거되어 있어야 합니다.
    pub fn new(model: String, manufacturer: String, drivers: Vec<ObjectId>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            model,
            manufacturer,
            drivers,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 배정된 기사 수
    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }
}
