//! Driver Entity Implementation
//!
//! 기사 엔티티의 핵심 구현체입니다.
//! 로그인 계정 정보(사용자명, 비밀번호 해시)와 운전면허 정보를
//! 하나의 MongoDB 문서로 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 기사 엔티티
///
/// 시스템에 등록된 모든 기사를 표현하는 핵심 도메인 엔티티입니다.
/// `license_number`는 DTO 계층의 형식 검증(대문자 3자 + 숫자 5자)을
/// 통과한 값만 저장되며, 컬렉션 수준에서 unique 인덱스로 보호됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 사용자명 (unique)
    pub username: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 운전면허 번호 (unique, 형식: 대문자 3자 + 숫자 5자)
    pub license_number: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Driver {
    /// 새 기사 생성
    ///
    /// 등록 요청이 검증을 통과한 뒤 호출되는 팩토리 메서드입니다.
    /// 활성 상태로 시작하며 생성/수정 시간이 현재 시각으로 설정됩니다.
    pub fn new(
        username: String,
        first_name: String,
        last_name: String,
        license_number: String,
        password_hash: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            first_name,
            last_name,
            license_number,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 화면 표시용 전체 이름
    ///
    /// `{username}: {first_name} {last_name}` 형식을 사용합니다.
    pub fn full_name(&self) -> String {
        format!("{}: {} {}", self.username, self.first_name, self.last_name)
    }
}
