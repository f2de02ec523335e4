//! # 엔티티 모듈
//!
//! MongoDB 문서와 1:1로 대응하는 구조체들입니다. JPA 엔티티에
//! 해당하지만 ORM은 없습니다. `serde` + `bson` 직렬화가 전부이고,
//! 저장과 조회는 리포지토리가 `collection::<T>()`로 직접 합니다.
//!
//! 공통 형태:
//!
//! * `id: Option<ObjectId>`에 `#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]`.
//!   삽입 전에는 `None`이고 MongoDB가 채워 줍니다.
//! * `created_at` / `updated_at`은 `bson::DateTime`. 갱신 연산은
//!   `updated_at`을 함께 `$set` 해야 합니다.
//! * 형식 검증은 여기 없습니다. 엔티티는 이미 검증을 통과해 저장된
//!   값이라는 전제이고, 규칙은 DTO의 `validator` 어트리뷰트에 있습니다.
//!
//! ## 기사-차량 관계
//!
//! 다대다이지만 조인 컬렉션을 두지 않고 `Car.drivers`에 기사
//! `ObjectId` 배열을 넣는 참조 방식입니다. 역방향(기사가 모는 차량
//! 목록)은 현재 화면이 필요로 하지 않아 조회 쿼리로만 풉니다.
//!
//! ```text
//! drivers 컬렉션              cars 컬렉션
//! ┌──────────────────┐       ┌─────────────────────────┐
//! │ _id: ObjectId    │◄──┐   │ _id: ObjectId           │
//! │ username         │   └───│ drivers: [ObjectId, ..] │
//! │ license_number   │       │ model / manufacturer    │
//! └──────────────────┘       └─────────────────────────┘
//! ```
//!
//! 배열에 존재하지 않는 기사 ID가 들어가는 일은 `CarService`의
//! 배정 검증이 막습니다. 엔티티 자체는 무결성을 강제하지 않습니다.
//!
//! ## 스키마를 바꿀 때
//!
//! * `username`, `license_number`의 unique 인덱스는 기동 시
//!   `ensure_indexes`가 만듭니다. 필드 이름을 바꾸면 거기도 바꿀 것.
//! * 기존 문서와의 호환이 필요한 새 필드는 `Option`이나
//!   `#[serde(default)]`로 추가해야 역직렬화가 깨지지 않습니다.

pub mod cars;
pub mod drivers;
