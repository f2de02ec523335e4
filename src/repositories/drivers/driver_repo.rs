//! 기사 컬렉션 데이터 액세스.
//!
//! `drivers` 컬렉션을 읽고 쓰는 모든 코드가 이 파일에 있습니다.
//! 서비스 계층은 여기 메서드만 부르고, BSON 문서나 ObjectId를 직접
//! 만지지 않습니다.

use std::sync::Arc;
use futures_util::StreamExt;
use mongodb::{bson::{doc, oid::ObjectId, DateTime, Document}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::drivers::driver::Driver,
};
use singleton_macro::repository;

/// 기사 리포지토리.
///
/// 조회 패턴별 저장소 선택:
///
/// | 연산 | 저장소 | 비고 |
/// |------|--------|------|
/// | `find_by_id` | Redis → MongoDB | `driver:{id}`, TTL 600초 |
/// | `find_by_username` / `find_by_license_number` | MongoDB만 | 중복 확인용, 호출 빈도 낮음 |
/// | `find_all` | MongoDB만 | `created_at` 내림차순 |
///
/// 쓰기 연산은 성공 후 관련 캐시를 지웁니다. 캐시 삭제 실패는
/// `let _ =`로 무시하는데, 최악의 경우가 10분짜리 낡은 캐시 히트라서
/// 쓰기 자체를 실패시킬 이유가 없기 때문입니다.
///
/// 유니크 보장은 두 겹입니다. [`create`](Self::create)가 먼저 조회로
/// 확인해서 사람이 읽을 메시지(`Username is already taken` 등)로
/// 돌려주고, 동시 요청이 그 틈을 지나도
/// [`create_indexes`](Self::create_indexes)가 만든 unique 인덱스가
/// 저장소 수준에서 막습니다.
#[repository(name = "driver", collection = "drivers")]
pub struct DriverRepository {
    /// 주입되는 MongoDB 연결.
    db: Arc<Database>,

    /// 주입되는 Redis 클라이언트. ID 단건 조회 캐시에만 씁니다.
    redis: Arc<RedisClient>,
}

impl DriverRepository {
    /// 사용자명으로 단건 조회. 등록 시 중복 확인 용도라 캐시를 거치지 않습니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Driver>, AppError> {
        self.collection::<Driver>()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 면허번호로 단건 조회. 등록과 면허번호 변경의 중복 확인에 쓰입니다.
    pub async fn find_by_license_number(&self, license_number: &str) -> Result<Option<Driver>, AppError> {
        self.collection::<Driver>()
            .find_one(doc! { "license_number": license_number })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 단건 조회. 가장 잦은 호출이라 캐시를 앞에 둡니다.
    ///
    /// `driver:{id}` 키를 먼저 보고, 미스면 MongoDB에서 읽어 600초
    /// TTL로 채워 넣습니다. ObjectId로 해석되지 않는 `id`는
    /// `ValidationError("Invalid driver ID format")`로 끝나며 DB까지
    /// 가지 않습니다. 존재하지 않는 기사는 에러가 아니라 `Ok(None)`
    /// 입니다. 404로 바꿀지는 호출자가 정합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Driver>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid driver ID format".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Driver>(&cache_key).await {
            return Ok(Some(cached));
        }

        let driver = self.collection::<Driver>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref driver) = driver {
            let _ = self.redis
                .set_with_expiry(&cache_key, driver, 600)
                .await;
        }

        Ok(driver)
    }

    /// 전체 기사 목록을 최근 등록 순으로 돌려줍니다.
    ///
    /// `created_at` 내림차순 인덱스를 타므로 정렬 비용이 낮습니다.
    /// 커서를 끝까지 소비하다 중간에 디코딩이 실패하면 그 지점에서
    /// `DatabaseError`로 중단합니다.
    pub async fn find_all(&self) -> Result<Vec<Driver>, AppError> {
        let mut cursor = self.collection::<Driver>()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut drivers = Vec::new();

        while let Some(driver) = cursor.next().await {
            match driver {
                Ok(driver) => drivers.push(driver),
                Err(e) => return Err(AppError::DatabaseError(e.to_string())),
            }
        }

        Ok(drivers)
    }

    /// 새 기사를 저장하고 ID가 채워진 엔티티를 돌려줍니다.
    ///
    /// 저장 전에 사용자명과 면허번호를 각각 조회해서 겹치면
    /// `ConflictError`로 중단합니다. 메시지 두 개
    /// (`Username is already taken`,
    /// `License number is already registered`)는 화면에 그대로
    /// 나가는 문구라 바꾸면 안 됩니다. 검사 순서도 고정입니다.
    /// 둘 다 겹치는 입력에는 항상 사용자명 쪽이 먼저 보고됩니다.
    pub async fn create(&self, mut driver: Driver) -> Result<Driver, AppError> {
        if self.find_by_username(&driver.username).await?.is_some() {
            return Err(AppError::ConflictError("Username is already taken".to_string()));
        }

        if self.find_by_license_number(&driver.license_number).await?.is_some() {
            return Err(AppError::ConflictError("License number is already registered".to_string()));
        }

        let result = self.collection::<Driver>()
            .insert_one(&driver)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        driver.id = Some(result.inserted_id.as_object_id().unwrap());

        // 목록 계열 캐시만 지운다. 개별 키는 아직 만들어진 적이 없다.
        let _ = self.invalidate_collection_cache(None).await;

        Ok(driver)
    }

    /// 면허번호만 바꿉니다.
    ///
    /// `$set`이 건드리는 필드는 `license_number`와 `updated_at` 두
    /// 개뿐입니다. 이름이나 사용자명이 같이 넘어와도 반영할 길이
    /// 없습니다. `find_one_and_update` + `ReturnDocument::After`라서
    /// 조회-수정 단계가 원자적이고, 반환값은 변경이 반영된 문서입니다.
    /// 대상이 없으면 `Ok(None)`.
    ///
    /// `license_number`는 호출 전에 형식 검증을 끝낸 값이어야 합니다.
    /// 여기서는 다시 검사하지 않습니다.
    pub async fn update_license_number(&self, id: &str, license_number: &str) -> Result<Option<Driver>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid driver ID format".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_driver = self.collection::<Driver>()
            .find_one_and_update(doc! { "_id": object_id }, license_update_document(license_number))
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated_driver.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated_driver)
    }

    /// 기사를 삭제합니다. 지웠으면 `true`, 원래 없었으면 `false`.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid driver ID format".to_string()))?;

        let result = self.collection::<Driver>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// `drivers` 컬렉션 인덱스를 만듭니다. 기동 시 한 번 불립니다.
    ///
    /// * `username_unique`: `username` 오름차순, UNIQUE
    /// * `license_number_unique`: `license_number` 오름차순, UNIQUE
    /// * `created_at_desc`: 목록 정렬용
    ///
    /// 이미 같은 정의의 인덱스가 있으면 MongoDB가 no-op으로
    /// 처리하므로 재기동마다 불러도 안전합니다. 단, 컬렉션에 이미
    /// 중복 값이 들어 있으면 unique 인덱스 생성이 실패합니다. 그때는
    /// 데이터를 정리하기 전까지 기동 로그에 경고가 남습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Driver>();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let license_index = IndexModel::builder()
            .keys(doc! { "license_number": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("license_number_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([username_index, license_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 면허번호 변경용 `$set` 문서를 만듭니다.
///
/// 수정 대상은 `license_number`와 `updated_at` 두 필드로 고정입니다.
/// 다른 필드가 끼어들면 면허번호 변경이 부분 수정이라는 계약이 깨집니다.
fn license_update_document(license_number: &str) -> Document {
    doc! { "$set": {
        "license_number": license_number,
        "updated_at": DateTime::now(),
    } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_document_touches_only_license_and_timestamp() {
        let update = license_update_document("XYZ98765");
        let set = update.get_document("$set").expect("$set 문서가 있어야 한다");

        let mut keys: Vec<String> = set.keys().map(|k| k.to_string()).collect();
        keys.sort();
        assert_eq!(keys, ["license_number", "updated_at"]);
    }

    #[test]
    fn test_update_document_stores_license_verbatim() {
        let update = license_update_document("ABC12345");
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.get_str("license_number").unwrap(), "ABC12345");
    }
}
