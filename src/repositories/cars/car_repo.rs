//! 차량 컬렉션 데이터 액세스.
//!
//! `cars` 컬렉션 입출력 전담. 기사 쪽과 구조는 같지만 유니크 필드가
//! 없어서 중복 검사 없이 바로 저장한다는 점, 그리고 수정이 필드
//! 하나가 아니라 문서 전체 교체(`PUT`)라는 점이 다릅니다.

use std::sync::Arc;
use futures_util::StreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::cars::car::Car,
};
use singleton_macro::repository;

/// 차량 리포지토리.
///
/// 캐시는 `car:{id}` 단건 키 하나(TTL 600초)이고, 쓰기 성공 시
/// 관련 키를 지웁니다. 캐시 실패는 쓰기를 실패시키지 않습니다.
///
/// 배정 목록(`drivers` 배열)에 대해서는 의도적으로 아무것도
/// 검증하지 않습니다. 넘어온 ObjectId 집합이 실제 기사인지는
/// `CarService`가 저장 전에 끝내야 하는 일이고, 여기는 받은 그대로
/// 문서에 싣습니다.
#[repository(name = "car", collection = "cars")]
pub struct CarRepository {
    /// 주입되는 MongoDB 연결.
    db: Arc<Database>,

    /// 주입되는 Redis 클라이언트.
    redis: Arc<RedisClient>,
}

impl CarRepository {
    /// ID로 단건 조회. `car:{id}` 캐시를 먼저 보고, 미스면 MongoDB에서
    /// 읽어 600초 TTL로 채웁니다.
    ///
    /// ObjectId가 아닌 `id`는 `ValidationError("Invalid car ID format")`,
    /// 없는 차량은 `Ok(None)`입니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Car>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid car ID format".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Car>(&cache_key).await {
            return Ok(Some(cached));
        }

        let car = self.collection::<Car>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref car) = car {
            let _ = self.redis
                .set_with_expiry(&cache_key, car, 600)
                .await;
        }

        Ok(car)
    }

    /// 전체 차량 목록, 최근 등록 순.
    pub async fn find_all(&self) -> Result<Vec<Car>, AppError> {
        let mut cursor = self.collection::<Car>()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut cars = Vec::new();

        while let Some(car) = cursor.next().await {
            match car {
                Ok(car) => cars.push(car),
                Err(e) => return Err(AppError::DatabaseError(e.to_string())),
            }
        }

        Ok(cars)
    }

    /// 새 차량을 저장하고 ID가 채워진 엔티티를 돌려줍니다.
    ///
    /// 같은 모델·제조사 차량이 몇 대든 등록될 수 있으므로 기사 쪽과
    /// 달리 사전 중복 조회가 없습니다.
    pub async fn create(&self, mut car: Car) -> Result<Car, AppError> {
        let result = self.collection::<Car>()
            .insert_one(&car)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        car.id = Some(result.inserted_id.as_object_id().unwrap());

        let _ = self.invalidate_collection_cache(None).await;

        Ok(car)
    }

    /// `$set` 문서를 받아 차량을 갱신하고 갱신된 문서를 돌려줍니다.
    ///
    /// 어떤 필드를 담을지는 호출자 몫입니다. `CarService`는 PUT
    /// 시맨틱대로 모델·제조사·배정 목록·`updated_at`을 전부 담아
    /// 보냅니다. `find_one_and_update` + `ReturnDocument::After`라
    /// 반환값이 곧 갱신 후 상태이고, 대상이 없으면 `Ok(None)`.
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<Car>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid car ID format".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_car = self.collection::<Car>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated_car.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated_car)
    }

    /// 차량을 삭제합니다. 지웠으면 `true`, 원래 없었으면 `false`.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid car ID format".to_string()))?;

        let result = self.collection::<Car>()
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

    /// `cars` 컬렉션 인덱스. 목록 정렬용 `created_at_desc` 하나뿐이며
    /// 기동 시 한 번 불립니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Car>();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
