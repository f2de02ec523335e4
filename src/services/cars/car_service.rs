//! # 차량 관리 서비스 구현
//!
//! 차량 생명주기와 기사 배정을 관리하는 비즈니스 로직을 구현합니다.
//! 차량 등록과 수정은 동일한 폼을 공유하며, 두 경로 모두에서
//! 배정 기사 목록의 참조 무결성을 저장 전에 검증합니다.
//!
//! ## 참조 무결성 검증
//!
//! 차량 폼의 `drivers` 필드는 기사 ObjectId 문자열 배열입니다.
//! 저장 전에 다음을 순서대로 확인합니다:
//!
//! 1. **형식**: 각 항목이 유효한 ObjectId 16진수 문자열인지
//! 2. **중복**: 같은 기사가 두 번 선택된 경우 하나로 합침
//! 3. **존재**: 각 ID가 실제 등록된 기사를 가리키는지
//!
//! 하나라도 실패하면 어떤 쓰기도 일어나지 않습니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use singleton_macro::service;
use crate::{
    domain::{
        entities::cars::car::Car,
        dto::cars::{
            request::SaveCarRequest,
            response::CarResponse,
        },
    },
    repositories::{
        cars::car_repo::CarRepository,
        drivers::driver_repo::DriverRepository,
    },
    core::{
        errors::AppError,
    },
};

/// 차량 관리 비즈니스 로직 서비스
///
/// 차량 등록, 수정, 조회, 삭제와 기사 배정 규칙을 담당합니다.
/// Spring Framework의 `@Service` 계층과 동일한 위치의 컴포넌트로,
/// 핸들러(형식 검증)와 리포지토리(저장) 사이에서 의미 검증을 수행합니다.
///
/// ## 주요 책임 (Responsibilities)
///
/// 1. **차량 등록/수정 (Save)**
///    - 배정 기사 ID의 형식/존재 검증
///    - 중복 선택 제거
///    - `PUT` 수정 시 속성과 배정 목록 전체 교체
///
/// 2. **차량 조회 (Retrieval)**
///    - ID 기반 검색 및 전체 목록 조회
///    - 엔티티에서 DTO로의 변환
///
/// ## 싱글톤 패턴 및 의존성 주입
///
/// `#[service]` 매크로를 통해 자동으로 싱글톤으로 관리되며,
/// CarRepository가 자동으로 주입됩니다. 기사 존재 확인은
/// `DriverRepository::instance()`를 통해 수행합니다:
///
/// ```rust,ignore
/// let car_service = CarService::instance(); // 항상 동일한 인스턴스
/// ```
///
/// ## 에러 처리 전략
///
/// - **ValidationError**: 잘못된 기사 ID 형식, 존재하지 않는 기사 배정 시도
/// - **NotFound**: 수정/조회/삭제 대상 차량이 존재하지 않음
/// - **DatabaseError**: 저장소 수준 오류
#[service(name = "car")]
pub struct CarService {
    /// 차량 데이터 액세스 리포지토리
    ///
    /// 자동 의존성 주입을 통해 CarRepository 싱글톤이 주입됩니다.
    /// 모든 차량 저장 작업은 이 리포지토리를 통해 수행됩니다.
    car_repo: Arc<CarRepository>,
}

impl CarService {
    /// 새 차량 등록
    ///
    /// 배정 기사 목록을 검증한 뒤 차량을 저장합니다.
    /// 기사가 한 명도 배정되지 않은 차량도 정상적으로 등록됩니다.
    ///
    /// # 인자
    ///
    /// * `request` - 차량 등록 요청 (모델, 제조사, 배정 기사 ID 목록)
    ///
    /// # 반환값
    ///
    /// * `Ok(CarResponse)` - 생성된 차량 정보
    /// * `Err(AppError::ValidationError)` - 기사 ID 형식 오류 또는 미등록 기사
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    ///
    /// # 처리 과정
    ///
    /// 1. **기사 목록 검증**: 형식 → 중복 제거 → 존재 확인
    /// 2. **엔티티 생성**: `Car::new()`로 타임스탬프 초기화
    /// 3. **영구 저장**: Repository를 통한 저장
    pub async fn save_car(&self, request: SaveCarRequest) -> Result<CarResponse, AppError> {
        let driver_ids = self.resolve_driver_ids(&request.drivers).await?;

        let car = Car::new(request.model, request.manufacturer, driver_ids);
        let created_car = self.car_repo.create(car).await?;

        log::info!(
            "✅ Car registered: {} {} with {} assigned drivers ({})",
            created_car.manufacturer,
            created_car.model,
            created_car.driver_count(),
            created_car.id_string().unwrap_or_default()
        );

        Ok(CarResponse::from(created_car))
    }

    /// 차량 전체 수정
    ///
    /// `PUT` 시맨틱에 따라 차량 속성과 배정 기사 목록을 요청 내용으로
    /// 전부 교체합니다. 요청에 빈 배정 목록이 오면 기존 배정이 모두 해제됩니다.
    ///
    /// # 인자
    ///
    /// * `id` - 수정할 차량의 MongoDB ObjectId (16진수 문자열)
    /// * `request` - 차량 수정 요청 (등록과 동일한 폼)
    ///
    /// # 반환값
    ///
    /// * `Ok(CarResponse)` - 수정이 반영된 최신 차량 정보
    /// * `Err(AppError::NotFound)` - 해당 ID의 차량이 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 기사 ID 형식 오류 또는 미등록 기사
    pub async fn update_car(&self, id: &str, request: SaveCarRequest) -> Result<CarResponse, AppError> {
        let driver_ids = self.resolve_driver_ids(&request.drivers).await?;

        let update_doc = doc! {
            "model": request.model,
            "manufacturer": request.manufacturer,
            "drivers": driver_ids,
            "updated_at": DateTime::now(),
        };

        let updated_car = self.car_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        log::info!("Car updated: {}", id);

        Ok(CarResponse::from(updated_car))
    }

    /// ID로 차량 조회
    ///
    /// # 인자
    ///
    /// * `id` - 조회할 차량의 MongoDB ObjectId (16진수 문자열)
    ///
    /// # 반환값
    ///
    /// * `Ok(CarResponse)` - 차량 정보 DTO
    /// * `Err(AppError::NotFound)` - 해당 ID의 차량이 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn get_car_by_id(&self, id: &str) -> Result<CarResponse, AppError> {
        let car = self.car_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        Ok(CarResponse::from(car))
    }

    /// 전체 차량 목록 조회
    ///
    /// 등록된 모든 차량을 최근 등록 순으로 조회하여 DTO 목록으로 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<CarResponse>)` - 차량 목록 (없으면 빈 벡터)
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 조회 오류
    pub async fn list_cars(&self) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.car_repo.find_all().await?;

        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    /// 차량 삭제
    ///
    /// # 인자
    ///
    /// * `id` - 삭제할 차량의 MongoDB ObjectId (16진수 문자열)
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 삭제 성공
    /// * `Err(AppError::NotFound)` - 해당 ID의 차량이 존재하지 않음
    pub async fn delete_car(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.car_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        Ok(())
    }

    /// 배정 기사 ID 목록 검증 및 변환
    ///
    /// 요청으로 받은 기사 ID 문자열 배열을 저장 가능한 `ObjectId` 배열로
    /// 변환합니다. 형식 검사, 중복 제거, 존재 확인을 순서대로 수행하며,
    /// 빈 입력은 그대로 빈 배열을 반환합니다 (배정 없는 차량 허용).
    ///
    /// # 인자
    ///
    /// * `raw_ids` - 클라이언트가 제출한 기사 ID 문자열 목록
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<ObjectId>)` - 중복이 제거된 유효한 기사 ID 목록
    /// * `Err(AppError::ValidationError)` - 형식 오류 또는 미등록 기사 포함
    ///
    /// # 에러 메시지
    ///
    /// 존재하지 않는 기사가 여러 명이면 한 번에 모아서 보고합니다:
    ///
    /// ```text
    /// Validation error: Unknown driver ids: 507f1f77bcf86cd799439011, 507f1f77bcf86cd799439012
    /// ```
    async fn resolve_driver_ids(&self, raw_ids: &[String]) -> Result<Vec<ObjectId>, AppError> {
        let driver_repo = DriverRepository::instance();

        let mut resolved: Vec<ObjectId> = Vec::with_capacity(raw_ids.len());
        let mut unknown: Vec<String> = Vec::new();

        for raw_id in raw_ids {
            let object_id = ObjectId::parse_str(raw_id)
                .map_err(|_| AppError::ValidationError(format!("Invalid driver id format: {}", raw_id)))?;

            // 같은 기사를 두 번 선택한 경우 하나로 합침
            if resolved.contains(&object_id) || unknown.contains(raw_id) {
                continue;
            }

            if driver_repo.find_by_id(raw_id).await?.is_none() {
                unknown.push(raw_id.clone());
                continue;
            }

            resolved.push(object_id);
        }

        if !unknown.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Unknown driver ids: {}",
                unknown.join(", ")
            )));
        }

        Ok(resolved)
    }
}
