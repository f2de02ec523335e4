//! 기사 도메인 비즈니스 로직.
//!
//! 등록·조회·면허번호 변경·삭제의 규칙이 전부 여기 있습니다. 형식
//! 검증(면허번호 패턴, 비밀번호 강도)은 DTO가 핸들러 단계에서
//! 끝내고 들어오므로, 이 서비스가 다루는 것은 DB를 봐야 판정되는
//! 규칙들입니다. 중복 여부, 존재 여부, 그리고 비밀번호 해싱.

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::{
        entities::drivers::driver::Driver,
        dto::drivers::{
            request::{CreateDriverRequest, UpdateLicenseRequest},
            response::{CreateDriverResponse, DriverResponse},
        },
    },
    repositories::drivers::driver_repo::DriverRepository,
    core::{
        errors::AppError,
    },
};
use crate::config::PasswordConfig;

/// 기사 서비스. Spring의 `@Service` 계층에 해당합니다.
///
/// 지키는 규칙 두 가지:
///
/// 1. 비밀번호 평문은 이 서비스 바깥으로 나가지 않습니다. 들어오자마자
///    bcrypt로 해싱하고, 응답 DTO에는 해시조차 싣지 않습니다.
/// 2. 면허번호 변경은 `license_number`와 `updated_at` 외의 필드를
///    건드리지 않습니다. 면허 갱신 화면이 그 두 값만 바꾸는 화면이기
///    때문이고, 리포지토리의 `$set` 구성까지 이 전제로 맞춰져 있습니다.
///
/// 에러는 전부 `AppError`로 나갑니다. 중복이면 `ConflictError`(409),
/// 대상 없음이면 `NotFound`(404), ObjectId 형식 오류면
/// `ValidationError`(400), 해싱 실패면 `InternalError`(500).
///
/// ```rust,ignore
/// let service = DriverService::instance();
/// let created = service.create_driver(request).await?;
/// ```
#[service(name = "driver")]
pub struct DriverService {
    /// 주입되는 기사 리포지토리 싱글톤.
    driver_repo: Arc<DriverRepository>,
}

impl DriverService {
    /// 새 기사 계정을 만듭니다.
    ///
    /// 비밀번호를 환경별 cost로 bcrypt 해싱한 뒤 엔티티를 만들어
    /// 저장합니다. 사용자명·면허번호 중복은 리포지토리
    /// [`DriverRepository::create`]가 검사해서 `ConflictError`로
    /// 올라오고, 해싱 실패는 `InternalError`
    /// (`Failed to hash password: ...`)입니다.
    ///
    /// bcrypt는 일부러 느린 함수라서 해싱 시간과 전체 처리 시간을
    /// 따로 로그에 남깁니다. 운영 cost(12)에서 요청이 느려 보일 때
    /// 어디서 시간이 갔는지 이 로그로 구분합니다.
    pub async fn create_driver(&self, request: CreateDriverRequest) -> Result<CreateDriverResponse, AppError> {
        let start_time = std::time::Instant::now();

        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_timer = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        log::info!("비밀번호 해싱 소요: {:?} (cost {})", hash_timer.elapsed(), bcrypt_cost);

        let driver = Driver::new(
            request.username,
            request.first_name,
            request.last_name,
            request.license_number,
            password_hash,
        );

        let created_driver = self.driver_repo.create(driver).await?;

        log::info!("기사 등록 처리 소요: {:?}", start_time.elapsed());
        log::info!(
            "✅ Driver registered: {} ({})",
            created_driver.full_name(),
            created_driver.id_string().unwrap_or_default()
        );

        Ok(CreateDriverResponse::new(created_driver))
    }

    /// ID로 기사 한 명을 조회해 DTO로 돌려줍니다.
    ///
    /// 리포지토리의 `Ok(None)`을 여기서
    /// `NotFound("Driver not found")`로 바꿉니다. HTTP 404가 되는
    /// 지점이 이 줄입니다.
    pub async fn get_driver_by_id(&self, id: &str) -> Result<DriverResponse, AppError> {
        let driver = self.driver_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(DriverResponse::from(driver))
    }

    /// 전체 기사 목록을 최근 등록 순 DTO 목록으로 돌려줍니다.
    pub async fn list_drivers(&self) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self.driver_repo.find_all().await?;

        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    /// 면허 갱신으로 바뀐 면허번호를 반영합니다.
    ///
    /// 먼저 새 번호가 이미 등록돼 있는지 봅니다. 이때 찾은 기사가
    /// 본인이면 통과입니다. 자기 현재 번호를 그대로 제출하는 요청을
    /// 중복으로 거절하면 갱신 화면이 저장 불가 상태에 빠지기
    /// 때문입니다. 타인 귀속이면
    /// `ConflictError("License number is already registered")`.
    ///
    /// 통과하면 리포지토리의 부분 업데이트로 `license_number`와
    /// `updated_at`만 바뀌고, 대상 기사가 없으면 `NotFound`입니다.
    pub async fn update_license(&self, id: &str, request: UpdateLicenseRequest) -> Result<DriverResponse, AppError> {
        let driver_oid = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid driver ID format".to_string()))?;

        if let Some(existing) = self.driver_repo.find_by_license_number(&request.license_number).await? {
            // 본인 번호 재제출은 허용
            if existing.id != Some(driver_oid) {
                return Err(AppError::ConflictError("License number is already registered".to_string()));
            }
        }

        let updated_driver = self.driver_repo
            .update_license_number(id, &request.license_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        log::info!("License number updated for driver: {}", id);

        Ok(DriverResponse::from(updated_driver))
    }

    /// 기사 계정을 지웁니다. 물리 삭제라 되돌릴 수 없습니다.
    ///
    /// 차량 문서의 `drivers` 배열에 남는 참조까지 지우지는 않습니다.
    /// 그 정리는 차량 수정 시점에 이뤄집니다.
    pub async fn delete_driver(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.driver_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }

        Ok(())
    }
}
