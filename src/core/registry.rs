//! # Component Registry - 싱글톤 의존성 주입 시스템
//!
//! `#[service]` / `#[repository]` 매크로가 등록한 컴포넌트를 보관하고
//! 주입하는 전역 컨테이너입니다. Spring Framework에서 ApplicationContext가
//! 하던 일을 리플렉션 없이, 컴파일 타임 수집(inventory)과 타입 기반
//! 조회(TypeId)로 수행합니다.
//!
//! ## Spring에 대응시키면
//!
//! | Spring 쪽 | 여기 | 비고 |
//! |-----------|------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 컨테이너 |
//! | `@Service` / `@Repository` | `#[service]` / `#[repository]` | 역할별 컴포넌트 선언 |
//! | `@Autowired` | `Arc<T>` 필드 | 필드 타입으로 주입 대상 결정 |
//! | `registerSingleton()` | `ServiceLocator::set()` | 인프라 컴포넌트 수동 등록 |
//! | 컨텍스트 리프레시 | `ServiceLocator::initialize_all()` | 기동 시 일괄 생성 |
//! | `CircularDependencyException` | 패닉 | 기동 단계에서 바로 드러남 |
//!
//! ## 컴포넌트가 만들어지기까지
//!
//! ```text
//! 컴파일 타임   #[repository(name = "driver", collection = "drivers")]
//!               └─ inventory에 RepositoryRegistration("driver_repository") 제출
//!
//! 기동 시       ServiceLocator::set(database) / set(redis_client)
//!               └─ 매크로 없이 만들어지는 인프라 리소스를 먼저 등록
//!
//!               ServiceLocator::initialize_all()
//!               └─ 수집된 등록 정보의 생성자를 리포지토리 → 서비스 순으로 실행
//!
//! 요청 처리 중  DriverService::instance()
//!               └─ ServiceLocator::get::<DriverService>() → 캐시된 Arc 복제
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[repository(name = "driver", collection = "drivers")]
//! struct DriverRepository {
//!     db: Arc<Database>,        // ServiceLocator::set()으로 등록된 리소스
//!     redis: Arc<RedisClient>,
//! }
//!
//! #[service(name = "driver")]
//! struct DriverService {
//!     driver_repo: Arc<DriverRepository>, // 매크로가 get()으로 채움
//! }
//! ```
//!
//! ## 구현 특성
//!
//! - 타입당 인스턴스는 정확히 하나이며 `TypeId` 키로 캐시됩니다
//! - 이름 조회는 기동 후 한 번 구성되는 해시맵으로 O(1)입니다
//! - `RwLock`으로 보호되어 여러 워커 스레드에서 동시에 호출해도 안전합니다
//! - 순환 의존성은 초기화-중 집합으로 감지되어 즉시 패닉합니다

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스의 공통 인터페이스
///
/// `#[service]` 매크로가 붙은 구조체에 자동 구현됩니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 레지스트리에서 이 서비스를 식별하는 이름
    fn name(&self) -> &str;

    /// 인스턴스 생성 직후 한 번 호출되는 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리의 공통 인터페이스
///
/// `#[repository]` 매크로가 붙은 구조체에 자동 구현됩니다.
/// 서비스와 달리 담당 MongoDB 컬렉션 이름을 함께 노출합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 레지스트리에서 이 리포지토리를 식별하는 이름
    fn name(&self) -> &str;

    /// 이 리포지토리가 읽고 쓰는 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 인스턴스 생성 직후 한 번 호출되는 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 inventory에 제출하는 등록 정보
pub struct ServiceRegistration {
    /// 매크로 인자에서 유래한 등록 이름 (`driver_service` 형태)
    pub name: &'static str,
    /// 싱글톤 인스턴스를 만들어 `Box<Arc<T>>`로 돌려주는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// `#[repository]` 매크로가 inventory에 제출하는 등록 정보
///
/// 구조는 [`ServiceRegistration`]과 같지만, 초기화 순서를 역할별로
/// 제어하기 위해 별도 타입으로 수집합니다.
pub struct RepositoryRegistration {
    /// 매크로 인자에서 유래한 등록 이름 (`driver_repository` 형태)
    pub name: &'static str,
    /// 싱글톤 인스턴스를 만들어 `Box<Arc<T>>`로 돌려주는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

// 매크로가 제출한 등록 정보를 링커 수준에서 수집
inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 엔티티명("driver") → 서비스 등록 정보 조회 테이블
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (strip_role_suffix(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

/// 엔티티명("driver") → 리포지토리 등록 정보 조회 테이블
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (strip_role_suffix(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름에서 역할 접미사를 떼어 엔티티명만 남깁니다
///
/// `driver_service`와 `driver_repository`는 둘 다 `driver`가 되어
/// 타입 이름(`DriverService` / `DriverRepository`)과 맞춰집니다.
fn strip_role_suffix(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 타입별로 하나의 인스턴스를 보관하는 전역 싱글톤 저장소입니다.
/// 두 종류의 컴포넌트를 다룹니다:
///
/// - **매크로 등록 컴포넌트**: `#[service]` / `#[repository]`가 제출한
///   생성자를 첫 요청(또는 `initialize_all`) 시점에 실행해 채웁니다
/// - **인프라 리소스**: `Database`, `RedisClient`처럼 비동기 생성이
///   필요한 것들은 기동 코드가 [`ServiceLocator::set`]으로 직접 넣습니다
///
/// 캐시(`instances`)와 초기화-중 집합(`initializing`)은 `RwLock`으로
/// 보호되며, 읽기 경로는 잠금 경합 없이 동작합니다.
pub struct ServiceLocator {
    /// TypeId → 생성 완료된 싱글톤 인스턴스
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 생성자가 실행 중인 타입들. 순환 의존성 감지에 사용
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다
    ///
    /// Spring의 `ApplicationContext.getBean(Class<T>)`에 해당합니다.
    /// 캐시에 있으면 `Arc` 복제만 일어나고, 없으면 타입 이름의 역할
    /// 접미사(`...Service` / `...Repository`)에 맞는 레지스트리에서
    /// 생성자를 찾아 실행한 뒤 캐시에 넣습니다.
    ///
    /// ```rust,ignore
    /// let driver_service = ServiceLocator::get::<DriverService>();
    /// let car_repo = ServiceLocator::get::<CarRepository>();
    /// ```
    ///
    /// # Panics
    ///
    /// 설정 오류를 기동 단계에서 드러내기 위해 패닉합니다:
    ///
    /// - 순환 의존성 (A가 B를, B가 다시 A를 주입받는 경우)
    /// - 등록되지 않은 타입 요청
    /// - 생성자가 요청 타입과 다른 값을 반환한 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(existing) = Self::lookup_cached::<T>(&type_id) {
            return existing;
        }

        Self::mark_initializing(type_id, type_name);

        let result = std::panic::catch_unwind(|| Self::construct::<T>(type_id, type_name));

        // 성공/실패와 무관하게 초기화-중 표시는 걷어낸다
        LOCATOR.initializing.write().unwrap().remove(&type_id);

        match result {
            Ok(instance) => instance,
            Err(payload) => {
                eprintln!("❌ {} 인스턴스 생성 실패: {:?}", type_name, payload);
                panic!("failed to construct {}", type_name);
            }
        }
    }

    /// 캐시에서 인스턴스를 찾아 복제합니다
    fn lookup_cached<T: 'static + Send + Sync>(type_id: &TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();

        instances.get(type_id).map(|instance| {
            instance
                .clone()
                .downcast::<T>()
                .expect("registered instance has unexpected type")
        })
    }

    /// 타입을 초기화-중 집합에 넣습니다. 이미 들어 있으면 순환 의존성입니다
    fn mark_initializing(type_id: TypeId, type_name: &str) {
        {
            let initializing = LOCATOR.initializing.read().unwrap();
            if initializing.contains(&type_id) {
                panic!("circular dependency: {} is already being constructed", type_name);
            }
        }

        LOCATOR.initializing.write().unwrap().insert(type_id);
    }

    /// 레지스트리에서 생성자를 찾아 실행하고 결과를 캐시에 넣습니다
    fn construct<T: 'static + Send + Sync>(type_id: TypeId, type_name: &str) -> Arc<T> {
        let mut instances = LOCATOR.instances.write().unwrap();

        // 쓰기 잠금을 기다리는 사이 다른 스레드가 먼저 만들었을 수 있다
        if let Some(instance) = instances.get(&type_id) {
            return instance
                .clone()
                .downcast::<T>()
                .expect("registered instance has unexpected type");
        }

        let basename = Self::type_basename(type_name);
        let constructor = Self::find_constructor(basename).unwrap_or_else(|| {
            panic!(
                "no registration for {}. annotate it with #[service]/#[repository] \
                 or register it manually via ServiceLocator::set()",
                type_name
            )
        });

        match constructor().downcast::<Arc<T>>() {
            Ok(arc_instance) => {
                let instance = (*arc_instance).clone();
                instances.insert(type_id, instance.clone() as Arc<dyn Any + Send + Sync>);
                instance
            }
            Err(_) => panic!("constructor for {} produced a different type", type_name),
        }
    }

    /// 역할 접미사에 맞는 레지스트리에서 생성자를 찾습니다
    ///
    /// `DriverRepository` → 리포지토리 테이블의 `driver`,
    /// `DriverService` → 서비스 테이블의 `driver`.
    fn find_constructor(basename: &str) -> Option<fn() -> Box<dyn Any + Send + Sync>> {
        if let Some(entity) = basename.strip_suffix("Repository") {
            return REPOSITORY_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| registration.constructor);
        }

        if let Some(entity) = basename.strip_suffix("Service") {
            return SERVICE_NAME_CACHE
                .get(&entity.to_lowercase())
                .map(|registration| registration.constructor);
        }

        None
    }

    /// 모듈 경로가 붙은 타입 이름에서 마지막 조각만 떼어냅니다
    ///
    /// `std::any::type_name`은 `taxi_fleet_backend::services::drivers::driver_service::DriverService`
    /// 같은 전체 경로를 주므로, 레지스트리 매칭에는 `DriverService`만 사용합니다.
    fn type_basename(type_name: &str) -> &str {
        type_name.rsplit("::").next().unwrap_or(type_name)
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다
    ///
    /// 매크로로 선언할 수 없는 인프라 리소스를 위한 진입점입니다.
    /// `Database`와 `RedisClient`는 비동기 연결 과정이 필요해
    /// 기동 코드에서 만든 뒤 이 메서드로 넣습니다.
    ///
    /// ```rust,ignore
    /// ServiceLocator::set(Arc::new(Database::new().await?));
    /// ServiceLocator::set(Arc::new(RedisClient::new().await?));
    ///
    /// // 인프라가 준비된 뒤에야 리포지토리/서비스를 만들 수 있다
    /// ServiceLocator::initialize_all().await?;
    /// ```
    ///
    /// 같은 타입을 다시 등록하면 기존 인스턴스를 대체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        println!("📦 Registering external component: {}", Self::type_basename(type_name));

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 컴포넌트를 기동 시점에 일괄 생성합니다
    ///
    /// 지연 생성에 맡기면 첫 요청이 생성 비용을 떠안고, 설정 오류도
    /// 그때서야 드러납니다. 이 메서드는 리포지토리를 먼저, 서비스를
    /// 나중에 인스턴스화하여 주입 순서를 보장하고 진행 상황을 콘솔에
    /// 출력합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 WIRING COMPONENT REGISTRY");

        let repositories: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        if !repositories.is_empty() {
            print_step_start(1, "Instantiating repositories");

            for registration in &repositories {
                print_sub_task(registration.name, "Creating...");
                let _ = (registration.constructor)();
                print_sub_task(registration.name, "✓ Ready");
            }

            print_step_complete(1, "Repositories ready", repositories.len());
        }

        let services: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        if !services.is_empty() {
            print_step_start(2, "Instantiating services");

            for registration in &services {
                print_sub_task(registration.name, "Creating...");
                let _ = (registration.constructor)();
                print_sub_task(registration.name, "✓ Ready");
            }

            print_step_complete(2, "Services ready", services.len());
        }

        print_final_summary(repositories.len(), services.len());

        Ok(())
    }
}

/// 전역 컨테이너 인스턴스. 첫 접근 시 생성되어 프로세스가 끝날 때까지 유지됩니다
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_role_suffix_for_services() {
        assert_eq!(strip_role_suffix("driver_service"), "driver");
        assert_eq!(strip_role_suffix("car_service"), "car");
    }

    #[test]
    fn test_strip_role_suffix_for_repositories() {
        assert_eq!(strip_role_suffix("driver_repository"), "driver");
        assert_eq!(strip_role_suffix("car_repository"), "car");
    }

    #[test]
    fn test_strip_role_suffix_leaves_plain_names() {
        assert_eq!(strip_role_suffix("driver"), "driver");
    }

    #[test]
    fn test_type_basename_drops_module_path() {
        assert_eq!(
            ServiceLocator::type_basename("taxi_fleet_backend::services::DriverService"),
            "DriverService"
        );
        assert_eq!(ServiceLocator::type_basename("CarService"), "CarService");
    }
}
