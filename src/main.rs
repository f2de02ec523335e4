//! 택시 플릿 관리 서비스 메인 애플리케이션
//!
//! 기동 순서: 환경 파일 → 로깅 → MongoDB/Redis 연결 → 싱글톤 초기화 →
//! 컬렉션 인덱스 보장 → HTTP 서버. 이후의 모든 요청 처리는
//! `routes::configure_all_routes`에 등록된 핸들러가 담당합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use taxi_fleet_backend::caching::redis::RedisClient;
use taxi_fleet_backend::config::data_config::ServerConfig;
use taxi_fleet_backend::core::registry::ServiceLocator;
use taxi_fleet_backend::db::Database;
use taxi_fleet_backend::repositories::cars::car_repo::CarRepository;
use taxi_fleet_backend::repositories::drivers::driver_repo::DriverRepository;
use taxi_fleet_backend::routes::configure_all_routes;

/// 요청 제한(Rate Limiting) 설정
///
/// `RATE_LIMIT_PER_SECOND`(기본 100)와 `RATE_LIMIT_BURST_SIZE`(기본 200)
/// 환경변수로 조정하며, 값이 없거나 숫자가 아니면 기본값으로 동작합니다.
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        Self {
            per_second: parse_env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // RUST_LOG가 .env 파일에 있을 수 있으므로 환경 파일을 로거보다 먼저 읽는다
    let (profile, env_file) = load_env_file();
    init_logging();

    match env_file {
        Ok(path) => info!("환경 파일 적용: {} (PROFILE={})", path.display(), profile),
        Err(e) => warn!("환경 파일을 읽지 못했습니다 (PROFILE={}): {}", profile, e),
    }

    info!("🚕 택시 플릿 관리 서비스 시작중...");

    let (database, redis_client) = initialize_data_stores().await;

    // 리포지토리/서비스 싱글톤이 주입받을 핵심 리소스 등록
    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .expect("서비스 초기화에 실패했습니다");

    // 사용자명/면허번호 고유 제약을 저장소 수준에서 보장
    ensure_indexes().await;

    info!("✅ 서비스 초기화 완료. HTTP 서버를 시작합니다");

    start_http_server().await
}

/// HTTP 서버를 띄우고 종료될 때까지 대기합니다.
///
/// 미들웨어는 바깥쪽부터 요청 제한 → CORS → 액세스 로그 → 경로 정규화
/// 순서로 적용됩니다. 바인드 주소와 워커 수는 [`ServerConfig`]가
/// 환경변수에서 결정합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트를 열지 못했거나 서버 실행 중 오류가 난 경우
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 http://{} 에서 요청을 받습니다", bind_address);
    info!("   헬스 체크: http://{}/health", bind_address);
    info!("   API 베이스: http://{}/api/v1", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .expect("요청 제한 설정 구성에 실패했습니다");

    info!(
        "🛡️ 요청 제한: 초당 {} 요청 (버스트 {})",
        rate_limit.per_second, rate_limit.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// PROFILE 환경변수에 맞는 .env 파일을 로드합니다
///
/// `PROFILE=prod`이면 `.env.prod`, `dev`(기본값)이면 `.env.dev`,
/// 그 외의 값이면 기본 `.env`를 읽습니다. 이 시점에는 아직 로거가
/// 초기화되지 않았으므로 결과는 호출자가 기록합니다.
fn load_env_file() -> (String, Result<std::path::PathBuf, dotenv::Error>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv(),
    };

    (profile, loaded)
}

/// env_logger를 설정합니다.
///
/// `RUST_LOG`가 비어 있으면 애플리케이션은 info, actix_web은 debug
/// 레벨로 동작합니다.
///
/// ```bash
/// # 특정 모듈만 debug로
/// RUST_LOG=taxi_fleet_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 엽니다
///
/// 두 저장소 중 하나라도 연결에 실패하면 기동을 중단합니다.
/// 반환된 핸들은 `ServiceLocator`에 등록되어 리포지토리들에 주입됩니다.
///
/// # Panics
///
/// * MongoDB 또는 Redis 연결 실패 시
async fn initialize_data_stores() -> (Arc<Database>, Arc<RedisClient>) {
    info!("📡 데이터 스토어 연결을 여는 중...");

    let database = Arc::new(
        Database::new()
            .await
            .expect("MongoDB 연결에 실패했습니다")
    );

    info!("✅ MongoDB 준비 완료");

    let redis_client = Arc::new(
        RedisClient::new()
            .await
            .expect("Redis 연결에 실패했습니다")
    );

    info!("✅ Redis 준비 완료");

    (database, redis_client)
}

/// 기사/차량 컬렉션의 MongoDB 인덱스를 생성합니다
///
/// 사용자명과 면허번호의 고유 인덱스, 목록 조회용 정렬 인덱스를
/// 생성합니다. 이미 존재하는 인덱스는 MongoDB가 무시하므로
/// 재시작 시에도 안전합니다.
///
/// 인덱스 생성 실패는 치명적이지 않습니다. 고유성은 저장 전
/// 중복 검사로도 보장되므로 에러를 기록하고 계속 진행합니다.
async fn ensure_indexes() {
    let driver_repo = DriverRepository::instance();
    if let Err(e) = driver_repo.create_indexes().await {
        error!("기사 컬렉션 인덱스 생성 실패: {}", e);
    }

    let car_repo = CarRepository::instance();
    if let Err(e) = car_repo.create_indexes().await {
        error!("차량 컬렉션 인덱스 생성 실패: {}", e);
    }
}

/// CORS 미들웨어를 구성합니다
///
/// 로컬 개발용 관리자 프론트엔드(3000번 포트)와 자체 서버(8080번 포트)의
/// 출처만 허용합니다. 운영 배포 시 허용 목록을 운영 도메인으로 교체해야
/// 합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        // 쿠키 기반 세션을 쓰는 관리자 화면 지원
        .supports_credentials()
        // Preflight 응답 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수 하나를 숫자로 읽되, 실패하면 기본값을 사용합니다
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            error!(
                "{} 값 '{}'을(를) 숫자로 해석할 수 없어 기본값 {}을 사용합니다",
                key, raw, default
            );
            default
        }),
        Err(_) => default,
    }
}
