//! MongoDB 연결 보관소.
//!
//! 프로세스 전체가 연결 하나를 공유합니다. `main`이 기동 초입에
//! [`Database::new`]로 연결과 ping 검증을 마친 뒤 `ServiceLocator`에
//! 넣어 두면, 리포지토리들이 DI로 받아 `collection::<T>()` 호출에
//! 씁니다. 연결에 문제가 있으면 첫 쿼리가 아니라 기동 단계에서
//! 죽는 것이 이 설계의 요점입니다.
//!
//! 접속 정보는 환경 변수 두 개가 전부입니다. `MONGODB_URI`
//! (기본 `mongodb://localhost:27017`)와 `DATABASE_NAME`
//! (기본 `taxi_fleet_dev`).

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// MongoDB 클라이언트 + 대상 데이터베이스 이름 묶음.
///
/// `mongodb::Client`는 내부에 연결 풀을 가진 핸들이라 `Clone`해도
/// 연결이 늘지 않습니다. 리포지토리마다 `Arc<Database>` 복제본을
/// 쥐는 구조가 그래서 가능합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수로 연결을 만들고 ping까지 확인합니다.
    ///
    /// URI 파싱 실패, 접속 실패, ping 실패 모두 에러로 돌아가며
    /// `main`은 이를 받으면 기동을 포기합니다. `app_name`을 심어
    /// 두므로 MongoDB 서버 로그와 프로파일러에서 이 서비스의 연결을
    /// `taxi_fleet`으로 식별할 수 있습니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = env_or("MONGODB_URI", "mongodb://localhost:27017");
        let database_name = env_or("DATABASE_NAME", "taxi_fleet_dev");

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("taxi_fleet".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB ping 응답 확인: 데이터베이스 '{}'", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 대상 데이터베이스 핸들. 리포지토리의 컬렉션 접근이 전부 여기를
    /// 지납니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 클라이언트 자체가 필요한 경우용 (세션, 트랜잭션 등).
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 설정된 데이터베이스 이름.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
