//! # 설정 모듈
//!
//! 환경 변수 기반 설정의 진입점입니다. Spring의 `@Configuration` +
//! `@Value` 조합이 하던 일을 [`data_config`]의 정적 접근자들이 담당하며,
//! 민감한 값은 코드에 두지 않고 전부 환경 변수로만 받습니다.
//!
//! ## 읽는 환경 변수 정리
//!
//! 데이터 스토어 (각 모듈이 직접 읽음):
//!
//! ```bash
//! MONGODB_URI="mongodb://localhost:27017"
//! DATABASE_NAME="taxi_fleet"
//! REDIS_URL="redis://127.0.0.1:6379"
//! ```
//!
//! 서버/보안 (이 모듈이 읽음):
//!
//! ```bash
//! HOST="0.0.0.0"          # 기본값
//! PORT="8080"             # 기본값
//! SERVER_WORKERS="4"      # 기본값
//! ENVIRONMENT="production" # development | test | staging | production
//! BCRYPT_COST="12"         # 4~15, 생략 시 환경별 기본값
//! ```
//!
//! 값이 없거나 파싱에 실패해도 기동은 계속됩니다. 모든 접근자가
//! 안전한 기본값을 가지고 있고, 보안 관련 기본값은 가장 보수적인
//! 쪽(Production)을 향합니다.
//!
//! ```rust,ignore
//! use crate::config::{Environment, PasswordConfig, ServerConfig};
//!
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let cost = PasswordConfig::bcrypt_cost();
//! ```

pub mod data_config;

pub use data_config::*;
