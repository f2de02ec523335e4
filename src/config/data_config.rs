//! 실행 환경과 서버 바인딩 설정
//!
//! 환경 변수 하나짜리 조회들을 타입이 있는 접근자 뒤로 모아 둡니다.
//! 설정 파일 대신 환경 변수를 쓰는 것은 배포 프로파일(.env.dev / .env.prod)과
//! 컨테이너 오케스트레이션 양쪽에서 같은 방식으로 주입할 수 있기 때문입니다.

use std::env;

/// 애플리케이션 실행 환경
///
/// 보안 강도(bcrypt cost 등)를 환경별로 조절할 때 기준이 됩니다.
/// 감지에 실패하면 가장 보수적인 `Production`으로 동작합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 로컬 개발. 반복 속도를 우선합니다
    Development,
    /// 자동화 테스트 실행 환경
    Test,
    /// 운영과 동일한 구성의 검증 환경
    Staging,
    /// 실제 서비스 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT`를 먼저 보고, 없으면 `NODE_ENV`를 봅니다.
    /// 관리자 프론트엔드와 배포 스크립트를 공유하는 탓에 Node 계열
    /// 변수도 함께 인식합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&raw)
    }

    /// 환경 이름 문자열을 해석합니다 (대소문자 무관).
    ///
    /// `dev`/`development`, `test`/`testing`, `stage`/`staging`을
    /// 인식하며, 그 외의 값은 전부 `Production`으로 간주합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 강도 설정
///
/// 기사 계정 비밀번호를 bcrypt로 해싱할 때 쓰는 cost를 결정합니다.
/// cost가 1 올라갈 때마다 해싱 시간이 두 배가 되므로, 개발 환경에서는
/// 낮게, 운영 환경에서는 높게 둡니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST` 환경 변수가 4~15 범위의 정수면 그 값을 그대로
    /// 사용하고, 없거나 범위를 벗어나면 환경별 기본값으로 돌아갑니다:
    /// Development/Test 4, Staging 10, Production 12.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(raw) = env::var("BCRYPT_COST") {
            if let Ok(cost) = raw.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경의 기본 bcrypt cost
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
///
/// `HOST`(기본 `0.0.0.0`), `PORT`(기본 8080), `SERVER_WORKERS`(기본 4)
/// 환경 변수를 읽습니다. 숫자 파싱에 실패하면 기본값으로 동작합니다.
pub struct ServerConfig;

impl ServerConfig {
    /// 바인딩할 포트
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080)
    }

    /// 바인딩할 호스트 주소
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// HTTP 워커 스레드 수
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_recognizes_aliases() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("testing"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
    }

    #[test]
    fn test_from_str_defaults_to_production() {
        assert_eq!(Environment::from_str(""), Environment::Production);
        assert_eq!(Environment::from_str("qa"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_per_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("SERVER_WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }
}
