//! 비즈니스 로직 계층.
//!
//! 도메인별로 `#[service]` 구조체 하나씩: [`drivers`]는 기사
//! 생명주기(등록, 조회, 면허번호 변경, 삭제)를, [`cars`]는 차량과
//! 기사 배정(배정 대상 존재 검증 포함)을 맡습니다. 중복 검사나
//! 참조 무결성처럼 요청 단독으로는 판정할 수 없는 규칙이 전부
//! 이 계층에 있고, 형식 검증은 DTO가 먼저 끝내고 들어옵니다.
//!
//! ```rust,ignore
//! let service = DriverService::instance();
//! let driver = service.update_license(&id, payload).await?;
//! ```

pub mod cars;
pub mod drivers;
