//! # 코어 모듈
//!
//! 프레임워크 성격의 코드만 모아 둔 곳입니다. 업무 규칙은 없고,
//! 나머지 계층이 기대는 두 가지 기반을 제공합니다.
//!
//! | 서브모듈 | 책임 | Spring으로 치면 |
//! |----------|------|-----------------|
//! | [`errors`] | 전 계층 공용 에러 타입과 HTTP 응답 변환 | `@ControllerAdvice` + `ProblemDetail` |
//! | [`registry`] | `#[service]` / `#[repository]` 컴포넌트의 수집과 조립 | `ApplicationContext` |
//!
//! ## 에러 흐름
//!
//! 리포지토리와 서비스는 전부 `Result<T, AppError>`를 돌려주고,
//! 핸들러는 `?`로 넘기기만 하면 `ResponseError` 구현이 상태 코드와
//! JSON 본문을 만들어 냅니다. 변형별 메시지 접두어는 클라이언트
//! 계약이므로 [`errors`] 쪽 문서를 먼저 읽고 변경하세요.
//!
//! ## 컴포넌트 등록
//!
//! ```rust,ignore
//! use singleton_macro::service;
//!
//! #[service]
//! pub struct DriverService {
//!     driver_repository: Arc<DriverRepository>,
//! }
//! ```
//!
//! 매크로가 `inventory` 제출물을 만들어 두면 기동 시
//! [`registry::ServiceLocator::initialize_all`]이 리포지토리 → 서비스
//! 순서로 인스턴스를 만들어 등록합니다. 이후 어디서든
//! `DriverService::instance()`로 같은 `Arc`를 받습니다.
//!
//! ## 기동이 패닉으로 죽는 경우
//!
//! 레지스트리 패닉은 전부 구성 오류라서 빨리 죽는 쪽을 택했습니다.
//! 메시지별 원인:
//!
//! * `no registration for CarService. annotate it with #[service]/#[repository]
//!   or register it manually via ServiceLocator::set()`: 어트리뷰트를
//!   빼먹었거나, `Database`처럼 매크로를 못 쓰는 외부 타입을
//!   `ServiceLocator::set()`으로 넣기 전에 꺼내려 한 경우입니다.
//! * `circular dependency: DriverService is already being constructed`:
//!   A가 B를 만들다가 B가 다시 A를 요구하는 순환입니다. 한쪽 의존을
//!   끊거나 호출 시점 조회(`instance()`)로 미루세요.
//! * `❌ DriverService 인스턴스 생성 실패: ...` (stderr): 생성자
//!   내부 패닉입니다. 생성자에서는 필드 조립만 하고, 연결 확인 같은
//!   실패 가능한 일은 `Service::init()`으로 옮기는 것이 규칙입니다.

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
