//! # 도메인 모듈
//!
//! 기사와 차량이라는 두 개념에 대한 데이터 정의가 전부 여기 있습니다.
//! 저장 형태([`entities`]), API 교환 형태([`dto`]), 그리고 둘 다
//! 참조하는 형식 규칙([`validation`])의 세 덩어리입니다. I/O는 전혀
//! 없습니다. DB를 만지는 코드는 리포지토리에, HTTP를 만지는 코드는
//! 핸들러에 있습니다.
//!
//! 같은 개념이 두 번 정의되는 것은 의도입니다. `Driver` 엔티티에는
//! 비밀번호 해시가 있고 `DriverResponse`에는 없습니다. 저장 스키마와
//! API 계약이 독립적으로 진화할 수 있어야 하고, 민감 필드는 타입
//! 수준에서 잘라내는 것이 가장 확실하기 때문입니다. 변환은
//! `From<Driver> for DriverResponse` 같은 명시적 구현 하나로만
//! 일어납니다.
//!
//! [`validation`]이 별도 모듈인 이유는 면허번호 규칙 하나를 등록
//! 폼과 면허 갱신 폼이 같이 쓰기 때문입니다. 규칙이 한 곳에 있으면
//! 두 폼이 어긋날 방법이 없습니다.
//!
//! 등록 요청 하나가 이 모듈을 지나는 모습:
//!
//! ```rust,ignore
//! let request: CreateDriverRequest = serde_json::from_str(body)?;
//! request.validate()?;                       // dto + validation
//!
//! let driver = Driver::new(                  // entities
//!     request.username,
//!     request.first_name,
//!     request.last_name,
//!     request.license_number,
//!     password_hash,
//! );
//!
//! let saved = driver_repository.create(driver).await?;
//! let response = DriverResponse::from(saved); // dto
//! ```

pub mod dto;
pub mod entities;
pub mod validation;

pub use dto::*;
pub use entities::*;
pub use validation::*;
