//! 기사 응답 타입 두 가지.
//!
//! [`driver_response::DriverResponse`]는 조회·목록·수정 결과의 표준
//! 모양이고, [`driver_response::CreateDriverResponse`]는 등록 직후에만
//! 쓰이는 확장형(기사 + 완료 메시지)입니다. 어느 쪽이든 비밀번호
//! 해시는 타입에 필드 자체가 없어서 실수로도 나갈 수 없습니다.
//!
//! 서비스 계층이 이미 이 타입들로 변환해서 돌려주므로 핸들러는
//! `HttpResponse::Ok().json(...)`에 싣기만 합니다.

pub mod driver_response;

pub use driver_response::{CreateDriverResponse, DriverResponse};
