//! # 차량 관련 응답 DTO 모듈
//!
//! 차량 정보를 클라이언트에 전달하는 응답 구조를 정의합니다.
//! 배정 기사는 ObjectId 16진수 문자열 배열로 노출되며,
//! 기사 상세 정보가 필요하면 기사 조회 API를 별도로 호출합니다.

pub mod car_response;

pub use car_response::CarResponse;
