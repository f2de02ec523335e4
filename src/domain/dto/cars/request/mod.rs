//! # 차량 관련 요청 DTO 모듈
//!
//! 차량 등록과 수정이 공유하는 요청 데이터 구조를 정의합니다.
//! 두 작업 모두 동일한 폼(모델, 제조사, 배정 기사)을 제출하므로
//! 요청 DTO를 분리하지 않고 `SaveCarRequest` 하나로 사용합니다.

pub mod save_car;

pub use save_car::SaveCarRequest;
