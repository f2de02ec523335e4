//! 어느 계층에도 속하지 않는 보조 기능 모음.
//!
//! 지금은 [`display_terminal`] 하나만 들어 있습니다. 기동 시
//! 레지스트리 진행 상황을 사람이 읽기 좋게 찍어 주는 출력 함수들로,
//! 로거가 뜨기 전에도 동작해야 해서 `log` 대신 `println!`을 씁니다.

pub mod display_terminal;
