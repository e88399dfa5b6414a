//! # Core Module
//!
//! 서비스 연결(wiring)을 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 레지스트리
//! - **ServiceRegistry**: 기동 시 한 번 구성되는 서비스 묶음
//! - **명시적 주입**: 저장소, 해셔, 토큰 발급기를 생성자로 연결
//! - **테스트 대역**: `from_parts`로 메모리 저장소를 끼워 넣을 수 있음
//!
//! 에러 타입은 [`crate::errors`]에 있습니다.

pub mod registry;

pub use registry::ServiceRegistry;
