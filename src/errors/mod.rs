//! 애플리케이션 에러 모듈
//!
//! [`AppError`](errors::AppError)와 관련 변환 trait을 제공합니다.

pub mod errors;

pub use errors::*;
