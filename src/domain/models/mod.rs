//! # Domain Models Module
//!
//! 영속되지 않는 인증 관련 모델을 정의합니다.
//!
//! - [`token`] - JWT 세션 토큰 클레임 (`id`, `iat`, `exp`)
//! - [`auth`] - 토큰 검증 후 요청 확장에 저장되는 [`AuthenticatedAccount`](auth::AuthenticatedAccount)

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
