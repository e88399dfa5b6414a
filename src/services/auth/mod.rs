//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱과 세션 토큰 발급/검증을 담당합니다.
//! 두 기능 모두 trait 뒤에 있어서 테스트에서 다른 구현으로 바꿔 끼울 수 있습니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{BcryptPasswordHasher, JwtTokenService, PasswordHasher, TokenIssuer};
//!
//! let hasher = BcryptPasswordHasher::new(config.bcrypt_cost);
//! let hash = hasher.hash_password("p@ss1")?;
//!
//! let tokens = JwtTokenService::new(&config.jwt);
//! let token = tokens.issue_token(account.id, chrono::Utc::now())?;
//! ```

pub mod password_service;
pub mod token_service;

pub use password_service::{BcryptPasswordHasher, PasswordHasher};
pub use token_service::{extract_bearer_token, JwtTokenService, TokenIssuer};
