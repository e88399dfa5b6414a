//! 계정 서비스 모듈
//!
//! 회원 가입과 로그인 흐름을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::accounts::AccountService;
//!
//! let service = AccountService::new(account_store, password_hasher, token_issuer);
//! let response = service.login(request).await?;
//! ```

pub mod account_service;

pub use account_service::AccountService;
