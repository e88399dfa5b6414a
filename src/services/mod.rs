//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 저장소와 인증 컴포넌트를 주입받습니다.
//! 전역 상태를 읽지 않으므로 테스트에서 대역으로 바꿔 끼우기 쉽습니다.
//!
//! # Features
//!
//! - 회원 가입 / 로그인 흐름
//! - 프로필 조회
//! - bcrypt 비밀번호 해싱, JWT 세션 토큰
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{accounts::AccountService, profiles::ProfileService};
//!
//! let accounts = AccountService::new(account_store, hasher, tokens);
//! let profiles = ProfileService::new(profile_store);
//! ```

pub mod accounts;
pub mod auth;
pub mod profiles;
