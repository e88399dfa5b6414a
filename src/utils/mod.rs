//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 로그 마스킹 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{trim_string, mask_email};
//!
//! let email = trim_string("  ann@x.com ");
//! log::info!("로그인 시도: {}", mask_email(&email));
//! ```

pub mod string_utils;
