//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청 본문을 DTO로 받아 `ServiceRegistry`의 서비스에 넘기고,
//! 결과를 `{status, data}` 봉투에 담아 돌려줍니다. 에러는 `AppError`가
//! `{status, message}` 응답으로 변환합니다.
//!
//! # Modules
//!
//! - [`auth`] - 회원 가입, 로그인
//! - [`profiles`] - 프로필 목록/상세 (인증 필요)

pub mod auth;
pub mod profiles;
