//! 웨이즈빈스 백엔드
//!
//! 회원 가입, 로그인, 프로필 조회를 제공하는 이커머스 백엔드의 인증/저장소 코어입니다.
//!
//! # Features
//!
//! - **회원 가입**: bcrypt 비밀번호 해싱, 이메일 중복 방지, 관리자 플래그
//! - **로그인**: 계정 존재 여부를 드러내지 않는 단일 에러, 2시간짜리 JWT 발급
//! - **프로필 조회**: 소유 계정이 채워진 상세 조회, 전체 목록
//! - **PostgreSQL**: sqlx 연결 풀 기반 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가입/로그인 흐름, 해싱, 토큰
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore / ProfileStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use waysbeans_backend::config::AppConfig;
//! use waysbeans_backend::core::ServiceRegistry;
//! use waysbeans_backend::db::Database;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::connect(&config.database).await?;
//! let registry = ServiceRegistry::new(database, &config);
//!
//! let response = registry.account_service.login(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support;
