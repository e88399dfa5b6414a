//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 계정/프로필 엔티티와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities     - 영속 엔티티 (Account, Profile)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response, 응답 봉투)
//! └── Models       - 토큰 클레임, 인증된 계정 정보
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! `accounts`, `profiles` 테이블과 1:1로 대응되는 구조체입니다.
//! 비밀번호 해시 같은 민감 정보는 엔티티에만 존재하고 DTO로는 넘어가지 않습니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 요청/응답 본문과 `{status, data}` / `{status, message}` 응답 봉투를 정의합니다.
//! 요청 DTO는 `validator`로 구조 검증을 수행합니다.
//!
//! ### [`models`] - 인증 모델
//!
//! JWT 클레임과 미들웨어가 요청 확장에 저장하는 인증된 계정 정보입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Account, NewAccount, Profile, ProfileWithOwner, Role};
pub use models::{AuthenticatedAccount, TokenClaims};
