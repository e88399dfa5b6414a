//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 각 엔티티는 관계형 테이블 한 개와 1:1로 대응하며, `sqlx::FromRow`로 행에서 직접 매핑됩니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 테이블 | 설명 |
//! |--------|--------|------|
//! | [`Account`](accounts::Account) | `accounts` | 회원 계정 (이메일 unique) |
//! | [`Profile`](profiles::Profile) | `profiles` | 계정에 연결된 읽기 전용 프로필 |
//!
//! ## 설계 원칙
//!
//! - **식별자는 저장소가 부여**: 신규 엔티티는 [`NewAccount`](accounts::NewAccount)처럼 ID 없는 별도 타입으로 표현
//! - **민감 정보 격리**: 비밀번호 해시는 `#[serde(skip_serializing)]`
//! - **부분 상태 금지**: 소유 계정이 필요한 조회 결과는 [`ProfileWithOwner`](profiles::ProfileWithOwner)로만 반환

pub mod accounts;
pub mod profiles;

pub use accounts::*;
pub use profiles::*;
