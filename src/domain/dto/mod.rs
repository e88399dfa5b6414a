//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── result.rs           # 공통 응답 봉투 ({status, data} / {status, message})
//! ├── accounts/           # 계정 관련 DTO
//! │   ├── request.rs      # RegisterRequest, LoginRequest
//! │   └── response.rs     # RegisterResponse, LoginResponse, AccountResponse
//! └── profiles/           # 프로필 관련 DTO
//!     └── response.rs     # ProfileResponse, ProfileDetailResponse
//! ```
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **보안**: 비밀번호 해시는 어떤 응답 DTO에도 포함되지 않음
//! - **검증 내장**: 요청 DTO는 `validator` derive로 구조 검증

pub mod result;
pub mod accounts;
pub mod profiles;

pub use result::{ErrorResult, SuccessResult};
pub use accounts::{AccountResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use profiles::{ProfileDetailResponse, ProfileResponse};
