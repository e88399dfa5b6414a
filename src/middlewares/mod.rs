//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 서명/만료 검증
//! - 계정 정보를 request extension에 저장
//! - 실패 시 `{status, message}` 형식의 401 응답
//!
//! 토큰 검증기는 `web::Data<ServiceRegistry>`에서 가져오므로,
//! 미들웨어를 쓰는 앱에는 레지스트리가 등록되어 있어야 합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(registry.clone())
//!     .service(
//!         web::scope("/api/v1/profiles")
//!             .wrap(AuthMiddleware::required())
//!             .route("", web::get().to(list_profiles))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
