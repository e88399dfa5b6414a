//! 인증 미들웨어
//!
//! `Authorization: Bearer <token>` 헤더를 검증하고, 성공하면 [`AuthenticatedAccount`]를
//! 요청 확장에 넣어서 핸들러가 추출할 수 있게 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! web::scope("/profiles")
//!     .wrap(AuthMiddleware::required())
//!     .route("", web::get().to(list_profiles))
//! ```
//!
//! [`AuthenticatedAccount`]: crate::domain::models::auth::AuthenticatedAccount

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 보호된 라우트에 적용하는 미들웨어 팩토리
#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 유효한 토큰이 없으면 401로 응답합니다.
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
