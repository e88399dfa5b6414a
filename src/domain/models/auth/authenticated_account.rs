use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::models::token::TokenClaims;
use crate::errors::AppError;

/// JWT 토큰에서 추출된 계정 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedAccount {
    /// 계정 고유 ID
    pub account_id: i64,

    /// 토큰 만료 시간 (Unix timestamp)
    pub expires_at: i64,
}

impl From<TokenClaims> for AuthenticatedAccount {
    fn from(claims: TokenClaims) -> Self {
        Self {
            account_id: claims.id,
            expires_at: claims.exp,
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 요청 확장에 저장한 값을 꺼냅니다.
impl FromRequest for AuthenticatedAccount {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedAccount>() {
            Some(account) => ready(Ok(account.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}
