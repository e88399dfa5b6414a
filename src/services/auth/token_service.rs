//! JWT 토큰 관리 서비스 구현
//!
//! 로그인 성공 시 HS256 서명 토큰을 발급하고, 보호된 라우트에서 토큰을 검증합니다.
//! 발급 시각과 검증 시각은 호출하는 쪽에서 넘겨주므로 만료 경계를 그대로 테스트할 수 있습니다.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtSettings;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult};

/// 세션 토큰 발급/검증 추상화
pub trait TokenIssuer: Send + Sync {
    /// `exp = issued_at + ttl`인 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `SigningError` - 서명에 실패한 경우
    fn issue_token(&self, account_id: i64, issued_at: DateTime<Utc>) -> AppResult<String>;

    /// 서명과 만료를 확인하고 클레임을 돌려줍니다. `now >= exp`이면 만료입니다.
    ///
    /// # Errors
    ///
    /// * `AuthenticationError` - 서명이 틀리거나 만료되었거나 형식이 잘못된 경우
    fn verify_token(&self, token: &str, now: DateTime<Utc>) -> AppResult<TokenClaims>;
}

/// 공유 비밀키 기반 JWT 서비스
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl JwtTokenService {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            ttl_seconds: settings.ttl_seconds,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 주입된 시각으로 직접 판단
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue_token(&self, account_id: i64, issued_at: DateTime<Utc>) -> AppResult<String> {
        let iat = issued_at.timestamp();
        let claims = TokenClaims {
            id: account_id,
            iat,
            exp: iat + self.ttl_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::SigningError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn verify_token(&self, token: &str, now: DateTime<Utc>) -> AppResult<TokenClaims> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &Self::validation())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("토큰 서명이 올바르지 않습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })?;

        if claims.is_expired_at(now.timestamp()) {
            return Err(AppError::AuthenticationError("토큰이 만료되었습니다".to_string()));
        }

        Ok(claims)
    }
}

/// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
    match auth_header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AppError::AuthenticationError(
            "유효하지 않은 인증 헤더 형식입니다".to_string(),
        )),
    }
}
