//! # Authentication Configuration Module
//!
//! JWT 서명 키와 토큰 수명 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_SECONDS="7200"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, JwtConfig};
//!
//! let settings = JwtConfig::settings(&Environment::current())?;
//! let token_service = JwtTokenService::new(settings);
//! ```

use std::env;
use crate::errors::{AppError, AppResult};
use super::data_config::Environment;

/// 개발 환경 전용 기본 서명 키
const DEVELOPMENT_SECRET: &str = "waysbeans-development-secret";

/// 토큰 발급과 검증에 필요한 값 묶음
///
/// 서비스 생성자에 그대로 주입됩니다. 서명 키는 Debug 출력에서 가려집니다.
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    /// 발급 시각부터 만료까지의 초
    pub ttl_seconds: i64,
}

impl JwtSettings {
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"[REDACTED]")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

/// JWT 설정을 환경 변수에서 읽어오는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// 기본 토큰 수명 (2시간)
    pub const DEFAULT_TTL_SECONDS: i64 = 7200;

    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 설정되지 않았거나 빈 값이면 `None`을 반환합니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> Option<String> {
        env::var("JWT_SECRET")
            .ok()
            .filter(|secret| !secret.trim().is_empty())
    }

    /// 토큰 수명을 초 단위로 반환합니다.
    ///
    /// 0 이하이거나 숫자가 아닌 값은 무시하고 기본값 7200초를 사용합니다.
    pub fn expiration_seconds() -> i64 {
        Self::parse_ttl(env::var("JWT_EXPIRATION_SECONDS").ok().as_deref())
    }

    pub fn parse_ttl(value: Option<&str>) -> i64 {
        value
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(Self::DEFAULT_TTL_SECONDS)
    }

    /// 현재 환경 기준으로 [`JwtSettings`]를 구성합니다.
    ///
    /// 프로덕션에서 `JWT_SECRET`이 없으면 에러를 반환합니다.
    /// 그 외 환경에서는 경고 로그를 남기고 개발용 키를 사용합니다.
    pub fn settings(environment: &Environment) -> AppResult<JwtSettings> {
        Self::resolve(Self::secret(), Self::expiration_seconds(), environment)
    }

    fn resolve(
        secret: Option<String>,
        ttl_seconds: i64,
        environment: &Environment,
    ) -> AppResult<JwtSettings> {
        let secret = match secret {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(AppError::InternalError(
                    "JWT_SECRET must be set in production".to_string(),
                ));
            }
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEVELOPMENT_SECRET.to_string()
            }
        };

        Ok(JwtSettings::new(secret, ttl_seconds))
    }
}
