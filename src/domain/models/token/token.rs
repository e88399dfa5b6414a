//! JWT 세션 토큰 클레임
//!
//! 로그인 성공 시 발급되는 세션 토큰의 페이로드입니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 발급할 때마다 같은 키 집합을 가지며, 최소한의 정보만 포함합니다.
///
/// ## 클레임 구성
///
/// - `id`: 계정 식별자
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp, `iat + 7200`이 기본)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 계정 식별자
    pub id: i64,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// 주어진 시각(Unix timestamp) 기준으로 만료되었는지 확인합니다.
    ///
    /// `now >= exp`이면 만료로 간주합니다.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
