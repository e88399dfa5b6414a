//! 계정 응답 DTO
//!
//! 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::accounts::{Account, Role};

/// 회원 가입 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub name: String,
    pub email: String,
}

impl From<Account> for RegisterResponse {
    fn from(account: Account) -> Self {
        Self {
            name: account.name,
            email: account.email,
        }
    }
}

/// 로그인 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub name: String,
    pub email: String,
    /// 서명된 세션 토큰 (JWT)
    pub token: String,
}

impl LoginResponse {
    pub fn new(account: Account, token: String) -> Self {
        Self {
            name: account.name,
            email: account.email,
            token,
        }
    }
}

/// 공개 계정 정보 (프로필 소유자 표시용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            name,
            email,
            role,
            ..
        } = account;

        Self { id, name, email, role }
    }
}
