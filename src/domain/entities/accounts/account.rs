//! Account Entity Implementation
//!
//! 회원 가입한 사용자를 표현하는 계정 엔티티입니다.
//! 비밀번호는 bcrypt 해시로만 저장되며, 평문은 어디에도 남지 않습니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// 계정 역할
///
/// 관리자/일반 사용자의 이진 구분만 존재합니다.
/// 데이터베이스에는 소문자 문자열(`user`, `admin`)로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자 (기본값)
    #[default]
    User,
    /// 관리자
    Admin,
}

/// 알 수 없는 역할 문자열
#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// 가입 요청의 관리자 플래그로부터 역할을 결정합니다.
    ///
    /// 명시적으로 `true`인 경우에만 `Admin`, 나머지는 모두 `User`입니다.
    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin { Role::Admin } else { Role::User }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(value)),
        }
    }
}

/// 저장된 계정 엔티티
///
/// `accounts` 테이블의 한 행에 대응합니다.
/// `password` 필드는 해시 값이며 JSON 직렬화 대상에서 제외됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// 시스템이 부여한 식별자 (불변)
    pub id: i64,
    /// 표시 이름
    pub name: String,
    /// 로그인 키로 사용되는 이메일 (unique, 대소문자 구분)
    pub email: String,
    /// bcrypt 해시
    #[serde(skip_serializing)]
    pub password: String,
    /// 계정 역할
    #[sqlx(try_from = "String")]
    pub role: Role,
}

impl Account {
    /// 관리자 계정인지 확인
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// 아직 저장되지 않은 신규 계정
///
/// 식별자는 저장소가 부여하므로 포함하지 않습니다.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    /// 이미 해싱된 비밀번호
    pub password_hash: String,
    pub role: Role,
}

impl NewAccount {
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            name,
            email,
            password_hash,
            role,
        }
    }

    /// 저장소가 부여한 ID로 엔티티를 완성합니다.
    pub fn into_account(self, id: i64) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            password: self.password_hash,
            role: self.role,
        }
    }
}
