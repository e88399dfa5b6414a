//! Profile Entity Implementation
//!
//! 계정에 연결된 읽기 전용 프로필입니다.
//! 프로필 생성은 이 서비스의 범위 밖에서 이루어지며, 여기서는 조회만 다룹니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use crate::domain::entities::accounts::Account;

/// 프로필 엔티티
///
/// `profiles` 테이블의 한 행에 대응합니다. `account_id`로 소유 계정을 참조합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i64,
    /// 소유 계정 ID
    pub account_id: i64,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
}

/// 소유 계정이 채워진 프로필
///
/// 단건 조회 결과로만 생성되며, 소유 계정이 빠진 상태로는 만들 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileWithOwner {
    pub profile: Profile,
    pub owner: Account,
}

impl ProfileWithOwner {
    pub fn new(profile: Profile, owner: Account) -> Self {
        debug_assert_eq!(profile.account_id, owner.id);
        Self { profile, owner }
    }
}
