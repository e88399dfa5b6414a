//! # 프로필 리포지토리 구현
//!
//! 프로필은 조회 전용입니다. 단건 조회는 소유 계정을 JOIN으로 함께 읽어서
//! 한 번의 쿼리로 [`ProfileWithOwner`]를 만듭니다.

use async_trait::async_trait;
use sqlx::FromRow;
use crate::db::Database;
use crate::domain::entities::accounts::{Account, Role};
use crate::domain::entities::profiles::{Profile, ProfileWithOwner};
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// 모든 프로필을 id 순으로 반환합니다. 프로필이 없으면 빈 목록입니다.
    async fn list_profiles(&self) -> AppResult<Vec<Profile>>;

    /// 프로필 하나를 소유 계정과 함께 반환합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 id의 프로필이 없는 경우
    async fn get_profile(&self, id: i64) -> AppResult<ProfileWithOwner>;
}

/// PostgreSQL 기반 프로필 저장소
#[derive(Clone)]
pub struct PgProfileStore {
    db: Database,
}

impl PgProfileStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// 프로필 + 소유 계정 JOIN 결과
#[derive(FromRow)]
struct ProfileOwnerRow {
    id: i64,
    account_id: i64,
    phone: Option<String>,
    gender: Option<String>,
    address: Option<String>,
    owner_name: String,
    owner_email: String,
    owner_password: String,
    #[sqlx(try_from = "String")]
    owner_role: Role,
}

impl From<ProfileOwnerRow> for ProfileWithOwner {
    fn from(row: ProfileOwnerRow) -> Self {
        let owner = Account {
            id: row.account_id,
            name: row.owner_name,
            email: row.owner_email,
            password: row.owner_password,
            role: row.owner_role,
        };
        let profile = Profile {
            id: row.id,
            account_id: row.account_id,
            phone: row.phone,
            gender: row.gender,
            address: row.address,
        };

        ProfileWithOwner::new(profile, owner)
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        let profiles = sqlx::query_as::<_, Profile>(
            "SELECT id, account_id, phone, gender, address FROM profiles ORDER BY id",
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(profiles)
    }

    async fn get_profile(&self, id: i64) -> AppResult<ProfileWithOwner> {
        let row = sqlx::query_as::<_, ProfileOwnerRow>(
            r#"
            SELECT p.id, p.account_id, p.phone, p.gender, p.address,
                   a.name AS owner_name,
                   a.email AS owner_email,
                   a.password AS owner_password,
                   a.role AS owner_role
            FROM profiles p
            JOIN accounts a ON a.id = p.account_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("프로필을 찾을 수 없습니다: {}", id)))?;

        Ok(row.into())
    }
}
