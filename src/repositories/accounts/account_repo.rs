//! # 계정 리포지토리 구현
//!
//! 계정 엔티티의 데이터 액세스 계층입니다.
//! 이메일 유일성은 `accounts.email`의 UNIQUE 제약으로 보장되므로,
//! 동시에 같은 이메일로 가입해도 하나만 저장되고 나머지는 `ConflictError`를 받습니다.

use async_trait::async_trait;
use crate::db::Database;
use crate::domain::entities::accounts::{Account, NewAccount};
use crate::errors::{AppError, AppResult};

/// 계정 저장소 추상화
///
/// 서비스 계층은 이 trait에만 의존합니다. 운영에서는 [`PgAccountStore`]를,
/// 테스트에서는 메모리 구현을 주입합니다.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 새 계정을 저장하고 id가 채워진 계정을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 같은 이메일의 계정이 이미 있는 경우
    /// * `DatabaseError` - 저장소에 접근할 수 없는 경우
    async fn create_account(&self, new_account: NewAccount) -> AppResult<Account>;

    /// 이메일이 정확히 일치하는 계정을 찾습니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 해당 이메일의 계정이 없는 경우
    async fn find_account_by_email(&self, email: &str) -> AppResult<Account>;

    async fn find_account_by_id(&self, id: i64) -> AppResult<Account>;
}

/// PostgreSQL 기반 계정 저장소
#[derive(Clone)]
pub struct PgAccountStore {
    db: Database,
}

impl PgAccountStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create_account(&self, new_account: NewAccount) -> AppResult<Account> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO accounts (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_account.name)
        .bind(&new_account.email)
        .bind(&new_account.password_hash)
        .bind(new_account.role.as_str())
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::ConflictError(_) => {
                AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
            }
            other => other,
        })?;

        log::debug!("계정 저장 완료: id={}", id);

        Ok(new_account.into_account(id))
    }

    async fn find_account_by_email(&self, email: &str) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "SELECT id, name, email, password, role FROM accounts WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
    }

    async fn find_account_by_id(&self, id: i64) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "SELECT id, name, email, password, role FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::connect_for_test;
    use crate::domain::entities::accounts::Role;

    fn unique_email(prefix: &str) -> String {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        format!("{}-{}@x.com", prefix, nanos)
    }

    fn new_account(email: &str) -> NewAccount {
        NewAccount::new(
            "Ann".to_string(),
            email.to_string(),
            "$2b$04$not-a-real-hash".to_string(),
            Role::User,
        )
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_create_then_find_by_email() {
        let store = PgAccountStore::new(connect_for_test().await);
        let email = unique_email("ann");

        let created = store.create_account(new_account(&email)).await.unwrap();
        let found = store.find_account_by_email(&email).await.unwrap();

        assert_eq!(created, found);
        assert_eq!(store.find_account_by_id(created.id).await.unwrap(), found);
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_duplicate_email_is_conflict() {
        let db = connect_for_test().await;
        let store = PgAccountStore::new(db.clone());
        let email = unique_email("dup");

        store.create_account(new_account(&email)).await.unwrap();
        let second = store.create_account(new_account(&email)).await;

        assert!(matches!(second, Err(AppError::ConflictError(_))));

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts WHERE email = $1")
            .bind(&email)
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[actix_web::test]
    #[ignore = "requires database"]
    async fn test_unknown_email_is_not_found() {
        let store = PgAccountStore::new(connect_for_test().await);

        let result = store.find_account_by_email(&unique_email("ghost")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
