//! 테스트용 저장소/토큰 대역
//!
//! 데이터베이스 없이 서비스와 핸들러를 검증할 수 있도록 메모리 구현을 제공합니다.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::config::JwtSettings;
use crate::domain::entities::accounts::{Account, NewAccount, Role};
use crate::domain::entities::profiles::{Profile, ProfileWithOwner};
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult};
use crate::repositories::accounts::AccountStore;
use crate::repositories::profiles::ProfileStore;
use crate::services::auth::{BcryptPasswordHasher, JwtTokenService, PasswordHasher, TokenIssuer};

pub const TEST_JWT_SECRET: &str = "test-secret";

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(&JwtSettings::new(TEST_JWT_SECRET, 7200))
}

/// 이메일 유일성을 지키는 메모리 계정 저장소
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: Mutex<BTreeMap<i64, Account>>,
}

impl InMemoryAccountStore {
    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn find_account_by_email_blocking(&self, email: &str) -> Account {
        self.accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == email)
            .cloned()
            .expect("account not stored")
    }

    /// 해시 검증이 필요 없는 테스트용 계정을 바로 넣습니다.
    pub fn insert_account(&self, email: &str) -> Account {
        let mut accounts = self.accounts.lock().unwrap();
        let id = accounts.len() as i64 + 1;
        let account = NewAccount::new(
            "Ann".to_string(),
            email.to_string(),
            "$2b$04$placeholder".to_string(),
            Role::User,
        )
        .into_account(id);
        accounts.insert(id, account.clone());
        account
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create_account(&self, new_account: NewAccount) -> AppResult<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.values().any(|a| a.email == new_account.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let id = accounts.len() as i64 + 1;
        let account = new_account.into_account(id);
        accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn find_account_by_email(&self, email: &str) -> AppResult<Account> {
        self.accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == email)
            .cloned()
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
    }

    async fn find_account_by_id(&self, id: i64) -> AppResult<Account> {
        self.accounts
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("계정을 찾을 수 없습니다: {}", id)))
    }
}

/// 모든 호출이 연결 실패로 끝나는 저장소
pub struct UnavailableAccountStore;

#[async_trait]
impl AccountStore for UnavailableAccountStore {
    async fn create_account(&self, _new_account: NewAccount) -> AppResult<Account> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn find_account_by_email(&self, _email: &str) -> AppResult<Account> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn find_account_by_id(&self, _id: i64) -> AppResult<Account> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }
}

/// 계정 저장소를 참조해서 소유자를 채우는 메모리 프로필 저장소
pub struct InMemoryProfileStore {
    accounts: Arc<InMemoryAccountStore>,
    profiles: Mutex<BTreeMap<i64, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new(accounts: Arc<InMemoryAccountStore>) -> Self {
        Self {
            accounts,
            profiles: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn insert_profile(&self, account_id: i64, phone: Option<&str>) -> i64 {
        let mut profiles = self.profiles.lock().unwrap();
        let id = profiles.len() as i64 + 1;
        profiles.insert(
            id,
            Profile {
                id,
                account_id,
                phone: phone.map(str::to_string),
                gender: None,
                address: None,
            },
        );
        id
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        Ok(self.profiles.lock().unwrap().values().cloned().collect())
    }

    async fn get_profile(&self, id: i64) -> AppResult<ProfileWithOwner> {
        let profile = self
            .profiles
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("프로필을 찾을 수 없습니다: {}", id)))?;
        let owner = self.accounts.find_account_by_id(profile.account_id).await?;

        Ok(ProfileWithOwner::new(profile, owner))
    }
}

/// 서명이 항상 실패하는 토큰 발급기
pub struct FailingTokenIssuer;

impl TokenIssuer for FailingTokenIssuer {
    fn issue_token(&self, _account_id: i64, _issued_at: DateTime<Utc>) -> AppResult<String> {
        Err(AppError::SigningError("key unavailable".to_string()))
    }

    fn verify_token(&self, _token: &str, _now: DateTime<Utc>) -> AppResult<TokenClaims> {
        Err(AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))
    }
}

/// 검증 호출 횟수를 세는 bcrypt 해셔
pub struct CountingPasswordHasher {
    inner: BcryptPasswordHasher,
    verify_calls: AtomicUsize,
}

impl CountingPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            inner: BcryptPasswordHasher::new(cost),
            verify_calls: AtomicUsize::new(0),
        }
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for CountingPasswordHasher {
    fn hash_password(&self, plain: &str) -> AppResult<String> {
        self.inner.hash_password(plain)
    }

    fn verify_password(&self, plain: &str, hash: &str) -> bool {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.verify_password(plain, hash)
    }
}
