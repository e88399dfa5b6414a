//! # 계정 서비스 구현
//!
//! 회원 가입과 로그인 흐름을 조율합니다.
//!
//! ```text
//! register: 정규화 → 검증 → 해싱 → 역할 결정 → 저장 → {name, email}
//! login:    정규화 → 검증 → 이메일 조회 → 비밀번호 확인 → 토큰 발급 → {name, email, token}
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - 존재하지 않는 이메일과 틀린 비밀번호는 같은 `InvalidCredentials`로 응답해서
//!   계정 존재 여부가 드러나지 않습니다.
//! - 존재하지 않는 이메일도 더미 해시로 bcrypt 검증을 한 번 수행해서 응답 시간이 같아집니다.
//! - 비밀번호 해시는 어떤 응답에도 포함되지 않습니다.
//! - 로그에는 마스킹된 이메일만 남깁니다.

use std::sync::Arc;
use actix_web::web;
use chrono::{DateTime, Utc};
use validator::Validate;
use crate::domain::dto::accounts::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::domain::entities::accounts::{NewAccount, Role};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::accounts::AccountStore;
use crate::services::auth::{PasswordHasher, TokenIssuer};
use crate::utils::string_utils::mask_email;

/// 더미 해시를 만들 때 쓰는 평문
const DUMMY_PASSWORD: &str = "waysbeans-dummy-password";

pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    /// 없는 이메일로 로그인할 때 검증 대상이 되는 해시 (설정된 cost로 생성)
    dummy_hash: String,
}

impl AccountService {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        let dummy_hash = hasher.hash_password(DUMMY_PASSWORD).unwrap_or_else(|e| {
            log::error!("더미 비밀번호 해시 생성 실패: {}", e);
            String::new()
        });

        Self {
            accounts,
            hasher,
            tokens,
            dummy_hash,
        }
    }

    /// 새 계정을 등록합니다.
    ///
    /// `is_admin`이 명시적으로 `true`일 때만 관리자 역할이 부여됩니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 필수 필드 누락, 이메일 형식 오류
    /// * `HashingError` - 비밀번호 해싱 실패
    /// * `ConflictError` - 이미 등록된 이메일
    /// * `DatabaseError` - 저장소 접근 실패
    pub async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        let start_time = std::time::Instant::now();
        let request = request.normalized();
        request.validate()?;

        let password_hash = self.hash_password(request.password).await?;
        let role = Role::from_admin_flag(request.is_admin);

        let account = self
            .accounts
            .create_account(NewAccount::new(request.name, request.email, password_hash, role))
            .await
            .map_err(|e| {
                if let AppError::ConflictError(_) = e {
                    log::info!("이미 등록된 이메일로 가입 시도");
                }
                e
            })?;

        log::info!(
            "✅ 회원 가입 완료: id={}, email={}, role={} ({:?})",
            account.id,
            mask_email(&account.email),
            account.role.as_str(),
            start_time.elapsed()
        );

        Ok(RegisterResponse::from(account))
    }

    /// 현재 시각 기준으로 로그인합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        self.login_at(request, Utc::now()).await
    }

    /// 주어진 시각을 발급 시각으로 사용해서 로그인합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 필수 필드 누락
    /// * `InvalidCredentials` - 이메일이 없거나 비밀번호가 틀린 경우 (두 경우를 구분하지 않음)
    /// * `SigningError` - 토큰 서명 실패
    /// * `DatabaseError` - 저장소 접근 실패
    pub async fn login_at(&self, request: LoginRequest, now: DateTime<Utc>) -> AppResult<LoginResponse> {
        let request = request.normalized();
        request.validate()?;

        let masked = mask_email(&request.email);

        let account = match self.accounts.find_account_by_email(&request.email).await {
            Ok(account) => account,
            Err(AppError::NotFound(_)) => {
                // 결과는 버리고 검증 비용만 치름
                self.verify_password(request.password, self.dummy_hash.clone()).await?;
                log::warn!("로그인 실패: {}", masked);
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !self.verify_password(request.password, account.password.clone()).await? {
            log::warn!("로그인 실패: {}", masked);
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue_token(account.id, now).map_err(|e| {
            log::error!("토큰 발급 실패: account_id={}, {}", account.id, e);
            e
        })?;

        log::info!("✅ 로그인 성공: id={}, email={}", account.id, masked);

        Ok(LoginResponse::new(account, token))
    }

    async fn hash_password(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);

        web::block(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::HashingError(format!("해싱 작업 실행 실패: {}", e)))?
    }

    async fn verify_password(&self, password: String, hash: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);

        web::block(move || hasher.verify_password(&password, &hash))
            .await
            .context("비밀번호 검증 작업 실행 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::services::auth::BcryptPasswordHasher;
    use crate::test_support::{
        CountingPasswordHasher, FailingTokenIssuer, InMemoryAccountStore, UnavailableAccountStore,
        test_token_service,
    };

    fn service_with(accounts: Arc<dyn AccountStore>) -> AccountService {
        AccountService::new(
            accounts,
            Arc::new(BcryptPasswordHasher::new(4)),
            Arc::new(test_token_service()),
        )
    }

    fn register_request(email: &str, password: &str, is_admin: bool) -> RegisterRequest {
        RegisterRequest {
            name: "Ann".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            is_admin,
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[actix_web::test]
    async fn test_register_stores_hash_and_defaults_to_user() {
        let store = Arc::new(InMemoryAccountStore::default());
        let service = service_with(store.clone());

        let response = service
            .register(register_request("ann@x.com", "secret1", false))
            .await
            .unwrap();

        assert_eq!(response.name, "Ann");
        assert_eq!(response.email, "ann@x.com");

        let stored = store.find_account_by_email("ann@x.com").await.unwrap();
        assert_eq!(stored.role, Role::User);
        assert_ne!(stored.password, "secret1");
        assert!(BcryptPasswordHasher::new(4).verify_password("secret1", &stored.password));
    }

    #[actix_web::test]
    async fn test_register_admin_flag() {
        let store = Arc::new(InMemoryAccountStore::default());
        let service = service_with(store.clone());

        service
            .register(register_request("boss@x.com", "secret1", true))
            .await
            .unwrap();

        let stored = store.find_account_by_email("boss@x.com").await.unwrap();
        assert!(stored.is_admin());
    }

    #[actix_web::test]
    async fn test_register_duplicate_is_conflict_without_second_record() {
        let store = Arc::new(InMemoryAccountStore::default());
        let service = service_with(store.clone());

        service
            .register(register_request("ann@x.com", "secret1", false))
            .await
            .unwrap();
        let second = service
            .register(register_request("ann@x.com", "other", false))
            .await;

        assert!(matches!(second, Err(AppError::ConflictError(_))));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_trims_email_before_storing() {
        let store = Arc::new(InMemoryAccountStore::default());
        let service = service_with(store.clone());

        service
            .register(register_request("  ann@x.com ", "secret1", false))
            .await
            .unwrap();

        assert!(store.find_account_by_email("ann@x.com").await.is_ok());
    }

    #[actix_web::test]
    async fn test_register_invalid_email_is_validation_error() {
        let store = Arc::new(InMemoryAccountStore::default());
        let service = service_with(store.clone());

        let result = service
            .register(register_request("not-an-email", "secret1", false))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_register_store_failure_is_database_error() {
        let service = service_with(Arc::new(UnavailableAccountStore));

        let result = service
            .register(register_request("ann@x.com", "secret1", false))
            .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_login_issues_token_expiring_two_hours_later() {
        let service = service_with(Arc::new(InMemoryAccountStore::default()));
        service
            .register(register_request("ann@x.com", "secret1", false))
            .await
            .unwrap();

        let response = service
            .login_at(login_request("ann@x.com", "secret1"), now())
            .await
            .unwrap();

        assert_eq!(response.name, "Ann");
        assert_eq!(response.email, "ann@x.com");
        assert!(!response.token.is_empty());

        let claims = test_token_service().verify_token(&response.token, now()).unwrap();
        assert_eq!(claims.exp, now().timestamp() + 7200);
    }

    #[actix_web::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let service = service_with(Arc::new(InMemoryAccountStore::default()));
        service
            .register(register_request("ann@x.com", "secret1", false))
            .await
            .unwrap();

        let wrong_password = service
            .login_at(login_request("ann@x.com", "wrong"), now())
            .await
            .unwrap_err();
        let unknown_email = service
            .login_at(login_request("nobody@x.com", "secret1"), now())
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[actix_web::test]
    async fn test_email_match_is_case_sensitive() {
        let service = service_with(Arc::new(InMemoryAccountStore::default()));
        service
            .register(register_request("ann@x.com", "secret1", false))
            .await
            .unwrap();

        let result = service
            .login_at(login_request("ANN@x.com", "secret1"), now())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_login_signing_failure_is_signing_error() {
        let store = Arc::new(InMemoryAccountStore::default());
        let registering = service_with(store.clone());
        registering
            .register(register_request("ann@x.com", "secret1", false))
            .await
            .unwrap();

        let service = AccountService::new(
            store,
            Arc::new(BcryptPasswordHasher::new(4)),
            Arc::new(FailingTokenIssuer),
        );
        let result = service
            .login_at(login_request("ann@x.com", "secret1"), now())
            .await;

        assert!(matches!(result, Err(AppError::SigningError(_))));
    }

    #[actix_web::test]
    async fn test_login_store_failure_is_not_masked_as_credentials() {
        let service = service_with(Arc::new(UnavailableAccountStore));

        let result = service
            .login_at(login_request("ann@x.com", "secret1"), now())
            .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_unknown_email_still_runs_password_verification() {
        let hasher = Arc::new(CountingPasswordHasher::new(4));
        let service = AccountService::new(
            Arc::new(InMemoryAccountStore::default()),
            hasher.clone(),
            Arc::new(test_token_service()),
        );
        service
            .register(register_request("ann@x.com", "secret1", false))
            .await
            .unwrap();

        let unknown_email = service
            .login_at(login_request("nobody@x.com", "secret1"), now())
            .await;
        assert!(matches!(unknown_email, Err(AppError::InvalidCredentials)));
        assert_eq!(hasher.verify_calls(), 1);

        let wrong_password = service
            .login_at(login_request("ann@x.com", "wrong"), now())
            .await;
        assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));
        assert_eq!(hasher.verify_calls(), 2);
    }
}
