//! # Service Registry
//!
//! 애플리케이션 기동 시 한 번 구성되는 서비스 묶음입니다.
//! 모든 의존성은 생성자에서 명시적으로 연결되고, 핸들러와 미들웨어는
//! `web::Data<ServiceRegistry>`로 이 묶음을 받습니다.
//!
//! ## 연결 구조
//!
//! ```text
//! AppConfig ──┬─ bcrypt_cost ─→ BcryptPasswordHasher ─┐
//!             └─ jwt ─────────→ JwtTokenService ──────┼─→ AccountService
//! Database ───┬─→ PgAccountStore ─────────────────────┘
//!             └─→ PgProfileStore ─────────────────────→ ProfileService
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let registry = web::Data::new(ServiceRegistry::new(database, &config));
//!
//! HttpServer::new(move || App::new().app_data(registry.clone()))
//! ```

use std::sync::Arc;
use crate::config::AppConfig;
use crate::db::Database;
use crate::repositories::accounts::{AccountStore, PgAccountStore};
use crate::repositories::profiles::{PgProfileStore, ProfileStore};
use crate::services::accounts::AccountService;
use crate::services::auth::{BcryptPasswordHasher, JwtTokenService, PasswordHasher, TokenIssuer};
use crate::services::profiles::ProfileService;

pub struct ServiceRegistry {
    pub account_service: AccountService,
    pub profile_service: ProfileService,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl ServiceRegistry {
    /// PostgreSQL 저장소와 설정값으로 운영용 서비스를 구성합니다.
    pub fn new(database: Database, config: &AppConfig) -> Self {
        let accounts: Arc<dyn AccountStore> = Arc::new(PgAccountStore::new(database.clone()));
        let profiles: Arc<dyn ProfileStore> = Arc::new(PgProfileStore::new(database));
        let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost));
        let tokens: Arc<dyn TokenIssuer> = Arc::new(JwtTokenService::new(&config.jwt));

        log::info!(
            "🔧 서비스 구성 완료 (bcrypt cost={}, token ttl={}s)",
            config.bcrypt_cost,
            config.jwt.ttl_seconds
        );

        Self::from_parts(accounts, profiles, hasher, tokens)
    }

    /// 개별 구성 요소로 레지스트리를 만듭니다.
    pub fn from_parts(
        accounts: Arc<dyn AccountStore>,
        profiles: Arc<dyn ProfileStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            account_service: AccountService::new(accounts, hasher, Arc::clone(&tokens)),
            profile_service: ProfileService::new(profiles),
            token_issuer: tokens,
        }
    }
}
