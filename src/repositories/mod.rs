//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티별 저장소 trait과 PostgreSQL 구현을 제공합니다.
//! 서비스는 trait 객체(`Arc<dyn AccountStore>`)로 저장소를 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::{AccountStore, PgAccountStore};
//!
//! let store = PgAccountStore::new(database.clone());
//! let account = store.find_account_by_email("ann@x.com").await?;
//! ```

pub mod accounts;
pub mod profiles;

pub use accounts::{AccountStore, PgAccountStore};
pub use profiles::{PgProfileStore, ProfileStore};
