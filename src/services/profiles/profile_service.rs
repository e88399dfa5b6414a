//! 프로필 조회 서비스

use std::sync::Arc;
use crate::domain::dto::profiles::{ProfileDetailResponse, ProfileResponse};
use crate::errors::AppResult;
use crate::repositories::profiles::ProfileStore;

pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// 호출 시점의 전체 프로필 스냅샷을 반환합니다.
    pub async fn list_profiles(&self) -> AppResult<Vec<ProfileResponse>> {
        let profiles = self.profiles.list_profiles().await?;
        log::debug!("프로필 {}건 조회", profiles.len());

        Ok(profiles.into_iter().map(ProfileResponse::from).collect())
    }

    /// 프로필 하나를 소유 계정과 함께 반환합니다.
    pub async fn get_profile(&self, id: i64) -> AppResult<ProfileDetailResponse> {
        let detail = self.profiles.get_profile(id).await?;

        Ok(ProfileDetailResponse::from(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::test_support::{InMemoryAccountStore, InMemoryProfileStore};

    #[actix_web::test]
    async fn test_list_profiles_empty() {
        let accounts = Arc::new(InMemoryAccountStore::default());
        let service = ProfileService::new(Arc::new(InMemoryProfileStore::new(accounts)));

        assert!(service.list_profiles().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_get_profile_includes_owner() {
        let accounts = Arc::new(InMemoryAccountStore::default());
        let owner = accounts.insert_account("ann@x.com");
        let profiles = InMemoryProfileStore::new(accounts.clone());
        let profile_id = profiles.insert_profile(owner.id, Some("010-0000-0000"));
        let service = ProfileService::new(Arc::new(profiles));

        let detail = service.get_profile(profile_id).await.unwrap();

        assert_eq!(detail.profile.id, profile_id);
        assert_eq!(detail.profile.account_id, owner.id);
        assert_eq!(detail.account.email, "ann@x.com");
        assert_eq!(service.list_profiles().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_get_unknown_profile_is_not_found() {
        let accounts = Arc::new(InMemoryAccountStore::default());
        let service = ProfileService::new(Arc::new(InMemoryProfileStore::new(accounts)));

        assert!(matches!(service.get_profile(404).await, Err(AppError::NotFound(_))));
    }
}
