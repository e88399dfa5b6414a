//! 프로필 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::dto::accounts::AccountResponse;
use crate::domain::entities::profiles::{Profile, ProfileWithOwner};
use crate::utils::string_utils::clean_optional_string;

/// 프로필 목록 항목
///
/// 빈 문자열로 저장된 선택 필드는 `null`로 정리해서 내보냅니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub account_id: i64,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            account_id: profile.account_id,
            phone: clean_optional_string(profile.phone),
            gender: clean_optional_string(profile.gender),
            address: clean_optional_string(profile.address),
        }
    }
}

/// 소유 계정이 포함된 프로필 상세
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetailResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub account: AccountResponse,
}

impl From<ProfileWithOwner> for ProfileDetailResponse {
    fn from(detail: ProfileWithOwner) -> Self {
        Self {
            profile: ProfileResponse::from(detail.profile),
            account: AccountResponse::from(detail.owner),
        }
    }
}
