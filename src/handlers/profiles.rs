//! Profile HTTP Handlers
//!
//! 두 엔드포인트 모두 유효한 Bearer 토큰이 필요합니다.

use actix_web::{get, web, HttpResponse};
use crate::core::ServiceRegistry;
use crate::domain::dto::SuccessResult;
use crate::domain::models::auth::AuthenticatedAccount;
use crate::errors::AppError;

#[get("/profiles", wrap = "crate::middlewares::AuthMiddleware::required()")]
pub async fn list_profiles(
    registry: web::Data<ServiceRegistry>,
    account: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    log::debug!("프로필 목록 요청: 계정 ID {}", account.account_id);
    let profiles = registry.profile_service.list_profiles().await?;

    Ok(HttpResponse::Ok().json(SuccessResult::ok(profiles)))
}

#[get("/profile/{id}", wrap = "crate::middlewares::AuthMiddleware::required()")]
pub async fn get_profile(
    registry: web::Data<ServiceRegistry>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let profile = registry.profile_service.get_profile(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SuccessResult::ok(profile)))
}
