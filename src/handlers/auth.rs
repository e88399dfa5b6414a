//! Authentication HTTP Handlers
//!
//! 회원 가입과 로그인 엔드포인트입니다.
//!
//! - `POST /api/v1/register` → `{status, data: {name, email}}`
//! - `POST /api/v1/login` → `{status, data: {name, email, token}}`

use actix_web::{post, web, HttpResponse};
use crate::core::ServiceRegistry;
use crate::domain::dto::{LoginRequest, RegisterRequest, SuccessResult};
use crate::errors::AppError;

#[post("/register")]
pub async fn register(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = registry
        .account_service
        .register(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(SuccessResult::ok(response)))
}

#[post("/login")]
pub async fn login(
    registry: web::Data<ServiceRegistry>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = registry
        .account_service
        .login(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(SuccessResult::ok(response)))
}
