//! 라우트 구성
//!
//! ```text
//! GET  /health
//! POST /api/v1/register
//! POST /api/v1/login
//! GET  /api/v1/profiles        (Bearer 토큰 필요)
//! GET  /api/v1/profile/{id}    (Bearer 토큰 필요)
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 본문/경로 파싱 실패도 {status, message} 형식으로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));

    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::profiles::list_profiles)
            .service(handlers::profiles::get_profile),
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "waysbeans_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "PostgreSQL",
            "password_hashing": "bcrypt",
            "session_token": "JWT (HS256)"
        }
    }))
}
