//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 변형 | 상태 코드 | 책임 |
//! |------|-----------|------|
//! | `ValidationError` | 400 | 클라이언트 |
//! | `InvalidCredentials` | 400 | 클라이언트 (고정 메시지) |
//! | `ConflictError` | 409 | 클라이언트 |
//! | `NotFound` | 404 | 클라이언트 |
//! | `AuthenticationError` | 401 | 클라이언트 |
//! | `SigningError` | 401 | 서버 (세부 정보 비공개) |
//! | `DatabaseError` | 500 | 서버 |
//! | `HashingError` | 500 | 서버 |
//! | `InternalError` | 500 | 서버 |
//!
//! 서버 측 에러의 상세 내용은 로그에만 남고, 클라이언트에는 일반화된 메시지만 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find_account(email: &str) -> Result<Account, AppError> {
//!     let account = account_store.find_account_by_email(email).await?;
//!     Ok(account)
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use crate::domain::dto::result::ErrorResult;

/// 로그인 실패 시 클라이언트에게 전달되는 고정 메시지
///
/// 존재하지 않는 이메일과 잘못된 비밀번호를 구분할 수 없도록 항상 같은 문구를 사용합니다.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "wrong email or password";

/// 서버 측 에러에 대해 클라이언트에게 노출되는 메시지
const INTERNAL_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다";

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 연결/쿼리 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 로그인 자격 증명 불일치 (400 Bad Request)
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 비밀번호 해싱 실패 (500 Internal Server Error)
    #[error("Password hashing error: {0}")]
    HashingError(String),

    /// 토큰 서명 실패 (401 Unauthorized, 세부 정보 비공개)
    #[error("Token signing error: {0}")]
    SigningError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 서버 측 원인으로 발생한 에러인지 확인합니다.
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_)
                | AppError::HashingError(_)
                | AppError::SigningError(_)
                | AppError::InternalError(_)
        )
    }

    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// 클라이언트 에러는 조치 가능한 메시지를 그대로 전달하고,
    /// 서버 에러는 세부 정보를 숨긴 일반 메시지로 대체합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::SigningError(_) => StatusCode::UNAUTHORIZED
                .canonical_reason()
                .unwrap_or("Unauthorized")
                .to_string(),
            e if e.is_server_fault() => INTERNAL_ERROR_MESSAGE.to_string(),
            e => e.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) | AppError::SigningError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{status, message}` JSON 응답으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if self.is_server_fault() {
            log::error!("❌ 요청 처리 실패 ({}): {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(ErrorResult::new(status, self.client_message()))
    }
}

impl From<sqlx::Error> for AppError {
    /// sqlx 에러를 저장소 에러 분류에 맞게 변환합니다.
    ///
    /// - 유니크 제약 위반 → `ConflictError`
    /// - 행 없음 → `NotFound`
    /// - 그 외 (연결 실패, 타임아웃, 쿼리 오류) → `DatabaseError`
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => AppError::NotFound("요청한 리소스를 찾을 수 없습니다".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::ConflictError("이미 존재하는 데이터입니다".to_string())
            }
            _ => AppError::DatabaseError(e.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
