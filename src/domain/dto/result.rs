//! 공통 응답 봉투
//!
//! 모든 성공 응답은 `{status, data}`, 모든 에러 응답은 `{status, message}` 형식을 가집니다.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// 성공 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResult<T> {
    pub status: u16,
    pub data: T,
}

impl<T> SuccessResult<T> {
    /// 200 OK 응답 봉투를 생성합니다.
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            data,
        }
    }
}

/// 에러 응답 봉투
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub status: u16,
    pub message: String,
}

impl ErrorResult {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}
