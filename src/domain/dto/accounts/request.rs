//! 계정 요청 DTO
//!
//! 회원 가입과 로그인 요청 본문을 매핑하고 구조 검증을 수행합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::{is_valid_string, trim_string};

/// 회원 가입 요청
///
/// 이름, 이메일, 비밀번호는 필수이며 `is_admin`은 생략 시 `false`입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 표시 이름
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// 로그인에 사용할 이메일
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 평문 비밀번호 (해싱 후 폐기)
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    /// 관리자 권한 요청 여부
    #[serde(default)]
    pub is_admin: bool,
}

impl RegisterRequest {
    /// 앞뒤 공백을 제거한 요청을 반환합니다.
    ///
    /// 비밀번호는 입력된 그대로 유지합니다.
    pub fn normalized(self) -> Self {
        Self {
            name: trim_string(&self.name),
            email: trim_string(&self.email),
            ..self
        }
    }
}

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "이메일을 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl LoginRequest {
    pub fn normalized(self) -> Self {
        Self {
            email: trim_string(&self.email),
            ..self
        }
    }
}

/// 공백만으로 이루어진 문자열 거부
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("이름을 입력해주세요".into()));
    }
    Ok(())
}
