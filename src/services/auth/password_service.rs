//! 비밀번호 해싱 서비스
//!
//! bcrypt로 비밀번호를 해싱하고 검증합니다. 해시 문자열에 솔트와 cost가 함께 들어가므로
//! 같은 비밀번호도 해싱할 때마다 다른 결과가 나옵니다.
//!
//! bcrypt는 CPU를 오래 점유하므로 호출하는 쪽에서 `web::block`으로 감싸서 실행합니다.

use crate::errors::{AppError, AppResult};

/// 비밀번호 해싱 추상화
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `HashingError` - 해싱 알고리즘이 실패한 경우
    fn hash_password(&self, plain: &str) -> AppResult<String>;

    /// 평문 비밀번호가 해시와 일치하는지 확인합니다.
    ///
    /// 형식이 잘못된 해시는 에러 대신 `false`로 처리합니다.
    fn verify_password(&self, plain: &str, hash: &str) -> bool;
}

/// bcrypt 기반 구현
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash_password(&self, plain: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let hashed = bcrypt::hash(plain, self.cost)
            .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?} (cost={})", hash_start.elapsed(), self.cost);

        Ok(hashed)
    }

    fn verify_password(&self, plain: &str, hash: &str) -> bool {
        match bcrypt::verify(plain, hash) {
            Ok(matched) => matched,
            Err(e) => {
                log::warn!("저장된 비밀번호 해시를 검증할 수 없습니다: {}", e);
                false
            }
        }
    }
}
