//! # 문자열 유틸리티
//!
//! 요청 정규화와 로그 출력에 쓰이는 문자열 처리 함수들입니다.

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열 정리 (trim 후 반환)
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 로그 출력용 이메일 마스킹
///
/// 로컬 파트의 첫 글자만 남기고 나머지를 `***`로 가립니다.
/// `@`가 없는 문자열은 전체를 가립니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(mask_email("ann@x.com"), "a***@x.com");
/// assert_eq!(mask_email("broken"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
