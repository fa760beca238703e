//! # 문자열 유틸리티
//!
//! 이메일 정규화와 저장 문서 역직렬화에 쓰이는 공통 함수들입니다.

use serde::{Deserialize, Deserializer};

/// 이메일 주소 정규화
///
/// 앞뒤 공백을 제거하고 소문자로 변환합니다.
/// 저장 시와 조회 시 모두 동일한 규칙이 적용되어야 합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(normalize_email("  Foo@Example.COM "), "foo@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// null 값을 타입의 기본값으로 바꾸는 serde deserializer
///
/// 저장소에서 읽어온 문서에 필드가 `null`로 기록된 경우에도
/// 컬렉션 필드는 빈 배열, 문자열 필드는 빈 문자열이 되도록 합니다.
/// 필드 자체가 없는 경우는 `#[serde(default)]`가 처리합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Doc {
///     #[serde(default, deserialize_with = "deserialize_null_default")]
///     alias: Vec<String>,
/// }
///
/// // JSON: {"alias": null} → []
/// // JSON: {} → []
/// ```
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
