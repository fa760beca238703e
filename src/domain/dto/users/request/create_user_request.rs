//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 입력 데이터 구조를 정의합니다.
//! 선택 필드가 비어 있으면 [`User`](crate::domain::entities::users::user::User)
//! 생성 시 기본값으로 채워집니다.
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::ApiKey;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// 이메일은 서비스에서 정규화되며, 그 외 값은 검증 없이 그대로 저장됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
    #[serde(default)]
    pub acl: String,
    #[serde(default)]
    pub activation_id: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub login_error_counter: i32,
    #[serde(default)]
    pub account_lock_time: Option<DateTime>,
    #[serde(default)]
    pub delete_id: String,
    #[serde(default)]
    pub forgot_password_id: Option<String>,
    #[serde(default)]
    pub otp: Option<String>,
    #[serde(default)]
    pub last_password_hash: Option<String>,
    #[serde(default)]
    pub api_keys: Option<Vec<ApiKey>>,
    #[serde(default)]
    pub has_eula_accepted: Option<bool>,
    #[serde(default)]
    pub alias: Option<Vec<String>>,
}

impl CreateUserRequest {
    /// 필수 필드만으로 요청을 생성합니다.
    pub fn new(email: impl Into<String>, password: impl Into<String>, acl: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            acl: acl.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_registration_json() {
        let json = r#"{
            "email": " Alice@Example.com ",
            "password": "hash",
            "acl": "user",
            "activationId": "act-1",
            "alias": ["ally"]
        }"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, " Alice@Example.com ");
        assert_eq!(request.activation_id, "act-1");
        assert_eq!(request.alias, Some(vec!["ally".to_string()]));
        assert_eq!(request.api_keys, None);
        assert_eq!(request.has_eula_accepted, None);
    }

    #[test]
    fn test_new_sets_required_fields() {
        let request = CreateUserRequest::new("a@b.c", "hash", "admin");

        assert_eq!(request.email, "a@b.c");
        assert_eq!(request.acl, "admin");
        assert!(!request.is_active);
    }
}
