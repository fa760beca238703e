//! User Entity Implementation
//!
//! 사용자 계정 엔티티의 핵심 구현체입니다.
//! 등록 요청 데이터와 저장소에서 읽어온 원본 문서 모두
//! 동일한 기본값 규칙으로 정규화됩니다.
//!
//! ## 기본값 규칙
//!
//! | 필드 | 없거나 null 인 경우 |
//! |------|---------------------|
//! | `forgotPasswordId` | `""` (빈 문자열도 `""`) |
//! | `otp` | `None` |
//! | `lastPasswordHash` | `None` |
//! | `apiKeys` | `[]` |
//! | `hasEulaAccepted` | `false` |
//! | `alias` | `[]` |

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::utils::string_utils::deserialize_null_default;

/// 사용자에게 발급된 API 키
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    /// 키 문자열
    pub key: String,
    /// 만료 시각 (없으면 만료되지 않음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<DateTime>,
}

impl ApiKey {
    pub fn new(key: impl Into<String>, expire_date: Option<DateTime>) -> Self {
        Self {
            key: key.into(),
            expire_date,
        }
    }

    /// 주어진 시각 기준으로 만료되었는지 확인합니다.
    ///
    /// 만료 시각이 존재하고 `now`보다 이전인 경우에만 만료로 판단합니다.
    pub fn is_expired_at(&self, now: DateTime) -> bool {
        self.expire_date.is_some_and(|expire| expire < now)
    }
}

/// 사용자 엔티티
///
/// 저장소의 사용자 문서와 1:1로 대응됩니다.
/// 필드 이름은 camelCase로 저장되며 ID는 `_id`로 매핑됩니다.
///
/// 이메일 형식, 비밀번호 강도, 역할 값에 대한 검증은 하지 않습니다.
/// 호출자의 책임입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 정규화된 이메일 (trim + 소문자)
    pub email: String,
    /// 해시된 비밀번호 (이 모듈에서는 가공하지 않음)
    pub password: String,
    /// 권한 태그
    pub acl: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub forgot_password_id: String,
    pub activation_id: String,
    pub is_active: bool,
    pub login_error_counter: i32,
    pub account_lock_time: Option<DateTime>,
    pub delete_id: String,
    pub otp: Option<String>,
    pub last_password_hash: Option<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub api_keys: Vec<ApiKey>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub has_eula_accepted: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub alias: Vec<String>,
}

impl User {
    /// 사용자 ID 문자열을 반환합니다. 저장 전이면 빈 문자열입니다.
    pub fn id(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }

    /// 저장소가 발급한 ID를 설정합니다.
    pub fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    pub fn forgot_password_id(&self) -> &str {
        &self.forgot_password_id
    }

    /// 계정 잠금 시각. 잠금 이력이 없으면 `None`.
    pub fn account_lock_time(&self) -> Option<DateTime> {
        self.account_lock_time
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.alias.iter().any(|a| a == alias)
    }

    pub fn find_api_key(&self, key: &str) -> Option<&ApiKey> {
        self.api_keys.iter().find(|api_key| api_key.key == key)
    }
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            id: None,
            email: request.email,
            password: request.password,
            acl: request.acl,
            forgot_password_id: request
                .forgot_password_id
                .filter(|id| !id.is_empty())
                .unwrap_or_default(),
            activation_id: request.activation_id,
            is_active: request.is_active,
            login_error_counter: request.login_error_counter,
            account_lock_time: request.account_lock_time,
            delete_id: request.delete_id,
            otp: request.otp,
            last_password_hash: request.last_password_hash,
            api_keys: request.api_keys.unwrap_or_default(),
            has_eula_accepted: request.has_eula_accepted.unwrap_or(false),
            alias: request.alias.unwrap_or_default(),
        }
    }
}
