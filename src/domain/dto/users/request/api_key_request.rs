//! API 키 추가 요청 DTO
//!
//! 만료일은 문자열로 받아 저장 전에 날짜로 변환합니다.
use chrono::NaiveDate;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::user::ApiKey;
use crate::errors::{AppError, AppResult};

/// 사용자에게 API 키를 추가하기 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRequest {
    /// 키 문자열 (빈 값 불가)
    #[validate(length(min = 1, message = "API 키는 비어 있을 수 없습니다"))]
    pub key: String,

    /// 만료일 (RFC 3339 또는 `YYYY-MM-DD`)
    #[serde(default)]
    pub expire_date: Option<String>,
}

impl ApiKeyRequest {
    pub fn new(key: impl Into<String>, expire_date: Option<String>) -> Self {
        Self {
            key: key.into(),
            expire_date,
        }
    }

    /// 요청을 검증하고 저장용 [`ApiKey`]로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 키 또는 해석할 수 없는 만료일
    pub fn into_api_key(self) -> AppResult<ApiKey> {
        self.validate()?;

        let expire_date = match self.expire_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_expire_date(raw)?),
        };

        Ok(ApiKey::new(self.key, expire_date))
    }
}

/// 만료일 문자열을 BSON 날짜로 변환합니다.
///
/// 날짜만 주어진 경우 해당 일의 00:00 UTC로 해석합니다.
fn parse_expire_date(raw: &str) -> AppResult<DateTime> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(DateTime::from_millis(parsed.timestamp_millis()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_millis(naive.and_utc().timestamp_millis()))
        .ok_or_else(|| AppError::ValidationError(format!("유효하지 않은 만료일 형식입니다: {}", raw)))
}
