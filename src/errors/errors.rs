//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 저장소 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 규칙
//!
//! - 리소스 없음은 에러가 아니라 `Ok(None)` 으로 표현합니다.
//! - 비즈니스 규칙 위반(만료된 API 키 등)은 항상 `Err` 로 반환합니다.
//! - 저장소 오류는 재시도 없이 그대로 호출자에게 전파됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn load(repo: &MongoRepository<User>, id: &str) -> Result<Option<User>, AppError> {
//!     let user = repo.find_one(id).await?;
//!     Ok(user)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 저장소 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (연결 실패, 제약 조건 위반 등)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (잘못된 ID 형식, 잘못된 날짜 형식 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 만료된 자격 증명 에러 (만료일이 지난 API 키)
    #[error("Expired credential: {0}")]
    ExpiredCredential(String),

    /// 내부 에러 (BSON 직렬화 실패 등)
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 저장소 계층에서 발생한 에러인지 확인합니다.
    pub fn is_database_error(&self) -> bool {
        matches!(self, AppError::DatabaseError(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::DatabaseError("connection refused".to_string());
        assert_eq!(error.to_string(), "Database error: connection refused");

        let error = AppError::ExpiredCredential("api key".to_string());
        assert_eq!(error.to_string(), "Expired credential: api key");
    }

    #[test]
    fn test_is_database_error() {
        assert!(AppError::DatabaseError("x".to_string()).is_database_error());
        assert!(!AppError::ValidationError("x".to_string()).is_database_error());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let result: Result<u8, &str> = Ok(7);
        let app_result = result.with_context(|| panic!("should not be evaluated"));

        assert_eq!(app_result.unwrap(), 7);
    }
}
