//! 데이터 저장소 설정 관리 모듈
//!
//! 실행 환경과 MongoDB 연결/컬렉션 관련 설정을 관리합니다.
//! 설정값은 서비스 생성 시점에 한 번만 읽으며, 이후 변경을 감지하지 않습니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&value)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 데이터베이스 이름을 반환합니다.
    pub fn default_database_name(&self) -> &'static str {
        match self {
            Environment::Development => "user_storage_dev",
            Environment::Test => "user_storage_test",
            Environment::Staging => "user_storage_staging",
            Environment::Production => "user_storage",
        }
    }
}

/// 사용자 문서를 보관할 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// MongoDB 컬렉션
    #[default]
    Mongo,
    /// 프로세스 내부 메모리 (종료 시 사라짐)
    Memory,
}

impl StorageBackend {
    /// 문자열에서 StorageBackend를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Mongo`를 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Mongo => "mongo",
            StorageBackend::Memory => "memory",
        }
    }
}

/// 사용자 저장소 설정
///
/// 저장소 종류와 대상 데이터베이스/컬렉션 이름을 보관합니다.
///
/// # Environment Variables
///
/// - `STORAGE_BACKEND`: `mongo` (기본값) 또는 `memory`
/// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: 환경별 이름)
/// - `USER_COLLECTION`: 사용자 컬렉션 이름 (기본값: "users")
/// - `MONGODB_APP_NAME`: 드라이버에 전달할 애플리케이션 이름 (기본값: "user_storage")
///
/// # Examples
///
/// ```rust,ignore
/// let config = StorageConfig::from_env();
/// let database = Database::new(&config).await?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub mongodb_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub app_name: String,
}

impl StorageConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_COLLECTION: &'static str = "users";
    pub const DEFAULT_APP_NAME: &'static str = "user_storage";

    /// 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::from_env_for(&Environment::current())
    }

    /// 지정된 실행 환경의 기본값을 사용하여 설정을 읽어옵니다.
    pub fn from_env_for(environment: &Environment) -> Self {
        Self {
            backend: env::var("STORAGE_BACKEND")
                .map(|value| StorageBackend::from_str(&value))
                .unwrap_or_default(),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| Self::DEFAULT_URI.to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| environment.default_database_name().to_string()),
            collection_name: env::var("USER_COLLECTION")
                .unwrap_or_else(|_| Self::DEFAULT_COLLECTION.to_string()),
            app_name: env::var("MONGODB_APP_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_APP_NAME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_database_name_for_each_environment() {
        assert_eq!(
            Environment::Development.default_database_name(),
            "user_storage_dev"
        );
        assert_eq!(Environment::Test.default_database_name(), "user_storage_test");
        assert_eq!(Environment::Production.default_database_name(), "user_storage");
    }

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::from_env_for(&Environment::Test);

        if env::var("MONGODB_URI").is_err() {
            assert_eq!(config.mongodb_uri, StorageConfig::DEFAULT_URI);
        }

        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(config.database_name, "user_storage_test");
        }

        if env::var("USER_COLLECTION").is_err() {
            assert_eq!(config.collection_name, "users");
        }

        if env::var("STORAGE_BACKEND").is_err() {
            assert_eq!(config.backend, StorageBackend::Mongo);
        }
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str(" In-Memory "), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongo"), StorageBackend::Mongo);
        assert_eq!(StorageBackend::from_str("postgres"), StorageBackend::Mongo);
        assert_eq!(StorageBackend::default(), StorageBackend::Mongo);
        assert_eq!(StorageBackend::Memory.as_str(), "memory");
    }
}
