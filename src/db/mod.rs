//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`StorageConfig`]로 명시적으로 전달받습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::StorageConfig;
//! use crate::db::Database;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = StorageConfig::from_env();
//!     let database = Database::new(&config).await?;
//!     Ok(())
//! }
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::StorageConfig;
use crate::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 리포지토리 계층에서 컬렉션에 접근하기 위한 기본 인터페이스를 제공합니다.
/// 연결 핸들은 생성 시 한 번 획득되어 수명 동안 유지됩니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 설정의 URI로 클라이언트를 초기화하고 `ping` 명령으로
    /// 연결 상태를 검증한 후 Database 인스턴스를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패 또는 연결 실패
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 애플리케이션 이름 설정 (서버 측 모니터링에 표시됨)
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let users = database.get_database().collection::<User>("users");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
