//! # 사용자 리포지토리 획득
//!
//! 사용자 서비스가 사용할 [`DocumentRepository<User>`] 핸들을 만드는 함수들입니다.
//! 전역 컨테이너 조회 대신, 서비스 생성 시점에 이 함수의 결과를 명시적으로 전달합니다.
//!
//! ```rust,ignore
//! let database = Database::new(&config).await?;
//! let user_repo = mongo_user_repository(&database, &config);
//! let service = UserService::new(user_repo);
//! ```

use std::sync::Arc;
use crate::{
    config::StorageConfig,
    db::Database,
    domain::entities::users::user::User,
};
use crate::repositories::{
    document_repo::DocumentRepository,
    memory_repo::InMemoryRepository,
    mongo_repo::MongoRepository,
};

/// 사용자 문서 리포지토리 핸들
///
/// 서비스 수명 동안 한 번 획득되어 유지됩니다.
pub type UserRepository = Arc<dyn DocumentRepository<User>>;

/// 설정된 MongoDB 컬렉션을 사용하는 사용자 리포지토리를 생성합니다.
pub fn mongo_user_repository(database: &Database, config: &StorageConfig) -> UserRepository {
    Arc::new(MongoRepository::<User>::new(database, &config.collection_name))
}

/// 프로세스 내부 저장소를 사용하는 사용자 리포지토리를 생성합니다.
pub fn in_memory_user_repository() -> UserRepository {
    Arc::new(InMemoryRepository::<User>::new())
}
