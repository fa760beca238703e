//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 범용 [`DocumentRepository`](document_repo::DocumentRepository) trait과
//! 두 가지 구현체를 제공합니다.
//!
//! - [`MongoRepository`](mongo_repo::MongoRepository) - MongoDB 컬렉션 기반 (운영)
//! - [`InMemoryRepository`](memory_repo::InMemoryRepository) - 프로세스 내부 저장소 (로컬 실행, 테스트)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::in_memory_user_repository;
//!
//! let user_repo = in_memory_user_repository();
//! let id = user_repo.create(&user).await?;
//! let found = user_repo.find_one(&id).await?;
//! ```

pub mod document_repo;
pub mod mongo_repo;
pub mod memory_repo;
pub mod query_filter;
pub mod users;

pub use document_repo::*;
pub use mongo_repo::MongoRepository;
pub use memory_repo::InMemoryRepository;
