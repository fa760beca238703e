//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository) 핸들 타입과
//! 저장소별 획득 함수를 제공합니다.

pub mod user_repo;

pub use user_repo::*;
