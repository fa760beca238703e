//! # 문서 리포지토리 인터페이스
//!
//! 불투명한 문서 ID로 접근하는 범용 CRUD 계약입니다.
//! 서비스 계층은 이 trait에만 의존하며, 실제 저장소는
//! [`MongoRepository`](super::mongo_repo::MongoRepository) 또는
//! [`InMemoryRepository`](super::memory_repo::InMemoryRepository)가 담당합니다.
//!
//! ## 쿼리 문서
//!
//! `find`/`count`의 필터는 MongoDB 쿼리 문서 형식을 따릅니다.
//!
//! ```rust,ignore
//! doc! { "email": "alice@example.com" }          // 정확히 일치
//! doc! { "apiKeys.key": "abc" }                  // 배열 내부 문서의 필드
//! doc! { "alias": "ally" }                       // 배열 원소 포함 여부
//! doc! { "email": { "$regex": "ali", "$options": "i" } } // 패턴 매칭
//! ```
//!
//! ## 에러 처리
//!
//! - **DatabaseError**: 드라이버/저장소 오류. 재시도 없이 그대로 전파됩니다.
//! - **ValidationError**: 잘못된 ObjectId 형식
//! - **InternalError**: BSON 직렬화/역직렬화 실패

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use crate::errors::{AppError, AppResult};

/// 범용 문서 리포지토리
///
/// 모든 메서드는 비동기이며, "찾을 수 없음"은 에러가 아니라
/// `None`/`false`로 표현됩니다.
#[async_trait]
pub trait DocumentRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// 문서를 저장하고 발급된 ID(24자리 16진수)를 반환합니다.
    async fn create(&self, item: &T) -> AppResult<String>;

    /// ID로 문서를 조회합니다.
    async fn find_one(&self, id: &str) -> AppResult<Option<T>>;

    /// 필터와 일치하는 문서를 조회합니다.
    ///
    /// 일치하는 문서가 하나도 없으면 `None`을 반환합니다.
    async fn find(&self, filter: Document) -> AppResult<Option<Vec<T>>>;

    /// 문서의 일부 필드를 갱신합니다 (`$set` 의미).
    ///
    /// 해당 ID의 문서가 없으면 `false`를 반환합니다.
    async fn update(&self, id: &str, partial: Document) -> AppResult<bool>;

    /// 문서를 삭제합니다. 삭제된 문서가 없으면 `false`를 반환합니다.
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// 필터와 일치하는 문서 수를 반환합니다.
    async fn count(&self, filter: Document) -> AppResult<u64> {
        Ok(self
            .find(filter)
            .await?
            .map_or(0, |items| items.len() as u64))
    }
}

/// 문서 ID 문자열을 ObjectId로 변환합니다.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let oid = ObjectId::new();

        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::ValidationError(_))
        ));
    }
}
