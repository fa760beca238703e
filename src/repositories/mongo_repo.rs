//! # MongoDB 문서 리포지토리
//!
//! [`DocumentRepository`]의 운영용 구현체입니다.
//! 하나의 MongoDB 컬렉션을 감싸며, 연결 풀/인덱스 관리는 드라이버에 맡깁니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{bson::{doc, Document}, Collection};
use serde::{de::DeserializeOwned, Serialize};
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use super::document_repo::{parse_object_id, DocumentRepository};

/// MongoDB 컬렉션 기반 리포지토리
///
/// ```rust,ignore
/// let database = Database::new(&config).await?;
/// let repo = MongoRepository::<User>::new(&database, &config.collection_name);
/// let user = repo.find_one("507f1f77bcf86cd799439011").await?;
/// ```
pub struct MongoRepository<T>
where
    T: Send + Sync,
{
    collection: Collection<T>,
}

impl<T> MongoRepository<T>
where
    T: Send + Sync,
{
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.get_database().collection::<T>(collection_name),
        }
    }

    /// 연결된 컬렉션 이름을 반환합니다.
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

fn database_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

#[async_trait]
impl<T> DocumentRepository<T> for MongoRepository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static,
{
    async fn create(&self, item: &T) -> AppResult<String> {
        let result = self.collection
            .insert_one(item)
            .await
            .map_err(database_error)?;

        let id = result.inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| AppError::InternalError("생성된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;

        debug!("{}: 문서 생성 {}", self.collection_name(), id);
        Ok(id)
    }

    async fn find_one(&self, id: &str) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(database_error)
    }

    async fn find(&self, filter: Document) -> AppResult<Option<Vec<T>>> {
        debug!("{}: find {}", self.collection_name(), filter);

        let cursor = self.collection
            .find(filter)
            .await
            .map_err(database_error)?;

        let items: Vec<T> = cursor.try_collect().await.map_err(database_error)?;

        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(items))
        }
    }

    async fn update(&self, id: &str, partial: Document) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        // 빈 `$set`은 서버가 거부하므로 존재 여부만 확인
        if partial.is_empty() {
            let count = self.collection
                .count_documents(doc! { "_id": object_id })
                .await
                .map_err(database_error)?;
            return Ok(count > 0);
        }

        let result = self.collection
            .update_one(doc! { "_id": object_id }, doc! { "$set": partial })
            .await
            .map_err(database_error)?;

        debug!("{}: 문서 갱신 {} (matched: {})", self.collection_name(), id, result.matched_count);
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(database_error)?;

        debug!("{}: 문서 삭제 {} (deleted: {})", self.collection_name(), id, result.deleted_count);
        Ok(result.deleted_count > 0)
    }

    async fn count(&self, filter: Document) -> AppResult<u64> {
        self.collection
            .count_documents(filter)
            .await
            .map_err(database_error)
    }
}
