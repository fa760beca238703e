//! # 인메모리 문서 리포지토리
//!
//! 프로세스 내부에 BSON 문서를 보관하는 [`DocumentRepository`] 구현체입니다.
//! MongoDB와 같은 쿼리 문서를 [`QueryFilter`]로 평가하므로
//! 서비스 로직을 외부 저장소 없이 실행하거나 테스트할 수 있습니다.

use std::marker::PhantomData;
use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use crate::errors::{AppError, AppResult, ErrorContext};
use super::document_repo::{parse_object_id, DocumentRepository};
use super::query_filter::QueryFilter;

/// 인메모리 문서 저장소
///
/// 문서는 삽입 순서대로 보관되며, 모든 연산은 `RwLock`으로 보호됩니다.
pub struct InMemoryRepository<T> {
    documents: RwLock<Vec<Document>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            _marker: PhantomData,
        }
    }

    /// 저장된 원본 문서의 복사본을 반환합니다.
    pub async fn snapshot(&self) -> Vec<Document> {
        self.documents.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    matches!(document.get_object_id("_id"), Ok(found) if found == *id)
}

/// 점 표기 키를 중첩 필드로 기록합니다 (`$set`과 같은 의미).
///
/// 중간 필드가 없으면 빈 문서를 만들고, 문서가 아닌 값을 지나야 하면 거부합니다.
fn set_path(document: &mut Document, path: &str, value: Bson) -> AppResult<()> {
    let invalid = || AppError::ValidationError(format!("기록할 수 없는 필드 경로입니다: {}", path));

    let Some((head, rest)) = path.split_once('.') else {
        if path.is_empty() {
            return Err(invalid());
        }
        document.insert(path, value);
        return Ok(());
    };

    if head.is_empty() {
        return Err(invalid());
    }
    if !document.contains_key(head) {
        document.insert(head, Document::new());
    }

    match document.get_mut(head) {
        Some(Bson::Document(inner)) => set_path(inner, rest, value).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn decode<T: DeserializeOwned>(document: &Document) -> AppResult<T> {
    bson::from_document(document.clone()).context("문서 역직렬화 실패")
}

#[async_trait]
impl<T> DocumentRepository<T> for InMemoryRepository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn create(&self, item: &T) -> AppResult<String> {
        let mut document = bson::to_document(item).context("문서 직렬화 실패")?;

        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        let mut documents = self.documents.write().await;
        if documents.iter().any(|existing| has_id(existing, &id)) {
            return Err(AppError::DatabaseError(format!("중복된 문서 ID입니다: {}", id)));
        }
        documents.push(document);

        Ok(id.to_hex())
    }

    async fn find_one(&self, id: &str) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;
        let documents = self.documents.read().await;

        documents
            .iter()
            .find(|document| has_id(document, &object_id))
            .map(decode)
            .transpose()
    }

    async fn find(&self, filter: Document) -> AppResult<Option<Vec<T>>> {
        let query = QueryFilter::compile(&filter)?;
        let documents = self.documents.read().await;

        let items = documents
            .iter()
            .filter(|document| query.matches(document))
            .map(decode)
            .collect::<AppResult<Vec<T>>>()?;

        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(items))
        }
    }

    async fn update(&self, id: &str, partial: Document) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;
        let mut documents = self.documents.write().await;

        let Some(document) = documents.iter_mut().find(|document| has_id(document, &object_id)) else {
            return Ok(false);
        };

        // 모든 경로가 유효할 때만 반영
        let mut updated = document.clone();
        for (key, value) in partial {
            if key != "_id" {
                set_path(&mut updated, &key, value)?;
            }
        }
        *document = updated;

        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;
        let mut documents = self.documents.write().await;

        let before = documents.len();
        documents.retain(|document| !has_id(document, &object_id));

        Ok(documents.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
        id: Option<ObjectId>,
        title: String,
        tags: Vec<String>,
    }

    fn note(title: &str, tags: &[&str]) -> Note {
        Note {
            id: None,
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = InMemoryRepository::<Note>::new();

        let id = repo.create(&note("first", &[])).await.unwrap();
        let found = repo.find_one(&id).await.unwrap().unwrap();

        assert_eq!(found.id.unwrap().to_hex(), id);
        assert_eq!(found.title, "first");
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = InMemoryRepository::<Note>::new();
        let mut item = note("first", &[]);
        item.id = Some(ObjectId::new());

        repo.create(&item).await.unwrap();
        let result = repo.create(&item).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_find_one_unknown_and_invalid_id() {
        let repo = InMemoryRepository::<Note>::new();

        assert!(repo.find_one(&ObjectId::new().to_hex()).await.unwrap().is_none());
        assert!(matches!(
            repo.find_one("xyz").await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_find_returns_none_when_nothing_matches() {
        let repo = InMemoryRepository::<Note>::new();
        repo.create(&note("first", &["a"])).await.unwrap();
        repo.create(&note("second", &["b"])).await.unwrap();

        let all = repo.find(doc! {}).await.unwrap().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "first");

        let tagged = repo.find(doc! { "tags": "b" }).await.unwrap().unwrap();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].title, "second");

        assert!(repo.find(doc! { "tags": "c" }).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_sets_fields() {
        let repo = InMemoryRepository::<Note>::new();
        let id = repo.create(&note("first", &[])).await.unwrap();

        let updated = repo
            .update(&id, doc! { "title": "renamed", "_id": ObjectId::new() })
            .await
            .unwrap();
        assert!(updated);

        let found = repo.find_one(&id).await.unwrap().unwrap();
        assert_eq!(found.title, "renamed");
        assert_eq!(found.id.unwrap().to_hex(), id);

        assert!(!repo.update(&ObjectId::new().to_hex(), doc! { "title": "x" }).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_dotted_key_writes_nested_field() {
        let repo = InMemoryRepository::<Note>::new();
        let id = repo.create(&note("first", &[])).await.unwrap();

        assert!(repo.update(&id, doc! { "profile.city": "Seoul" }).await.unwrap());
        assert!(repo.update(&id, doc! { "profile.zip": "04524" }).await.unwrap());

        let stored = repo.snapshot().await;
        let profile = stored[0].get_document("profile").unwrap();
        assert_eq!(profile.get_str("city").unwrap(), "Seoul");
        assert_eq!(profile.get_str("zip").unwrap(), "04524");
        assert!(!stored[0].contains_key("profile.city"));

        let found = repo.find(doc! { "profile.city": "Seoul" }).await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_update_rejects_path_through_scalar() {
        let repo = InMemoryRepository::<Note>::new();
        let id = repo.create(&note("first", &[])).await.unwrap();

        let result = repo
            .update(&id, doc! { "tags": ["x"], "title.length": 5 })
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let found = repo.find_one(&id).await.unwrap().unwrap();
        assert_eq!(found.title, "first");
        assert!(found.tags.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::<Note>::new();
        let id = repo.create(&note("first", &[])).await.unwrap();

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_default_count() {
        let repo = InMemoryRepository::<Note>::new();
        repo.create(&note("first", &["a"])).await.unwrap();
        repo.create(&note("second", &["a", "b"])).await.unwrap();

        assert_eq!(repo.count(doc! { "tags": "a" }).await.unwrap(), 2);
        assert_eq!(repo.count(doc! { "tags": "z" }).await.unwrap(), 0);
        assert_eq!(repo.len().await, 2);
    }
}
