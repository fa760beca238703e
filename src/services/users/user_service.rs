//! # 사용자 저장소 서비스 구현
//!
//! 사용자 계정의 생명주기(생성, 조회, 갱신, 삭제)와
//! 파생 컬렉션(API 키, 별칭)에 대한 조회/변경 규칙을 구현합니다.
//!
//! ## 서비스 구조
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │    Lifecycle    │  │     Lookup      │  │ Derived Collect │  │
//! │  │ • create        │  │ • by email      │  │ • api keys      │  │
//! │  │ • load / all    │  │ • by token      │  │ • aliases       │  │
//! │  │ • update        │  │ • search        │  │ • expiry check  │  │
//! │  │ • delete        │  │ • active count  │  │                 │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │               DocumentRepository<User> (Arc<dyn>)               │
//! │ • MongoRepository  (운영)                                       │
//! │ • InMemoryRepository (로컬 실행, 테스트)                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 결과 규칙
//!
//! - 찾을 수 없음은 `Ok(None)` (빈 컬렉션 `[]`과 구분됨)
//! - 만료된 API 키는 `Err(AppError::ExpiredCredential)`
//! - 저장소 오류는 잡지 않고 그대로 전파
//!
//! ## 동시성
//!
//! 컬렉션 변경은 읽기-수정-쓰기 순서로 수행되며 낙관적 잠금이 없습니다.
//! 같은 사용자에 대한 동시 변경은 마지막 쓰기가 남습니다.

use std::sync::Arc;
use log::debug;
use mongodb::bson::{self, doc, Bson, DateTime, Document};
use serde::Serialize;
use crate::{
    config::{StorageBackend, StorageConfig},
    db::Database,
    domain::{
        dto::users::request::{ApiKeyRequest, CreateUserRequest},
        entities::users::user::User,
    },
    errors::{AppError, AppResult, ErrorContext},
    repositories::{
        document_repo::parse_object_id,
        users::{in_memory_user_repository, mongo_user_repository, UserRepository},
    },
    utils::{
        query_sanitizer::{QuerySanitizer, RegexQuerySanitizer},
        string_utils::normalize_email,
    },
};

/// 사용자 계정 저장소 서비스
///
/// 입력을 정규화한 뒤 문서 리포지토리에 위임하고,
/// 저장소 문서를 [`User`] 엔티티로 돌려줍니다.
///
/// ## 의존성
///
/// 리포지토리 핸들과 검색어 필터는 생성 시점에 명시적으로 전달됩니다.
///
/// ```rust,ignore
/// let service = UserService::new(in_memory_user_repository());
///
/// let user = service
///     .create_user(CreateUserRequest::new(" Foo@Example.com ", hash, "user"))
///     .await?;
/// assert_eq!(user.email, "foo@example.com");
///
/// let found = service.load_user_by_email("FOO@EXAMPLE.COM").await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    /// 사용자 문서 리포지토리
    user_repo: UserRepository,
    /// 검색어 정규식 이스케이프 필터
    sanitizer: Arc<dyn QuerySanitizer>,
}

impl UserService {
    /// 주어진 리포지토리로 서비스를 생성합니다.
    pub fn new(user_repo: UserRepository) -> Self {
        Self {
            user_repo,
            sanitizer: Arc::new(RegexQuerySanitizer),
        }
    }

    /// 검색어 필터를 교체합니다.
    pub fn with_sanitizer(mut self, sanitizer: Arc<dyn QuerySanitizer>) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// 설정된 저장소를 사용하는 서비스를 생성합니다.
    ///
    /// `StorageBackend::Mongo`이면 MongoDB에 연결하고 설정된 컬렉션을 사용하며,
    /// `StorageBackend::Memory`이면 프로세스 내부 저장소를 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 연결 또는 ping 실패
    pub async fn connect(config: &StorageConfig) -> AppResult<Self> {
        let user_repo = match config.backend {
            StorageBackend::Mongo => {
                let database = Database::new(config).await?;
                mongo_user_repository(&database, config)
            }
            StorageBackend::Memory => in_memory_user_repository(),
        };

        debug!("사용자 저장소: {}", config.backend.as_str());
        Ok(Self::new(user_repo))
    }

    // ---------------------------------------------------------------------
    // 생명주기
    // ---------------------------------------------------------------------

    /// 새 사용자 계정 생성
    ///
    /// 이메일을 정규화(trim + 소문자)하고, 기본값을 채운 엔티티를 저장한 뒤
    /// 저장소가 발급한 ID를 설정하여 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자 (ID 포함)
    /// * `Err(AppError::DatabaseError)` - 저장 실패
    pub async fn create_user(&self, mut request: CreateUserRequest) -> AppResult<User> {
        request.email = normalize_email(&request.email);

        let mut user = User::from(request);
        let id = self.user_repo.create(&user).await?;
        user.set_id(parse_object_id(&id)?);

        debug!("사용자 생성: {}", id);
        Ok(user)
    }

    /// ID로 사용자 조회
    pub async fn load_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.user_repo.find_one(id).await
    }

    /// 모든 사용자 조회
    ///
    /// 저장소에 사용자가 하나도 없으면 `None`을 반환합니다.
    pub async fn load_all_users(&self) -> AppResult<Option<Vec<User>>> {
        self.user_repo.find(doc! {}).await
    }

    /// ID로 사용자 삭제. 삭제된 문서가 없으면 `false`.
    pub async fn delete_user_by_id(&self, id: &str) -> AppResult<bool> {
        self.user_repo.delete(id).await
    }

    /// 사용자 부분 갱신
    ///
    /// 직렬화 가능한 임의의 값을 받아 그 필드들만 갱신합니다.
    /// `email` 필드가 포함되어 있으면 저장 전에 정규화하고, `_id`는 무시합니다.
    ///
    /// ```rust,ignore
    /// service
    ///     .update_user_by_id(&id, &serde_json::json!({ "isActive": true, "loginErrorCounter": 0 }))
    ///     .await?;
    /// ```
    pub async fn update_user_by_id<T>(&self, id: &str, item: &T) -> AppResult<bool>
    where
        T: Serialize + ?Sized,
    {
        let mut partial = bson::to_document(item).context("갱신 문서 직렬화 실패")?;
        partial.remove("_id");

        if let Ok(email) = partial.get_str("email") {
            let normalized = normalize_email(email);
            partial.insert("email", normalized);
        }

        self.user_repo.update(id, partial).await
    }

    // ---------------------------------------------------------------------
    // 조회
    // ---------------------------------------------------------------------

    /// 이메일로 사용자 조회
    ///
    /// 조회 이메일도 저장 시와 같은 규칙으로 정규화됩니다.
    pub async fn load_user_by_email(&self, email: &str) -> AppResult<Option<Vec<User>>> {
        self.user_repo
            .find(doc! { "email": normalize_email(email) })
            .await
    }

    /// 비밀번호 재설정 토큰으로 사용자 조회
    pub async fn load_user_by_forgot_password_id(&self, forgot_password_id: &str) -> AppResult<Option<User>> {
        self.load_first(doc! { "forgotPasswordId": forgot_password_id }).await
    }

    /// 계정 활성화 토큰으로 사용자 조회
    pub async fn load_user_by_activation_id(&self, activation_id: &str) -> AppResult<Option<User>> {
        self.load_first(doc! { "activationId": activation_id }).await
    }

    /// 계정 삭제 토큰으로 사용자 조회
    pub async fn load_user_by_delete_id(&self, delete_id: &str) -> AppResult<Option<User>> {
        self.load_first(doc! { "deleteId": delete_id }).await
    }

    /// 이메일 부분 문자열 검색
    ///
    /// 검색어는 필터로 이스케이프된 뒤 대소문자 구분 없는 `$regex`로 사용됩니다.
    /// 따라서 `.`이나 `*` 같은 문자는 리터럴로만 매칭됩니다.
    pub async fn search_users(&self, query: &str) -> AppResult<Option<Vec<User>>> {
        let pattern = self.sanitizer.filter(query.trim()).to_lowercase();

        self.user_repo
            .find(doc! { "email": { "$regex": pattern, "$options": "i" } })
            .await
    }

    /// 활성화된 사용자 수
    pub async fn count_activated_users(&self) -> AppResult<u64> {
        self.user_repo.count(doc! { "isActive": true }).await
    }

    // ---------------------------------------------------------------------
    // API 키
    // ---------------------------------------------------------------------

    /// API 키로 사용자 조회
    ///
    /// 일치하는 사용자의 해당 키가 만료일을 가지고 있고 그 시각이 지났다면
    /// 사용자를 돌려주지 않고 에러를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 유효한 키를 가진 사용자
    /// * `Ok(None)` - 해당 키를 가진 사용자 없음
    /// * `Err(AppError::ExpiredCredential)` - 키가 만료됨
    pub async fn load_user_by_api_key(&self, api_key: &str) -> AppResult<Option<User>> {
        let Some(user) = self.load_first(doc! { "apiKeys.key": api_key }).await? else {
            return Ok(None);
        };

        let now = DateTime::now();
        let expired = user
            .api_keys
            .iter()
            .any(|key| key.key == api_key && key.is_expired_at(now));

        if expired {
            debug!("만료된 API 키로 조회 시도: 사용자 {}", user.id());
            return Err(AppError::ExpiredCredential("API 키가 만료되었습니다".to_string()));
        }

        Ok(Some(user))
    }

    /// 사용자에게 API 키 추가
    ///
    /// 만료일 문자열은 날짜로 변환되어 저장됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 키가 추가된 사용자
    /// * `Ok(None)` - 해당 ID의 사용자 없음 (키는 검사하지 않음)
    /// * `Err(AppError::ValidationError)` - 빈 키 또는 잘못된 만료일
    pub async fn add_api_key_to_user(&self, id: &str, request: ApiKeyRequest) -> AppResult<Option<User>> {
        let Some(mut user) = self.user_repo.find_one(id).await? else {
            return Ok(None);
        };

        user.api_keys.push(request.into_api_key()?);

        let value = field_value("apiKeys", &user.api_keys)?;
        self.persist_field(id, "apiKeys", value, user).await
    }

    /// 사용자의 API 키 제거
    ///
    /// 같은 키 문자열을 가진 항목을 모두 제거합니다.
    /// 키 목록이 비어 있으면 쓰기 없이 그대로 반환합니다.
    pub async fn remove_api_key_from_user(&self, id: &str, api_key: &str) -> AppResult<Option<User>> {
        let Some(mut user) = self.user_repo.find_one(id).await? else {
            return Ok(None);
        };

        let before = user.api_keys.len();
        user.api_keys.retain(|key| key.key != api_key);
        if user.api_keys.len() == before {
            return Ok(Some(user));
        }

        let value = field_value("apiKeys", &user.api_keys)?;
        self.persist_field(id, "apiKeys", value, user).await
    }

    /// 사용자의 모든 API 키 제거. 사용자가 없으면 `false`.
    pub async fn remove_all_api_keys_from_user(&self, id: &str) -> AppResult<bool> {
        if self.user_repo.find_one(id).await?.is_none() {
            return Ok(false);
        }

        self.user_repo
            .update(id, doc! { "apiKeys": bson::Array::new() })
            .await
    }

    // ---------------------------------------------------------------------
    // 별칭
    // ---------------------------------------------------------------------

    /// 사용자에게 별칭 추가
    ///
    /// 이미 같은 별칭이 있으면 쓰기 없이 그대로 반환합니다 (중복 없음).
    pub async fn add_alias_to_user(&self, id: &str, alias: &str) -> AppResult<Option<User>> {
        let Some(mut user) = self.user_repo.find_one(id).await? else {
            return Ok(None);
        };

        if user.has_alias(alias) {
            return Ok(Some(user));
        }

        user.alias.push(alias.to_string());

        let value = field_value("alias", &user.alias)?;
        self.persist_field(id, "alias", value, user).await
    }

    /// 별칭으로 사용자 조회
    pub async fn load_user_by_alias(&self, alias: &str) -> AppResult<Option<User>> {
        self.load_first(doc! { "alias": alias }).await
    }

    /// 사용자의 별칭 제거
    ///
    /// 같은 값을 가진 항목을 모두 제거합니다.
    pub async fn remove_alias_from_user(&self, id: &str, alias: &str) -> AppResult<Option<User>> {
        let Some(mut user) = self.user_repo.find_one(id).await? else {
            return Ok(None);
        };

        let before = user.alias.len();
        user.alias.retain(|a| a != alias);
        if user.alias.len() == before {
            return Ok(Some(user));
        }

        let value = field_value("alias", &user.alias)?;
        self.persist_field(id, "alias", value, user).await
    }

    async fn load_first(&self, filter: Document) -> AppResult<Option<User>> {
        Ok(self
            .user_repo
            .find(filter)
            .await?
            .and_then(|users| users.into_iter().next()))
    }

    /// 변경된 컬렉션 필드 하나만 저장합니다.
    ///
    /// 읽은 뒤 문서가 삭제되어 갱신 대상이 없으면 `None`을 반환합니다.
    async fn persist_field(&self, id: &str, field: &str, value: Bson, user: User) -> AppResult<Option<User>> {
        let mut partial = Document::new();
        partial.insert(field, value);

        if self.user_repo.update(id, partial).await? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

fn field_value<V>(field: &str, value: &V) -> AppResult<Bson>
where
    V: Serialize + ?Sized,
{
    bson::to_bson(value).with_context(|| format!("{} 직렬화 실패", field))
}
