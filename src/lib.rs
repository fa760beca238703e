//! 사용자 계정 저장소 서비스
//!
//! 사용자 계정 레코드를 문서 저장소(MongoDB)에 보관하고,
//! 계정 생명주기와 조회, API 키와 별칭 관리를 제공하는 라이브러리입니다.
//!
//! # Features
//!
//! - **사용자 엔티티**: 저장 문서와 1:1 대응, 누락/null 컬렉션은 빈 값으로 정규화
//! - **이메일 정규화**: 저장과 조회 모두 trim + 소문자
//! - **API 키**: 선택적 만료일, 만료된 키로 조회 시 에러
//! - **별칭**: 중복 없는 보조 식별자
//! - **MongoDB**: 운영 저장소 / **InMemory**: 로컬 실행과 테스트
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │     UserService      │ ← 비즈니스 규칙
//! └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │ DocumentRepository<T>│ ← 범용 CRUD 계약
//! └──────────────────────┘
//!       │          │
//!       ▼          ▼
//! ┌──────────┐ ┌──────────┐
//! │ MongoDB  │ │ InMemory │ ← 저장소
//! └──────────┘ └──────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_storage_service::config::StorageConfig;
//! use user_storage_service::services::users::UserService;
//!
//! let service = UserService::connect(&StorageConfig::from_env()).await?;
//! let users = service.load_user_by_email("Alice@Example.com").await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;
