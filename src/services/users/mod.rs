//! 사용자 관리 서비스 모듈
//!
//! 사용자 계정 저장과 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 계정 생성, 조회, 부분 갱신, 삭제
//! - 이메일 정규화 (저장과 조회 모두)
//! - 워크플로 토큰(비밀번호 재설정, 활성화, 삭제)으로 조회
//! - 이메일 부분 검색, 활성 사용자 수
//! - API 키 발급/조회/회수 및 만료 확인
//! - 별칭 추가/조회/제거
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::connect(&StorageConfig::from_env()).await?;
//! let user = user_service
//!     .create_user(CreateUserRequest::new("alice@example.com", hash, "user"))
//!     .await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
