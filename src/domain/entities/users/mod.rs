//! Users Entity Module
//!
//! 사용자 계정 엔티티와 API 키 값 객체를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user = User::from(CreateUserRequest::new("user@example.com", hashed_password, "user"));
//! assert!(user.api_keys.is_empty());
//! assert_eq!(user.id(), "");
//! ```

pub mod user;
