//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 핸들을 생성 시점에 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::repositories::users::in_memory_user_repository;
//!
//! let user_service = UserService::new(in_memory_user_repository());
//! ```

pub mod users;
