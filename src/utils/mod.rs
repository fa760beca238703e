//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 이메일 정규화, 역직렬화 보조 함수
//! - [`query_sanitizer`] - 검색어 정규식 이스케이프 필터
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_email;
//! use crate::utils::query_sanitizer::{QuerySanitizer, RegexQuerySanitizer};
//!
//! let email = normalize_email("  John@Example.com ");
//! let pattern = RegexQuerySanitizer.filter("john.doe");
//! ```

pub mod string_utils;
pub mod query_sanitizer;
