//! # 사용자 DTO 모듈
//!
//! 사용자 도메인의 입력 데이터 전송 객체를 모아둡니다.
//! 출력은 별도 DTO 없이 [`User`](crate::domain::entities::users::user::User)
//! 엔티티를 그대로 반환합니다.

pub mod request;

pub use request::*;
