//! # Data Transfer Objects
//!
//! 서비스 계층으로 들어오는 입력 데이터 구조를 정의합니다.
//! `serde`를 통한 역직렬화와 `validator`를 통한 입력 검증을 지원합니다.

pub mod users;

pub use users::*;
