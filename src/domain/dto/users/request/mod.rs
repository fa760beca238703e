//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 도메인으로 들어오는 입력 데이터 구조를 정의합니다.
//!
//! - [`CreateUserRequest`](create_user_request::CreateUserRequest) - 계정 등록 데이터
//! - [`ApiKeyRequest`](api_key_request::ApiKeyRequest) - API 키 추가 데이터 (`validator` 검증)

pub mod create_user_request;
pub mod api_key_request;

pub use create_user_request::*;
pub use api_key_request::*;
