//! # Domain Layer
//!
//! 사용자 저장소의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 저장소 문서와 1:1 대응되는 엔티티 (User, ApiKey)
//! └── dto/          ← 입력 데이터 전송 객체 (CreateUserRequest, ApiKeyRequest)
//! ```

pub mod entities;
pub mod dto;

