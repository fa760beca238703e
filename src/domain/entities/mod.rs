//! # Domain Entities Module
//!
//! 저장소 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson`을 통한 자동 변환
//! - **ObjectId 지원**: 저장소의 `_id` 필드와 매핑
//! - **기본값 정규화**: 누락된 필드는 역직렬화 시점에 기본값으로 채워짐

pub mod users;
