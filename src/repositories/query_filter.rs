//! # 쿼리 필터 평가기
//!
//! [`InMemoryRepository`](super::memory_repo::InMemoryRepository)가 사용하는
//! MongoDB 쿼리 문서의 부분 집합을 평가합니다.
//!
//! 지원 범위:
//! - 필드 정확히 일치 (`{ "email": "a@b.c" }`)
//! - 점 표기 경로, 배열을 만나면 각 원소로 확장 (`{ "apiKeys.key": "abc" }`)
//! - 배열 원소 포함 여부 (`{ "alias": "ally" }`)
//! - `$eq`, `$ne`, `$exists`, `$regex` (+ `$options`), BSON 정규식 값

use mongodb::bson::{Bson, Document};
use regex::{Regex, RegexBuilder};
use crate::errors::{AppError, AppResult};

/// 단일 필드에 대한 조건
#[derive(Debug, Clone)]
enum Condition {
    Equals(Bson),
    NotEquals(Bson),
    Exists(bool),
    Pattern(Regex),
}

/// 컴파일된 쿼리 필터
///
/// 정규식은 컴파일 시점에 한 번만 생성되므로 여러 문서에 재사용할 수 있습니다.
#[derive(Debug, Clone)]
pub struct QueryFilter {
    clauses: Vec<(String, Vec<Condition>)>,
}

impl QueryFilter {
    /// 쿼리 문서를 컴파일합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 지원하지 않는 연산자 또는 잘못된 정규식
    pub fn compile(filter: &Document) -> AppResult<Self> {
        let mut clauses = Vec::with_capacity(filter.len());

        for (path, value) in filter {
            if path.starts_with('$') {
                return Err(unsupported(path));
            }
            clauses.push((path.clone(), compile_conditions(value)?));
        }

        Ok(Self { clauses })
    }

    /// 문서가 모든 조건을 만족하는지 확인합니다.
    pub fn matches(&self, document: &Document) -> bool {
        self.clauses.iter().all(|(path, conditions)| {
            let values = resolve_path(document, path);
            conditions.iter().all(|condition| condition_matches(condition, &values))
        })
    }
}

fn unsupported(operator: &str) -> AppError {
    AppError::ValidationError(format!("지원하지 않는 쿼리 연산자입니다: {}", operator))
}

fn compile_conditions(value: &Bson) -> AppResult<Vec<Condition>> {
    match value {
        Bson::Document(operators) if operators.keys().any(|k| k.starts_with('$')) => {
            compile_operators(operators)
        }
        Bson::RegularExpression(regex) => {
            Ok(vec![Condition::Pattern(build_regex(&regex.pattern, &regex.options)?)])
        }
        other => Ok(vec![Condition::Equals(other.clone())]),
    }
}

fn compile_operators(operators: &Document) -> AppResult<Vec<Condition>> {
    let mut conditions = Vec::new();

    for (operator, operand) in operators {
        match operator.as_str() {
            "$eq" => conditions.push(Condition::Equals(operand.clone())),
            "$ne" => conditions.push(Condition::NotEquals(operand.clone())),
            "$exists" => conditions.push(Condition::Exists(is_truthy(operand))),
            "$regex" => {
                let pattern = operand.as_str().ok_or_else(|| {
                    AppError::ValidationError("$regex 값은 문자열이어야 합니다".to_string())
                })?;
                let options = operators.get_str("$options").unwrap_or("");
                conditions.push(Condition::Pattern(build_regex(pattern, options)?));
            }
            "$options" => {}
            other => return Err(unsupported(other)),
        }
    }

    Ok(conditions)
}

fn build_regex(pattern: &str, options: &str) -> AppResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(options.contains('i'))
        .multi_line(options.contains('m'))
        .dot_matches_new_line(options.contains('s'))
        .ignore_whitespace(options.contains('x'))
        .build()
        .map_err(|e| AppError::ValidationError(format!("잘못된 정규식입니다: {}", e)))
}

fn is_truthy(value: &Bson) -> bool {
    match value {
        Bson::Boolean(b) => *b,
        Bson::Int32(n) => *n != 0,
        Bson::Int64(n) => *n != 0,
        Bson::Double(n) => *n != 0.0,
        Bson::Null | Bson::Undefined => false,
        _ => true,
    }
}

/// 점 표기 경로가 가리키는 모든 값을 모읍니다.
///
/// 중간에 배열을 만나면 각 문서 원소로 내려갑니다.
fn resolve_path<'a>(document: &'a Document, path: &str) -> Vec<&'a Bson> {
    let segments: Vec<&str> = path.split('.').collect();
    let mut found = Vec::new();

    if let Some((head, rest)) = segments.split_first() {
        if let Some(value) = document.get(*head) {
            collect(value, rest, &mut found);
        }
    }

    found
}

fn collect<'a>(value: &'a Bson, segments: &[&str], found: &mut Vec<&'a Bson>) {
    let Some((head, rest)) = segments.split_first() else {
        found.push(value);
        return;
    };

    match value {
        Bson::Document(inner) => {
            if let Some(next) = inner.get(*head) {
                collect(next, rest, found);
            }
        }
        Bson::Array(items) => {
            for item in items {
                if let Bson::Document(_) = item {
                    collect(item, segments, found);
                }
            }
        }
        _ => {}
    }
}

fn equals_value(candidate: &Bson, expected: &Bson) -> bool {
    if candidate == expected {
        return true;
    }
    match candidate {
        Bson::Array(items) => items.iter().any(|item| item == expected),
        _ => false,
    }
}

fn pattern_matches(candidate: &Bson, pattern: &Regex) -> bool {
    match candidate {
        Bson::String(s) => pattern.is_match(s),
        Bson::Array(items) => items
            .iter()
            .any(|item| matches!(item, Bson::String(s) if pattern.is_match(s))),
        _ => false,
    }
}

fn condition_matches(condition: &Condition, values: &[&Bson]) -> bool {
    match condition {
        Condition::Equals(Bson::Null) if values.is_empty() => true,
        Condition::Equals(expected) => values.iter().any(|v| equals_value(v, expected)),
        Condition::NotEquals(expected) => !condition_matches(&Condition::Equals(expected.clone()), values),
        Condition::Exists(expected) => values.is_empty() != *expected,
        Condition::Pattern(pattern) => values.iter().any(|v| pattern_matches(v, pattern)),
    }
}
