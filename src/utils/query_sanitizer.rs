//! # 검색어 보호 필터
//!
//! 자유 입력 검색어를 패턴 매칭 쿼리(`$regex`)에 넣기 전에
//! 정규식 메타 문자를 이스케이프합니다.

/// 검색어를 정규식 쿼리에 안전하게 넣을 수 있는 형태로 변환하는 필터
pub trait QuerySanitizer: Send + Sync {
    /// 원본 검색어를 정제된 문자열로 변환합니다.
    fn filter(&self, raw: &str) -> String;
}

/// `regex::escape` 기반 기본 필터
///
/// 제어 문자를 제거한 뒤 모든 정규식 메타 문자를 이스케이프합니다.
/// 결과 문자열은 리터럴 부분 문자열로만 매칭됩니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexQuerySanitizer;

impl QuerySanitizer for RegexQuerySanitizer {
    fn filter(&self, raw: &str) -> String {
        let cleaned: String = raw.chars().filter(|c| !c.is_control()).collect();
        regex::escape(&cleaned)
    }
}
