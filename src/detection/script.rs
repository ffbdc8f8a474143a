//! 입력 문자열의 문자 체계 판별
//!
//! 문자 단위가 아니라 문자열 전체를 하나의 체계로 분류합니다.
//! 일본어 범위를 먼저 검사하므로, 일본어와 한글이 섞인 문자열은 `Japanese`로 분류됩니다.

/// 문자열 전체의 문자 체계 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// 히라가나/가타카나 또는 CJK 한자 포함
    Japanese,
    /// 완성형 한글 포함 (일본어 문자 없음)
    Korean,
    /// 그 외 (원문 그대로 유지)
    Other,
}

/// 일본어 범위의 문자인지 확인
///
/// 히라가나/가타카나: U+3040 ~ U+30FF
/// CJK 통합 한자: U+4E00 ~ U+9FFF
pub fn is_japanese_char(ch: char) -> bool {
    let cp = ch as u32;
    (0x3040..=0x30FF).contains(&cp) || (0x4E00..=0x9FFF).contains(&cp)
}

/// 완성형 한글 음절(U+AC00 ~ U+D7A3)인지 확인
pub fn is_hangul_char(ch: char) -> bool {
    crate::core::unicode::is_hangul_syllable(ch)
}

/// 문자열의 문자 체계 판별 (일본어 우선)
pub fn detect_script(text: &str) -> Script {
    if text.chars().any(is_japanese_char) {
        Script::Japanese
    } else if text.chars().any(is_hangul_char) {
        Script::Korean
    } else {
        Script::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean() {
        assert_eq!(detect_script("한국어"), Script::Korean);
        assert_eq!(detect_script("abc 가"), Script::Korean);
    }

    #[test]
    fn test_japanese() {
        assert_eq!(detect_script("ありがとう"), Script::Japanese);
        assert_eq!(detect_script("カタカナ"), Script::Japanese);
        assert_eq!(detect_script("日本"), Script::Japanese);
    }

    #[test]
    fn test_other() {
        assert_eq!(detect_script("hello"), Script::Other);
        assert_eq!(detect_script(""), Script::Other);
        assert_eq!(detect_script("ㄱㄴㄷ"), Script::Other); // 낱자모는 음절 블록 밖
        assert_eq!(detect_script("café"), Script::Other);
    }

    #[test]
    fn test_japanese_wins_over_korean() {
        assert_eq!(detect_script("한국어とにほんご"), Script::Japanese);
        assert_eq!(detect_script("가日"), Script::Japanese);
    }

    #[test]
    fn test_range_bounds() {
        assert!(is_japanese_char('\u{3040}'));
        assert!(is_japanese_char('\u{30FF}'));
        assert!(!is_japanese_char('\u{303F}'));
        assert!(!is_japanese_char('\u{3100}'));
        assert!(is_japanese_char('\u{4E00}'));
        assert!(is_japanese_char('\u{9FFF}'));
        assert!(!is_japanese_char('\u{4DFF}'));
        assert!(!is_japanese_char('\u{A000}'));

        assert!(is_hangul_char('\u{AC00}'));
        assert!(is_hangul_char('\u{D7A3}'));
        assert!(!is_hangul_char('\u{D7A4}'));
    }
}
