//! 한글 -> 로마자 변환기

use crate::core::jamo_roman::{final_roman, initial_roman, medial_roman};
use crate::core::unicode::decompose_syllable;

/// 문자 하나를 로마자 조각으로 변환
///
/// - 완성형 한글: 초성 + 중성 + 종성 로마자를 이어붙임
/// - ASCII (< 128): 그대로 반환
/// - 그 외: None (결과에서 제외됨)
pub fn romanize_syllable(c: char) -> Option<String> {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        return c.is_ascii().then(|| c.to_string());
    };

    let mut out = String::with_capacity(6);
    out.push_str(initial_roman(cho)?);
    out.push_str(medial_roman(jung)?);
    out.push_str(final_roman(jong)?);
    Some(out)
}

/// 한글 문자열을 로마자 문자열로 변환
///
/// 음절 사이에 구분자를 넣지 않음 (한국어 -> "hangukeo").
/// ASCII도 완성형 한글도 아닌 문자(CJK 문장부호, 전각 기호, 이모지 등)는
/// 오류 없이 조용히 버려짐.
pub fn romanize_hangul(input: &str) -> String {
    input.chars().filter_map(romanize_syllable).collect()
}
