//! 자모 인덱스 -> 로마자 조각 매핑
//!
//! 테이블 순서는 유니코드 한글 음절 인코딩의 인덱스 순서를 따릅니다.

// 초성 인덱스 순서 (19개):
// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
pub static INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b",
    "bb", "s", "ss", "", "j", "jj", "ch", "k",
    "t", "p", "h",
];

// 중성 인덱스 순서 (21개):
// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[rustfmt::skip]
pub static MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye",
    "o", "wa", "wae", "oe", "yo", "u", "wo", "we",
    "wi", "yu", "eu", "ui", "i",
];

// 종성 인덱스 순서 (28개, 0 = 없음):
// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[rustfmt::skip]
pub static FINALS: [&str; 28] = [
    "", "k", "kk", "ks", "n", "nj", "nh", "t",
    "l", "lk", "lm", "lb", "ls", "lt", "lp", "lh",
    "m", "b", "ps", "s", "ss", "ng", "j", "ch",
    "k", "t", "p", "h",
];

/// 초성 인덱스의 로마자 (범위 밖이면 None)
pub fn initial_roman(index: u32) -> Option<&'static str> {
    INITIALS.get(index as usize).copied()
}

/// 중성 인덱스의 로마자
pub fn medial_roman(index: u32) -> Option<&'static str> {
    MEDIALS.get(index as usize).copied()
}

/// 종성 인덱스의 로마자 (0 = 종성 없음 -> 빈 문자열)
pub fn final_roman(index: u32) -> Option<&'static str> {
    FINALS.get(index as usize).copied()
}
