//! 기본 읽기 변환기: 가나 -> 헵번식 로마자
//!
//! 히라가나/가타카나는 표로 직접 변환하고, 한자는 [`ReadingDictionary`]의
//! 최장 일치 읽기로 변환합니다 (기본값은 내장 사전). 장음은 장음 기호 없이 모음을 그대로 씁니다
//! (おう -> "ou", ラーメン -> "raamen").

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{ReadingConverter, ReadingDictionary, ReadingToken};
use crate::error::ReadingError;

lazy_static! {
    /// 히라가나 (한 글자 또는 요음 두 글자) -> 헵번식 로마자
    static ref KANA_TABLE: HashMap<&'static str, &'static str> = {
        #[rustfmt::skip]
        let pairs: &[(&str, &str)] = &[
            ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
            ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
            ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
            ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
            ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
            ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
            ("だ", "da"), ("ぢ", "ji"), ("づ", "zu"), ("で", "de"), ("ど", "do"),
            ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
            ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
            ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
            ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
            ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
            ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
            ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
            ("わ", "wa"), ("ゐ", "i"), ("ゑ", "e"), ("を", "wo"), ("ん", "n"),
            ("ゔ", "vu"),
            // 작은 가나 (단독으로 나온 경우)
            ("ぁ", "a"), ("ぃ", "i"), ("ぅ", "u"), ("ぇ", "e"), ("ぉ", "o"),
            ("ゃ", "ya"), ("ゅ", "yu"), ("ょ", "yo"), ("ゎ", "wa"),
            ("ゕ", "ka"), ("ゖ", "ke"),
            // 요음
            ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
            ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
            ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"), ("しぇ", "she"),
            ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"), ("じぇ", "je"),
            ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"), ("ちぇ", "che"),
            ("ぢゃ", "ja"), ("ぢゅ", "ju"), ("ぢょ", "jo"),
            ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
            ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
            ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
            ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
            ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
            ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
            // 외래어 표기용 조합
            ("てぃ", "ti"), ("でぃ", "di"), ("でゅ", "dyu"), ("とぅ", "tu"), ("どぅ", "du"),
            ("ふぁ", "fa"), ("ふぃ", "fi"), ("ふぇ", "fe"), ("ふぉ", "fo"), ("ふゅ", "fyu"),
            ("うぃ", "wi"), ("うぇ", "we"), ("うぉ", "wo"),
            ("ゔぁ", "va"), ("ゔぃ", "vi"), ("ゔぇ", "ve"), ("ゔぉ", "vo"),
        ];
        pairs.iter().copied().collect()
    };
}

/// 가타카나(ァ-ヶ)를 대응하는 히라가나로 변환, 그 외 문자는 그대로
fn katakana_to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// 촉음(っ) 뒤 자음 중복: っちゃ -> "tcha", っか -> "kka"
/// 모음이나 ん으로 시작하면 겹칠 자음이 없으므로 "tsu"를 씀
fn push_geminate(out: &mut String, romaji: &str) {
    match romaji.chars().next() {
        _ if romaji == "n" => out.push_str("tsu"),
        Some(_) if romaji.starts_with("ch") => out.push('t'),
        Some(c) if !is_vowel(c) => out.push(c),
        _ => out.push_str("tsu"),
    }
}

/// 표에서 가장 긴(요음 우선) 항목 조회
/// 반환: (로마자, 소비한 문자 수)
fn lookup(chars: &[char]) -> Option<(&'static str, usize)> {
    if chars.len() >= 2 {
        let pair: String = chars[..2].iter().collect();
        if let Some(romaji) = KANA_TABLE.get(pair.as_str()) {
            return Some((*romaji, 2));
        }
    }
    let single = chars.first()?.to_string();
    KANA_TABLE.get(single.as_str()).map(|romaji| (*romaji, 1))
}

/// 가나 문자열을 헵번식 로마자로 변환
///
/// 표에 없는 문자는 원문 그대로 출력됩니다.
pub fn kana_to_hepburn(kana: &str) -> String {
    let original: Vec<char> = kana.chars().collect();
    let chars: Vec<char> = original.iter().copied().map(katakana_to_hiragana).collect();
    let mut out = String::with_capacity(chars.len() * 3);
    let mut sokuon = false;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            'っ' => {
                if sokuon {
                    out.push_str("tsu");
                }
                sokuon = true;
                i += 1;
                continue;
            }
            'ー' => {
                // 장음: 직전 모음 반복
                if let Some(v) = out.chars().last().filter(|c| is_vowel(*c)) {
                    out.push(v);
                }
                i += 1;
                continue;
            }
            _ => {}
        }

        match lookup(&chars[i..]) {
            Some((romaji, consumed)) => {
                if sokuon {
                    push_geminate(&mut out, romaji);
                }
                out.push_str(romaji);
                i += consumed;
            }
            None => {
                if sokuon {
                    out.push_str("tsu");
                }
                out.push(original[i]);
                i += 1;
            }
        }
        sokuon = false;
    }

    if sokuon {
        out.push_str("tsu");
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Hiragana,
    Katakana,
    Kanji,
    Other,
}

fn classify(c: char) -> CharClass {
    match c {
        '\u{3041}'..='\u{309F}' => CharClass::Hiragana,
        '\u{30A0}'..='\u{30FF}' => CharClass::Katakana,
        '\u{4E00}'..='\u{9FFF}' | '々' => CharClass::Kanji,
        _ => CharClass::Other,
    }
}

/// 같은 토큰에 이어붙일 문자인지 (ー는 히라가나 뒤에서도 이어짐)
fn run_continues(class: CharClass, c: char) -> bool {
    let next = classify(c);
    next == class || (class == CharClass::Hiragana && c == 'ー')
}

/// 내장 읽기 변환기
///
/// 분절 규칙:
/// - 히라가나 연속 구간, 가타카나 연속 구간이 각각 하나의 토큰
/// - 한자는 사전 최장 일치 단위로 토큰 (일치는 뒤따르는 가나까지 이어질 수 있음)
/// - 그 외 문자 구간은 앞뒤 공백을 제거한 원문 그대로 토큰 (공백뿐이면 생략)
/// - 로마자가 비는 구간(앞에 모음 없는 ー 등)은 토큰을 만들지 않음
///
/// 사전에 없는 한자를 만나면 [`ReadingError::UnknownReading`]을 반환합니다.
#[derive(Debug, Clone)]
pub struct KanaConverter {
    dictionary: ReadingDictionary,
}

impl KanaConverter {
    /// 내장 사전으로 생성
    pub fn new() -> Self {
        Self::with_dictionary(ReadingDictionary::bundled())
    }

    /// 지정한 한자 읽기 사전만으로 생성
    pub fn with_dictionary(dictionary: ReadingDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &ReadingDictionary {
        &self.dictionary
    }
}

impl Default for KanaConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingConverter for KanaConverter {
    fn convert(&self, text: &str) -> Result<Vec<ReadingToken>, ReadingError> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let class = classify(chars[i]);

            if class == CharClass::Kanji {
                let Some((len, reading)) = self.dictionary.longest_match(&chars[i..]) else {
                    return Err(ReadingError::UnknownReading { ch: chars[i] });
                };
                let orig: String = chars[i..i + len].iter().collect();
                tokens.push(ReadingToken::new(orig, kana_to_hepburn(reading)));
                i += len;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && run_continues(class, chars[j]) {
                j += 1;
            }
            let orig: String = chars[i..j].iter().collect();
            match class {
                CharClass::Hiragana | CharClass::Katakana => {
                    let hepburn = kana_to_hepburn(&orig);
                    if !hepburn.is_empty() {
                        tokens.push(ReadingToken::new(orig, hepburn));
                    }
                }
                _ => {
                    let trimmed = orig.trim();
                    if !trimmed.is_empty() {
                        tokens.push(ReadingToken::new(trimmed, trimmed));
                    }
                }
            }
            i = j;
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hepburns(tokens: &[ReadingToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.hepburn.as_str()).collect()
    }

    #[test]
    fn test_basic_hiragana() {
        assert_eq!(kana_to_hepburn("ありがとう"), "arigatou");
        assert_eq!(kana_to_hepburn("しんぶん"), "shinbun");
        assert_eq!(kana_to_hepburn("ふじさん"), "fujisan");
        assert_eq!(kana_to_hepburn("つくえ"), "tsukue");
    }

    #[test]
    fn test_youon() {
        assert_eq!(kana_to_hepburn("きょう"), "kyou");
        assert_eq!(kana_to_hepburn("しゃしん"), "shashin");
        assert_eq!(kana_to_hepburn("じゅぎょう"), "jugyou");
        assert_eq!(kana_to_hepburn("りょこう"), "ryokou");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(kana_to_hepburn("がっこう"), "gakkou");
        assert_eq!(kana_to_hepburn("まっちゃ"), "matcha");
        assert_eq!(kana_to_hepburn("きって"), "kitte");
        assert_eq!(kana_to_hepburn("あっ"), "atsu");
        assert_eq!(kana_to_hepburn("っん"), "tsun");
        assert_eq!(kana_to_hepburn("っな"), "nna");
    }

    #[test]
    fn test_katakana() {
        assert_eq!(kana_to_hepburn("カタカナ"), "katakana");
        assert_eq!(kana_to_hepburn("ラーメン"), "raamen");
        assert_eq!(kana_to_hepburn("コーヒー"), "koohii");
        assert_eq!(kana_to_hepburn("ヴァイオリン"), "vaiorin");
        assert_eq!(kana_to_hepburn("パーティー"), "paatii");
    }

    #[test]
    fn test_small_ka_ke() {
        assert_eq!(kana_to_hepburn("ヶ"), "ke");
        assert_eq!(kana_to_hepburn("ヵ"), "ka");
        assert_eq!(kana_to_hepburn("ゖ"), "ke");
    }

    #[test]
    fn test_unknown_passthrough() {
        assert_eq!(kana_to_hepburn("ゟ"), "ゟ");
        assert_eq!(kana_to_hepburn("ヷ"), "ヷ");
        assert_eq!(kana_to_hepburn("ヿ"), "ヿ");
        assert_eq!(kana_to_hepburn(""), "");
    }

    #[test]
    fn test_convert_splits_by_kana_type() {
        let tokens = KanaConverter::new().convert("カタカナとひらがな").unwrap();
        assert_eq!(hepburns(&tokens), vec!["katakana", "tohiragana"]);
        assert_eq!(tokens[0].orig, "カタカナ");
    }

    #[test]
    fn test_convert_hiragana_with_long_mark() {
        let tokens = KanaConverter::new().convert("らーめん").unwrap();
        assert_eq!(hepburns(&tokens), vec!["raamen"]);
    }

    #[test]
    fn test_convert_skips_empty_readings() {
        let converter = KanaConverter::new();
        let tokens = converter.convert("ねこ ー").unwrap();
        assert_eq!(hepburns(&tokens), vec!["neko"]);
        let tokens = converter.convert("ーねこ").unwrap();
        assert_eq!(hepburns(&tokens), vec!["neko"]);
        let tokens = converter.convert("日本ー").unwrap();
        assert_eq!(hepburns(&tokens), vec!["nihon"]);
        assert!(tokens.iter().all(|t| !t.hepburn.is_empty()));
    }

    #[test]
    fn test_default_uses_bundled_dictionary() {
        let converter = KanaConverter::default();
        assert!(!converter.dictionary().is_empty());
        let tokens = converter.convert("私は学生です").unwrap();
        assert_eq!(hepburns(&tokens), vec!["watashi", "ha", "gakusei", "desu"]);
        assert!(KanaConverter::with_dictionary(ReadingDictionary::new())
            .dictionary()
            .is_empty());
    }

    #[test]
    fn test_convert_with_dictionary() {
        let dict = ReadingDictionary::from_json(
            r#"{"日本語": "にほんご", "勉強": "べんきょう", "食べる": "たべる"}"#,
        )
        .unwrap();
        let converter = KanaConverter::with_dictionary(dict);

        let tokens = converter.convert("日本語を勉強する").unwrap();
        assert_eq!(hepburns(&tokens), vec!["nihongo", "wo", "benkyou", "suru"]);

        // 사전 항목이 뒤따르는 가나까지 포함하는 경우
        let tokens = converter.convert("食べる").unwrap();
        assert_eq!(hepburns(&tokens), vec!["taberu"]);
        assert_eq!(tokens[0].orig, "食べる");
    }

    #[test]
    fn test_convert_unknown_kanji() {
        let converter = KanaConverter::with_dictionary(ReadingDictionary::new());
        let err = converter.convert("漢字").unwrap_err();
        assert!(matches!(err, ReadingError::UnknownReading { ch: '漢' }));
        // 내장 사전에도 없는 한자
        let err = KanaConverter::new().convert("鬱").unwrap_err();
        assert!(matches!(err, ReadingError::UnknownReading { ch: '鬱' }));
    }

    #[test]
    fn test_convert_other_runs() {
        let tokens = KanaConverter::new().convert("ねこ cat いぬ").unwrap();
        assert_eq!(hepburns(&tokens), vec!["neko", "cat", "inu"]);
        assert!(KanaConverter::new().convert("   ").unwrap().is_empty());
    }
}
