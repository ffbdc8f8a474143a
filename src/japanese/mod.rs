//! 일본어(가나/한자) -> 헵번식 로마자 변환 어댑터
//!
//! 분절과 읽기 결정은 전부 [`ReadingConverter`] 구현체에 맡기고,
//! 이 모듈은 토큰의 `hepburn` 조각을 순서대로 공백 하나로 이어붙이기만 합니다.
//!
//! ```
//! use koroma::japanese::{transliterate, KanaConverter};
//!
//! let converter = KanaConverter::new();
//! assert_eq!(transliterate(&converter, "ありがとう").unwrap(), "arigatou");
//! ```

mod dictionary;
mod kana;

pub use dictionary::{is_hiragana_reading, ReadingDictionary};
pub use kana::{kana_to_hepburn, KanaConverter};

use crate::error::ReadingError;

/// 변환기가 만들어내는 읽기 단위
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingToken {
    /// 원문 조각
    pub orig: String,
    /// 헵번식 로마자 조각
    pub hepburn: String,
}

impl ReadingToken {
    pub fn new(orig: impl Into<String>, hepburn: impl Into<String>) -> Self {
        Self {
            orig: orig.into(),
            hepburn: hepburn.into(),
        }
    }
}

/// 일본어 텍스트를 순서 있는 읽기 토큰 목록으로 변환하는 외부 협력자
///
/// 호출은 동기적이며 타임아웃/취소 정책은 호출자가 정합니다.
pub trait ReadingConverter {
    fn convert(&self, text: &str) -> Result<Vec<ReadingToken>, ReadingError>;
}

impl<T: ReadingConverter + ?Sized> ReadingConverter for &T {
    fn convert(&self, text: &str) -> Result<Vec<ReadingToken>, ReadingError> {
        (**self).convert(text)
    }
}

impl<T: ReadingConverter + ?Sized> ReadingConverter for Box<T> {
    fn convert(&self, text: &str) -> Result<Vec<ReadingToken>, ReadingError> {
        (**self).convert(text)
    }
}

/// 변환기 결과 토큰의 로마자 조각을 공백 하나로 연결
pub fn transliterate<C: ReadingConverter + ?Sized>(
    converter: &C,
    text: &str,
) -> Result<String, ReadingError> {
    let tokens = converter.convert(text)?;
    let fragments: Vec<&str> = tokens.iter().map(|t| t.hepburn.as_str()).collect();
    Ok(fragments.join(" "))
}
