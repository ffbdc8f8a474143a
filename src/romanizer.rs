//! 로마자 변환 진입점
//!
//! 문자 체계를 한 번 판별한 뒤 문자열 전체를 한 경로로 보냅니다.
//! - 일본어: 읽기 변환기 토큰을 공백으로 연결
//! - 한국어: 음절별 분해 결과를 구분자 없이 연결
//! - 그 외: 입력 그대로

use lazy_static::lazy_static;

use crate::core::converter::romanize_hangul;
use crate::detection::{detect_script, Script};
use crate::error::RomanizeError;
use crate::japanese::{transliterate, KanaConverter, ReadingConverter};

lazy_static! {
    static ref DEFAULT_ROMANIZER: Romanizer = Romanizer::new(KanaConverter::new());
}

/// 문자 체계별 로마자 변환기
#[derive(Debug, Clone, Default)]
pub struct Romanizer<C = KanaConverter> {
    converter: C,
}

impl<C: ReadingConverter> Romanizer<C> {
    /// 일본어 읽기 변환기를 지정해 생성
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// 문자열을 로마자로 변환
    ///
    /// 일본어 경로에서 읽기 변환기가 실패하면 부분 결과 없이 에러를 반환합니다.
    pub fn romanize(&self, text: &str) -> Result<String, RomanizeError> {
        let script = detect_script(text);
        log::debug!("문자 체계 판별: {:?} ({} chars)", script, text.chars().count());

        match script {
            Script::Japanese => transliterate(&self.converter, text).map_err(|e| {
                log::warn!("일본어 읽기 변환 실패: {}", e);
                RomanizeError::from(e)
            }),
            Script::Korean => Ok(romanize_hangul(text)),
            Script::Other => Ok(text.to_string()),
        }
    }
}

/// 기본 변환기(내장 사전의 [`KanaConverter`])로 로마자 변환
///
/// 내장 사전에 없는 한자는 에러가 됩니다. 사용자 사전이 필요하면
/// [`ReadingDictionary::merge`](crate::japanese::ReadingDictionary::merge)로 합친
/// 변환기를 [`Romanizer::new`]에 넣으세요.
pub fn romanize(text: &str) -> Result<String, RomanizeError> {
    DEFAULT_ROMANIZER.romanize(text)
}
