//! 에러 타입

use std::io;

/// 읽기 변환기(일본어 읽기 -> 헵번식 로마자) 실패
#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    /// 사전에 읽기가 없는 한자
    #[error("no known reading for '{ch}'")]
    UnknownReading { ch: char },

    /// 외부 변환기 내부 오류 (리소스 데이터 없음 등)
    #[error("reading converter failed: {0}")]
    Converter(String),
}

/// 읽기 사전 로드/검증 실패
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// 읽기는 히라가나(와 장음 부호 ー)로만 구성되어야 함
    #[error("invalid reading for '{surface}': '{reading}' is not hiragana")]
    InvalidReading { surface: String, reading: String },
}

/// 설정 파일 로드/저장 실패
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 로마자 변환 실패
///
/// 한글/기타 경로는 실패하지 않으며, 일본어 경로의 변환기 실패만 전달됩니다.
#[derive(Debug, thiserror::Error)]
pub enum RomanizeError {
    #[error(transparent)]
    Reading(#[from] ReadingError),
}
