//! 한자 표기 -> 히라가나 읽기 사전
//!
//! JSON 객체 파일(`{"日本語": "にほんご", ...}`)에서 로드합니다.
//! 자주 쓰는 어휘는 `data/readings.json`으로 바이너리에 포함되어 있습니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lazy_static::lazy_static;

use crate::error::DictionaryError;

const BUNDLED_READINGS: &str = include_str!("../../data/readings.json");

lazy_static! {
    static ref BUNDLED: ReadingDictionary = ReadingDictionary::from_json(BUNDLED_READINGS)
        .unwrap_or_else(|e| {
            log::error!("내장 읽기 사전 파싱 실패: {}", e);
            ReadingDictionary::new()
        });
}

/// 히라가나(U+3041 ~ U+309F)와 장음 부호 ー로만 이루어진 읽기인지 확인
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| ('\u{3041}'..='\u{309F}').contains(&c) || c == 'ー')
}

/// 표기 -> 읽기 사전
#[derive(Debug, Clone, Default)]
pub struct ReadingDictionary {
    entries: HashMap<String, String>,
    /// 가장 긴 표기의 문자 수 (최장 일치 탐색 상한)
    max_surface_len: usize,
}

impl ReadingDictionary {
    /// 빈 사전 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 내장 기본 사전 (자주 쓰는 단어와 한자 단독 읽기)
    pub fn bundled() -> Self {
        BUNDLED.clone()
    }

    /// JSON 파일에서 사전 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path.as_ref())?;
        let raw: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))?;
        let dict = Self::from_entries(raw)?;
        log::info!(
            "읽기 사전 로드: {} ({}개 항목)",
            path.as_ref().display(),
            dict.len()
        );
        Ok(dict)
    }

    /// JSON 문자열에서 사전 생성
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    fn from_entries(raw: HashMap<String, String>) -> Result<Self, DictionaryError> {
        let mut dict = Self::new();
        for (surface, reading) in raw {
            dict.insert(surface, reading)?;
        }
        Ok(dict)
    }

    /// 항목 추가 (기존 표기는 덮어씀)
    pub fn insert(
        &mut self,
        surface: impl Into<String>,
        reading: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        let surface = surface.into();
        let reading = reading.into();
        if surface.is_empty() || !is_hiragana_reading(&reading) {
            return Err(DictionaryError::InvalidReading { surface, reading });
        }
        self.max_surface_len = self.max_surface_len.max(surface.chars().count());
        self.entries.insert(surface, reading);
        Ok(())
    }

    /// 다른 사전의 항목을 덮어쓰며 병합
    pub fn merge(&mut self, other: ReadingDictionary) {
        self.max_surface_len = self.max_surface_len.max(other.max_surface_len);
        self.entries.extend(other.entries);
    }

    /// 표기의 읽기 조회
    pub fn get(&self, surface: &str) -> Option<&str> {
        self.entries.get(surface).map(String::as_str)
    }

    /// `chars` 앞부분과 가장 길게 일치하는 표기 탐색
    /// 반환: (일치한 문자 수, 읽기)
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &str)> {
        let upper = self.max_surface_len.min(chars.len());
        (1..=upper).rev().find_map(|len| {
            let key: String = chars[..len].iter().collect();
            self.get(&key).map(|reading| (len, reading))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
