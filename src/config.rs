//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Koroma 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KoromaConfig {
    /// 기본 로그 필터 (RUST_LOG가 있으면 그쪽이 우선)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 한자 읽기 사전 경로 (JSON 객체: 표기 -> 히라가나 읽기)
    #[serde(default)]
    pub reading_dictionary: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for KoromaConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            reading_dictionary: None,
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/koroma/config.json 또는 ~/.config/koroma/config.json
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("koroma").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KoromaConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => KoromaConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            KoromaConfig::default()
        }
    }
}

/// 지정한 경로에서 설정 파일 로드
pub fn load_config_from(path: impl AsRef<Path>) -> Result<KoromaConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 저장
pub fn save_config(config: &KoromaConfig) -> Result<(), ConfigError> {
    save_config_to(config, config_path())
}

/// 지정한 경로에 설정 파일 저장 (상위 디렉토리 생성)
pub fn save_config_to(config: &KoromaConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
