//! 문자 체계 감지 모듈

mod script;

pub use script::{detect_script, is_hangul_char, is_japanese_char, Script};
