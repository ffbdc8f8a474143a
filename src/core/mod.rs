//! 한글 음절 분해 및 로마자 변환

pub mod converter;
pub mod jamo_roman;
pub mod unicode;
