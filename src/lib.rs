pub mod config;
pub mod core;
pub mod detection;
pub mod error;
pub mod japanese;
pub mod romanizer;

pub use self::core::converter::romanize_hangul;
pub use detection::{detect_script, Script};
pub use error::{ConfigError, DictionaryError, ReadingError, RomanizeError};
pub use japanese::{KanaConverter, ReadingConverter, ReadingDictionary, ReadingToken};
pub use romanizer::{romanize, Romanizer};
