pub mod audit;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod formats;
pub mod kind;
pub mod limits;
pub mod month;
pub mod numeral;
pub mod pattern;
pub mod text;
pub mod titletranslate;

pub use engine::DateFormats;
pub use error::{DateError, Result};
pub use kind::FormatKind;
