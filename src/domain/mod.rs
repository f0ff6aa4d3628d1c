//! Domain Layer - 领域层
//!
//! 卡片分段的纯计算部分:
//! - LengthRules: 长度规则值对象
//! - text_segmenter: 边界分段 / 上限约束 / 下限合并管线

mod errors;
mod length_rules;
pub mod text_segmenter;

pub use errors::TextProcessingError;
pub use length_rules::{LengthRules, DEFAULT_MAX_CHARS, DEFAULT_MIN_CHARS, DEFAULT_TARGET_CHARS};
pub use text_segmenter::{enforce_max, enforce_min, process, segment};
