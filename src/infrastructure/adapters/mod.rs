//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

mod rule_based_segmenter;

pub use rule_based_segmenter::RuleBasedTextSegmenter;
