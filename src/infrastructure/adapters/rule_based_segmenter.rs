//! Rule-Based Text Segmenter
//!
//! 基于标点与长度规则的分段器，包装领域层分段管线

use crate::application::ports::{SegmentedText, TextSegmenterPort};
use crate::domain::{process, LengthRules, TextProcessingError};

/// 标点 + 长度规则分段器
#[derive(Debug, Clone, Default)]
pub struct RuleBasedTextSegmenter;

impl RuleBasedTextSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl TextSegmenterPort for RuleBasedTextSegmenter {
    fn segment(
        &self,
        text: &str,
        rules: &LengthRules,
    ) -> Result<Vec<SegmentedText>, TextProcessingError> {
        let cards = process(text, rules)?;

        Ok(cards
            .into_iter()
            .enumerate()
            .map(|(index, content)| SegmentedText::new(index, content))
            .collect())
    }
}
