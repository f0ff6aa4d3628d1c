//! Text Segmenter Port - 文本分割抽象
//!
//! 定义文本分割的抽象接口，具体实现在 infrastructure/adapters 层

use serde::Serialize;

use crate::domain::{LengthRules, TextProcessingError};

/// 分割后的文本片段（一张卡片）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentedText {
    pub index: usize,
    pub content: String,
    pub char_count: usize,
}

impl SegmentedText {
    pub fn new(index: usize, content: String) -> Self {
        let char_count = content.chars().count();
        Self {
            index,
            content,
            char_count,
        }
    }
}

/// Text Segmenter Port
///
/// 文本分割器接口，纯同步计算；调用方负责把它调度到后台线程
pub trait TextSegmenterPort: Send + Sync {
    /// 将文本分割成卡片
    fn segment(
        &self,
        text: &str,
        rules: &LengthRules,
    ) -> Result<Vec<SegmentedText>, TextProcessingError>;
}
