//! 文本处理错误

use thiserror::Error;

/// 分段管线错误
///
/// 普通输入（空文本、超长单词、无标点文本）都通过回退策略处理，不会产生错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextProcessingError {
    /// 长度规则不满足 0 < MIN <= TARGET <= MAX
    #[error("Invalid length rules: {0}")]
    InvalidRules(String),

    /// 处理过程中的意外错误
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl TextProcessingError {
    pub fn invalid_rules(message: impl Into<String>) -> Self {
        Self::InvalidRules(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalFailure(message.into())
    }
}
