//! 长度规则值对象

use serde::Deserialize;

use super::TextProcessingError;

/// 默认最小字符数（下限）
pub const DEFAULT_MIN_CHARS: usize = 40;

/// 默认目标字符数（边界搜索窗口）
pub const DEFAULT_TARGET_CHARS: usize = 150;

/// 默认最大字符数（上限）
pub const DEFAULT_MAX_CHARS: usize = 200;

/// 卡片长度规则
///
/// 不变量: 0 < min_chars <= target_chars <= max_chars
/// 所有长度均按字符（char）计算，而非字节
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LengthRules {
    /// 下限：短于此值的片段尝试合并到前一个片段
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// 首选切分长度：超长片段在前 target_chars 个字符内寻找边界
    #[serde(default = "default_target_chars")]
    pub target_chars: usize,

    /// 上限：输出片段的最大字符数
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_min_chars() -> usize {
    DEFAULT_MIN_CHARS
}

fn default_target_chars() -> usize {
    DEFAULT_TARGET_CHARS
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

impl Default for LengthRules {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            target_chars: DEFAULT_TARGET_CHARS,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl LengthRules {
    /// 创建并校验长度规则
    pub fn new(
        min_chars: usize,
        target_chars: usize,
        max_chars: usize,
    ) -> Result<Self, TextProcessingError> {
        let rules = Self {
            min_chars,
            target_chars,
            max_chars,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// 校验不变量（用于反序列化或字面量构造的值）
    pub fn validate(&self) -> Result<(), TextProcessingError> {
        if self.min_chars == 0 {
            return Err(TextProcessingError::invalid_rules(
                "min_chars must be greater than 0",
            ));
        }
        if self.min_chars > self.target_chars {
            return Err(TextProcessingError::invalid_rules(format!(
                "min_chars ({}) must not exceed target_chars ({})",
                self.min_chars, self.target_chars
            )));
        }
        if self.target_chars > self.max_chars {
            return Err(TextProcessingError::invalid_rules(format!(
                "target_chars ({}) must not exceed max_chars ({})",
                self.target_chars, self.max_chars
            )));
        }
        Ok(())
    }
}
