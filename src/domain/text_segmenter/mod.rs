//! 文本分段管线
//!
//! 原始文本 -> 边界分段 -> 上限约束 -> 下限合并 -> 卡片列表
//!
//! 纯内存计算，无 I/O；相同输入与规则总是得到相同输出

mod boundary;
mod ceiling;
mod floor;

pub use boundary::segment;
pub use ceiling::enforce_max;
pub use floor::enforce_min;

use super::{LengthRules, TextProcessingError};

/// 检查是否为句末标点
#[inline]
fn is_sentence_end(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!')
}

/// 检查是否为子句标点
#[inline]
fn is_clause_mark(ch: char) -> bool {
    matches!(ch, ',' | ';')
}

/// 字符数（按 char 计，而非字节）
#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// 去除首尾空白后追加非空片段
fn push_trimmed(segments: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
}

/// 将原始文本处理为卡片列表
///
/// # 返回
/// - `Ok(vec![])` - 空白输入
/// - `Ok(cards)` - 按阅读顺序排列的卡片，每张不超过 `max_chars`
/// - `Err(InvalidRules)` - 长度规则不合法
/// - `Err(InternalFailure)` - 输出违反上限（不应发生）
pub fn process(text: &str, rules: &LengthRules) -> Result<Vec<String>, TextProcessingError> {
    rules.validate()?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let segments = segment(text);
    tracing::debug!(segments = segments.len(), "Boundary segmentation done");

    let bounded = enforce_max(segments, rules);
    tracing::debug!(segments = bounded.len(), max_chars = rules.max_chars, "Ceiling enforced");

    let cards = enforce_min(bounded, rules);
    tracing::debug!(cards = cards.len(), min_chars = rules.min_chars, "Floor merge done");

    if let Some(oversized) = cards.iter().position(|c| char_len(c) > rules.max_chars) {
        return Err(TextProcessingError::internal(format!(
            "card {} exceeds max_chars ({})",
            oversized, rules.max_chars
        )));
    }

    Ok(cards)
}
