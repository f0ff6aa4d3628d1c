//! 上限约束：超长片段反复切出前缀，直到剩余部分不超过 max_chars
//!
//! 边界优先级：句末标点 > 子句标点 > 空格 > 硬切

use super::{char_len, is_clause_mark, is_sentence_end};
use crate::domain::LengthRules;

/// 保证每个输出片段的字符数 <= max_chars
///
/// 未超长的片段原样通过；超长片段按从左到右的顺序切分，输出顺序与原文一致
pub fn enforce_max(segments: Vec<String>, rules: &LengthRules) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(segments.len());

    for segment in segments {
        if char_len(&segment) <= rules.max_chars {
            result.push(segment);
        } else {
            split_oversized(&segment, rules, &mut result);
        }
    }

    result
}

/// 切分单个超长片段
///
/// 每轮切出的前缀非空，剩余部分严格变短，循环必然终止
fn split_oversized(segment: &str, rules: &LengthRules, out: &mut Vec<String>) {
    let mut remainder = segment.trim();

    while char_len(remainder) > rules.max_chars {
        let split = find_split_point(remainder, rules);
        let head = remainder[..split].trim();
        if !head.is_empty() {
            out.push(head.to_string());
        }
        remainder = remainder[split..].trim();
    }

    if !remainder.is_empty() {
        out.push(remainder.to_string());
    }
}

/// 在前 target_chars 个字符的窗口内寻找切分点，返回字节偏移
///
/// 调用方保证 text 已去除首尾空白且长度 > max_chars >= target_chars
fn find_split_point(text: &str, rules: &LengthRules) -> usize {
    let window: Vec<(usize, char)> = text.char_indices().take(rules.target_chars).collect();
    let midpoint = rules.target_chars / 2;

    // 标点位置需越过窗口中点，避免切出过短的前缀
    let after_mark = |is_mark: fn(char) -> bool| {
        window
            .iter()
            .enumerate()
            .rev()
            .find(|(_, (_, ch))| is_mark(*ch))
            .filter(|(pos, _)| *pos > midpoint)
            .map(|(_, (byte_idx, ch))| byte_idx + ch.len_utf8())
    };

    if let Some(split) = after_mark(is_sentence_end) {
        return split;
    }

    if let Some(split) = after_mark(is_clause_mark) {
        return split;
    }

    let last_space = window
        .iter()
        .rev()
        .find(|(byte_idx, ch)| *byte_idx > 0 && *ch == ' ')
        .map(|(byte_idx, _)| *byte_idx);

    if let Some(split) = last_space {
        return split;
    }

    // 窗口内是一个完整长词：在 max_chars 处硬切
    text.char_indices()
        .nth(rules.max_chars)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(text.len())
}
