//! 下限合并：短片段并入前一个片段

use super::char_len;
use crate::domain::LengthRules;

/// 将短于 min_chars 的片段并入前一个输出片段
///
/// 合并结果（中间加一个空格）不超过 max_chars 时才合并，否则短片段单独保留。
/// 连续多个短片段可以依次并入同一个前驱，只要累计长度不超过上限。
/// 下限是尽力而为：首个片段或无法合并的片段可能仍低于 min_chars。
pub fn enforce_min(segments: Vec<String>, rules: &LengthRules) -> Vec<String> {
    if segments.len() < 2 {
        return segments;
    }

    let mut result: Vec<String> = Vec::with_capacity(segments.len());

    for segment in segments {
        let segment_len = char_len(&segment);

        if let Some(prev) = result.last_mut() {
            if segment_len < rules.min_chars
                && char_len(prev) + 1 + segment_len <= rules.max_chars
            {
                prev.push(' ');
                prev.push_str(&segment);
                continue;
            }
        }

        result.push(segment);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> LengthRules {
        LengthRules::new(10, 20, 30).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_element_unchanged() {
        assert_eq!(enforce_min(strings(&["hi"]), &rules()), vec!["hi"]);
        assert!(enforce_min(Vec::new(), &rules()).is_empty());
    }

    #[test]
    fn test_short_elements_chain_into_predecessor() {
        let input = strings(&["Hello there.", "Hi.", "Yo.", "Ok."]);
        let result = enforce_min(input, &rules());
        assert_eq!(result, vec!["Hello there. Hi. Yo. Ok."]);
    }

    #[test]
    fn test_merge_refused_when_exceeding_max() {
        let input = strings(&["This is long enough.", "Short.", "Tiny."]);
        let result = enforce_min(input, &rules());
        assert_eq!(result, vec!["This is long enough. Short.", "Tiny."]);
    }

    #[test]
    fn test_short_first_element_accepts_followers() {
        let input = strings(&["Hi.", "Yo."]);
        assert_eq!(enforce_min(input, &rules()), vec!["Hi. Yo."]);
    }

    #[test]
    fn test_long_elements_untouched() {
        let input = strings(&["A long first piece.", "Another long piece."]);
        let result = enforce_min(input.clone(), &rules());
        assert_eq!(result, input);
    }

    #[test]
    fn test_unmergeable_short_element_opens_new_slot() {
        // "Tiny." 无法并入前驱，但它本身可以接收后续短片段
        let input = strings(&["This is long enough.", "Short.", "Tiny.", "Go."]);
        let result = enforce_min(input, &rules());
        assert_eq!(result, vec!["This is long enough. Short.", "Tiny. Go."]);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 每个 "é" 占两个字节
        let input = vec!["é".repeat(25), "ééé".to_string()];
        let result = enforce_min(input, &rules());
        assert_eq!(result, vec![format!("{} ééé", "é".repeat(25))]);
    }
}
