//! 边界分段：段落 -> 句子
//!
//! 只做结构切分，不做长度检查

use super::{is_sentence_end, push_trimmed};

/// 将原始文本切分为段落，再将段落切分为句子
///
/// - 连续两个及以上换行（`\n` 与 `\r\n` 等价，仅含空白的行视为空行）分隔段落
/// - 句末标点（`.` `?` `!`）后的空白分隔句子，标点保留在前一句末尾
/// - 所有片段去除首尾空白，空片段丢弃
pub fn segment(text: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();

    for paragraph in split_paragraphs(text) {
        let sentences = split_sentences(&paragraph);
        if sentences.is_empty() {
            // 段落非空但没有切出句子时，整段保留
            push_trimmed(&mut segments, &paragraph);
        } else {
            segments.extend(sentences);
        }
    }

    segments
}

/// 按空行切分段落，段内单个换行保留
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}

/// 在句末标点之后的空白处切分
fn split_sentences(paragraph: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (idx, ch) in paragraph.char_indices() {
        if ch.is_whitespace() && matches!(prev, Some(p) if is_sentence_end(p)) {
            push_trimmed(&mut sentences, &paragraph[start..idx]);
            start = idx;
        }
        prev = Some(ch);
    }

    push_trimmed(&mut sentences, &paragraph[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_sentence_punctuation() {
        let segments = segment("Hello world. How are you? Fine!");
        assert_eq!(segments, vec!["Hello world.", "How are you?", "Fine!"]);
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        let segments = segment("Version 2.0 is out.Really");
        assert_eq!(segments, vec!["Version 2.0 is out.Really"]);
    }

    #[test]
    fn test_ellipsis_stays_with_sentence() {
        let segments = segment("Wait... what?");
        assert_eq!(segments, vec!["Wait...", "what?"]);
    }

    #[test]
    fn test_paragraphs_keep_reading_order() {
        let text = "First para one. First para two.\n\nSecond para.";
        let segments = segment(text);
        assert_eq!(
            segments,
            vec!["First para one.", "First para two.", "Second para."]
        );
    }

    #[test]
    fn test_crlf_paragraph_breaks() {
        let segments = segment("One\r\n\r\nTwo\r\n\r\n\r\nThree");
        assert_eq!(segments, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_whitespace_only_line_is_paragraph_break() {
        let paragraphs = split_paragraphs("One\n   \t\nTwo");
        assert_eq!(paragraphs, vec!["One", "Two"]);
    }

    #[test]
    fn test_single_newline_stays_inside_paragraph() {
        let segments = segment("line one\nline two");
        assert_eq!(segments, vec!["line one\nline two"]);
    }

    #[test]
    fn test_newline_after_punctuation_splits_sentence() {
        let segments = segment("One.\nTwo.");
        assert_eq!(segments, vec!["One.", "Two."]);
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n \r\n  ").is_empty());
    }

    #[test]
    fn test_multibyte_text() {
        let segments = segment("Ça va? Très bien. 日本語のテキスト");
        assert_eq!(segments, vec!["Ça va?", "Très bien.", "日本語のテキスト"]);
    }

    #[test]
    fn test_no_punctuation_keeps_whole_paragraph() {
        let segments = segment("  just some words without an ending  ");
        assert_eq!(segments, vec!["just some words without an ending"]);
    }
}
