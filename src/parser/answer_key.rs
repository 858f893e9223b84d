//! 答案对照器
//!
//! 把每条完成态题目与答案文档中的对应条目按位置对照：
//! 提取正确答案字母和出处引用，再做字母→槽位置换，
//! 让正确答案单列、其余三个干扰项保持原有相对顺序。
//!
//! 前提条件：两份文档各自跳过头部后严格一一对应。某一侧
//! 多出或缺少一题造成的错位无法被检测，会静默产生错误的
//! 正确答案映射；本程序只对答案条目不足（越界）显式报错。

use tracing::debug;

use crate::error::{AppResult, ParseError};
use crate::models::{CompletedQuestion, FinalRecord};
use crate::utils::logging::truncate_text;

/// 答案条目头部噪声字符集：行号、句点、制表符、下划线、空格
fn strip_leading_noise(text: &str) -> &str {
    text.trim_start_matches(|c: char| {
        c.is_ascii_digit() || c == '.' || c == '\t' || c == '_' || c == ' '
    })
}

/// 一条答案条目：正确答案字母加出处引用
#[derive(Debug, PartialEq)]
struct KeyEntry {
    letter: char,
    reference: String,
}

/// 解析一条答案条目
///
/// 剥离头部噪声后第一个字符必须是 A-D，其余文本去掉
/// 首尾的制表符、下划线和空格后即出处引用。
fn parse_entry(text: &str) -> Option<KeyEntry> {
    let stripped = strip_leading_noise(text);
    let mut chars = stripped.chars();
    let letter = chars.next()?;
    if !('A'..='D').contains(&letter) {
        return None;
    }
    let reference = chars
        .as_str()
        .trim_matches(|c: char| c == '\t' || c == '_' || c == ' ')
        .to_string();
    Some(KeyEntry { letter, reference })
}

/// 答案文档的头部边界：第一条可解析的答案条目的位置
fn first_entry_index(key_paragraphs: &[String]) -> AppResult<usize> {
    key_paragraphs
        .iter()
        .position(|p| parse_entry(p).is_some())
        .ok_or_else(|| ParseError::KeyHeaderNotFound.into())
}

/// 将完成态题目与答案条目逐一对照，产出最终记录
///
/// # 参数
/// - `questions`: 组装器产出的完成态题目（按值移交，对照期间独占持有）
/// - `key_paragraphs`: 答案文档的段落序列
///
/// # 返回
/// 最终记录列表；答案条目不足或条目无法解析时报错
pub fn cross_reference(
    questions: Vec<CompletedQuestion>,
    key_paragraphs: &[String],
) -> AppResult<Vec<FinalRecord>> {
    let first = first_entry_index(key_paragraphs)?;

    // 从第一条条目起收集非空白段落，每道题消费一条
    let entries: Vec<(usize, &String)> = key_paragraphs[first..]
        .iter()
        .enumerate()
        .map(|(offset, p)| (first + offset, p))
        .filter(|(_, p)| !p.trim().is_empty())
        .collect();

    if entries.len() < questions.len() {
        return Err(ParseError::KeyExhausted {
            questions: questions.len(),
            entries: entries.len(),
        }
        .into());
    }

    let mut records = Vec::with_capacity(questions.len());
    for (question, (position, text)) in questions.into_iter().zip(entries) {
        let entry = parse_entry(text).ok_or_else(|| ParseError::KeyEntryInvalid {
            position,
            preview: truncate_text(text, 60),
        })?;
        debug!(
            "题目 (段落 {}) 对照条目 {}: 正确答案 {}",
            question.index, position, entry.letter
        );
        records.push(relabel(question, entry));
    }

    Ok(records)
}

/// 字母→槽位置换
///
/// 正确答案从四个槽位中取出单列，其余三个干扰项保持原有
/// 相对顺序，依次落在 answer1..answer3 上。
fn relabel(question: CompletedQuestion, entry: KeyEntry) -> FinalRecord {
    let slot = (entry.letter as u8 - b'A') as usize;
    let mut rest = question.answers.to_vec();
    let correct_answer = rest.remove(slot);
    // answers 固定四个，取出正确答案后必然剩三个
    let mut drained = rest.into_iter();
    let answer1 = drained.next().unwrap_or_default();
    let answer2 = drained.next().unwrap_or_default();
    let answer3 = drained.next().unwrap_or_default();
    FinalRecord {
        index: question.index,
        question: question.question,
        reference: entry.reference,
        correct_answer,
        answer1,
        answer2,
        answer3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(index: usize) -> CompletedQuestion {
        CompletedQuestion {
            index,
            question: "What is the capacity of the device?".to_string(),
            answers: [
                "10".to_string(),
                "20".to_string(),
                "30".to_string(),
                "40".to_string(),
            ],
        }
    }

    fn key(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_round_trip_letter_b() {
        let records = cross_reference(vec![question(1)], &key(&["1. B"])).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.correct_answer, "20");
        assert_eq!(record.answer1, "10");
        assert_eq!(record.answer2, "30");
        assert_eq!(record.answer3, "40");
        assert_eq!(record.reference, "");
    }

    #[test]
    fn test_permutation_for_every_letter() {
        // 字母 L 对应的 correct-answer 必须等于置换前的第 index(L) 个槽位，
        // 其余三个槽位保持原有相对顺序
        let cases = [
            ('A', "10", ["20", "30", "40"]),
            ('B', "20", ["10", "30", "40"]),
            ('C', "30", ["10", "20", "40"]),
            ('D', "40", ["10", "20", "30"]),
        ];
        for (letter, correct, rest) in cases {
            let entry_line = format!("3.\t{}", letter);
            let records = cross_reference(vec![question(5)], &key(&[&entry_line])).unwrap();
            let record = &records[0];
            assert_eq!(record.correct_answer, correct, "字母 {}", letter);
            assert_eq!(
                [
                    record.answer1.as_str(),
                    record.answer2.as_str(),
                    record.answer3.as_str()
                ],
                rest,
                "字母 {}",
                letter
            );
        }
    }

    #[test]
    fn test_reference_extraction() {
        let records =
            cross_reference(vec![question(2)], &key(&["12.\tC\t_NEC 210.8_"])).unwrap();
        assert_eq!(records[0].correct_answer, "30");
        assert_eq!(records[0].reference, "NEC 210.8");
    }

    #[test]
    fn test_key_header_skip() {
        // 注意头部行不能以 A-D 开头，否则会被当成第一条条目
        // （"Answer Key" 这类标题正是已知的对齐隐患）
        let records = cross_reference(
            vec![question(3)],
            &key(&["Final Exam Key - 2016", "", "1. D NEC 250.52"]),
        )
        .unwrap();
        assert_eq!(records[0].correct_answer, "40");
        assert_eq!(records[0].reference, "NEC 250.52");
    }

    #[test]
    fn test_blank_lines_between_entries() {
        let records = cross_reference(
            vec![question(1), question(4)],
            &key(&["1. A", "", "2. D"]),
        )
        .unwrap();
        assert_eq!(records[0].correct_answer, "10");
        assert_eq!(records[1].correct_answer, "40");
    }

    #[test]
    fn test_key_exhausted_is_fatal() {
        let err = cross_reference(vec![question(1), question(4)], &key(&["1. B"])).unwrap_err();
        assert!(err.to_string().contains("不足"));
    }

    #[test]
    fn test_invalid_entry_is_fatal() {
        let err = cross_reference(
            vec![question(1), question(4)],
            &key(&["1. B", "2. E not a valid letter"]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("无法提取"));
    }

    #[test]
    fn test_no_entry_at_all_is_fatal() {
        let err = cross_reference(vec![question(1)], &key(&["just prose", "123. 456."])).unwrap_err();
        assert!(err.to_string().contains("A-D"));
    }

    #[test]
    fn test_extra_entries_are_ignored() {
        // 条目多于题目属于未检测的错位前提，只按题目数量消费
        let records = cross_reference(vec![question(1)], &key(&["1. C", "2. D"])).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].correct_answer, "30");
    }
}
