//! 题目记录数据模型
//!
//! 一道题目在流水线中经历三种形态：
//! 1. `QuestionDraft` - 组装器独占持有的构建器，逐段收集四个答案
//! 2. `CompletedQuestion` - 四个答案齐全后按值移交给对答器
//! 3. `FinalRecord` - 对答完成后的最终形态，移交给输出层

use serde::Serialize;

use crate::error::{AppResult, ParseError};

/// 题目构建器
///
/// 由题目组装器独占持有，收集过程中拒绝重复填充同一槽位。
#[derive(Debug)]
pub struct QuestionDraft {
    index: usize,
    question: String,
    answers: [Option<String>; 4],
}

impl QuestionDraft {
    /// 创建新的题目构建器
    ///
    /// # 参数
    /// - `index`: 题目段落在原文档中的位置（稳定标识符）
    /// - `question`: 题干文本
    pub fn new(index: usize, question: impl Into<String>) -> Self {
        Self {
            index,
            question: question.into(),
            answers: [None, None, None, None],
        }
    }

    /// 题目段落位置
    pub fn index(&self) -> usize {
        self.index
    }

    /// 各槽位的填充状态（槽位 1-4 对应下标 0-3）
    pub fn filled(&self) -> [bool; 4] {
        [
            self.answers[0].is_some(),
            self.answers[1].is_some(),
            self.answers[2].is_some(),
            self.answers[3].is_some(),
        ]
    }

    /// 已填充的槽位数量
    pub fn filled_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// 填充一个答案槽位
    ///
    /// # 参数
    /// - `slot`: 槽位编号（1-4）
    /// - `text`: 答案文本
    ///
    /// # 返回
    /// 槽位已被占用时报错，绝不静默覆盖
    pub fn fill_slot(&mut self, slot: usize, text: String) -> AppResult<()> {
        if !(1..=4).contains(&slot) {
            return Err(ParseError::SlotAlreadyFilled {
                index: self.index,
                slot,
            }
            .into());
        }
        let cell = &mut self.answers[slot - 1];
        if cell.is_some() {
            return Err(ParseError::SlotAlreadyFilled {
                index: self.index,
                slot,
            }
            .into());
        }
        *cell = Some(text);
        Ok(())
    }

    /// 四个槽位是否全部填充完成
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_some())
    }

    /// 转换为完成态题目
    ///
    /// # 返回
    /// 任一槽位缺失时报错：不完整的题目是硬性失败，不是部分结果
    pub fn into_complete(self) -> AppResult<CompletedQuestion> {
        let filled = self.filled_count();
        let [a1, a2, a3, a4] = self.answers;
        match (a1, a2, a3, a4) {
            (Some(a1), Some(a2), Some(a3), Some(a4)) => Ok(CompletedQuestion {
                index: self.index,
                question: self.question,
                answers: [a1, a2, a3, a4],
            }),
            _ => Err(ParseError::IncompleteQuestion {
                index: self.index,
                filled,
            }
            .into()),
        }
    }
}

/// 完成态题目（四个答案齐全，尚未对答）
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedQuestion {
    /// 题目段落在原文档中的位置
    pub index: usize,
    /// 题干文本
    pub question: String,
    /// 四个答案，按文档中出现的原始顺序
    pub answers: [String; 4],
}

/// 对答完成后的最终记录
///
/// 字段顺序即 CSV 列顺序，是与下游的固定契约，不可调整。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalRecord {
    pub index: usize,
    pub question: String,
    pub reference: String,
    #[serde(rename = "correct-answer")]
    pub correct_answer: String,
    pub answer1: String,
    pub answer2: String,
    pub answer3: String,
}

/// 未对答变体的输出行（两参数运行模式）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawQuestionRow {
    pub index: usize,
    pub question: String,
    pub answer1: String,
    pub answer2: String,
    pub answer3: String,
    pub answer4: String,
}

impl From<&CompletedQuestion> for RawQuestionRow {
    fn from(q: &CompletedQuestion) -> Self {
        Self {
            index: q.index,
            question: q.question.clone(),
            answer1: q.answers[0].clone(),
            answer2: q.answers[1].clone(),
            answer3: q.answers[2].clone(),
            answer4: q.answers[3].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_in_order() {
        let mut draft = QuestionDraft::new(3, "这是一道测试题目吗？");
        assert_eq!(draft.filled_count(), 0);

        draft.fill_slot(1, "甲".to_string()).unwrap();
        draft.fill_slot(3, "丙".to_string()).unwrap();
        assert_eq!(draft.filled(), [true, false, true, false]);
        assert!(!draft.is_complete());

        draft.fill_slot(2, "乙".to_string()).unwrap();
        draft.fill_slot(4, "丁".to_string()).unwrap();
        assert!(draft.is_complete());

        let complete = draft.into_complete().unwrap();
        assert_eq!(complete.index, 3);
        assert_eq!(complete.answers, ["甲", "乙", "丙", "丁"]);
    }

    #[test]
    fn test_refuses_silent_overwrite() {
        let mut draft = QuestionDraft::new(0, "重复填充必须报错的题目");
        draft.fill_slot(2, "第一次".to_string()).unwrap();

        let err = draft.fill_slot(2, "第二次".to_string()).unwrap_err();
        assert!(err.to_string().contains("槽位 2"));
    }

    #[test]
    fn test_incomplete_is_hard_failure() {
        let mut draft = QuestionDraft::new(7, "只有两个答案的题目示例");
        draft.fill_slot(1, "甲".to_string()).unwrap();
        draft.fill_slot(2, "乙".to_string()).unwrap();

        assert!(draft.into_complete().is_err());
    }
}
