//! 题目组装器 - 解析层的状态机
//!
//! 从头部边界之后开始，在"找题干"和"收答案"两个状态之间交替，
//! 每道题产出一条完成态记录。原实现用逐段递归遍历，这里改为
//! 显式游标加状态枚举，长文档不再有递归深度问题。
//!
//! 状态机天然串行：上一题收满四个答案之前不会开始找下一题，
//! 单个文档内不存在并行机会。

use tracing::debug;

use super::classifier::{self, LineKind};
use super::decomposer::{AnswerDecomposer, Decomposition};
use crate::config::Config;
use crate::error::{AppResult, ParseError};
use crate::models::{CompletedQuestion, QuestionDraft};
use crate::utils::logging::truncate_text;

/// 状态机的两个活动状态
///
/// 终态（文档耗尽）由主循环退出表达；在"收答案"中途耗尽
/// 属于硬性失败，不产出部分记录。
enum State {
    /// 正在寻找下一道题的题干
    SeekingQuestion,
    /// 正在为当前题目收集答案，构建器由本状态独占持有
    CollectingAnswers(QuestionDraft),
}

/// 题目组装器
pub struct QuestionAssembler<'a> {
    paragraphs: &'a [String],
    config: &'a Config,
    decomposer: AnswerDecomposer,
}

impl<'a> QuestionAssembler<'a> {
    /// 创建组装器
    ///
    /// # 参数
    /// - `paragraphs`: 题目文档的段落序列
    /// - `config`: 程序配置（头部标记、噪声标记、最小词数）
    pub fn new(paragraphs: &'a [String], config: &'a Config) -> AppResult<Self> {
        Ok(Self {
            paragraphs,
            config,
            decomposer: AnswerDecomposer::new()?,
        })
    }

    /// 扫描整个段落序列，按文档顺序产出全部完成态题目
    ///
    /// # 返回
    /// 题目记录列表；任何版式偏离立即报错，不产出部分结果
    pub fn assemble(&self) -> AppResult<Vec<CompletedQuestion>> {
        let mut cursor = self.first_question_index()?;
        let mut state = State::SeekingQuestion;
        let mut completed = Vec::new();

        while cursor < self.paragraphs.len() {
            let text = &self.paragraphs[cursor];
            state = match state {
                State::SeekingQuestion => self.seek_question(cursor, text)?,
                State::CollectingAnswers(draft) => self.collect_answer(cursor, text, draft)?,
            };
            // 第四个槽位填上的瞬间本题完成，回到找题干状态
            state = match state {
                State::CollectingAnswers(draft) if draft.is_complete() => {
                    debug!("题目 (段落 {}) 的四个答案收集完成", draft.index());
                    completed.push(draft.into_complete()?);
                    State::SeekingQuestion
                }
                other => other,
            };
            cursor += 1;
        }

        // 在收答案中途耗尽段落：不完整的题目是硬性失败
        if let State::CollectingAnswers(draft) = state {
            return Err(ParseError::IncompleteQuestion {
                index: draft.index(),
                filled: draft.filled_count(),
            }
            .into());
        }

        Ok(completed)
    }

    /// 头部边界：第一个包含过期标记的段落的下一段即首个题目候选
    fn first_question_index(&self) -> AppResult<usize> {
        for (idx, paragraph) in self.paragraphs.iter().enumerate() {
            if paragraph.contains(&self.config.expire_marker) {
                return Ok(idx + 1);
            }
        }
        Err(ParseError::HeaderNotFound {
            marker: self.config.expire_marker.clone(),
        }
        .into())
    }

    /// 找题干状态：跳过空白和版权噪声，正文段落经词数校验后成为题干
    fn seek_question(&self, cursor: usize, text: &str) -> AppResult<State> {
        match classifier::classify(text, &self.config.copyright_marker) {
            LineKind::Blank | LineKind::Boilerplate => Ok(State::SeekingQuestion),
            LineKind::Content => {
                let tokens = classifier::question_token_count(text);
                if tokens < self.config.min_question_tokens {
                    return Err(ParseError::QuestionTooShort {
                        index: cursor,
                        preview: truncate_text(text, 60),
                        tokens,
                        min_tokens: self.config.min_question_tokens,
                    }
                    .into());
                }
                debug!("段落 {} 识别为题干: {}", cursor, truncate_text(text, 60));
                Ok(State::CollectingAnswers(QuestionDraft::new(cursor, text)))
            }
        }
    }

    /// 收答案状态：只跳过空白段落，其余段落必须匹配某个答案版式
    fn collect_answer(
        &self,
        cursor: usize,
        text: &str,
        mut draft: QuestionDraft,
    ) -> AppResult<State> {
        if let LineKind::Blank = classifier::classify(text, &self.config.copyright_marker) {
            return Ok(State::CollectingAnswers(draft));
        }

        match self.decomposer.decompose(text, &draft.filled()) {
            Decomposition::NoMatch => Err(ParseError::AnswerDecompositionFailed {
                index: cursor,
                preview: truncate_text(text, 60),
            }
            .into()),
            Decomposition::Matched(fills) => {
                for fill in fills {
                    debug!("段落 {} 填充答案槽位 {}: {}", cursor, fill.slot, fill.text);
                    draft.fill_slot(fill.slot, fill.text)?;
                }
                Ok(State::CollectingAnswers(draft))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn assemble(lines: &[&str]) -> AppResult<Vec<CompletedQuestion>> {
        let paragraphs = paragraphs(lines);
        let config = Config::default();
        QuestionAssembler::new(&paragraphs, &config)?.assemble()
    }

    #[test]
    fn test_single_question_four_per_line() {
        let records = assemble(&[
            "Course Expires: 2016-11-26",
            "What is the capacity of the device?",
            "A. 10 B. 20 C. 30 D. 40",
        ])
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 1);
        assert_eq!(records[0].question, "What is the capacity of the device?");
        assert_eq!(records[0].answers, ["10", "20", "30", "40"]);
    }

    #[test]
    fn test_two_per_line_pairs_fill_odd_then_even() {
        let records = assemble(&[
            "Expire date: none",
            "Which conductor material is most common?",
            "A. Copper\tB. Aluminum",
            "C. Steel\tD. Brass",
        ])
        .unwrap();

        // 第一行填 (1,3)，第二行填 (2,4)
        assert_eq!(records[0].answers, ["Copper", "Steel", "Aluminum", "Brass"]);
    }

    #[test]
    fn test_one_per_line_with_blanks_and_boilerplate() {
        let records = assemble(&[
            "Copyright 2016 Current Electric",
            "This course Expires in 2017",
            "",
            "Copyright 2016 Current Electric",
            "What does GFCI stand for in the code?",
            "A. ground fault circuit interrupter",
            "",
            "B. general fault current indicator",
            "C. grounded facility circuit integrator",
            "D. none of these options",
        ])
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 4);
        assert_eq!(records[0].answers[0], "ground fault circuit interrupter");
        assert_eq!(records[0].answers[3], "none of these options");
    }

    #[test]
    fn test_multiple_questions_in_document_order() {
        let records = assemble(&[
            "Expires 2016",
            "First question with enough words here?",
            "A. one B. two C. three D. four",
            "",
            "Second question also has enough words?",
            "A. red\tB. green",
            "C. blue\tD. gray",
        ])
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question, "First question with enough words here?");
        assert_eq!(records[1].question, "Second question also has enough words?");
        assert_eq!(records[1].answers, ["red", "blue", "green", "gray"]);
    }

    #[test]
    fn test_last_answer_at_final_paragraph() {
        // 最后一题的答案恰好落在最后一段，不得越界读取
        let records = assemble(&[
            "Expires 2016",
            "Boundary question with enough words?",
            "A. w",
            "B. x",
            "C. y",
            "D. z",
        ])
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answers, ["w", "x", "y", "z"]);
    }

    #[test]
    fn test_short_question_is_fatal() {
        let err = assemble(&["Expires 2016", "two words", "A. 1 B. 2 C. 3 D. 4"]).unwrap_err();
        assert!(err.to_string().contains("疑似截断"));
    }

    #[test]
    fn test_header_not_found_is_fatal() {
        let err = assemble(&["no header marker here", "some other text"]).unwrap_err();
        assert!(err.to_string().contains("头部标记"));
    }

    #[test]
    fn test_incomplete_final_question_is_fatal() {
        let err = assemble(&[
            "Expires 2016",
            "Question missing half its answers?",
            "A. only\tB. two",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("不完整"));
    }

    #[test]
    fn test_unmatchable_answer_line_is_fatal() {
        let err = assemble(&[
            "Expires 2016",
            "Question with a bad answer line?",
            "D.   ",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("版式"));
    }

    #[test]
    fn test_trailing_noise_after_last_question() {
        let records = assemble(&[
            "Expires 2016",
            "Only question in this document here?",
            "A. a B. b C. c D. d",
            "",
            "Copyright 2016 Current Electric",
        ])
        .unwrap();
        assert_eq!(records.len(), 1);
    }
}
