//! 答案行分解器
//!
//! 同一份文档里答案版式并不统一：有时四个答案挤在一行，
//! 有时两个一行（奇偶答案分在两行），有时一行一个，
//! 枚举前缀（"A." "B."）时有时无。本模块按固定优先级
//! 依次尝试三种版式，第一个结构匹配的版式胜出。
//!
//! 槽位编号始终由调用方传入的"已填充状态"推导，与物理行号
//! 无关，因此三种版式可以在同一道题内任意交错，只要每个
//! 段落自身符合其中一种版式。

use regex::Regex;

use crate::error::AppResult;

/// 单个槽位的填充内容
#[derive(Debug, Clone, PartialEq)]
pub struct SlotFill {
    /// 槽位编号（1-4）
    pub slot: usize,
    /// 答案文本
    pub text: String,
}

/// 分解结果
///
/// 空映射绝不视为成功：要么结构匹配并产出槽位，要么明确失败。
#[derive(Debug, Clone, PartialEq)]
pub enum Decomposition {
    /// 某个版式结构匹配，产出槽位到文本的映射
    Matched(Vec<SlotFill>),
    /// 三种版式都不匹配
    NoMatch,
}

/// 答案行分解器
///
/// 三个版式的正则在构造时编译一次，之后整个解析过程复用。
pub struct AnswerDecomposer {
    four_per_line: Regex,
    two_per_line: Regex,
    one_per_line: Regex,
}

impl AnswerDecomposer {
    /// 创建分解器，编译三种版式的正则
    pub fn new() -> AppResult<Self> {
        // 四答一行：首个答案的枚举前缀可选，其余三个答案
        // 必须带字母加句点的枚举（否则任意四个词都会误匹配）
        let four_per_line = Regex::new(
            r"^\s*(?:[A-D]\.\s*)?(\w+)\s+[A-D]\.\s*(\w+)\s+[A-D]\.\s*(\w+)\s+[A-D]\.\s*(\w+)\s*$",
        )?;
        // 两答一行：两个答案以制表符分隔，枚举前缀各自可选，
        // 行尾制表符可有可无
        let two_per_line =
            Regex::new(r"^(?:[A-D]\.\s+)?([^\t]+)\t+(?:[A-D]\.\s+)?([^\t]+)\t*$")?;
        // 一答一行：先剥离可选枚举前缀，剩余文本即答案。
        // 不能写成单条带可选前缀的正则：回溯会把孤立的 "C." 当成答案正文
        let one_per_line = Regex::new(r"^\s*[A-D]\.\s*")?;

        Ok(Self {
            four_per_line,
            two_per_line,
            one_per_line,
        })
    }

    /// 分解一个疑似答案段落
    ///
    /// # 参数
    /// - `text`: 段落文本
    /// - `filled`: 当前题目各槽位的填充状态（槽位 1-4 对应下标 0-3）
    ///
    /// # 返回
    /// 按优先级第一个匹配版式的槽位映射，三种都不匹配时返回 `NoMatch`
    pub fn decompose(&self, text: &str, filled: &[bool; 4]) -> Decomposition {
        if let Some(fills) = self.try_four_per_line(text) {
            return Decomposition::Matched(fills);
        }
        if let Some(fills) = self.try_two_per_line(text, filled) {
            return Decomposition::Matched(fills);
        }
        if let Some(fills) = self.try_one_per_line(text, filled) {
            return Decomposition::Matched(fills);
        }
        Decomposition::NoMatch
    }

    /// 四答一行：一次产出全部四个槽位
    fn try_four_per_line(&self, text: &str) -> Option<Vec<SlotFill>> {
        let caps = self.four_per_line.captures(text)?;
        let fills = (1..=4)
            .map(|slot| SlotFill {
                slot,
                text: caps[slot].trim().to_string(),
            })
            .collect();
        Some(fills)
    }

    /// 两答一行：奇偶答案分在两条物理行上，
    /// 槽位 1 还空着时本行填 (1,3)，否则填 (2,4)
    fn try_two_per_line(&self, text: &str, filled: &[bool; 4]) -> Option<Vec<SlotFill>> {
        let caps = self.two_per_line.captures(text)?;
        let (first, second) = if !filled[0] { (1, 3) } else { (2, 4) };
        Some(vec![
            SlotFill {
                slot: first,
                text: caps[1].trim().to_string(),
            },
            SlotFill {
                slot: second,
                text: caps[2].trim().to_string(),
            },
        ])
    }

    /// 一答一行：填充第一个空槽位（1→2→3→4 顺序推进）
    fn try_one_per_line(&self, text: &str, filled: &[bool; 4]) -> Option<Vec<SlotFill>> {
        let answer = self.one_per_line.replace(text, "");
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }
        let slot = filled.iter().position(|f| !f)? + 1;
        Some(vec![SlotFill {
            slot,
            text: answer.to_string(),
        }])
    }
}
