//! # Course Question Extract
//!
//! 从半结构化的培训课程文档中提取选择题并输出为 CSV 的命令行工具
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 文档层（Document）
//! - `document` - 段落序列抽象，文档整体读入后只读
//!
//! ### ② 解析层（Parser）
//! - `parser/classifier` - 段落分类（空白 / 噪声 / 正文）
//! - `parser/decomposer` - 答案行分解（四答/两答/一答一行，按优先级尝试）
//! - `parser/assembler` - 题目组装状态机（找题干 ⇄ 收答案）
//! - `parser/answer_key` - 答案对照（字母→槽位置换）
//!
//! ### ③ 输出层（Sink）
//! - `sink` - CSV 记录写入，固定列顺序
//!
//! ### ④ 编排层（App）
//! - `app` - 流水线调度，错误统一上抛给 main 决定退出码
//!
//! ## 设计要点
//!
//! 1. **快速失败**：文档偏离已知版式时立即报错中止，不生成部分 CSV
//! 2. **单线程顺序**：上一题收满答案才找下一题，天然无并行机会
//! 3. **独占所有权**：题目构建器 → 完成态 → 最终记录逐级按值移交

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod logger;
pub mod models;
pub mod parser;
pub mod sink;
pub mod utils;

// 重新导出常用类型
pub use app::{App, RunMode, RunSummary};
pub use config::Config;
pub use document::ParagraphSequence;
pub use error::{AppError, AppResult, DocumentError, OutputError, ParseError};
pub use models::{CompletedQuestion, FinalRecord, QuestionDraft, RawQuestionRow};
pub use parser::{cross_reference, AnswerDecomposer, Decomposition, QuestionAssembler};
pub use sink::CsvSink;
