//! 应用编排层
//!
//! 串起整条流水线：读文档 → 组装题目 → 对照答案 → 写 CSV。
//! 整个流程单线程顺序执行，任何一步报错立即向上传播，
//! 由 main 决定退出码；解析深处不直接终止进程。

use tracing::{info, warn};

use crate::config::Config;
use crate::document::ParagraphSequence;
use crate::error::AppResult;
use crate::parser::{cross_reference, QuestionAssembler};
use crate::sink::CsvSink;

/// 运行模式
///
/// 命令行给两个参数时只做题目提取（原始四答案列），
/// 给三个参数时额外对照答案文档（正确答案单列加出处引用）。
#[derive(Debug, Clone)]
pub enum RunMode {
    /// 题目文档 → 输出文件
    QuestionsOnly {
        questions_path: String,
        output_path: String,
    },
    /// 题目文档 + 答案文档 → 输出文件
    WithAnswerKey {
        questions_path: String,
        key_path: String,
        output_path: String,
    },
}

/// 运行结果统计
#[derive(Debug)]
pub struct RunSummary {
    /// 提取出的题目数量
    pub questions: usize,
    /// 输出文件路径
    pub output_path: String,
}

/// 应用主结构
pub struct App {
    config: Config,
    mode: RunMode,
}

impl App {
    /// 创建应用
    pub fn new(config: Config, mode: RunMode) -> Self {
        Self { config, mode }
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> AppResult<RunSummary> {
        log_startup(&self.mode);

        match &self.mode {
            RunMode::QuestionsOnly {
                questions_path,
                output_path,
            } => {
                let questions = self.parse_questions(questions_path)?;
                info!("📝 正在写入原始记录: {}", output_path);
                CsvSink::new(output_path.clone()).write_raw(&questions)?;
                let summary = RunSummary {
                    questions: questions.len(),
                    output_path: output_path.clone(),
                };
                log_complete(&summary);
                Ok(summary)
            }
            RunMode::WithAnswerKey {
                questions_path,
                key_path,
                output_path,
            } => {
                let questions = self.parse_questions(questions_path)?;

                info!("📄 正在读取答案文档: {}", key_path);
                let key_doc = ParagraphSequence::from_file(key_path)?;
                info!("✓ 答案文档共 {} 段", key_doc.len());

                let records = cross_reference(questions, key_doc.paragraphs())?;
                info!("✓ 对照完成，共 {} 条记录", records.len());

                info!("📝 正在写入 CSV: {}", output_path);
                CsvSink::new(output_path.clone()).write_cross_referenced(&records)?;
                let summary = RunSummary {
                    questions: records.len(),
                    output_path: output_path.clone(),
                };
                log_complete(&summary);
                Ok(summary)
            }
        }
    }

    /// 读取题目文档并组装全部题目
    fn parse_questions(
        &self,
        questions_path: &str,
    ) -> AppResult<Vec<crate::models::CompletedQuestion>> {
        info!("📄 正在读取题目文档: {}", questions_path);
        let doc = ParagraphSequence::from_file(questions_path)?;
        info!("✓ 题目文档共 {} 段", doc.len());

        let assembler = QuestionAssembler::new(doc.paragraphs(), &self.config)?;
        let questions = assembler.assemble()?;

        if questions.is_empty() {
            warn!("⚠️ 头部之后没有解析出任何题目");
        } else {
            info!("✓ 解析完成，共 {} 道题目", questions.len());
        }
        Ok(questions)
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(mode: &RunMode) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 课程题目提取模式");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    match mode {
        RunMode::QuestionsOnly { .. } => info!("📋 模式: 仅提取题目（无答案对照）"),
        RunMode::WithAnswerKey { .. } => info!("📋 模式: 题目提取 + 答案对照"),
    }
    info!("{}", "=".repeat(60));
}

fn log_complete(summary: &RunSummary) {
    info!("{}", "=".repeat(60));
    info!("✅ 全部完成: {} 道题目", summary.questions);
    info!("📄 输出文件: {}", summary.output_path);
    info!("{}", "=".repeat(60));
}
