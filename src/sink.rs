//! 记录输出服务 - 业务能力层
//!
//! 只负责"把一批记录写成 CSV"能力，不关心解析流程。
//! 列顺序是与下游的固定契约：
//! - 对答模式：index, question, reference, correct-answer, answer1, answer2, answer3
//! - 原始模式：index, question, answer1, answer2, answer3, answer4
//!
//! 目标文件已存在时直接覆盖。写入中途失败时文件状态未定义，
//! 没有部分写入恢复机制。

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{CompletedQuestion, FinalRecord, RawQuestionRow};

/// CSV 记录输出服务
pub struct CsvSink {
    output_path: String,
}

impl CsvSink {
    /// 创建新的输出服务
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    /// 写入对答完成的记录批次
    ///
    /// # 参数
    /// - `records`: 最终记录列表，按原文档题目顺序
    ///
    /// # 返回
    /// 返回是否成功写入全部记录
    pub fn write_cross_referenced(&self, records: &[FinalRecord]) -> AppResult<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)
            .map_err(|e| AppError::csv_failed(&self.output_path, e))?;

        for record in records {
            debug!("写入记录: 段落 {} | 题干长度: {}", record.index, record.question.len());
            writer
                .serialize(record)
                .map_err(|e| AppError::csv_failed(&self.output_path, e))?;
        }

        writer
            .flush()
            .map_err(|e| AppError::csv_failed(&self.output_path, e))?;
        Ok(())
    }

    /// 写入未对答的原始记录批次（两参数运行模式）
    pub fn write_raw(&self, questions: &[CompletedQuestion]) -> AppResult<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)
            .map_err(|e| AppError::csv_failed(&self.output_path, e))?;

        for question in questions {
            let row = RawQuestionRow::from(question);
            writer
                .serialize(row)
                .map_err(|e| AppError::csv_failed(&self.output_path, e))?;
        }

        writer
            .flush()
            .map_err(|e| AppError::csv_failed(&self.output_path, e))?;
        Ok(())
    }
}
