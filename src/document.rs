//! 文档段落序列
//!
//! 核心解析器只依赖"有序的段落文本序列"这一抽象。
//! 本模块从 UTF-8 纯文本导出（每行一个段落）整体加载文档，
//! 加载后在整个解析过程中保持只读。
//! Word 容器的解包不属于本程序范围：文档先导出为纯文本再输入。

use std::fs;
use std::path::Path;

use crate::error::{AppResult, DocumentError};

/// 只读段落序列
///
/// 每次运行存在两个实例：题目文档和答案文档。
/// 启动时一次性读入内存，解析期间不再变动。
#[derive(Debug, Clone)]
pub struct ParagraphSequence {
    paragraphs: Vec<String>,
}

impl ParagraphSequence {
    /// 从文件加载段落序列
    ///
    /// # 参数
    /// - `path`: 文档路径（UTF-8 纯文本，每行一个段落）
    ///
    /// # 返回
    /// 返回加载完成的段落序列，编码无效时报错
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(DocumentError::NotFound { path: path_str }.into());
        }

        let bytes = fs::read(path)
            .map_err(|e| crate::error::AppError::document_read_failed(&path_str, e))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| crate::error::AppError::document_encoding(&path_str, e))?;

        Ok(Self::from_text(&text))
    }

    /// 从整段文本构造（测试和内存输入用）
    pub fn from_text(text: &str) -> Self {
        let paragraphs = text
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        Self { paragraphs }
    }

    /// 段落切片
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// 段落总数
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
