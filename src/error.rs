use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 解析错误（文档结构不符合已知版式）
    Parse(ParseError),
    /// 文档读取错误
    Document(DocumentError),
    /// 输出写入错误
    Output(OutputError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Parse(e) => write!(f, "解析错误: {}", e),
            AppError::Document(e) => write!(f, "文档错误: {}", e),
            AppError::Output(e) => write!(f, "输出错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Parse(e) => Some(e),
            AppError::Document(e) => Some(e),
            AppError::Output(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 解析错误
///
/// 所有变体都是致命的：文档偏离已知版式时立即中止整次运行，
/// 不生成部分结果。
#[derive(Debug)]
pub enum ParseError {
    /// 题目段落的词数低于最小阈值（疑似错误分段）
    QuestionTooShort {
        index: usize,
        preview: String,
        tokens: usize,
        min_tokens: usize,
    },
    /// 三种答案版式都无法匹配该段落
    AnswerDecompositionFailed {
        index: usize,
        preview: String,
    },
    /// 文档在题目的四个答案收集完成前结束
    IncompleteQuestion {
        index: usize,
        filled: usize,
    },
    /// 答案槽位被重复填充（版式交叉时的静默覆盖防护）
    SlotAlreadyFilled {
        index: usize,
        slot: usize,
    },
    /// 题目文档中未找到头部结束标记
    HeaderNotFound {
        marker: String,
    },
    /// 答案文档中未找到第一条答案条目
    KeyHeaderNotFound,
    /// 答案条目无法提取正确答案字母
    KeyEntryInvalid {
        position: usize,
        preview: String,
    },
    /// 答案条目数量少于题目数量（两份文档错位）
    KeyExhausted {
        questions: usize,
        entries: usize,
    },
    /// 正则表达式编译失败
    InvalidPattern {
        source: regex::Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::QuestionTooShort {
                index,
                preview,
                tokens,
                min_tokens,
            } => {
                write!(
                    f,
                    "段落 {} 疑似截断的题目 (词数 {} < {}): {}",
                    index, tokens, min_tokens, preview
                )
            }
            ParseError::AnswerDecompositionFailed { index, preview } => {
                write!(f, "段落 {} 不匹配任何已知答案版式: {}", index, preview)
            }
            ParseError::IncompleteQuestion { index, filled } => {
                write!(
                    f,
                    "题目 (段落 {}) 的答案不完整: 仅收集到 {}/4 个答案后文档结束",
                    index, filled
                )
            }
            ParseError::SlotAlreadyFilled { index, slot } => {
                write!(f, "题目 (段落 {}) 的答案槽位 {} 被重复填充", index, slot)
            }
            ParseError::HeaderNotFound { marker } => {
                write!(f, "题目文档中未找到头部标记 \"{}\"", marker)
            }
            ParseError::KeyHeaderNotFound => {
                write!(f, "答案文档中未找到以 A-D 开头的答案条目")
            }
            ParseError::KeyEntryInvalid { position, preview } => {
                write!(f, "答案条目 {} 无法提取正确答案字母: {}", position, preview)
            }
            ParseError::KeyExhausted { questions, entries } => {
                write!(
                    f,
                    "答案条目不足: {} 道题目只对应 {} 条答案",
                    questions, entries
                )
            }
            ParseError::InvalidPattern { source } => {
                write!(f, "正则表达式编译失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidPattern { source } => Some(source),
            _ => None,
        }
    }
}

/// 文档读取错误
#[derive(Debug)]
pub enum DocumentError {
    /// 文件不存在
    NotFound {
        path: String,
    },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 文件内容不是有效的 UTF-8 编码
    Encoding {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotFound { path } => write!(f, "文件不存在: {}", path),
            DocumentError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            DocumentError::Encoding { path, source } => {
                write!(f, "文件编码无效 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::ReadFailed { source, .. } | DocumentError::Encoding { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 输出写入错误
#[derive(Debug)]
pub enum OutputError {
    /// CSV 序列化或写入失败
    CsvFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::CsvFailed { path, source } => {
                write!(f, "CSV写入失败 ({}): {}", path, source)
            }
            OutputError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::CsvFailed { source, .. } | OutputError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Parse(err)
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        AppError::Document(err)
    }
}

impl From<OutputError> for AppError {
    fn from(err: OutputError) -> Self {
        AppError::Output(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Parse(ParseError::InvalidPattern { source: err })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn document_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Document(DocumentError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件编码错误
    pub fn document_encoding(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Document(DocumentError::Encoding {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建CSV写入错误
    pub fn csv_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Output(OutputError::CsvFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
