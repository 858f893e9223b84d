//! 段落分类器 - 解析层最底层
//!
//! 只回答一个问题："这一段是什么"，不持有任何状态

/// 段落类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// 空字符串或纯空白
    Blank,
    /// 版权声明噪声
    Boilerplate,
    /// 其余一切正文
    Content,
}

/// 判定单个段落的类别
///
/// # 参数
/// - `text`: 段落文本
/// - `copyright_marker`: 版权声明标记子串
pub fn classify(text: &str, copyright_marker: &str) -> LineKind {
    if text.trim().is_empty() {
        LineKind::Blank
    } else if text.contains(copyright_marker) {
        LineKind::Boilerplate
    } else {
        LineKind::Content
    }
}

/// 段落的空白分隔词数
///
/// 仅在段落被期望为题干时使用：词数过少通常说明头部定位
/// 或游标推进走到了错误的段落上。
pub fn question_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
