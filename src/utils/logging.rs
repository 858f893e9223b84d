/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_text("abcdefgh", 5), "abcde...");
    }
}
