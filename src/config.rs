/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目文档头部结束标记（包含该子串的段落视为头部最后一段）
    pub expire_marker: String,
    /// 版权声明标记（包含该子串的段落视为噪声）
    pub copyright_marker: String,
    /// 题目段落的最小词数（低于此值视为错误分段，直接报错）
    pub min_question_tokens: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expire_marker: "Expire".to_string(),
            copyright_marker: "Copyright".to_string(),
            min_question_tokens: 4,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            expire_marker: std::env::var("EXPIRE_MARKER").unwrap_or(default.expire_marker),
            copyright_marker: std::env::var("COPYRIGHT_MARKER").unwrap_or(default.copyright_marker),
            min_question_tokens: std::env::var("MIN_QUESTION_TOKENS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.min_question_tokens),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
