use anyhow::Result;
use tracing::error;

use course_question_extract::{App, Config, RunMode};

/// 解析位置参数
///
/// 两个参数: <题目文档> <输出文件>
/// 三个参数: <题目文档> <答案文档> <输出文件>
fn parse_args(args: &[String]) -> Option<RunMode> {
    match args {
        [questions, output] => Some(RunMode::QuestionsOnly {
            questions_path: questions.clone(),
            output_path: output.clone(),
        }),
        [questions, key, output] => Some(RunMode::WithAnswerKey {
            questions_path: questions.clone(),
            key_path: key.clone(),
            output_path: output.clone(),
        }),
        _ => None,
    }
}

fn main() -> Result<()> {
    // 初始化日志
    course_question_extract::logger::init();

    // 加载配置
    let config = Config::from_env();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(mode) = parse_args(&args) else {
        eprintln!("用法: course_question_extract <题目文档> [答案文档] <输出文件>");
        std::process::exit(2);
    };

    // 运行流水线，任何解析失败都以非零退出码终止
    if let Err(e) = App::new(config, mode).run() {
        error!("❌ 运行失败: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
