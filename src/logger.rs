//! 日志初始化
//!
//! 默认 info 级别，可用 RUST_LOG 环境变量覆盖
//! （如 RUST_LOG=debug 查看逐段的槽位填充过程）

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
