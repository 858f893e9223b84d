//! 解析层（Parser Layer）
//!
//! ## 职责
//!
//! 本层是整个系统唯一包含真正判断逻辑的部分：
//! 从不规范的段落版式中恢复出结构化的题目记录。
//!
//! ## 模块划分
//!
//! ### `classifier` - 段落分类器
//! - 判定单个段落是空白、版权噪声还是正文
//! - 题目段落的最小词数校验
//!
//! ### `decomposer` - 答案行分解器
//! - 按固定优先级尝试三种版式：四答一行 → 两答一行 → 一答一行
//! - 槽位编号由"已填充了几个槽位"推导，与物理行号无关
//!
//! ### `assembler` - 题目组装器
//! - 显式状态机（找题干 / 收答案），游标逐段推进
//! - 定位头部边界，按文档顺序产出完成态题目
//!
//! ### `answer_key` - 答案对照器
//! - 与答案文档按位置一一对照
//! - 字母→槽位置换：正确答案单列，其余三项保持相对顺序
//!
//! ## 层次关系
//!
//! ```text
//! assembler (状态机，消费整个段落序列)
//!     ↓
//! decomposer (分解单个答案段落)
//!     ↓
//! classifier (判定单个段落)
//!
//! answer_key (消费 assembler 的产出 + 答案段落序列)
//! ```
//!
//! ## 设计原则
//!
//! 1. **快速失败**：任何偏离已知版式的段落立即中止整次运行
//! 2. **无局部恢复**：不猜测、不跳过、不生成部分 CSV
//! 3. **独占所有权**：构建器只属于组装器，完成后按值移交对答器

pub mod answer_key;
pub mod assembler;
pub mod classifier;
pub mod decomposer;

pub use answer_key::cross_reference;
pub use assembler::QuestionAssembler;
pub use classifier::{classify, LineKind};
pub use decomposer::{AnswerDecomposer, Decomposition, SlotFill};
