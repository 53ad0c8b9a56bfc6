// ==========================================
// BAF 罩退堆垛优化系统 - 核心库
// ==========================================
// 技术栈: Rust
// 系统定位: 决策支持工具 (人工最终控制权)
// ==========================================
// 职责: 钢卷按牌号分组后贪心堆垛
// 红线: 单线程批处理,核心不做文件 I/O
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 堆垛约束与牌号映射
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{Coil, GradeGroup, RawCoilRecord, Stack, StackingReport, StackingSummary};

// 配置
pub use config::{ConfigError, GradeMap, StackingConfig};

// 引擎
pub use engine::{Aggregator, GroupResult, PreparationEngine, StackBuilder, StackOptimizer};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "BAF 罩退堆垛优化系统";

// ==========================================
// 预编译检查
// ==========================================
