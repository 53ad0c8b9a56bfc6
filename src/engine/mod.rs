// ==========================================
// BAF 罩退堆垛优化系统 - 引擎层
// ==========================================
// 职责: 实现准备/堆垛/聚合三段业务规则
// 红线: 引擎为纯函数式,不持可变全局状态,不做 I/O
// 数据流: 准备 → 堆垛(逐组) → 聚合,严格单向
// ==========================================

pub mod aggregator;
pub mod orchestrator;
pub mod preparation;
pub mod stack_builder;

// 重导出核心引擎
pub use aggregator::Aggregator;
pub use orchestrator::StackOptimizer;
pub use preparation::PreparationEngine;
pub use stack_builder::{GroupResult, StackBuilder};
