// ==========================================
// BAF 罩退堆垛优化系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、不变式辅助方法
// 红线: 不含分组/堆垛引擎逻辑,不含 I/O
// ==========================================

pub mod coil;
pub mod report;
pub mod stack;

// 重导出核心类型
pub use coil::{Coil, GradeGroup, RawCoilRecord};
pub use report::{StackingReport, StackingSummary};
pub use stack::Stack;
