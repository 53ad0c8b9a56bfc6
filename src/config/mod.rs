// ==========================================
// BAF 罩退堆垛优化系统 - 配置层
// ==========================================
// 职责: 堆垛约束参数与牌号规范化映射
// 红线: 配置在引擎构造时一次性校验,运行期只读
// ==========================================

pub mod error;
pub mod grade_map;
pub mod stacking_config;

// 重导出核心配置类型
pub use error::ConfigError;
pub use grade_map::GradeMap;
pub use stacking_config::StackingConfig;
