// ==========================================
// BAF 罩退堆垛优化系统 - 配置错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    // ===== 堆垛约束错误 =====
    #[error("约束值无效 (字段 {field}): 值 {value} 必须为正有限数")]
    InvalidLimit { field: String, value: f64 },

    #[error("卷数约束无效: min_coils={min_coils}, max_coils={max_coils}（要求 1 ≤ min ≤ max）")]
    InvalidCoilRange { min_coils: usize, max_coils: usize },

    // ===== 牌号映射错误 =====
    #[error("牌号映射包含空键或空值")]
    EmptyGradeEntry,

    #[error("牌号映射不幂等: 规范牌号 {canonical} 自身又是被映射的原始牌号")]
    NonIdempotentMapping { canonical: String },
}
