// ==========================================
// BAF 罩退堆垛优化系统 - 堆垛约束配置
// ==========================================
// 职责: 堆垛硬约束（总宽/总重/卷数）与汇总分界阈值
// 红线: 硬约束在提交时刻保证,任何堆垛不得超限
// ==========================================

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ===== 默认约束值 =====

/// 堆垛最大总宽（mm）
pub const DEFAULT_MAX_STACK_HEIGHT_MM: f64 = 4450.0;

/// 堆垛最大总重（吨）
pub const DEFAULT_MAX_STACK_WEIGHT_T: f64 = 75.0;

/// 堆垛最少卷数
pub const DEFAULT_MIN_COILS: usize = 4;

/// 堆垛最多卷数
pub const DEFAULT_MAX_COILS: usize = 5;

/// 汇总统计的总宽分界阈值（mm）
pub const DEFAULT_HEIGHT_REPORT_THRESHOLD_MM: f64 = 4000.0;

// ==========================================
// StackingConfig - 堆垛约束配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackingConfig {
    /// 堆垛最大总宽（mm,钢卷立放堆垛,宽度即垛高）
    pub max_stack_height_mm: f64,

    /// 堆垛最大总重（吨）
    pub max_stack_weight_t: f64,

    /// 堆垛最少卷数（不足则候选作废）
    pub min_coils: usize,

    /// 堆垛最多卷数
    pub max_coils: usize,

    /// 汇总统计的总宽分界阈值（mm,< 与 ≥ 两档计数）
    pub height_report_threshold_mm: f64,
}

impl Default for StackingConfig {
    fn default() -> Self {
        Self {
            max_stack_height_mm: DEFAULT_MAX_STACK_HEIGHT_MM,
            max_stack_weight_t: DEFAULT_MAX_STACK_WEIGHT_T,
            min_coils: DEFAULT_MIN_COILS,
            max_coils: DEFAULT_MAX_COILS,
            height_report_threshold_mm: DEFAULT_HEIGHT_REPORT_THRESHOLD_MM,
        }
    }
}

impl StackingConfig {
    /// 校验配置有效性
    ///
    /// # 校验规则
    /// 1. 总宽/总重/分界阈值必须为正有限数
    /// 2. 1 ≤ min_coils ≤ max_coils
    ///
    /// # 返回
    /// - `Ok(())`: 配置有效
    /// - `Err(ConfigError)`: 配置无效
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max_stack_height_mm", self.max_stack_height_mm),
            ("max_stack_weight_t", self.max_stack_weight_t),
            ("height_report_threshold_mm", self.height_report_threshold_mm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidLimit {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.min_coils < 1 || self.min_coils > self.max_coils {
            return Err(ConfigError::InvalidCoilRange {
                min_coils: self.min_coils,
                max_coils: self.max_coils,
            });
        }

        debug!(
            max_stack_height_mm = self.max_stack_height_mm,
            max_stack_weight_t = self.max_stack_weight_t,
            min_coils = self.min_coils,
            max_coils = self.max_coils,
            "堆垛约束配置校验通过"
        );

        Ok(())
    }
}
