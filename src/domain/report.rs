// ==========================================
// BAF 罩退堆垛优化系统 - 结果报告模型
// ==========================================
// 用途: 聚合器输出,供上层展示/序列化
// 红线: 纯派生数据,每次运行重新计算,无独立生命周期
// ==========================================

use crate::domain::coil::Coil;
use crate::domain::stack::Stack;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 保留两位小数（展示口径,内部保持全精度）
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// StackingSummary - 汇总统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackingSummary {
    /// 清洗后的输入钢卷总数
    pub total_input_coils: usize,

    /// 堆垛总数
    pub total_stacks: usize,

    /// 4 卷堆垛数
    pub stack_4_count: usize,

    /// 5 卷堆垛数
    pub stack_5_count: usize,

    /// 总宽 < 分界阈值（默认 4000mm）的堆垛数
    pub stacks_below_threshold: usize,

    /// 总宽 ≥ 分界阈值的堆垛数
    pub stacks_at_or_above_threshold: usize,

    /// 堆垛平均总宽（mm,全精度;无堆垛时缺省）
    pub avg_stack_height_mm: Option<f64>,

    /// 堆垛平均总重（吨,全精度;无堆垛时缺省）
    pub avg_stack_weight_t: Option<f64>,
}

impl StackingSummary {
    /// 平均总宽展示值（两位小数）
    pub fn avg_stack_height_display(&self) -> Option<f64> {
        self.avg_stack_height_mm.map(round2)
    }

    /// 平均总重展示值（两位小数）
    pub fn avg_stack_weight_display(&self) -> Option<f64> {
        self.avg_stack_weight_t.map(round2)
    }
}

// ==========================================
// StackingReport - 完整结果报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackingReport {
    /// 汇总统计
    pub summary: StackingSummary,

    /// 已提交堆垛（按各组产出顺序拼接,序号 1..N）
    pub stacks: Vec<Stack>,

    /// 待垛钢卷（未进入任何堆垛）
    pub waiting: Vec<Coil>,

    /// 报告生成时间
    pub generated_at: DateTime<Utc>,
}

impl StackingReport {
    /// 待垛钢卷数
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }
}
