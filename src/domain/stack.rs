// ==========================================
// BAF 罩退堆垛优化系统 - 堆垛领域模型
// ==========================================
// 红线: 提交后的堆垛不可变 (4 ≤ 卷数 ≤ 5, 总宽/总重不超限)
// 用途: 堆垛引擎累积候选并提交,聚合器编号
// ==========================================

use crate::config::StackingConfig;
use crate::domain::coil::Coil;
use serde::{Deserialize, Serialize};

// ==========================================
// Stack - 堆垛
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    /// 堆垛序号（1..N,由聚合器按产出顺序编号,仅用于展示）
    pub stack_no: usize,

    /// 规范化牌号（组牌号;逐卷展示仍用各卷原始牌号）
    pub grade: String,

    /// 成员钢卷（加入顺序 = 贪心扫描顺序）
    pub coils: Vec<Coil>,

    /// 总宽度（mm,成员宽度之和）
    pub total_width_mm: f64,

    /// 总重量（吨,成员重量之和）
    pub total_weight_t: f64,
}

impl Stack {
    /// 创建空候选堆垛
    pub fn new(grade: &str) -> Self {
        Self {
            stack_no: 0,
            grade: grade.to_string(),
            coils: Vec::new(),
            total_width_mm: 0.0,
            total_weight_t: 0.0,
        }
    }

    /// 成员卷数
    pub fn coil_count(&self) -> usize {
        self.coils.len()
    }

    /// 判断加入一卷后是否仍满足约束
    ///
    /// 约束（全部满足才可加入）:
    /// 1. 当前卷数 < max_coils
    /// 2. 加入后总宽 ≤ max_stack_height_mm
    /// 3. 加入后总重 ≤ max_stack_weight_t
    pub fn can_accept(&self, coil: &Coil, config: &StackingConfig) -> bool {
        self.coils.len() < config.max_coils
            && self.total_width_mm + coil.width_mm <= config.max_stack_height_mm
            && self.total_weight_t + coil.weight_t <= config.max_stack_weight_t
    }

    /// 加入一卷并更新累计值（调用方需先通过 can_accept 校验）
    pub fn push(&mut self, coil: Coil) {
        self.total_width_mm += coil.width_mm;
        self.total_weight_t += coil.weight_t;
        self.coils.push(coil);
    }
}
