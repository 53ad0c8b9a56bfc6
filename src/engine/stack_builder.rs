// ==========================================
// BAF 罩退堆垛优化系统 - 堆垛引擎
// ==========================================
// 职责: 单个牌号组内反复贪心成垛,未成垛钢卷转待垛
// 红线: 首次适配降序 (first-fit-descending) 语义不可改动
// 红线: 纯函数 (组, 配置) → (堆垛列表, 待垛列表),无全局计数器
// ==========================================
// 算法（每一轮）:
// 1. 按排序顺序扫描未用钢卷
// 2. 卷数未满且加入后总宽/总重不超限则加入候选,否则跳过继续扫描
//    （跳过不中断扫描,更窄的后续卷仍可能装入剩余额度）
// 3. 扫描结束后候选 ≥ min_coils 则提交并标记已用,开始下一轮;
//    否则候选作废,本组结束
// 终止性: 每轮提交至少 min_coils 卷,轮数 ≤ ⌈组大小 / min_coils⌉
// ==========================================

use crate::config::StackingConfig;
use crate::domain::coil::{Coil, GradeGroup};
use crate::domain::stack::Stack;
use tracing::debug;

/// 单组堆垛结果
#[derive(Debug, Clone)]
pub struct GroupResult {
    /// 规范化牌号
    pub grade: String,

    /// 本组提交的堆垛（提交顺序）
    pub stacks: Vec<Stack>,

    /// 本组待垛钢卷（组内排序顺序）
    pub waiting: Vec<Coil>,
}

// ==========================================
// StackBuilder - 堆垛引擎
// ==========================================
pub struct StackBuilder;

impl StackBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 对单个牌号组执行贪心堆垛
    ///
    /// # 返回
    /// 组结果: 提交的堆垛 + 待垛钢卷。组内每一卷恰好出现在
    /// 其中之一（完备且互斥）。卷数不足 min_coils 的组不报错,
    /// 产出零个堆垛,全部钢卷转待垛。
    pub fn build_group(&self, group: &GradeGroup, config: &StackingConfig) -> GroupResult {
        // 位置并行的已用标记,钢卷本体不移动
        let mut used = vec![false; group.coils.len()];
        let mut stacks = Vec::new();

        loop {
            let mut candidate = Stack::new(&group.grade);
            let mut picked: Vec<usize> = Vec::new();

            for (i, coil) in group.coils.iter().enumerate() {
                if used[i] {
                    continue;
                }
                if candidate.can_accept(coil, config) {
                    candidate.push(coil.clone());
                    picked.push(i);
                }
            }

            if candidate.coil_count() < config.min_coils {
                // 候选作废,不标记任何卷,本组结束
                break;
            }

            for &i in &picked {
                used[i] = true;
            }
            debug!(
                grade = %group.grade,
                coils = candidate.coil_count(),
                total_width_mm = candidate.total_width_mm,
                total_weight_t = candidate.total_weight_t,
                "提交堆垛"
            );
            stacks.push(candidate);
        }

        let waiting: Vec<Coil> = group
            .coils
            .iter()
            .zip(used.iter())
            .filter(|(_, &u)| !u)
            .map(|(coil, _)| coil.clone())
            .collect();

        debug!(
            grade = %group.grade,
            stacks = stacks.len(),
            waiting = waiting.len(),
            "牌号组堆垛完成"
        );

        GroupResult {
            grade: group.grade.clone(),
            stacks,
            waiting,
        }
    }
}

impl Default for StackBuilder {
    fn default() -> Self {
        Self::new()
    }
}
