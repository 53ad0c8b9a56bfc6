// ==========================================
// BAF 罩退堆垛优化系统 - 聚合引擎
// ==========================================
// 职责: 拼接各组结果 + 派生汇总统计
// 红线: 统计由最终集合迭代派生,不在堆垛过程中旁路累加
// 红线: 不做任何二次过滤或重排,仅拼接与编号
// ==========================================

use crate::config::StackingConfig;
use crate::domain::report::{StackingReport, StackingSummary};
use crate::engine::stack_builder::GroupResult;
use chrono::Utc;
use tracing::info;

// ==========================================
// Aggregator - 聚合引擎
// ==========================================
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// 拼接各组结果并派生汇总统计
    ///
    /// 堆垛按各组产出顺序拼接,序号 1..N 仅用于展示,
    /// 不构成跨运行的稳定标识。均值仅在存在堆垛时给出。
    ///
    /// # 参数
    /// - `total_input_coils`: 清洗后的输入钢卷总数
    /// - `group_results`: 各牌号组的堆垛结果（组产出顺序）
    /// - `config`: 堆垛配置（汇总分界阈值）
    pub fn aggregate(
        &self,
        total_input_coils: usize,
        group_results: Vec<GroupResult>,
        config: &StackingConfig,
    ) -> StackingReport {
        let mut stacks = Vec::new();
        let mut waiting = Vec::new();

        for result in group_results {
            stacks.extend(result.stacks);
            waiting.extend(result.waiting);
        }

        // 展示序号 1..N,按产出顺序
        for (i, stack) in stacks.iter_mut().enumerate() {
            stack.stack_no = i + 1;
        }

        let total_stacks = stacks.len();
        let stack_4_count = stacks.iter().filter(|s| s.coil_count() == 4).count();
        let stack_5_count = stacks.iter().filter(|s| s.coil_count() == 5).count();
        let stacks_below_threshold = stacks
            .iter()
            .filter(|s| s.total_width_mm < config.height_report_threshold_mm)
            .count();
        let stacks_at_or_above_threshold = total_stacks - stacks_below_threshold;

        let (avg_stack_height_mm, avg_stack_weight_t) = if total_stacks > 0 {
            let width_sum: f64 = stacks.iter().map(|s| s.total_width_mm).sum();
            let weight_sum: f64 = stacks.iter().map(|s| s.total_weight_t).sum();
            (
                Some(width_sum / total_stacks as f64),
                Some(weight_sum / total_stacks as f64),
            )
        } else {
            (None, None)
        };

        info!(
            total_input_coils,
            total_stacks,
            stack_4_count,
            stack_5_count,
            waiting_coils = waiting.len(),
            "聚合完成"
        );

        StackingReport {
            summary: StackingSummary {
                total_input_coils,
                total_stacks,
                stack_4_count,
                stack_5_count,
                stacks_below_threshold,
                stacks_at_or_above_threshold,
                avg_stack_height_mm,
                avg_stack_weight_t,
            },
            stacks,
            waiting,
            generated_at: Utc::now(),
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coil::Coil;
    use crate::domain::stack::Stack;

    fn coil(width_mm: f64, weight_t: f64) -> Coil {
        Coil {
            width_mm,
            weight_t,
            raw_grade: "T-57".to_string(),
            canonical_grade: "T-57".to_string(),
        }
    }

    fn stack_of(grade: &str, coils: &[(f64, f64)]) -> Stack {
        let mut stack = Stack::new(grade);
        for &(w, t) in coils {
            stack.push(coil(w, t));
        }
        stack
    }

    #[test]
    fn test_empty_input_produces_empty_report() {
        let report = Aggregator::new().aggregate(0, Vec::new(), &StackingConfig::default());
        assert_eq!(report.summary.total_input_coils, 0);
        assert_eq!(report.summary.total_stacks, 0);
        assert_eq!(report.summary.avg_stack_height_mm, None);
        assert_eq!(report.summary.avg_stack_weight_t, None);
        assert!(report.stacks.is_empty());
        assert!(report.waiting.is_empty());
    }

    #[test]
    fn test_stack_numbering_preserves_group_order() {
        let results = vec![
            GroupResult {
                grade: "A".to_string(),
                stacks: vec![stack_of("A", &[(1000.0, 10.0); 4])],
                waiting: vec![],
            },
            GroupResult {
                grade: "B".to_string(),
                stacks: vec![
                    stack_of("B", &[(900.0, 9.0); 4]),
                    stack_of("B", &[(800.0, 8.0); 4]),
                ],
                waiting: vec![coil(700.0, 7.0)],
            },
        ];
        let report = Aggregator::new().aggregate(13, results, &StackingConfig::default());

        let numbers: Vec<usize> = report.stacks.iter().map(|s| s.stack_no).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let grades: Vec<&str> = report.stacks.iter().map(|s| s.grade.as_str()).collect();
        assert_eq!(grades, vec!["A", "B", "B"]);
        assert_eq!(report.waiting_count(), 1);
    }

    #[test]
    fn test_summary_counts_and_threshold_split() {
        let results = vec![GroupResult {
            grade: "T-57".to_string(),
            stacks: vec![
                // 4 卷,总宽 4200 (≥ 4000)
                stack_of("T-57", &[(1050.0, 10.0); 4]),
                // 5 卷,总宽 2500 (< 4000)
                stack_of("T-57", &[(500.0, 9.0); 5]),
            ],
            waiting: vec![coil(600.0, 6.0), coil(500.0, 5.0)],
        }];
        let report = Aggregator::new().aggregate(11, results, &StackingConfig::default());

        let summary = &report.summary;
        assert_eq!(summary.total_input_coils, 11);
        assert_eq!(summary.total_stacks, 2);
        assert_eq!(summary.stack_4_count, 1);
        assert_eq!(summary.stack_5_count, 1);
        assert_eq!(summary.stacks_below_threshold, 1);
        assert_eq!(summary.stacks_at_or_above_threshold, 1);
    }

    #[test]
    fn test_summary_averages() {
        let results = vec![GroupResult {
            grade: "T-57".to_string(),
            stacks: vec![
                stack_of("T-57", &[(1000.0, 10.0); 4]), // 4000mm, 40t
                stack_of("T-57", &[(750.0, 8.0); 4]),   // 3000mm, 32t
            ],
            waiting: vec![],
        }];
        let report = Aggregator::new().aggregate(8, results, &StackingConfig::default());

        let summary = &report.summary;
        assert_eq!(summary.avg_stack_height_mm, Some(3500.0));
        assert_eq!(summary.avg_stack_weight_t, Some(36.0));
        assert_eq!(summary.avg_stack_height_display(), Some(3500.0));
        assert_eq!(summary.avg_stack_weight_display(), Some(36.0));
    }
}
