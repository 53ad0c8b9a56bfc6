// ==========================================
// BAF 罩退堆垛优化系统 - 调度编排器
// ==========================================
// 职责: 串联 准备 → 堆垛(逐组) → 聚合 三段流水
// 红线: 数据严格单向流动,后段不回调前段
// 红线: 配置在构造时一次性校验,运行期不再出错
// ==========================================

use crate::config::{ConfigError, GradeMap, StackingConfig};
use crate::domain::coil::RawCoilRecord;
use crate::domain::report::StackingReport;
use crate::engine::aggregator::Aggregator;
use crate::engine::preparation::PreparationEngine;
use crate::engine::stack_builder::StackBuilder;
use tracing::instrument;

// ==========================================
// StackOptimizer - 调度编排器
// ==========================================
pub struct StackOptimizer {
    config: StackingConfig,
    grade_map: GradeMap,
    preparation: PreparationEngine,
    builder: StackBuilder,
    aggregator: Aggregator,
}

impl StackOptimizer {
    /// 以显式配置构造（构造时校验,运行期只读）
    pub fn new(config: StackingConfig, grade_map: GradeMap) -> Result<Self, ConfigError> {
        config.validate()?;
        grade_map.validate()?;
        Ok(Self {
            config,
            grade_map,
            preparation: PreparationEngine::new(),
            builder: StackBuilder::new(),
            aggregator: Aggregator::new(),
        })
    }

    /// 当前堆垛配置
    pub fn config(&self) -> &StackingConfig {
        &self.config
    }

    /// 执行一次完整批处理
    ///
    /// 单线程同步执行,任何输入（空表、全待垛、单卷）都产出
    /// 良定义的报告,无失败路径。
    #[instrument(skip(self, rows), fields(input_rows = rows.len()))]
    pub fn run(&self, rows: &[RawCoilRecord]) -> StackingReport {
        // 1. 准备: 清洗 + 规范化 + 分组排序
        let coils = self.preparation.clean_rows(rows, &self.grade_map);
        let total_input_coils = coils.len();
        let groups = self.preparation.group_by_grade(coils);

        // 2. 堆垛: 逐组贪心,"已用"记账仅组内可见
        let group_results = groups
            .iter()
            .map(|group| self.builder.build_group(group, &self.config))
            .collect();

        // 3. 聚合: 拼接 + 汇总统计
        self.aggregator
            .aggregate(total_input_coils, group_results, &self.config)
    }
}

impl Default for StackOptimizer {
    /// 产线默认约束 + 默认牌号映射（默认值恒有效,不经校验路径）
    fn default() -> Self {
        Self {
            config: StackingConfig::default(),
            grade_map: GradeMap::default(),
            preparation: PreparationEngine::new(),
            builder: StackBuilder::new(),
            aggregator: Aggregator::new(),
        }
    }
}
