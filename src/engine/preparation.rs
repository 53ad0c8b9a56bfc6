// ==========================================
// BAF 罩退堆垛优化系统 - 准备引擎
// ==========================================
// 职责: 数值强转 / 牌号规范化 / 按规范化牌号分组排序
// 红线: 无法强转的行静默丢弃（数据质量过滤,非错误）
// 红线: 不修改输入,输出组内宽度降序且稳定（等宽保持输入顺序）
// ==========================================

use crate::config::GradeMap;
use crate::domain::coil::{Coil, GradeGroup, RawCoilRecord};
use std::collections::BTreeMap;
use tracing::{debug, info};

// ==========================================
// PreparationEngine - 准备引擎
// ==========================================
// 无状态引擎,映射表通过参数传入
pub struct PreparationEngine;

impl PreparationEngine {
    pub fn new() -> Self {
        Self
    }

    /// 清洗输入行,产出钢卷集合
    ///
    /// 规则:
    /// 1. width/weight 接受 JSON 数字或可解析为数值的字符串
    /// 2. 强转失败、非有限值或 ≤ 0 的行被丢弃（仅 debug 级记录）
    /// 3. 牌号缺省按空字符串处理（恒等映射到自身）
    /// 4. 原始牌号原样保留,规范化牌号查表派生
    pub fn clean_rows(&self, rows: &[RawCoilRecord], grade_map: &GradeMap) -> Vec<Coil> {
        let mut coils = Vec::with_capacity(rows.len());
        let mut dropped = 0usize;

        for (row_no, row) in rows.iter().enumerate() {
            let width_mm = row.width.as_ref().and_then(coerce_numeric);
            let weight_t = row.weight.as_ref().and_then(coerce_numeric);

            let (width_mm, weight_t) = match (width_mm, weight_t) {
                (Some(w), Some(t)) => (w, t),
                _ => {
                    dropped += 1;
                    debug!(row = row_no, "宽度或重量无法强转为数值,该行被丢弃");
                    continue;
                }
            };

            let raw_grade = row.grade.clone().unwrap_or_default();
            let canonical_grade = grade_map.normalize(&raw_grade);

            coils.push(Coil {
                width_mm,
                weight_t,
                raw_grade,
                canonical_grade,
            });
        }

        info!(
            input_rows = rows.len(),
            cleaned_coils = coils.len(),
            dropped_rows = dropped,
            "输入行清洗完成"
        );

        coils
    }

    /// 按规范化牌号分组并排序
    ///
    /// 分组按规范化牌号升序产出（确定性顺序）;
    /// 组内按宽度降序稳定排序,等宽钢卷保持输入相对顺序。
    pub fn group_by_grade(&self, coils: Vec<Coil>) -> Vec<GradeGroup> {
        let mut grouped: BTreeMap<String, Vec<Coil>> = BTreeMap::new();
        for coil in coils {
            grouped
                .entry(coil.canonical_grade.clone())
                .or_default()
                .push(coil);
        }

        grouped
            .into_iter()
            .map(|(grade, mut coils)| {
                // Vec::sort_by 为稳定排序,等宽时保持输入顺序
                coils.sort_by(|a, b| b.width_mm.total_cmp(&a.width_mm));
                debug!(grade = %grade, coils = coils.len(), "牌号组构建完成");
                GradeGroup { grade, coils }
            })
            .collect()
    }
}

impl Default for PreparationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 数值强转: JSON 数字直接取值,字符串 TRIM 后解析,其余类型失败
///
/// 强转成功但非有限或 ≤ 0 的值视为失败（钢卷宽度/重量必须为正）
fn coerce_numeric(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite() && *v > 0.0)
}
