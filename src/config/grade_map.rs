// ==========================================
// BAF 罩退堆垛优化系统 - 牌号规范化映射
// ==========================================
// 职责: 原始牌号 → 规范化牌号的固定查表
// 红线: 映射必须幂等,未收录牌号按恒等处理（不是错误）
// ==========================================

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// GradeMap - 牌号规范化映射
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeMap {
    /// 原始牌号 -> 规范化牌号
    mapping: HashMap<String, String>,
}

impl Default for GradeMap {
    /// 产线默认映射: DR-08 / TS-480 / DR-75 均规范化为 T-57
    fn default() -> Self {
        let mapping = [
            ("DR-08", "T-57"),
            ("TS-480", "T-57"),
            ("DR-75", "T-57"),
        ]
        .into_iter()
        .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
        .collect();

        Self { mapping }
    }
}

impl GradeMap {
    /// 从自定义映射表构造
    pub fn new(mapping: HashMap<String, String>) -> Self {
        Self { mapping }
    }

    /// 空映射（所有牌号恒等）
    pub fn identity() -> Self {
        Self {
            mapping: HashMap::new(),
        }
    }

    /// 映射条目数
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// 规范化一个原始牌号
    ///
    /// 查表命中返回规范化牌号,未命中返回原始牌号本身（恒等回退）
    pub fn normalize(&self, raw_grade: &str) -> String {
        self.mapping
            .get(raw_grade)
            .cloned()
            .unwrap_or_else(|| raw_grade.to_string())
    }

    /// 校验映射有效性
    ///
    /// # 校验规则
    /// 1. 键与值均不可为空白
    /// 2. 幂等性: 任何规范化牌号自身不得再作为被映射的原始牌号
    ///    （即 normalize(normalize(g)) == normalize(g) 对所有 g 成立）
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (raw, canonical) in &self.mapping {
            if raw.trim().is_empty() || canonical.trim().is_empty() {
                return Err(ConfigError::EmptyGradeEntry);
            }
        }

        for canonical in self.mapping.values() {
            // 恒等条目 (g -> g) 不破坏幂等性
            if let Some(target) = self.mapping.get(canonical) {
                if target != canonical {
                    return Err(ConfigError::NonIdempotentMapping {
                        canonical: canonical.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let map = GradeMap::default();
        assert_eq!(map.normalize("DR-08"), "T-57");
        assert_eq!(map.normalize("TS-480"), "T-57");
        assert_eq!(map.normalize("DR-75"), "T-57");
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_identity_fallback() {
        let map = GradeMap::default();
        // 未收录牌号恒等映射,不报错
        assert_eq!(map.normalize("MR-T4"), "MR-T4");
        assert_eq!(map.normalize(""), "");
    }

    #[test]
    fn test_identity_map() {
        let map = GradeMap::identity();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.normalize("DR-08"), "DR-08");
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let map = GradeMap::default();
        for grade in ["DR-08", "TS-480", "DR-75", "T-57", "MR-T4"] {
            let once = map.normalize(grade);
            let twice = map.normalize(&once);
            assert_eq!(once, twice, "牌号 {} 规范化不幂等", grade);
        }
    }

    #[test]
    fn test_reject_chained_mapping() {
        // A -> B 且 B -> C 破坏幂等性
        let map = GradeMap::new(
            [("A", "B"), ("B", "C")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        assert!(matches!(
            map.validate(),
            Err(ConfigError::NonIdempotentMapping { .. })
        ));
    }

    #[test]
    fn test_self_mapping_allowed() {
        let map = GradeMap::new(
            [("T-57", "T-57"), ("DR-08", "T-57")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        assert!(map.validate().is_ok());
    }

    #[test]
    fn test_reject_empty_key() {
        let map = GradeMap::new(
            [("  ", "T-57")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        assert_eq!(map.validate(), Err(ConfigError::EmptyGradeEntry));
    }
}
