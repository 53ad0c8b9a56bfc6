// ==========================================
// BAF 罩退堆垛优化系统 - 钢卷领域模型
// ==========================================
// 红线: 钢卷在准备阶段创建后不可变
// 用途: 准备引擎写入,堆垛引擎只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawCoilRecord - 输入中间结构体
// ==========================================
// 用途: 表格数据行的直接反序列化产物（数值清洗前）
// 生命周期: 仅在准备流程内
// 说明: width/weight 允许 JSON 数字或字符串,由准备引擎统一
//       做数值强转;无法强转的行被静默丢弃。多余列自动忽略。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCoilRecord {
    /// 钢卷宽度（mm,源字段,待强转）
    #[serde(default, alias = "Width")]
    pub width: Option<serde_json::Value>,

    /// 钢卷重量（吨,源字段,待强转）
    #[serde(default, alias = "Weight")]
    pub weight: Option<serde_json::Value>,

    /// 牌号（源字段,原样保留）
    #[serde(default, alias = "Grade")]
    pub grade: Option<String>,
}

impl RawCoilRecord {
    /// 构造一条数值型输入行（测试与调用方便捷入口）
    pub fn new(width: f64, weight: f64, grade: &str) -> Self {
        Self {
            width: serde_json::Number::from_f64(width).map(serde_json::Value::Number),
            weight: serde_json::Number::from_f64(weight).map(serde_json::Value::Number),
            grade: Some(grade.to_string()),
        }
    }
}

// ==========================================
// Coil - 钢卷
// ==========================================
// 清洗后的输入单元,创建后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coil {
    /// 宽度（mm,> 0）
    pub width_mm: f64,

    /// 重量（吨,> 0）
    pub weight_t: f64,

    /// 原始牌号（用于逐卷展示）
    pub raw_grade: String,

    /// 规范化牌号（用于分组,查表派生,无映射时等于原始牌号）
    pub canonical_grade: String,
}

// ==========================================
// GradeGroup - 牌号组
// ==========================================
// 同一规范化牌号的钢卷序列,按宽度降序（等宽保持输入相对顺序）
// 不变式: 组内所有钢卷 canonical_grade 与组牌号一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeGroup {
    /// 规范化牌号
    pub grade: String,

    /// 组内钢卷（宽度降序,稳定排序）
    pub coils: Vec<Coil>,
}

impl GradeGroup {
    /// 组内钢卷数
    pub fn len(&self) -> usize {
        self.coils.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coils.is_empty()
    }
}
