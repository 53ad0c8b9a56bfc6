// ==========================================
// BAF 罩退堆垛优化系统 - 命令行入口
// ==========================================
// 职责: 外围层 — 读入表格数据(JSON 行集),结构校验,
//       调用核心引擎,输出 JSON 报告
// 红线: 结构性校验（必需列缺失）在调用核心前拒绝
// ==========================================

use anyhow::{bail, Context, Result};
use baf_stack_optimizer::{RawCoilRecord, StackOptimizer};
use serde_json::Value;

/// 必需列（大小写两种写法均接受）
const REQUIRED_COLUMNS: [(&str, &str); 3] = [
    ("Width", "width"),
    ("Weight", "weight"),
    ("Grade", "grade"),
];

fn main() -> Result<()> {
    // 初始化日志系统
    baf_stack_optimizer::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", baf_stack_optimizer::APP_NAME);
    tracing::info!("系统版本: {}", baf_stack_optimizer::VERSION);
    tracing::info!("==================================================");

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => bail!("用法: baf-stack-optimizer <rows.json>（JSON 数组,每行含 Width/Weight/Grade）"),
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("文件读取失败: {}", path))?;
    let rows: Vec<Value> = serde_json::from_str(&raw).context("JSON 解析失败: 期望行对象数组")?;

    validate_columns(&rows)?;

    let records: Vec<RawCoilRecord> = rows
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()
        .context("行反序列化失败")?;

    let optimizer = StackOptimizer::default();
    let report = optimizer.run(&records);

    tracing::info!(
        total_stacks = report.summary.total_stacks,
        waiting_coils = report.waiting_count(),
        "堆垛优化完成"
    );
    if let (Some(height), Some(weight)) = (
        report.summary.avg_stack_height_display(),
        report.summary.avg_stack_weight_display(),
    ) {
        tracing::info!(avg_stack_height_mm = height, avg_stack_weight_t = weight, "堆垛均值");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// 结构性校验: 数据集中必须出现全部必需列
///
/// 逐行字段允许缺失（交由准备引擎按数据质量规则丢弃）,
/// 但整个数据集从未出现某必需列时按结构错误拒绝。
fn validate_columns(rows: &[Value]) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    for (header, lower) in REQUIRED_COLUMNS {
        let present = rows.iter().any(|row| {
            row.as_object()
                .map(|obj| obj.contains_key(header) || obj.contains_key(lower))
                .unwrap_or(false)
        });
        if !present {
            bail!("缺少必需列: {}（数据集必须包含 Width/Weight/Grade 列）", header);
        }
    }

    Ok(())
}
