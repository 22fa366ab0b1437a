// ==========================================
// 仓储货位分配系统 - 命令行入口
// ==========================================
// 流程: 配置加载 → 导入 → 分配 → 写出 CSV → 打印汇总
// 任一致命错误: 非零退出,不写输出文件
// ==========================================

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use warehouse_slotting::config::{ConfigOverrides, SlottingConfig};
use warehouse_slotting::engine::SlottingOrchestrator;
use warehouse_slotting::exporter::AssignmentWriter;
use warehouse_slotting::importer::SlottingImporter;
use warehouse_slotting::report::SlottingReport;
use warehouse_slotting::{logging, APP_NAME, VERSION};

#[derive(Parser, Debug)]
#[command(name = "warehouse-slotting", version, about = "按优先级将 SKU 分配到货位")]
struct Args {
    /// TOML 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// SKU 优先级表（.csv / .xlsx / .xls）
    #[arg(long)]
    skus: Option<PathBuf>,

    /// 货位主数据表（.csv / .xlsx / .xls）
    #[arg(long)]
    locations: Option<PathBuf>,

    /// 分配结果 CSV 输出路径
    #[arg(long)]
    output: Option<PathBuf>,

    /// 单货位最多存放的 SKU 数
    #[arg(long)]
    capacity: Option<u32>,

    /// 以 JSON 打印运行汇总
    #[arg(long)]
    summary_json: bool,

    /// 日志详细程度（-v debug, -vv trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    tracing::info!("{} v{}", APP_NAME, VERSION);

    // ==========================================
    // 配置
    // ==========================================
    let mut config = SlottingConfig::load(args.config.as_deref()).context("无法加载配置")?;
    config.apply_overrides(ConfigOverrides {
        sku_file: args.skus,
        location_file: args.locations,
        output_file: args.output,
        max_skus_per_location: args.capacity,
    });
    config.validate().context("配置校验失败")?;

    let started_at = Utc::now();

    // ==========================================
    // 导入
    // ==========================================
    let importer = SlottingImporter::new(
        config.priority_column.clone(),
        config.fallback_priority_column.clone(),
    );
    let data = importer
        .import(&config.sku_file, &config.location_file)
        .with_context(|| {
            format!(
                "导入失败 (skus: {}, locations: {})",
                config.sku_file.display(),
                config.location_file.display()
            )
        })?;

    // ==========================================
    // 分配
    // ==========================================
    let orchestrator = SlottingOrchestrator::new(config.max_skus_per_location);
    let outcome = orchestrator.execute(&data.skus, data.locations);

    // ==========================================
    // 写出
    // ==========================================
    AssignmentWriter
        .write_to_path(&config.output_file, &outcome.assignments)
        .with_context(|| format!("无法写出分配结果: {}", config.output_file.display()))?;

    // ==========================================
    // 汇总
    // ==========================================
    let report = SlottingReport::from_outcome(
        started_at,
        config.max_skus_per_location,
        &data.priority_column,
        data.dq_violations.len(),
        &outcome,
    );

    if args.summary_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("无法序列化运行汇总")?
        );
    } else {
        println!("{}", report);
        println!("  Output:            {}", config.output_file.display());
    }

    Ok(())
}
