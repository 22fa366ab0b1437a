// ==========================================
// 仓储货位分配系统 - 核心库
// ==========================================
// 职责: 按 SKU 优先级将 SKU 贪心分配到排序后的货位
// 流程: 导入 → 货位排序 → 贪心分配 → 导出 → 汇总
// 红线: 单线程、确定性,相同输入产出相同结果
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 导出层 - 分配结果
pub mod exporter;

// 配置层 - 运行参数
pub mod config;

// 运行汇总
pub mod report;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AllowedSize, ColumnKind, SizeClass, SortValue, Zone};

// 领域实体
pub use domain::{
    DqLevel, DqViolation, LocationRecord, LocationRef, RankedLocation, SkuRecord, SlotAssignment,
    UnplacedCause,
};

// 引擎
pub use engine::{
    AssignmentOutcome, CompatibilityChecker, LocationRanker, SlotAssigner, SlottingOrchestrator,
};

// 导入 / 导出
pub use exporter::AssignmentWriter;
pub use importer::{ImportedData, SlottingImporter};

// 配置与汇总
pub use config::SlottingConfig;
pub use report::SlottingReport;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储货位分配系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
