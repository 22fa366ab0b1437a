// ==========================================
// 仓储货位分配系统 - 引擎层
// ==========================================
// 职责: 兼容性判定、货位排序、贪心分配
// 红线: 单线程、确定性、无 I/O
// ==========================================

pub mod compatibility;
pub mod location_ranker;
pub mod orchestrator;
pub mod slot_assigner;

// 重导出核心引擎
pub use compatibility::{CompatibilityChecker, RejectReason};
pub use location_ranker::{ColumnKinds, LocationRanker};
pub use orchestrator::SlottingOrchestrator;
pub use slot_assigner::{AssignmentOutcome, SlotAssigner, DEFAULT_MAX_SKUS_PER_LOCATION};
