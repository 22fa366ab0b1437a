// ==========================================
// 仓储货位分配系统 - 领域模型层
// ==========================================
// 职责: 定义 SKU、货位、分配结果等领域实体与类型
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod assignment;
pub mod data_quality;
pub mod location;
pub mod sku;
pub mod types;

// 重导出核心类型
pub use assignment::{LocationRef, SlotAssignment, UnplacedCause};
pub use data_quality::{DqLevel, DqViolation};
pub use location::{LocationRecord, LocationSortKey, RankedLocation};
pub use sku::SkuRecord;
pub use types::{AllowedSize, ColumnKind, SizeClass, SortValue, Zone};
