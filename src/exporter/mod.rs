// ==========================================
// 仓储货位分配系统 - 导出层
// ==========================================
// 职责: 分配结果写出为 CSV
// ==========================================

pub mod assignment_writer;
pub mod error;

pub use assignment_writer::{AssignmentWriter, OUTPUT_HEADER};
pub use error::{ExportError, ExportResult};
