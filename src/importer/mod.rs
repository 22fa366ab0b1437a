// ==========================================
// 仓储货位分配系统 - 导入层
// ==========================================
// 职责: 外部表格导入,生成 SKU / 货位记录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod schema_validator;
pub mod slotting_importer;

// 重导出核心类型
pub use dq_validator::DqValidator;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{columns, LocationFieldMapper, SkuFieldMapper};
pub use file_parser::{CsvParser, ExcelParser, RawRow, RawTable, UniversalFileParser};
pub use schema_validator::SchemaValidator;
pub use slotting_importer::{ImportedData, SlottingImporter};

// 重导出 Trait 接口
pub use importer_trait::{FileParser, RecordMapper};
