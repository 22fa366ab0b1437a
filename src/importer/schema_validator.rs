// ==========================================
// 仓储货位分配系统 - 表结构校验器
// ==========================================
// 职责: 分配开始前检查必需列是否存在
// 红线: 缺列即中止,不产生任何输出
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::columns;
use crate::importer::file_parser::RawTable;
use tracing::{info, warn};

pub const SKU_TABLE: &str = "SKU 表";
pub const LOCATION_TABLE: &str = "货位表";

pub struct SchemaValidator {
    priority_column: String,
    fallback_priority_column: String,
}

impl SchemaValidator {
    /// # 参数
    /// - priority_column: 首选优先级列（如 AI_Priority_Score_100）
    /// - fallback_priority_column: 备选优先级列（如 AI_Priority_Score）
    pub fn new(
        priority_column: impl Into<String>,
        fallback_priority_column: impl Into<String>,
    ) -> Self {
        Self {
            priority_column: priority_column.into(),
            fallback_priority_column: fallback_priority_column.into(),
        }
    }

    /// 校验 SKU 表，返回实际使用的优先级列名
    ///
    /// # 规则
    /// - SKU_ID 必须存在
    /// - 首选优先级列存在则使用，否则使用备选列，均不存在 → MissingColumn
    pub fn validate_sku_table(&self, table: &RawTable) -> ImportResult<String> {
        require_column(table, SKU_TABLE, columns::SKU_ID)?;

        let resolved = if table.has_column(&self.priority_column) {
            self.priority_column.clone()
        } else if table.has_column(&self.fallback_priority_column) {
            warn!(
                preferred = %self.priority_column,
                fallback = %self.fallback_priority_column,
                "首选优先级列不存在，使用备选列"
            );
            self.fallback_priority_column.clone()
        } else {
            return Err(ImportError::MissingColumn {
                table: SKU_TABLE.to_string(),
                column: format!(
                    "{}（或 {}）",
                    self.priority_column, self.fallback_priority_column
                ),
            });
        };

        info!(priority_column = %resolved, "SKU 表结构校验通过");
        Ok(resolved)
    }

    /// 校验货位表（仅 Location_ID 为必需列，其余缺失按空值处理）
    pub fn validate_location_table(&self, table: &RawTable) -> ImportResult<()> {
        require_column(table, LOCATION_TABLE, columns::LOCATION_ID)
    }
}

fn require_column(table: &RawTable, table_name: &str, column: &str) -> ImportResult<()> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(ImportError::MissingColumn {
            table: table_name.to_string(),
            column: column.to_string(),
        })
    }
}
