// ==========================================
// 仓储货位分配系统 - 字段映射器实现
// ==========================================
// 职责: 原始行 → SkuRecord / LocationRecord + 类型转换
// 红线: 可选字段缺失一律映射为 None,不报错
// ==========================================

use crate::domain::location::LocationRecord;
use crate::domain::sku::SkuRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use crate::importer::importer_trait::RecordMapper;

// ==========================================
// 标准列名
// ==========================================
pub mod columns {
    // SKU 表
    pub const SKU_ID: &str = "SKU_ID";
    pub const SKU_SIZE_CLASS: &str = "SKU_Size_Class";
    pub const HANDLING_TYPE: &str = "Handling_Type";
    pub const FAMILY_OR_CATEGORY: &str = "Family_or_Category";
    pub const PRIORITY_SCORE_100: &str = "AI_Priority_Score_100";
    pub const PRIORITY_SCORE: &str = "AI_Priority_Score";

    // 货位表
    pub const LOCATION_ID: &str = "Location_ID";
    pub const ZONE: &str = "Zone";
    pub const AISLE: &str = "Aisle";
    pub const RACK: &str = "Rack";
    pub const LEVEL: &str = "Level";
    pub const ALLOWED_SIZE_CLASS: &str = "Allowed_Size_Class";
    pub const SPECIAL_CONSTRAINT: &str = "Special_Constraint";

    // 输出表
    pub const OUTPUT_PRIORITY_SCORE: &str = "Priority_Score";
}

/// 取可选字符串字段
fn get_string(row: &RawRow, column: &str) -> Option<String> {
    row.get(column).map(str::to_string)
}

// ==========================================
// SkuFieldMapper
// ==========================================
pub struct SkuFieldMapper {
    priority_column: String, // 已确定的优先级列名
}

impl SkuFieldMapper {
    pub fn new(priority_column: impl Into<String>) -> Self {
        Self {
            priority_column: priority_column.into(),
        }
    }

    /// 解析优先级得分
    ///
    /// # 规则
    /// - 空值 / NaN → None
    /// - 非数值 → TypeConversionError
    fn parse_priority(&self, row: &RawRow) -> ImportResult<Option<f64>> {
        match row.get(&self.priority_column) {
            None => Ok(None),
            Some(value) => match value.parse::<f64>() {
                Ok(score) if score.is_nan() => Ok(None),
                Ok(score) => Ok(Some(score)),
                Err(_) => Err(ImportError::TypeConversionError {
                    row: row.row_number,
                    field: self.priority_column.clone(),
                    message: format!("无法解析为数值: {}", value),
                }),
            },
        }
    }
}

impl RecordMapper for SkuFieldMapper {
    type Record = SkuRecord;

    fn map_row(&self, row: &RawRow) -> ImportResult<SkuRecord> {
        Ok(SkuRecord {
            // 主键（缺失时保留空串，由 DQ 校验报告）
            sku_id: get_string(row, columns::SKU_ID).unwrap_or_default(),

            // 优先级
            priority_score: self.parse_priority(row)?,

            // 存储属性
            size_class: get_string(row, columns::SKU_SIZE_CLASS),
            handling_type: get_string(row, columns::HANDLING_TYPE),
            family_or_category: get_string(row, columns::FAMILY_OR_CATEGORY),

            // 元信息
            row_number: row.row_number,
        })
    }
}

// ==========================================
// LocationFieldMapper
// ==========================================
pub struct LocationFieldMapper;

impl RecordMapper for LocationFieldMapper {
    type Record = LocationRecord;

    fn map_row(&self, row: &RawRow) -> ImportResult<LocationRecord> {
        Ok(LocationRecord {
            location_id: get_string(row, columns::LOCATION_ID).unwrap_or_default(),
            zone: get_string(row, columns::ZONE),
            aisle: get_string(row, columns::AISLE),
            rack: get_string(row, columns::RACK),
            level: get_string(row, columns::LEVEL),
            allowed_size_class: get_string(row, columns::ALLOWED_SIZE_CLASS),
            special_constraint: get_string(row, columns::SPECIAL_CONSTRAINT),
            row_number: row.row_number,
        })
    }
}
