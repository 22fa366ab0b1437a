// ==========================================
// 仓储货位分配系统 - 数据质量校验器实现
// ==========================================
// 职责: 记录重复主键、缺失得分、未识别取值
// 红线: 只报告不拦截,宽松默认值保持生效
// ==========================================

use crate::domain::data_quality::{DqLevel, DqViolation};
use crate::domain::location::LocationRecord;
use crate::domain::sku::SkuRecord;
use crate::domain::types::{AllowedSize, SizeClass};
use crate::importer::field_mapper::columns;
use crate::importer::schema_validator::{LOCATION_TABLE, SKU_TABLE};
use std::collections::HashSet;

pub struct DqValidator;

impl DqValidator {
    /// 校验 SKU 记录
    pub fn validate_skus(&self, records: &[SkuRecord]) -> Vec<DqViolation> {
        let mut violations = Vec::new();
        let mut seen_ids = HashSet::new();

        for record in records {
            let violation = |level, field: &str, message: String| DqViolation {
                table: SKU_TABLE.to_string(),
                row_number: record.row_number,
                record_id: Some(record.sku_id.clone()).filter(|id| !id.is_empty()),
                level,
                field: field.to_string(),
                message,
            };

            // 主键缺失 / 重复
            if record.sku_id.is_empty() {
                violations.push(violation(DqLevel::Warning, columns::SKU_ID, "SKU_ID 为空".to_string()));
            } else if !seen_ids.insert(record.sku_id.as_str()) {
                violations.push(violation(
                    DqLevel::Warning,
                    columns::SKU_ID,
                    "重复 SKU_ID（每行仍独立分配）".to_string(),
                ));
            }

            // 得分缺失
            if record.priority_score.is_none() {
                violations.push(violation(
                    DqLevel::Warning,
                    columns::OUTPUT_PRIORITY_SCORE,
                    "优先级得分缺失，排在最后分配".to_string(),
                ));
            }

            // 未识别尺寸
            if let Some(size) = record.size_class.as_deref() {
                if SizeClass::parse(size).is_none() {
                    violations.push(violation(
                        DqLevel::Info,
                        columns::SKU_SIZE_CLASS,
                        format!("未识别尺寸 {}，不做尺寸限制", size),
                    ));
                }
            }
        }

        violations
    }

    /// 校验货位记录
    pub fn validate_locations(&self, records: &[LocationRecord]) -> Vec<DqViolation> {
        let mut violations = Vec::new();
        let mut seen_ids = HashSet::new();

        for record in records {
            let violation = |level, field: &str, message: String| DqViolation {
                table: LOCATION_TABLE.to_string(),
                row_number: record.row_number,
                record_id: Some(record.location_id.clone()).filter(|id| !id.is_empty()),
                level,
                field: field.to_string(),
                message,
            };

            if record.location_id.is_empty() {
                violations.push(violation(
                    DqLevel::Warning,
                    columns::LOCATION_ID,
                    "Location_ID 为空".to_string(),
                ));
            } else if !seen_ids.insert(record.location_id.as_str()) {
                violations.push(violation(
                    DqLevel::Warning,
                    columns::LOCATION_ID,
                    "重复 Location_ID（按独立货位计算容量）".to_string(),
                ));
            }

            if !record.zone_kind().is_recognized() {
                violations.push(violation(
                    DqLevel::Info,
                    columns::ZONE,
                    format!(
                        "未识别库区 {}，排在所有已知库区之后",
                        record.zone.as_deref().unwrap_or("(空)")
                    ),
                ));
            }

            if let AllowedSize::Unknown(code) = record.allowed_size() {
                violations.push(violation(
                    DqLevel::Info,
                    columns::ALLOWED_SIZE_CLASS,
                    format!("未识别允许尺寸 {}，仅接受未识别尺寸的 SKU", code),
                ));
            }
        }

        violations
    }
}
