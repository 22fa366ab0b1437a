// ==========================================
// 仓储货位分配系统 - 分配输入导入器
// ==========================================
// 职责: 读取 SKU 表与货位表,生成领域记录
// 流程:
// 1. 文件读取与解析（CSV / Excel）
// 2. 表结构校验（两张表都通过后才进入映射）
// 3. 字段映射与类型转换
// 4. 数据质量校验（仅记录）
// ==========================================

use crate::domain::data_quality::{DqLevel, DqViolation};
use crate::domain::location::LocationRecord;
use crate::domain::sku::SkuRecord;
use crate::importer::dq_validator::DqValidator;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::{LocationFieldMapper, SkuFieldMapper};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::RecordMapper;
use crate::importer::schema_validator::SchemaValidator;
use std::path::Path;
use tracing::{info, instrument, warn};

// ==========================================
// ImportedData - 导入结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportedData {
    pub skus: Vec<SkuRecord>,
    pub locations: Vec<LocationRecord>,
    pub priority_column: String, // 实际使用的优先级列
    pub dq_violations: Vec<DqViolation>,
}

// ==========================================
// SlottingImporter
// ==========================================
pub struct SlottingImporter {
    parser: UniversalFileParser,
    schema: SchemaValidator,
    dq: DqValidator,
}

impl SlottingImporter {
    /// # 参数
    /// - priority_column: 首选优先级列
    /// - fallback_priority_column: 备选优先级列
    pub fn new(
        priority_column: impl Into<String>,
        fallback_priority_column: impl Into<String>,
    ) -> Self {
        Self {
            parser: UniversalFileParser,
            schema: SchemaValidator::new(priority_column, fallback_priority_column),
            dq: DqValidator,
        }
    }

    /// 导入 SKU 表与货位表
    ///
    /// # 返回
    /// - Ok(ImportedData): 记录 + DQ 问题列表
    /// - Err: 文件错误、缺列、优先级非数值（任何分配工作开始前）
    #[instrument(skip(self, sku_path, location_path), fields(
        sku_path = %sku_path.as_ref().display(),
        location_path = %location_path.as_ref().display()
    ))]
    pub fn import<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        sku_path: P,
        location_path: Q,
    ) -> ImportResult<ImportedData> {
        // 阶段 1: 文件解析
        let sku_table = self.parser.parse(sku_path.as_ref())?;
        let location_table = self.parser.parse(location_path.as_ref())?;
        info!(
            sku_rows = sku_table.rows.len(),
            location_rows = location_table.rows.len(),
            "文件解析完成"
        );

        // 阶段 2: 表结构校验
        let priority_column = self.schema.validate_sku_table(&sku_table)?;
        self.schema.validate_location_table(&location_table)?;

        // 阶段 3: 字段映射
        let skus = SkuFieldMapper::new(priority_column.clone()).map_table(&sku_table)?;
        let locations = LocationFieldMapper.map_table(&location_table)?;

        // 阶段 4: 数据质量校验
        let mut dq_violations = self.dq.validate_skus(&skus);
        dq_violations.extend(self.dq.validate_locations(&locations));
        log_violations(&dq_violations);

        info!(
            skus = skus.len(),
            locations = locations.len(),
            dq_violations = dq_violations.len(),
            "已加载 {} 个 SKU 与 {} 个货位",
            skus.len(),
            locations.len()
        );

        Ok(ImportedData {
            skus,
            locations,
            priority_column,
            dq_violations,
        })
    }
}

fn log_violations(violations: &[DqViolation]) {
    for v in violations {
        match v.level {
            DqLevel::Warning => warn!(row = v.row_number, field = %v.field, "{}", v),
            DqLevel::Info => info!(row = v.row_number, field = %v.field, "{}", v),
        }
    }
}
