// ==========================================
// 仓储货位分配系统 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::file_parser::{RawRow, RawTable};
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（表头 + 原始行）
// 实现者: CsvParser, ExcelParser
pub trait FileParser {
    /// 解析文件为原始表
    ///
    /// # 说明
    /// - 表头与单元格均去除首尾空白
    /// - 空行被跳过,单元格全为空的行保留
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// RecordMapper Trait
// ==========================================
// 用途: 原始行 → 领域记录
// 实现者: SkuFieldMapper, LocationFieldMapper
pub trait RecordMapper {
    type Record;

    /// 映射单行
    fn map_row(&self, row: &RawRow) -> ImportResult<Self::Record>;

    /// 映射整表（首个错误即中止）
    fn map_table(&self, table: &RawTable) -> ImportResult<Vec<Self::Record>> {
        table.rows.iter().map(|row| self.map_row(row)).collect()
    }
}

