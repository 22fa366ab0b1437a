// ==========================================
// 仓储货位分配系统 - 数据质量领域模型
// ==========================================
// 红线: 数据质量问题只记录,不改变分配结果
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// DqLevel - 数据质量等级
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DqLevel {
    Warning, // 可能影响分配结果（重复主键、缺失得分）
    Info,    // 按宽松规则处理的未识别取值
}

impl fmt::Display for DqLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DqLevel::Warning => write!(f, "WARNING"),
            DqLevel::Info => write!(f, "INFO"),
        }
    }
}

// ==========================================
// DqViolation - 数据质量问题
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqViolation {
    pub table: String,             // SKU 表 / 货位表
    pub row_number: usize,         // 原始文件行号
    pub record_id: Option<String>, // SKU_ID / Location_ID
    pub level: DqLevel,
    pub field: String,
    pub message: String,
}

impl fmt::Display for DqViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} 行 {} ({}) {}: {}",
            self.level,
            self.table,
            self.row_number,
            self.record_id.as_deref().unwrap_or("-"),
            self.field,
            self.message
        )
    }
}
