// ==========================================
// 仓储货位分配系统 - SKU 领域模型
// ==========================================
// 用途: 导入层写入,引擎层只读
// 生命周期: 单次分配运行内不可变
// ==========================================

use crate::domain::types::SizeClass;
use serde::{Deserialize, Serialize};

// ==========================================
// SkuRecord - SKU 主数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    // ===== 主键 =====
    pub sku_id: String, // SKU_ID

    // ===== 优先级 =====
    pub priority_score: Option<f64>, // 优先级得分（越高越优先）

    // ===== 存储属性 =====
    pub size_class: Option<String>,         // SKU_Size_Class（原始文本）
    pub handling_type: Option<String>,      // Handling_Type（如 fragile）
    pub family_or_category: Option<String>, // Family_or_Category（如 Hazardous ...）

    // ===== 元信息 =====
    pub row_number: usize, // 原始文件行号（用于 DQ 报告）
}

impl SkuRecord {
    /// 解析后的尺寸等级（未识别返回 None）
    pub fn size(&self) -> Option<SizeClass> {
        self.size_class.as_deref().and_then(SizeClass::parse)
    }

    /// 操作类型（缺失视为空串）
    pub fn handling_text(&self) -> &str {
        self.handling_type.as_deref().unwrap_or("")
    }

    /// 品类（缺失视为空串）
    pub fn category_text(&self) -> &str {
        self.family_or_category.as_deref().unwrap_or("")
    }
}
