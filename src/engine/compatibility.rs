// ==========================================
// 仓储货位分配系统 - 兼容性检查纯函数库
// ==========================================
// 职责: 判定 SKU 能否存放于指定货位
// 红线: 无状态、无副作用、字段缺失不报错
// ==========================================
// 规则（按顺序，首个失败即拒绝）:
// 1) 尺寸匹配
// 2) 易碎专用货架只放易碎品
// 3) 冷藏货位禁放危险品
// ==========================================

use crate::domain::location::LocationRecord;
use crate::domain::sku::SkuRecord;
use crate::domain::types::{AllowedSize, SizeClass};
use serde::{Deserialize, Serialize};
use std::fmt;

const FRAGILE_ONLY_MARK: &str = "fragile-only";
const FRAGILE_HANDLING: &str = "fragile";
const CHILLED_MARK: &str = "chilled";
const HAZARD_MARK: &str = "hazard";

// ==========================================
// RejectReason - 拒绝原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    SizeMismatch,  // 尺寸不匹配
    FragileOnly,   // 易碎专用货架,SKU 非易碎品
    ChilledHazard, // 冷藏货位,SKU 为危险品
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::SizeMismatch => write!(f, "SIZE_MISMATCH"),
            RejectReason::FragileOnly => write!(f, "FRAGILE_ONLY"),
            RejectReason::ChilledHazard => write!(f, "CHILLED_HAZARD"),
        }
    }
}

// ==========================================
// CompatibilityChecker - 纯函数工具类
// ==========================================
pub struct CompatibilityChecker;

impl CompatibilityChecker {
    /// 判定 SKU 能否存放于货位
    pub fn can_store(sku: &SkuRecord, location: &LocationRecord) -> bool {
        Self::check(sku, location).is_ok()
    }

    /// 判定 SKU 能否存放于货位，并给出首个失败规则
    ///
    /// # 返回
    /// - Ok(()): 兼容
    /// - Err(RejectReason): 首个失败的规则
    pub fn check(sku: &SkuRecord, location: &LocationRecord) -> Result<(), RejectReason> {
        // 规则 1: 尺寸匹配
        if !Self::size_fits(sku.size(), &location.allowed_size()) {
            return Err(RejectReason::SizeMismatch);
        }

        let special = location.constraint_text().to_lowercase();

        // 规则 2: 易碎专用货架
        if special.contains(FRAGILE_ONLY_MARK)
            && sku.handling_text().trim().to_lowercase() != FRAGILE_HANDLING
        {
            return Err(RejectReason::FragileOnly);
        }

        // 规则 3: 冷藏 × 危险品
        if special.contains(CHILLED_MARK) && sku.category_text().to_lowercase().contains(HAZARD_MARK)
        {
            return Err(RejectReason::ChilledHazard);
        }

        Ok(())
    }

    /// 尺寸匹配
    ///
    /// # 规则
    /// - SKU 尺寸未识别 → 兼容（不阻断）
    /// - 货位未限制尺寸 → 兼容
    /// - 否则按 S/M/L 精确匹配，M+L 接受 M 与 L
    pub fn size_fits(sku_size: Option<SizeClass>, allowed: &AllowedSize) -> bool {
        match sku_size {
            None => true,
            Some(size) => allowed.permits(size),
        }
    }
}
