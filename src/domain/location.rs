// ==========================================
// 仓储货位分配系统 - 货位领域模型
// ==========================================
// 红线: 占用计数只存在于分配引擎持有的工作副本中
// ==========================================

use crate::domain::types::{AllowedSize, SortValue, Zone};
use serde::{Deserialize, Serialize};

// ==========================================
// LocationRecord - 货位主数据
// ==========================================
// 用途: 导入层写入,排序器与引擎只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    // ===== 主键 =====
    pub location_id: String, // Location_ID

    // ===== 物理位置 =====
    pub zone: Option<String>,  // Zone（Golden/Standard/Overflow）
    pub aisle: Option<String>, // Aisle（内嵌数字用于排序）
    pub rack: Option<String>,  // Rack
    pub level: Option<String>, // Level

    // ===== 约束 =====
    pub allowed_size_class: Option<String>, // Allowed_Size_Class（S/M/L/M+L，空=不限）
    pub special_constraint: Option<String>, // Special_Constraint（fragile-only/chilled）

    // ===== 元信息 =====
    pub row_number: usize,
}

impl LocationRecord {
    pub fn zone_kind(&self) -> Zone {
        Zone::parse(self.zone.as_deref())
    }

    pub fn allowed_size(&self) -> AllowedSize {
        AllowedSize::parse(self.allowed_size_class.as_deref())
    }

    /// 特殊约束（缺失视为空串）
    pub fn constraint_text(&self) -> &str {
        self.special_constraint.as_deref().unwrap_or("")
    }
}

// ==========================================
// LocationSortKey - 货位排序键
// ==========================================
// 比较顺序: 库区排名 → 层 → 巷道编号 → 货架
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocationSortKey {
    pub zone_rank: u8,
    pub level: SortValue,
    pub aisle_number: u64,
    pub rack: SortValue,
}

// ==========================================
// RankedLocation - 已排序货位（带占用计数）
// ==========================================
#[derive(Debug, Clone)]
pub struct RankedLocation {
    pub record: LocationRecord,
    pub sort_key: LocationSortKey,
    pub used_slots: u32, // 已占用 SKU 数（初始为 0）
}

impl RankedLocation {
    pub fn new(record: LocationRecord, sort_key: LocationSortKey) -> Self {
        Self {
            record,
            sort_key,
            used_slots: 0,
        }
    }

    /// 是否还有剩余容量
    pub fn has_capacity(&self, max_skus_per_location: u32) -> bool {
        self.used_slots < max_skus_per_location
    }

    /// 剩余容量
    pub fn remaining_slots(&self, max_skus_per_location: u32) -> u32 {
        max_skus_per_location.saturating_sub(self.used_slots)
    }
}
