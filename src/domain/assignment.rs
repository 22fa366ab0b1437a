// ==========================================
// 仓储货位分配系统 - 分配结果领域模型
// ==========================================
// 红线: 每个输入 SKU 恰好对应一条分配记录
// ==========================================

use crate::domain::location::LocationRecord;
use crate::domain::sku::SkuRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// LocationRef - 货位引用（输出用）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub zone: Option<String>,
    pub aisle: Option<String>,
    pub rack: Option<String>,
    pub level: Option<String>,
    pub location_id: String,
}

impl From<&LocationRecord> for LocationRef {
    fn from(record: &LocationRecord) -> Self {
        Self {
            zone: record.zone.clone(),
            aisle: record.aisle.clone(),
            rack: record.rack.clone(),
            level: record.level.clone(),
            location_id: record.location_id.clone(),
        }
    }
}

// ==========================================
// SlotAssignment - SKU 分配记录
// ==========================================
// location = None 表示未分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub sku_id: String,
    pub location: Option<LocationRef>,
    pub priority_score: Option<f64>,
    pub handling_type: Option<String>,
    pub sku_size_class: Option<String>,
}

impl SlotAssignment {
    /// 已分配记录
    pub fn placed(sku: &SkuRecord, location: &LocationRecord) -> Self {
        Self {
            location: Some(LocationRef::from(location)),
            ..Self::unplaced(sku)
        }
    }

    /// 未分配记录（货位字段全部为空）
    pub fn unplaced(sku: &SkuRecord) -> Self {
        Self {
            sku_id: sku.sku_id.clone(),
            location: None,
            priority_score: sku.priority_score,
            handling_type: sku.handling_type.clone(),
            sku_size_class: sku.size_class.clone(),
        }
    }

    pub fn is_placed(&self) -> bool {
        self.location.is_some()
    }

    pub fn location_id(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.location_id.as_str())
    }
}

// ==========================================
// UnplacedCause - 未分配原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnplacedCause {
    CapacityExhausted,    // 存在兼容货位,但均已满
    NoCompatibleLocation, // 不存在任何兼容货位
}

impl fmt::Display for UnplacedCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnplacedCause::CapacityExhausted => write!(f, "CAPACITY_EXHAUSTED"),
            UnplacedCause::NoCompatibleLocation => write!(f, "NO_COMPATIBLE_LOCATION"),
        }
    }
}
