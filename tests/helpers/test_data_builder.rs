// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use warehouse_slotting::domain::location::LocationRecord;
use warehouse_slotting::domain::sku::SkuRecord;

// ==========================================
// SkuRecord 构建器
// ==========================================

pub struct SkuBuilder {
    sku_id: String,
    priority_score: Option<f64>,
    size_class: Option<String>,
    handling_type: Option<String>,
    family_or_category: Option<String>,
}

impl SkuBuilder {
    pub fn new(sku_id: &str) -> Self {
        Self {
            sku_id: sku_id.to_string(),
            priority_score: Some(50.0),
            size_class: Some("Small".to_string()),
            handling_type: Some("standard".to_string()),
            family_or_category: Some("General".to_string()),
        }
    }

    pub fn priority(mut self, score: f64) -> Self {
        self.priority_score = Some(score);
        self
    }

    pub fn no_priority(mut self) -> Self {
        self.priority_score = None;
        self
    }

    pub fn size(mut self, size: &str) -> Self {
        self.size_class = Some(size.to_string());
        self
    }

    pub fn no_size(mut self) -> Self {
        self.size_class = None;
        self
    }

    pub fn handling(mut self, handling: &str) -> Self {
        self.handling_type = Some(handling.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.family_or_category = Some(category.to_string());
        self
    }

    pub fn build(self) -> SkuRecord {
        SkuRecord {
            sku_id: self.sku_id,
            priority_score: self.priority_score,
            size_class: self.size_class,
            handling_type: self.handling_type,
            family_or_category: self.family_or_category,
            row_number: 0,
        }
    }
}

// ==========================================
// LocationRecord 构建器
// ==========================================

pub struct LocationBuilder {
    location_id: String,
    zone: Option<String>,
    aisle: Option<String>,
    rack: Option<String>,
    level: Option<String>,
    allowed_size_class: Option<String>,
    special_constraint: Option<String>,
}

impl LocationBuilder {
    pub fn new(location_id: &str) -> Self {
        Self {
            location_id: location_id.to_string(),
            zone: Some("Standard".to_string()),
            aisle: Some("Aisle-01".to_string()),
            rack: Some("R1".to_string()),
            level: Some("1".to_string()),
            allowed_size_class: None,
            special_constraint: None,
        }
    }

    pub fn zone(mut self, zone: &str) -> Self {
        self.zone = Some(zone.to_string());
        self
    }

    pub fn aisle(mut self, aisle: &str) -> Self {
        self.aisle = Some(aisle.to_string());
        self
    }

    pub fn rack(mut self, rack: &str) -> Self {
        self.rack = Some(rack.to_string());
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.level = Some(level.to_string());
        self
    }

    pub fn allowed(mut self, allowed: &str) -> Self {
        self.allowed_size_class = Some(allowed.to_string());
        self
    }

    pub fn constraint(mut self, constraint: &str) -> Self {
        self.special_constraint = Some(constraint.to_string());
        self
    }

    pub fn build(self) -> LocationRecord {
        LocationRecord {
            location_id: self.location_id,
            zone: self.zone,
            aisle: self.aisle,
            rack: self.rack,
            level: self.level,
            allowed_size_class: self.allowed_size_class,
            special_constraint: self.special_constraint,
            row_number: 0,
        }
    }
}
