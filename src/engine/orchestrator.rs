// ==========================================
// 仓储货位分配系统 - 引擎编排器
// ==========================================
// 用途: 协调货位排序与货位分配的执行顺序
// 流程: 货位排序 → SKU 优先级排序 → 贪心分配
// ==========================================

use crate::domain::location::LocationRecord;
use crate::domain::sku::SkuRecord;
use crate::engine::location_ranker::LocationRanker;
use crate::engine::slot_assigner::{AssignmentOutcome, SlotAssigner};
use tracing::{debug, info};

// ==========================================
// SlottingOrchestrator - 引擎编排器
// ==========================================
pub struct SlottingOrchestrator {
    ranker: LocationRanker,
    assigner: SlotAssigner,
}

impl SlottingOrchestrator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - max_skus_per_location: 单货位 SKU 数上限
    pub fn new(max_skus_per_location: u32) -> Self {
        Self {
            ranker: LocationRanker::new(),
            assigner: SlotAssigner::new(max_skus_per_location),
        }
    }

    /// 执行一次完整的货位分配
    ///
    /// 每次调用都从全新的零占用货位序列开始，相同输入产出相同结果。
    pub fn execute(&self, skus: &[SkuRecord], locations: Vec<LocationRecord>) -> AssignmentOutcome {
        info!(
            skus_count = skus.len(),
            locations_count = locations.len(),
            max_skus_per_location = self.assigner.max_skus_per_location(),
            "开始执行货位分配流程"
        );

        // ==========================================
        // 步骤1: 货位排序
        // ==========================================
        debug!("步骤1: 执行货位排序");
        let ranked = self.ranker.rank(locations);

        // ==========================================
        // 步骤2: 贪心分配
        // ==========================================
        debug!("步骤2: 执行贪心分配");
        let outcome = self.assigner.assign(skus, ranked);

        info!(
            total = outcome.assignments.len(),
            placed = outcome.placed_count(),
            unplaced = outcome.unplaced_count(),
            "货位分配流程完成"
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(id: &str, priority: f64) -> SkuRecord {
        SkuRecord {
            sku_id: id.to_string(),
            priority_score: Some(priority),
            size_class: Some("Small".to_string()),
            handling_type: None,
            family_or_category: None,
            row_number: 0,
        }
    }

    fn location(id: &str, zone: &str, aisle: &str) -> LocationRecord {
        LocationRecord {
            location_id: id.to_string(),
            zone: Some(zone.to_string()),
            aisle: Some(aisle.to_string()),
            rack: Some("R1".to_string()),
            level: Some("1".to_string()),
            allowed_size_class: None,
            special_constraint: None,
            row_number: 0,
        }
    }

    #[test]
    fn test_execute_uses_ranked_order() {
        let orchestrator = SlottingOrchestrator::new(1);
        let skus = vec![sku("A", 10.0), sku("B", 20.0)];
        let locations = vec![
            location("STD", "Standard", "Aisle-1"),
            location("GOLD-7", "Golden", "Aisle-07"),
            location("GOLD-2", "Golden", "Aisle-2"),
        ];

        let outcome = orchestrator.execute(&skus, locations);

        assert_eq!(outcome.assignments[0].sku_id, "B");
        assert_eq!(outcome.assignments[0].location_id(), Some("GOLD-2"));
        assert_eq!(outcome.assignments[1].location_id(), Some("GOLD-7"));
    }

    #[test]
    fn test_execute_is_repeatable() {
        let orchestrator = SlottingOrchestrator::new(2);
        let skus: Vec<SkuRecord> = (0..7).map(|i| sku(&format!("S{}", i), (i % 3) as f64)).collect();
        let locations = vec![
            location("L1", "Overflow", "A1"),
            location("L2", "Golden", "A3"),
            location("L3", "Golden", "A1"),
        ];

        let first = orchestrator.execute(&skus, locations.clone());
        let second = orchestrator.execute(&skus, locations);
        assert_eq!(first.assignments, second.assignments);
    }
}
