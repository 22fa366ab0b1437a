// ==========================================
// 仓储货位分配系统 - 货位分配引擎
// ==========================================
// 红线: 每个 SKU 恰好一条记录; 货位占用不超过上限; 一经分配不再调整
// ==========================================
// 职责: 按优先级贪心分配 SKU 到货位（首个可用即分配）
// 输入: SKU 列表 + 已排序货位列表
// 输出: 分配记录列表 + 货位最终占用
// ==========================================

use crate::domain::assignment::{SlotAssignment, UnplacedCause};
use crate::domain::location::RankedLocation;
use crate::domain::sku::SkuRecord;
use crate::engine::compatibility::CompatibilityChecker;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// 每个货位默认最多存放的 SKU 数
pub const DEFAULT_MAX_SKUS_PER_LOCATION: u32 = 5;

// ==========================================
// AssignmentOutcome - 单次分配结果
// ==========================================
#[derive(Debug, Clone)]
pub struct AssignmentOutcome {
    /// 分配记录（按 SKU 处理顺序，即优先级降序）
    pub assignments: Vec<SlotAssignment>,
    /// 未分配 SKU 及原因
    pub unplaced: Vec<(String, UnplacedCause)>,
    /// 分配结束后的货位（含最终占用计数，保持排序顺序）
    pub locations: Vec<RankedLocation>,
}

impl AssignmentOutcome {
    pub fn placed_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_placed()).count()
    }

    pub fn unplaced_count(&self) -> usize {
        self.assignments.len() - self.placed_count()
    }
}

// ==========================================
// SlotAssigner - 货位分配引擎
// ==========================================
pub struct SlotAssigner {
    max_skus_per_location: u32,
}

impl SlotAssigner {
    /// 构造函数
    ///
    /// # 参数
    /// - `max_skus_per_location`: 单货位 SKU 数上限（正整数）
    pub fn new(max_skus_per_location: u32) -> Self {
        Self {
            max_skus_per_location,
        }
    }

    pub fn max_skus_per_location(&self) -> u32 {
        self.max_skus_per_location
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分配 SKU 到货位
    ///
    /// 规则：
    /// 1) SKU 按优先级降序处理（稳定排序，同分保持输入顺序）
    /// 2) 每个 SKU 从排序序列头部扫描，跳过已满货位
    /// 3) 首个兼容货位即分配，占用 +1，停止扫描
    /// 4) 无可用货位 → 记录未分配，不改动任何计数
    ///
    /// # 参数
    /// - `skus`: SKU 列表（只读）
    /// - `locations`: 已排序货位（引擎独占的工作副本）
    #[instrument(skip(self, skus, locations), fields(
        skus_count = skus.len(),
        locations_count = locations.len(),
        max_skus_per_location = self.max_skus_per_location
    ))]
    pub fn assign(
        &self,
        skus: &[SkuRecord],
        mut locations: Vec<RankedLocation>,
    ) -> AssignmentOutcome {
        let mut assignments = Vec::with_capacity(skus.len());
        let mut unplaced = Vec::new();

        for sku in self.sort_by_priority(skus) {
            match self.find_slot(sku, &locations) {
                Some(idx) => {
                    let slot = &mut locations[idx];
                    slot.used_slots += 1;
                    debug!(
                        sku_id = %sku.sku_id,
                        location_id = %slot.record.location_id,
                        used_slots = slot.used_slots,
                        "SKU 已分配"
                    );
                    assignments.push(SlotAssignment::placed(sku, &slot.record));
                }
                None => {
                    let cause = self.classify_unplaced(sku, &locations);
                    debug!(sku_id = %sku.sku_id, cause = %cause, "SKU 未分配");
                    unplaced.push((sku.sku_id.clone(), cause));
                    assignments.push(SlotAssignment::unplaced(sku));
                }
            }
        }

        info!(
            placed = assignments.len() - unplaced.len(),
            unplaced = unplaced.len(),
            "货位分配完成"
        );

        AssignmentOutcome {
            assignments,
            unplaced,
            locations,
        }
    }

    /// 按优先级排序 SKU（降序，稳定）
    ///
    /// 优先级缺失的 SKU 排在所有有得分的 SKU 之后
    pub fn sort_by_priority<'a>(&self, skus: &'a [SkuRecord]) -> Vec<&'a SkuRecord> {
        let mut ordered: Vec<&SkuRecord> = skus.iter().collect();
        ordered.sort_by(|a, b| Self::compare_priority(a.priority_score, b.priority_score));
        ordered
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 查找首个有容量且兼容的货位下标
    fn find_slot(&self, sku: &SkuRecord, locations: &[RankedLocation]) -> Option<usize> {
        locations.iter().position(|slot| {
            slot.has_capacity(self.max_skus_per_location)
                && CompatibilityChecker::can_store(sku, &slot.record)
        })
    }

    /// 判定未分配原因（不影响分配结果）
    fn classify_unplaced(&self, sku: &SkuRecord, locations: &[RankedLocation]) -> UnplacedCause {
        if locations
            .iter()
            .any(|slot| CompatibilityChecker::can_store(sku, &slot.record))
        {
            UnplacedCause::CapacityExhausted
        } else {
            UnplacedCause::NoCompatibleLocation
        }
    }

    /// 比较优先级
    ///
    /// # 返回
    /// Ordering::Less 表示 a 先于 b 处理
    fn compare_priority(a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for SlotAssigner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SKUS_PER_LOCATION)
    }
}
