// ==========================================
// 仓储货位分配系统 - 运行汇总
// ==========================================
// 职责: 汇总单次分配运行的计数,用于控制台输出与 JSON 输出
// 红线: 只读分配结果,不影响分配
// ==========================================

use crate::domain::assignment::UnplacedCause;
use crate::engine::slot_assigner::AssignmentOutcome;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

// ==========================================
// SlottingReport - 运行汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlottingReport {
    // ===== 运行标识 =====
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    // ===== 输入 =====
    pub max_skus_per_location: u32,
    pub priority_column: String,
    pub total_skus: usize,
    pub total_locations: usize,
    pub dq_violations: usize,

    // ===== 结果 =====
    pub placed: usize,
    pub unplaced: usize,
    pub unplaced_capacity_exhausted: usize,
    pub unplaced_no_compatible_location: usize,
    pub locations_used: usize,
    pub locations_at_capacity: usize,
    pub free_slots: u64, // 分配结束后剩余可用槽位总数
}

impl SlottingReport {
    /// 由分配结果生成汇总
    ///
    /// # 参数
    /// - started_at: 运行开始时间（完成时间取当前时刻）
    /// - max_skus_per_location: 本次运行的容量上限
    /// - priority_column: 实际使用的优先级列
    /// - dq_violations: 数据质量问题条数
    /// - outcome: 分配结果
    pub fn from_outcome(
        started_at: DateTime<Utc>,
        max_skus_per_location: u32,
        priority_column: &str,
        dq_violations: usize,
        outcome: &AssignmentOutcome,
    ) -> Self {
        let count_cause = |cause: UnplacedCause| {
            outcome.unplaced.iter().filter(|(_, c)| *c == cause).count()
        };

        Self {
            run_id: Uuid::new_v4(),
            started_at,
            finished_at: Utc::now(),
            max_skus_per_location,
            priority_column: priority_column.to_string(),
            total_skus: outcome.assignments.len(),
            total_locations: outcome.locations.len(),
            dq_violations,
            placed: outcome.placed_count(),
            unplaced: outcome.unplaced_count(),
            unplaced_capacity_exhausted: count_cause(UnplacedCause::CapacityExhausted),
            unplaced_no_compatible_location: count_cause(UnplacedCause::NoCompatibleLocation),
            locations_used: outcome
                .locations
                .iter()
                .filter(|slot| slot.used_slots > 0)
                .count(),
            locations_at_capacity: outcome
                .locations
                .iter()
                .filter(|slot| !slot.has_capacity(max_skus_per_location))
                .count(),
            free_slots: outcome
                .locations
                .iter()
                .map(|slot| u64::from(slot.remaining_slots(max_skus_per_location)))
                .sum(),
        }
    }

    /// 运行耗时（毫秒）
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

impl fmt::Display for SlottingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Slotting run {}", self.run_id)?;
        writeln!(f, "  Total SKUs:        {}", self.total_skus)?;
        writeln!(f, "  Placed:            {}", self.placed)?;
        writeln!(
            f,
            "  Unplaced:          {} (capacity exhausted: {}, no compatible location: {})",
            self.unplaced, self.unplaced_capacity_exhausted, self.unplaced_no_compatible_location
        )?;
        writeln!(
            f,
            "  Locations used:    {} / {} ({} at capacity {})",
            self.locations_used,
            self.total_locations,
            self.locations_at_capacity,
            self.max_skus_per_location
        )?;
        writeln!(f, "  Free slots:        {}", self.free_slots)?;
        writeln!(f, "  Priority column:   {}", self.priority_column)?;
        writeln!(f, "  DQ notes:          {}", self.dq_violations)?;
        write!(f, "  Elapsed:           {} ms", self.elapsed_ms())
    }
}
