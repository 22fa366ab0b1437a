// ==========================================
// 仓储货位分配系统 - 货位排序引擎
// ==========================================
// 职责: 将全部货位排成确定的优先序列,占用计数清零
// 输入: 货位主数据列表
// 输出: 已排序货位列表（RankedLocation）
// ==========================================
// 排序键（升序）:
// 1) 库区排名 Golden=0 / Standard=1 / Overflow=2 / 其他=3
// 2) 层
// 3) 巷道编号（巷道文本中第一段连续数字,无则为 0）
// 4) 货架
// 层/货架整列统一类型: 全部为数值则按数值,否则全列按文本
// 同键保持输入顺序（稳定排序）
// ==========================================

use crate::domain::location::{LocationRecord, LocationSortKey, RankedLocation};
use crate::domain::types::{ColumnKind, SortValue};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static AISLE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("巷道编号正则非法"));

// ==========================================
// LocationRanker - 货位排序引擎
// ==========================================
pub struct LocationRanker {
    // 无状态引擎，不需要注入依赖
}

impl LocationRanker {
    pub fn new() -> Self {
        Self {}
    }

    /// 排序货位
    ///
    /// # 参数
    /// - `locations`: 货位主数据（输入顺序即同键时的先后顺序）
    ///
    /// # 返回
    /// 已排序的货位列表，每个货位 used_slots = 0
    #[instrument(skip(self, locations), fields(locations_count = locations.len()))]
    pub fn rank(&self, locations: Vec<LocationRecord>) -> Vec<RankedLocation> {
        let kinds = ColumnKinds::infer(&locations);

        let mut ranked: Vec<RankedLocation> = locations
            .into_iter()
            .map(|record| {
                let key = self.sort_key(&record, kinds);
                RankedLocation::new(record, key)
            })
            .collect();

        // slice::sort_by 为稳定排序
        ranked.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

        debug!(
            level_kind = ?kinds.level,
            rack_kind = ?kinds.rack,
            first = ranked.first().map(|l| l.record.location_id.as_str()),
            last = ranked.last().map(|l| l.record.location_id.as_str()),
            "货位排序完成"
        );

        ranked
    }

    /// 计算货位排序键
    ///
    /// # 参数
    /// - `kinds`: 由全部货位推断出的层/货架列类型
    pub fn sort_key(&self, record: &LocationRecord, kinds: ColumnKinds) -> LocationSortKey {
        LocationSortKey {
            zone_rank: record.zone_kind().rank(),
            level: SortValue::from_raw(record.level.as_deref(), kinds.level),
            aisle_number: Self::aisle_number(record.aisle.as_deref()),
            rack: SortValue::from_raw(record.rack.as_deref(), kinds.rack),
        }
    }

    /// 提取巷道编号
    ///
    /// # 示例
    /// - "Aisle-07" → 7
    /// - "A12-B3" → 12
    /// - "North" / 缺失 → 0
    pub fn aisle_number(aisle: Option<&str>) -> u64 {
        aisle
            .and_then(|text| AISLE_DIGITS.find(text))
            // 超出 u64 的数字串按最大值处理
            .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

// ==========================================
// ColumnKinds - 层/货架列类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnKinds {
    pub level: ColumnKind,
    pub rack: ColumnKind,
}

impl ColumnKinds {
    pub fn infer(locations: &[LocationRecord]) -> Self {
        Self {
            level: ColumnKind::infer(locations.iter().map(|l| l.level.as_deref())),
            rack: ColumnKind::infer(locations.iter().map(|l| l.rack.as_deref())),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for LocationRanker {
    fn default() -> Self {
        Self::new()
    }
}
