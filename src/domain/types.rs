// ==========================================
// 仓储货位分配系统 - 领域类型定义
// ==========================================
// 职责: 尺寸等级、库区、排序值等基础类型
// 红线: 未识别取值一律宽松处理,不报错
// ==========================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ==========================================
// SKU 尺寸等级 (Size Class)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Small,  // S
    Medium, // M
    Large,  // L
}

impl SizeClass {
    /// 解析 SKU 尺寸文本
    ///
    /// 仅识别 Small/Medium/Large（去除首尾空白后严格匹配，区分大小写）。
    /// 其余取值返回 None，由兼容性检查按"不限制"处理。
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Small" => Some(SizeClass::Small),
            "Medium" => Some(SizeClass::Medium),
            "Large" => Some(SizeClass::Large),
            _ => None,
        }
    }

    /// 货位允许尺寸代码（S/M/L）
    pub fn code(&self) -> &'static str {
        match self {
            SizeClass::Small => "S",
            SizeClass::Medium => "M",
            SizeClass::Large => "L",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeClass::Small => write!(f, "Small"),
            SizeClass::Medium => write!(f, "Medium"),
            SizeClass::Large => write!(f, "Large"),
        }
    }
}

// ==========================================
// 货位允许尺寸 (Allowed Size Class)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedSize {
    Unrestricted,        // 空值: 不限制
    Exact(SizeClass),    // S / M / L
    MediumOrLarge,       // M+L
    Unknown(String),     // 其他代码: 不匹配任何已识别尺寸
}

impl AllowedSize {
    /// 解析货位允许尺寸（去空白、转大写）
    pub fn parse(raw: Option<&str>) -> Self {
        let code = match raw.map(str::trim) {
            None | Some("") => return AllowedSize::Unrestricted,
            Some(v) => v.to_uppercase(),
        };

        match code.as_str() {
            "S" => AllowedSize::Exact(SizeClass::Small),
            "M" => AllowedSize::Exact(SizeClass::Medium),
            "L" => AllowedSize::Exact(SizeClass::Large),
            "M+L" => AllowedSize::MediumOrLarge,
            _ => AllowedSize::Unknown(code),
        }
    }

    /// 判断该货位是否接受指定尺寸
    pub fn permits(&self, size: SizeClass) -> bool {
        match self {
            AllowedSize::Unrestricted => true,
            AllowedSize::Exact(allowed) => *allowed == size,
            AllowedSize::MediumOrLarge => matches!(size, SizeClass::Medium | SizeClass::Large),
            AllowedSize::Unknown(_) => false,
        }
    }
}

impl fmt::Display for AllowedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedSize::Unrestricted => write!(f, ""),
            AllowedSize::Exact(size) => write!(f, "{}", size.code()),
            AllowedSize::MediumOrLarge => write!(f, "M+L"),
            AllowedSize::Unknown(code) => write!(f, "{}", code),
        }
    }
}

// ==========================================
// 库区 (Zone)
// ==========================================
// 顺序: Golden < Standard < Overflow < 其他/缺失
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Golden,        // 黄金区
    Standard,      // 标准区
    Overflow,      // 溢出区
    Other(String), // 未识别库区（含缺失）
}

impl Zone {
    /// 解析库区名称（严格匹配，区分大小写）
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Golden") => Zone::Golden,
            Some("Standard") => Zone::Standard,
            Some("Overflow") => Zone::Overflow,
            Some(other) => Zone::Other(other.to_string()),
            None => Zone::Other(String::new()),
        }
    }

    /// 库区排名（越小越优先）
    pub fn rank(&self) -> u8 {
        match self {
            Zone::Golden => 0,
            Zone::Standard => 1,
            Zone::Overflow => 2,
            Zone::Other(_) => 3,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Zone::Other(_))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Golden => write!(f, "Golden"),
            Zone::Standard => write!(f, "Standard"),
            Zone::Overflow => write!(f, "Overflow"),
            Zone::Other(raw) => write!(f, "{}", raw),
        }
    }
}

// ==========================================
// 列类型 (Column Kind)
// ==========================================
// 用途: 层/货架整列统一按数值或按文本比较
// 规则: 非空值全部可解析为有限数值 → 数值列,否则文本列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl ColumnKind {
    /// 由整列取值推断列类型（缺失值不参与判定）
    pub fn infer<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let all_numeric = values
            .into_iter()
            .filter_map(|v| v.map(str::trim).filter(|v| !v.is_empty()))
            .all(|v| parse_finite(v).is_some());

        if all_numeric {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

// ==========================================
// 排序值 (Sort Value)
// ==========================================
// 用途: 层/货架按原始值比较
// 顺序: 同列内数值按大小、文本按字典序,缺失排最后
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
    Missing,
}

impl SortValue {
    /// 按列类型从原始文本构造排序值
    pub fn from_raw(raw: Option<&str>, kind: ColumnKind) -> Self {
        let value = match raw.map(str::trim) {
            None | Some("") => return SortValue::Missing,
            Some(v) => v,
        };

        match (kind, parse_finite(value)) {
            (ColumnKind::Numeric, Some(n)) => SortValue::Number(n),
            _ => SortValue::Text(value.to_string()),
        }
    }

    fn class_rank(&self) -> u8 {
        match self {
            SortValue::Number(_) => 0,
            SortValue::Text(_) => 1,
            SortValue::Missing => 2,
        }
    }
}

impl Eq for SortValue {}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.class_rank().cmp(&other.class_rank()),
        }
    }
}
