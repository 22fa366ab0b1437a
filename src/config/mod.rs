// ==========================================
// 仓储货位分配系统 - 配置层
// ==========================================
// 职责: 分配参数与文件路径配置,支持命令行覆写
// 存储: TOML 文件（可选）
// ==========================================

pub mod slotting_config;

// 重导出核心配置
pub use slotting_config::{config_keys, ConfigError, ConfigOverrides, SlottingConfig};
