// ==========================================
// 仓储货位分配系统 - 分配配置
// ==========================================
// 来源优先级: 命令行参数 > 配置文件 > 内置默认值
// 存储: TOML 文件（可选）
// ==========================================

use crate::engine::slot_assigner::DEFAULT_MAX_SKUS_PER_LOCATION;
use crate::importer::field_mapper::columns;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("配置值非法 (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const SKU_FILE: &str = "sku_file";
    pub const LOCATION_FILE: &str = "location_file";
    pub const OUTPUT_FILE: &str = "output_file";
    pub const MAX_SKUS_PER_LOCATION: &str = "max_skus_per_location";
    pub const PRIORITY_COLUMN: &str = "priority_column";
    pub const FALLBACK_PRIORITY_COLUMN: &str = "fallback_priority_column";
}

// ==========================================
// SlottingConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlottingConfig {
    /// SKU 优先级表
    pub sku_file: PathBuf,

    /// 货位主数据表
    pub location_file: PathBuf,

    /// 分配结果输出
    pub output_file: PathBuf,

    /// 单货位最多存放的 SKU 数（正整数）
    pub max_skus_per_location: u32,

    /// 首选优先级列
    pub priority_column: String,

    /// 首选列不存在时使用的优先级列
    pub fallback_priority_column: String,
}

impl Default for SlottingConfig {
    fn default() -> Self {
        Self {
            sku_file: PathBuf::from("sku_with_ai_priority.csv"),
            location_file: PathBuf::from("location_master.csv"),
            output_file: PathBuf::from("sku_slot_assignment.csv"),
            max_skus_per_location: DEFAULT_MAX_SKUS_PER_LOCATION,
            priority_column: columns::PRIORITY_SCORE_100.to_string(),
            fallback_priority_column: columns::PRIORITY_SCORE.to_string(),
        }
    }
}

/// 命令行覆写项（None 表示不覆写）
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sku_file: Option<PathBuf>,
    pub location_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub max_skus_per_location: Option<u32>,
}

impl SlottingConfig {
    /// 加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径；None 时使用默认值
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            None => Ok(Self::default()),
            Some(p) => {
                let content =
                    std::fs::read_to_string(p).map_err(|source| ConfigError::ReadError {
                        path: p.display().to_string(),
                        source,
                    })?;
                Self::from_toml_str(&content)
            }
        }
    }

    /// 从 TOML 文本解析（缺失键取默认值）
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 应用命令行覆写
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.sku_file {
            self.sku_file = v;
        }
        if let Some(v) = overrides.location_file {
            self.location_file = v;
        }
        if let Some(v) = overrides.output_file {
            self.output_file = v;
        }
        if let Some(v) = overrides.max_skus_per_location {
            self.max_skus_per_location = v;
        }
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_skus_per_location == 0 {
            return Err(ConfigError::InvalidValue {
                key: config_keys::MAX_SKUS_PER_LOCATION.to_string(),
                message: "必须为正整数".to_string(),
            });
        }

        for (key, value) in [
            (config_keys::PRIORITY_COLUMN, &self.priority_column),
            (config_keys::FALLBACK_PRIORITY_COLUMN, &self.fallback_priority_column),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "列名不能为空".to_string(),
                });
            }
        }

        for (key, value) in [
            (config_keys::SKU_FILE, &self.sku_file),
            (config_keys::LOCATION_FILE, &self.location_file),
            (config_keys::OUTPUT_FILE, &self.output_file),
        ] {
            if value.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "路径不能为空".to_string(),
                });
            }
        }

        Ok(())
    }
}
