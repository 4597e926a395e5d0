//! 服務設定
//!
//! 優先順序：內建預設值 < TOML 設定檔 < 環境變數。載入完成後統一驗證，
//! 任一欄位不合法即失敗，不會帶著部分錯誤的設定啟動。

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use ops_calc::PeriodResolver;
use ops_core::{SkuCatalog, SkuMeta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 環境變數：日誌層級
pub const ENV_LOG_LEVEL: &str = "FACTORY_OPS_LOG_LEVEL";
/// 環境變數：日誌格式
pub const ENV_LOG_FORMAT: &str = "FACTORY_OPS_LOG_FORMAT";
/// 環境變數：報表年度
pub const ENV_REPORTING_YEAR: &str = "FACTORY_OPS_REPORTING_YEAR";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("無法讀取設定檔 `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("無法解析設定檔 `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },

    #[error("設定內容解析失敗: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("環境變數 `{key}` 的值不合法: `{value}`")]
    InvalidEnvOverride { key: String, value: String },

    #[error("設定驗證失敗: {0}")]
    Validation(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(SettingsError::Validation(format!(
                "不支援的日誌格式 `{other}`（可用 compact|pretty|json）"
            ))),
        }
    }
}

/// 日誌設定
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingSettings {
    /// EnvFilter 語法，例如 `info` 或 `ops_store=debug`
    pub level: String,
    pub format: LogFormat,
}

/// 報表設定
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportingSettings {
    /// 季度表所屬年度
    pub year: i32,
}

/// 單一料號的參數覆寫
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkuSetting {
    pub sku: String,
    pub unit_cost: Decimal,
    pub category: String,
    pub lead_time_days: u32,
}

/// 料號參數表設定
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogSettings {
    /// 未知料號的單價
    pub default_unit_cost: Decimal,

    /// 未知料號的分類
    pub default_category: String,

    /// 未知料號（或空補貨單）的提前期
    pub default_lead_time_days: u32,

    /// 覆寫或擴充內建料號表
    pub skus: Vec<SkuSetting>,
}

/// 服務設定
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub reporting: ReportingSettings,
    pub catalog: CatalogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        let fallback = SkuMeta::fallback();
        Self {
            logging: LoggingSettings {
                level: "info".to_string(),
                format: LogFormat::Compact,
            },
            reporting: ReportingSettings { year: 2025 },
            catalog: CatalogSettings {
                default_unit_cost: fallback.unit_cost,
                default_category: fallback.category,
                default_lead_time_days: fallback.lead_time_days,
                skus: Vec::new(),
            },
        }
    }
}

impl Settings {
    /// 載入設定：預設值 → 設定檔（可選）→ 環境變數 → 驗證
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        if let Some(path) = path {
            settings.apply_patch(read_patch(path)?);
        }

        settings.apply_env_overrides(read_env)?;
        settings.validate()?;

        tracing::debug!(
            "設定載入完成: 年度 {}，料號覆寫 {} 筆",
            settings.reporting.year,
            settings.catalog.skus.len()
        );

        Ok(settings)
    }

    /// 從 TOML 字串建立設定（不讀取環境變數）
    pub fn from_toml_str(input: &str) -> Result<Self, SettingsError> {
        let patch: SettingsPatch = toml::from_str(input)?;
        let mut settings = Self::default();
        settings.apply_patch(patch);
        settings.validate()?;
        Ok(settings)
    }

    fn apply_patch(&mut self, patch: SettingsPatch) {
        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }

        if let Some(reporting) = patch.reporting {
            if let Some(year) = reporting.year {
                self.reporting.year = year;
            }
        }

        if let Some(catalog) = patch.catalog {
            if let Some(cost) = catalog.default_unit_cost {
                self.catalog.default_unit_cost = cost;
            }
            if let Some(category) = catalog.default_category {
                self.catalog.default_category = category;
            }
            if let Some(days) = catalog.default_lead_time_days {
                self.catalog.default_lead_time_days = days;
            }
            self.catalog.skus.extend(catalog.sku);
        }
    }

    /// 套用環境變數覆寫；`lookup` 回傳 None 代表未設定
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            self.logging.format = format.parse().map_err(|_| SettingsError::InvalidEnvOverride {
                key: ENV_LOG_FORMAT.to_string(),
                value: format.clone(),
            })?;
        }

        if let Some(year) = lookup(ENV_REPORTING_YEAR) {
            self.reporting.year = year.trim().parse().map_err(|_| SettingsError::InvalidEnvOverride {
                key: ENV_REPORTING_YEAR.to_string(),
                value: year.clone(),
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::Validation(
                "logging.level 不可為空".to_string(),
            ));
        }

        if !(2000..=2100).contains(&self.reporting.year) {
            return Err(SettingsError::Validation(format!(
                "reporting.year 必須介於 2000 與 2100 之間，目前為 {}",
                self.reporting.year
            )));
        }

        if self.catalog.default_unit_cost.is_sign_negative() {
            return Err(SettingsError::Validation(
                "catalog.default_unit_cost 不可為負數".to_string(),
            ));
        }

        for entry in &self.catalog.skus {
            if entry.sku.trim().is_empty() {
                return Err(SettingsError::Validation(
                    "catalog.sku 項目缺少料號".to_string(),
                ));
            }
            if entry.unit_cost.is_sign_negative() {
                return Err(SettingsError::Validation(format!(
                    "料號 {} 的 unit_cost 不可為負數",
                    entry.sku
                )));
            }
        }

        Ok(())
    }

    /// 內建料號表套用覆寫與預設參數
    pub fn sku_catalog(&self) -> SkuCatalog {
        let fallback = SkuMeta::new(
            self.catalog.default_unit_cost,
            self.catalog.default_category.clone(),
            self.catalog.default_lead_time_days,
        );

        let mut catalog = SkuCatalog::factory_default().with_fallback(fallback);
        for entry in &self.catalog.skus {
            catalog.insert(
                entry.sku.clone(),
                SkuMeta::new(entry.unit_cost, entry.category.clone(), entry.lead_time_days),
            );
        }
        catalog
    }

    /// 依報表年度建立時間區間解析器
    pub fn period_resolver(&self) -> PeriodResolver {
        PeriodResolver::for_year(self.reporting.year)
    }
}

fn read_patch(path: &Path) -> Result<SettingsPatch, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
struct SettingsPatch {
    logging: Option<LoggingPatch>,
    reporting: Option<ReportingPatch>,
    catalog: Option<CatalogPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct ReportingPatch {
    year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPatch {
    default_unit_cost: Option<Decimal>,
    default_category: Option<String>,
    default_lead_time_days: Option<u32>,
    #[serde(default)]
    sku: Vec<SkuSetting>,
}
