// ==========================================
// 工单SLA报表系统 - 配置管理器
// ==========================================
// 依据: SLA_Engine_Design.md - 7. 外部配置
// ==========================================
// 职责: SLA配置文档的加载、保存与默认档案
// 存储: JSON 配置文件 (窗口/阈值/节假日)
// 红线: 配置在批次开始时读取一次,核心求值期间绝不回查
// ==========================================

use crate::domain::calendar::HolidayCalendar;
use crate::domain::error::DomainError;
use crate::domain::window::{BusinessWindow, BusinessWindowSpec};
use crate::engine::classifier::BucketThresholds;
use crate::engine::evaluator::SlaEvaluator;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

// ==========================================
// 配置常量
// ==========================================
pub mod config_keys {
    /// 配置文件名
    pub const CONFIG_FILE_NAME: &str = "sla_config.json";

    /// 应用配置目录名
    pub const APP_DIR_NAME: &str = "ticket-sla";
}

// ==========================================
// 配置层错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    NotFound(String),

    #[error("配置文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

// ==========================================
// SlaConfig - SLA配置文档
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaConfig {
    /// 营业时间窗口配置
    pub business_window: BusinessWindowSpec,
    /// 分档阈值策略 (原始值,构造评估器时校验)
    pub thresholds: BucketThresholds,
    /// 节假日列表 (允许乱序/重复,构造日历时归一化)
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

impl SlaConfig {
    /// 部署默认配置: 周一~周五 08:30-17:30 UTC-3, 阈值 70/90, 无节假日
    pub fn deployed_default() -> Self {
        Self {
            business_window: BusinessWindowSpec::deployed_default(),
            thresholds: BucketThresholds::deployed_default(),
            holidays: Vec::new(),
        }
    }

    /// 由配置构造评估器 (每批次一次)
    ///
    /// 窗口与阈值的构造期校验在这里触发;
    /// 之后评估器只读共享,核心不再接触配置。
    pub fn build_evaluator(&self) -> Result<SlaEvaluator, DomainError> {
        let window = BusinessWindow::from_spec(&self.business_window)?;
        let thresholds =
            BucketThresholds::new(self.thresholds.at_risk_pct, self.thresholds.critical_pct)?;
        let calendar = HolidayCalendar::new(self.holidays.clone());

        Ok(SlaEvaluator::new(window, calendar, thresholds))
    }
}

// ==========================================
// SlaConfigManager - 配置管理器
// ==========================================
pub struct SlaConfigManager;

impl SlaConfigManager {
    /// 从指定路径加载配置
    pub fn load_from_file(path: &Path) -> Result<SlaConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        let config: SlaConfig = serde_json::from_str(&raw)?;

        debug!(
            path = %path.display(),
            holidays = config.holidays.len(),
            "已加载SLA配置"
        );
        Ok(config)
    }

    /// 加载配置,缺失时回退到部署默认档案
    ///
    /// path 为 None 时尝试默认配置路径。
    /// 解析失败不回退 — 坏配置必须显式修复,静默用默认值会掩盖问题。
    pub fn load_or_default(path: Option<&Path>) -> Result<SlaConfig, ConfigError> {
        let resolved = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_config_path(),
        };

        match resolved {
            Some(p) if p.exists() => Self::load_from_file(&p),
            Some(p) => {
                warn!(path = %p.display(), "配置文件不存在,使用部署默认配置");
                Ok(SlaConfig::deployed_default())
            }
            None => {
                warn!("无法解析默认配置目录,使用部署默认配置");
                Ok(SlaConfig::deployed_default())
            }
        }
    }

    /// 保存配置到指定路径 (pretty JSON, 便于人工维护)
    pub fn save_to_file(config: &SlaConfig, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(path, raw)?;
        debug!(path = %path.display(), "已保存SLA配置");
        Ok(())
    }

    /// 默认配置路径: <系统配置目录>/ticket-sla/sla_config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_keys::APP_DIR_NAME)
                .join(config_keys::CONFIG_FILE_NAME)
        })
    }
}
