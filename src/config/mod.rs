// ==========================================
// 工单SLA报表系统 - 配置层
// ==========================================
// 依据: SLA_Engine_Design.md - 7. 外部配置
// ==========================================
// 职责: 窗口/阈值/节假日配置的加载与默认档案
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigError, SlaConfig, SlaConfigManager};
