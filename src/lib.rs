// ==========================================
// 工单SLA报表系统 - 核心库
// ==========================================
// 依据: SLA_Engine_Design.md - 系统总览
// 技术栈: Rust + SQLite
// 系统定位: 营业时间SLA计算引擎 (报表/告警/绩效的唯一口径)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 日历/窗口/SLA值对象
pub mod domain;

// 引擎层 - 营业工时与分档规则
pub mod engine;

// 配置层 - 窗口/阈值/节假日配置
pub mod config;

// 数据仓储层 - 节假日表访问
pub mod repository;

// 导入层 - 节假日清单文件
pub mod importer;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 展示辅助 - 舍入/格式化 (核心之外)
pub mod presentation;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::SlaBucket;

// 领域实体
pub use domain::{
    BusinessWindow, BusinessWindowSpec, DomainError, HolidayCalendar, SlaState, SlaTarget,
    TimeInterval,
};

// 引擎
pub use engine::{BucketThresholds, ElapsedEngine, SlaClassifier, SlaEvaluator};

// 配置
pub use config::{SlaConfig, SlaConfigManager};

// 仓储与导入
pub use importer::{HolidayImportSummary, HolidayImporter};
pub use repository::HolidayRepository;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工单SLA报表系统";

// ==========================================
// 预编译检查
// ==========================================
