// ==========================================
// 工单SLA报表系统 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================
// 职责: 营业时间窗口/分档阈值的构造期校验错误
// 红线: 引擎求值本身不产生错误,错误只出现在构造期
// ==========================================

use chrono::NaiveTime;
use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    // ===== 营业时间窗口配置错误 =====
    #[error("营业时间窗口无效: 开门时间 {open} 必须早于关门时间 {close}")]
    InvalidDailyWindow { open: NaiveTime, close: NaiveTime },

    #[error("工作日集合为空")]
    EmptyWeekdaySet,

    #[error("无法识别的工作日: {0}")]
    UnknownWeekday(String),

    #[error("时间格式错误 (期望 HH:MM): {0}")]
    InvalidTimeOfDay(String),

    #[error("UTC偏移超出范围 (必须在 ±1440 分钟内): {0}")]
    InvalidUtcOffset(i32),

    // ===== 分档阈值配置错误 =====
    #[error("分档阈值无效 (要求 0 < at_risk < critical < 100): at_risk={at_risk_pct}, critical={critical_pct}")]
    InvalidThresholds { at_risk_pct: f64, critical_pct: f64 },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
