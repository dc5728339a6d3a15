// ==========================================
// 工单SLA报表系统 - 领域类型定义
// ==========================================
// 依据: SLA_Engine_Design.md - 0.2 风险分档体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 风险分档 (SLA Bucket)
// ==========================================
// 红线: 分档由宽限期消耗百分比导出,阈值可配置
// 顺序: Ok < AtRisk < Critical < Overdue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlaBucket {
    Ok,       // 正常
    AtRisk,   // 临近超期
    Critical, // 即将超期
    Overdue,  // 已超期
}

impl fmt::Display for SlaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlaBucket::Ok => write!(f, "OK"),
            SlaBucket::AtRisk => write!(f, "AT_RISK"),
            SlaBucket::Critical => write!(f, "CRITICAL"),
            SlaBucket::Overdue => write!(f, "OVERDUE"),
        }
    }
}

impl SlaBucket {
    /// 从字符串解析分档
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "OK" => Some(SlaBucket::Ok),
            "AT_RISK" => Some(SlaBucket::AtRisk),
            "CRITICAL" => Some(SlaBucket::Critical),
            "OVERDUE" => Some(SlaBucket::Overdue),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SlaBucket::Ok => "OK",
            SlaBucket::AtRisk => "AT_RISK",
            SlaBucket::Critical => "CRITICAL",
            SlaBucket::Overdue => "OVERDUE",
        }
    }
}
