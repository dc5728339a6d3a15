// ==========================================
// 工单SLA报表系统 - SLA值对象
// ==========================================
// 依据: SLA_Engine_Design.md - 3. 数据模型
// ==========================================
// 职责: 计算输入/输出的纯值对象,无身份、无持久化
// 红线: 引擎对工单/客服/部门结构一无所知,只见时间戳与宽限期
// ==========================================

use crate::domain::types::SlaBucket;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// TimeInterval - 时间区间
// ==========================================
// 不在构造期强制 end >= start: 倒挂区间是定义好的运行期情况
// (按0工时处理),不是构造错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// 区间起点 (工单创建时刻)
    pub start: DateTime<Utc>,
    /// 区间终点 (关闭时刻; 未关闭工单由调用方显式传入"当前时刻")
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

// ==========================================
// SlaTarget - SLA目标
// ==========================================
// 前置条件: grace_hours > 0, 由调用方在进入分类器前保证
// (无适用宽限期的工单根本不会走到分类器)。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlaTarget {
    /// 宽限期 (营业小时)
    pub grace_hours: f64,
}

impl SlaTarget {
    pub fn new(grace_hours: f64) -> Self {
        Self { grace_hours }
    }
}

// ==========================================
// SlaState - SLA合规状态
// ==========================================
// 每次评估现算,绝不跨时间缓存。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlaState {
    /// 已消耗营业小时
    pub consumed_hours: f64,
    /// 剩余营业小时 (带符号,超期为负)
    pub remaining_hours: f64,
    /// 宽限期消耗百分比 (可超过100)
    pub percent_consumed: f64,
    /// 是否超期 (consumed > grace, 严格大于)
    pub overdue: bool,
    /// 风险分档
    pub bucket: SlaBucket,
}
