// ==========================================
// 工单SLA报表系统 - 领域模型层
// ==========================================
// 依据: SLA_Engine_Design.md - 1~3. 数据模型与日历/窗口
// ==========================================
// 职责: 定义日历、窗口、SLA值对象与领域类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod calendar;
pub mod error;
pub mod sla;
pub mod types;
pub mod window;

// 重导出核心类型
pub use calendar::HolidayCalendar;
pub use error::{DomainError, DomainResult};
pub use sla::{SlaState, SlaTarget, TimeInterval};
pub use types::SlaBucket;
pub use window::{BusinessWindow, BusinessWindowSpec};
