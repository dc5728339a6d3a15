// ==========================================
// 工单SLA报表系统 - 营业工时计算引擎
// ==========================================
// 依据: SLA_Engine_Design.md - 4. Elapsed Engine
// 红线: 所有运算在业务时区偏移下进行,不在UTC下进行
// ==========================================
// 职责: 计算两个时刻之间的营业小时数
// 输入: 起止时刻 + 节假日日历 + 营业时间窗口
// 输出: 营业小时数 (f64, 不做展示舍入)
// ==========================================

use crate::domain::calendar::HolidayCalendar;
use crate::domain::window::BusinessWindow;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::warn;

// ==========================================
// ElapsedEngine - 营业工时计算引擎
// ==========================================
pub struct ElapsedEngine {
    // 无状态引擎,日历与窗口由调用方按批次构造后传入
}

impl ElapsedEngine {
    /// 创建新的营业工时计算引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算 [start, end) 区间内的营业小时数
    ///
    /// 算法 (任意多日跨度的通解):
    /// 1) end <= start → 0 (倒挂区间按0工时处理,见下)
    /// 2) 同一日历日 → 起止钟点夹取到 [open, close) 后求差
    /// 3) 跨日 → 首日尾段 + 中间整营业日 × hours_per_day + 末日头段
    ///
    /// 倒挂区间 (end < start) 不报错,返回0并打 warn 日志:
    /// 源数据的轻微时间戳偏斜按宽容策略吞掉,但留下告警信号,
    /// 便于上游排查时区处理类缺陷。
    ///
    /// 复杂度 O(跨度天数),每一天恰好查询一次节假日。
    pub fn elapsed(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        calendar: &HolidayCalendar,
        window: &BusinessWindow,
    ) -> f64 {
        // 统一转入业务时区,窗口边界在该偏移下对齐
        let start_local = window.to_local(start);
        let end_local = window.to_local(end);

        if end_local < start_local {
            warn!(
                start = %start,
                end = %end,
                "区间终点早于起点,按0营业小时处理"
            );
            return 0.0;
        }
        if end_local == start_local {
            return 0.0;
        }

        // 同日快捷路径
        if start_local.date() == end_local.date() {
            return clamped_day_hours(
                start_local.date(),
                start_local.time(),
                end_local.time(),
                calendar,
                window,
            );
        }

        // 1) 首日尾段: max(start, open) → close
        let mut total = clamped_day_hours(
            start_local.date(),
            start_local.time(),
            window.daily_close(),
            calendar,
            window,
        );

        // 2) 中间整营业日 (严格开区间)
        let mut day = start_local.date();
        loop {
            day = match day.succ_opt() {
                Some(next) => next,
                None => break, // 日历溢出,实际业务数据到不了这里
            };
            if day >= end_local.date() {
                break;
            }
            if window.is_business_day(day, calendar) {
                total += window.hours_per_day();
            }
        }

        // 3) 末日头段: open → min(end, close)
        total += clamped_day_hours(
            end_local.date(),
            window.daily_open(),
            end_local.time(),
            calendar,
            window,
        );

        total
    }
}

/// 单日内的营业小时贡献
///
/// 起止钟点夹取到 [open, close),非营业日直接为0。
fn clamped_day_hours(
    date: NaiveDate,
    from: NaiveTime,
    to: NaiveTime,
    calendar: &HolidayCalendar,
    window: &BusinessWindow,
) -> f64 {
    if !window.is_business_day(date, calendar) {
        return 0.0;
    }

    let lo = from.max(window.daily_open());
    let hi = to.min(window.daily_close());
    if hi <= lo {
        return 0.0;
    }

    (hi - lo).num_milliseconds() as f64 / 3_600_000.0
}
