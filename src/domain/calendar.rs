// ==========================================
// 工单SLA报表系统 - 节假日日历
// ==========================================
// 依据: SLA_Engine_Design.md - 1. Holiday Calendar
// ==========================================
// 职责: 不可变的节假日集合,按业务时区归一化后的"日期"粒度
// 输入: 外部提供的日期列表 (配置文件或 holiday_calendar 表)
// 红线: 归一化(去重/排序)只发生在构造期,查询期零分配
// ==========================================

use chrono::NaiveDate;
use tracing::debug;

// ==========================================
// HolidayCalendar - 节假日日历
// ==========================================
// 每个批次构造一次,只读共享给所有计算调用
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    // 已排序去重,查询用二分
    dates: Vec<NaiveDate>,
}

impl HolidayCalendar {
    /// 从外部日期列表构造日历
    ///
    /// 输入允许乱序/重复,构造时统一归一化。
    pub fn new(mut dates: Vec<NaiveDate>) -> Self {
        let raw_count = dates.len();
        dates.sort_unstable();
        dates.dedup();

        if dates.len() != raw_count {
            debug!(
                raw_count,
                unique_count = dates.len(),
                "节假日列表包含重复日期,已在构造期去重"
            );
        }

        Self { dates }
    }

    /// 空日历 (无节假日)
    pub fn empty() -> Self {
        Self { dates: Vec::new() }
    }

    /// 判定某日期是否为节假日
    ///
    /// date 必须已经是业务时区下的日历日期。
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// 节假日数量
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// 是否为空日历
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// 归一化后的日期切片 (升序)
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_construction_dedups_and_sorts() {
        // 乱序 + 重复输入
        let calendar = HolidayCalendar::new(vec![
            d(2025, 12, 25),
            d(2025, 1, 1),
            d(2025, 12, 25),
            d(2025, 4, 21),
        ]);

        assert_eq!(calendar.len(), 3, "重复日期应在构造期去重");
        assert_eq!(
            calendar.dates(),
            &[d(2025, 1, 1), d(2025, 4, 21), d(2025, 12, 25)],
            "日期应升序排列"
        );
    }

    #[test]
    fn test_is_holiday_lookup() {
        let calendar = HolidayCalendar::new(vec![d(2025, 1, 1), d(2025, 5, 1)]);

        assert!(calendar.is_holiday(d(2025, 1, 1)));
        assert!(calendar.is_holiday(d(2025, 5, 1)));
        assert!(!calendar.is_holiday(d(2025, 5, 2)));
    }

    #[test]
    fn test_empty_calendar() {
        let calendar = HolidayCalendar::empty();
        assert!(calendar.is_empty());
        assert!(!calendar.is_holiday(d(2025, 1, 1)));
    }

    #[test]
    fn test_from_iterator() {
        let calendar: HolidayCalendar =
            [d(2025, 6, 19), d(2025, 6, 19)].into_iter().collect();
        assert_eq!(calendar.len(), 1);
    }
}
