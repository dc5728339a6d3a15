// ==========================================
// 工单SLA报表系统 - 营业时间窗口
// ==========================================
// 依据: SLA_Engine_Design.md - 2. Business Window
// ==========================================
// 职责: 每周工作日 + 每日营业时段 + 固定UTC偏移的定义与判定
// 红线: 构造后不可变,无隐藏状态; 窗口边界半开 [open, close)
// ==========================================

use crate::domain::calendar::HolidayCalendar;
use crate::domain::error::{DomainError, DomainResult};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// UTC偏移上限 (分钟), 与 chrono::FixedOffset 的约束一致
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60;

// ==========================================
// BusinessWindowSpec - 窗口配置 (外部供给)
// ==========================================
// 部署档案固定为 周一~周五 08:30-17:30 UTC-3,
// 但全部走配置,不在代码里写死。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessWindowSpec {
    /// 工作日列表: "MON".."SUN"
    pub weekdays: Vec<String>,
    /// 每日开门时间, "HH:MM"
    pub daily_open: String,
    /// 每日关门时间, "HH:MM"
    pub daily_close: String,
    /// 固定UTC偏移 (分钟), 例如 UTC-3 为 -180
    pub utc_offset_minutes: i32,
}

impl BusinessWindowSpec {
    /// 部署默认档案: 周一~周五 08:30-17:30, UTC-3
    pub fn deployed_default() -> Self {
        Self {
            weekdays: vec![
                "MON".to_string(),
                "TUE".to_string(),
                "WED".to_string(),
                "THU".to_string(),
                "FRI".to_string(),
            ],
            daily_open: "08:30".to_string(),
            daily_close: "17:30".to_string(),
            utc_offset_minutes: -180,
        }
    }
}

// ==========================================
// BusinessWindow - 营业时间窗口
// ==========================================
#[derive(Debug, Clone)]
pub struct BusinessWindow {
    // 下标 = Weekday::num_days_from_monday()
    working_days: [bool; 7],
    daily_open: NaiveTime,
    daily_close: NaiveTime,
    offset: FixedOffset,
}

impl BusinessWindow {
    /// 构造窗口
    ///
    /// # 参数
    /// - `weekdays`: 工作日集合 (非空)
    /// - `daily_open` / `daily_close`: 每日营业时段, 要求 open < close
    /// - `utc_offset_minutes`: 固定UTC偏移 (分钟)
    ///
    /// # 错误
    /// 违反任一构造期校验返回 DomainError。
    pub fn new(
        weekdays: &[Weekday],
        daily_open: NaiveTime,
        daily_close: NaiveTime,
        utc_offset_minutes: i32,
    ) -> DomainResult<Self> {
        if weekdays.is_empty() {
            return Err(DomainError::EmptyWeekdaySet);
        }
        if daily_open >= daily_close {
            return Err(DomainError::InvalidDailyWindow {
                open: daily_open,
                close: daily_close,
            });
        }
        if utc_offset_minutes.abs() >= MAX_UTC_OFFSET_MINUTES {
            return Err(DomainError::InvalidUtcOffset(utc_offset_minutes));
        }

        let mut working_days = [false; 7];
        for weekday in weekdays {
            working_days[weekday.num_days_from_monday() as usize] = true;
        }

        // 上面已校验偏移范围,east_opt 不会失败
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
            .ok_or(DomainError::InvalidUtcOffset(utc_offset_minutes))?;

        Ok(Self {
            working_days,
            daily_open,
            daily_close,
            offset,
        })
    }

    /// 从外部配置构造窗口
    pub fn from_spec(spec: &BusinessWindowSpec) -> DomainResult<Self> {
        let mut weekdays = Vec::with_capacity(spec.weekdays.len());
        for raw in &spec.weekdays {
            weekdays.push(parse_weekday(raw)?);
        }

        let daily_open = parse_time_of_day(&spec.daily_open)?;
        let daily_close = parse_time_of_day(&spec.daily_close)?;

        Self::new(&weekdays, daily_open, daily_close, spec.utc_offset_minutes)
    }

    // ==========================================
    // 判定方法
    // ==========================================

    /// 是否为配置中的工作日 (不考虑节假日)
    pub fn is_working_weekday(&self, date: NaiveDate) -> bool {
        self.working_days[date.weekday().num_days_from_monday() as usize]
    }

    /// 是否为营业日 = 工作日 且 非节假日
    ///
    /// 对日历的查询恰好一次,长跨度循环依赖这一点保持开销可控。
    pub fn is_business_day(&self, date: NaiveDate, calendar: &HolidayCalendar) -> bool {
        self.is_working_weekday(date) && !calendar.is_holiday(date)
    }

    /// 某时刻的本地钟点是否落在每日营业时段内
    ///
    /// 时段为半开区间 [open, close): 开门时刻算在内,关门时刻不算,
    /// 避免相邻窗口重复计入同一时刻。
    pub fn is_within_daily_window(&self, instant: DateTime<Utc>) -> bool {
        let tod = self.to_local(instant).time();
        self.daily_open <= tod && tod < self.daily_close
    }

    /// 每个营业日的营业小时数 (08:30-17:30 为 9.0)
    pub fn hours_per_day(&self) -> f64 {
        (self.daily_close - self.daily_open).num_milliseconds() as f64 / 3_600_000.0
    }

    // ==========================================
    // 访问器
    // ==========================================

    pub fn daily_open(&self) -> NaiveTime {
        self.daily_open
    }

    pub fn daily_close(&self) -> NaiveTime {
        self.daily_close
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// 将UTC时刻转换为业务时区下的本地时间
    ///
    /// 所有工时运算都在该偏移下进行,保证每日窗口边界对齐。
    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }
}

/// 解析 "MON".."SUN" 格式的工作日
fn parse_weekday(raw: &str) -> DomainResult<Weekday> {
    match raw.trim().to_uppercase().as_str() {
        "MON" => Ok(Weekday::Mon),
        "TUE" => Ok(Weekday::Tue),
        "WED" => Ok(Weekday::Wed),
        "THU" => Ok(Weekday::Thu),
        "FRI" => Ok(Weekday::Fri),
        "SAT" => Ok(Weekday::Sat),
        "SUN" => Ok(Weekday::Sun),
        _ => Err(DomainError::UnknownWeekday(raw.to_string())),
    }
}

/// 解析 "HH:MM" 格式的钟点
fn parse_time_of_day(raw: &str) -> DomainResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| DomainError::InvalidTimeOfDay(raw.to_string()))
}
