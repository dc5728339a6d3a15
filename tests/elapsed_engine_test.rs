// ==========================================
// ElapsedEngine 引擎集成测试
// ==========================================
// 测试目标: 验证营业工时计算的基准场景与不变量
// 覆盖范围: 同日/跨日/跨周末/节假日/长跨度
// ==========================================

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use ticket_sla_engine::domain::{BusinessWindow, BusinessWindowSpec, HolidayCalendar};
use ticket_sla_engine::engine::ElapsedEngine;

// ==========================================
// 测试辅助函数
// ==========================================

/// 部署档案窗口 (周一~周五 08:30-17:30 UTC-3)
fn deployed_window() -> BusinessWindow {
    BusinessWindow::from_spec(&BusinessWindowSpec::deployed_default()).unwrap()
}

/// 业务时区本地时间 → UTC时刻
fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    FixedOffset::east_opt(-3 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assert_hours(actual: f64, expected: f64, msg: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{}: 期望 {}, 实际 {}",
        msg,
        expected,
        actual
    );
}

// ==========================================
// 测试用例 1: 单个整营业日
// ==========================================

#[test]
fn test_full_business_day() {
    println!("\n=== 测试: 整营业日 08:30→17:30 ===");

    let engine = ElapsedEngine::new();
    let hours = engine.elapsed(
        local(2025, 6, 2, 8, 30),
        local(2025, 6, 2, 17, 30),
        &HolidayCalendar::empty(),
        &deployed_window(),
    );

    assert_hours(hours, 9.0, "整营业日");
}

// ==========================================
// 测试用例 2: 隔夜跨度
// ==========================================

#[test]
fn test_overnight_span() {
    println!("\n=== 测试: 周一16:00 → 周二09:00 ===");

    let engine = ElapsedEngine::new();
    let hours = engine.elapsed(
        local(2025, 6, 2, 16, 0),
        local(2025, 6, 3, 9, 0),
        &HolidayCalendar::empty(),
        &deployed_window(),
    );

    // 首日尾段 1.5 + 次日头段 0.5
    assert_hours(hours, 2.0, "隔夜跨度");
}

// ==========================================
// 测试用例 3: 跨周末
// ==========================================

#[test]
fn test_weekend_span() {
    println!("\n=== 测试: 周五10:00 → 下周一10:00 ===");

    let engine = ElapsedEngine::new();
    let hours = engine.elapsed(
        local(2025, 6, 6, 10, 0),
        local(2025, 6, 9, 10, 0),
        &HolidayCalendar::empty(),
        &deployed_window(),
    );

    // 周五 7.5 + 周末 0 + 周一 1.5
    assert_hours(hours, 9.0, "跨周末");
}

// ==========================================
// 测试用例 4: 节假日剔除
// ==========================================

#[test]
fn test_holiday_monday() {
    println!("\n=== 测试: 节假日周一整日剔除 ===");

    let engine = ElapsedEngine::new();
    let calendar = HolidayCalendar::new(vec![date(2025, 6, 2)]);
    let hours = engine.elapsed(
        local(2025, 6, 2, 8, 30),
        local(2025, 6, 3, 8, 30),
        &calendar,
        &deployed_window(),
    );

    // 周一为节假日; 周二开门到开门为零长度
    assert_hours(hours, 0.0, "节假日周一");
}

#[test]
fn test_holiday_between_working_days() {
    println!("\n=== 测试: 工作日之间夹节假日 ===");

    let engine = ElapsedEngine::new();
    let calendar = HolidayCalendar::new(vec![date(2025, 6, 4)]);
    let hours = engine.elapsed(
        local(2025, 6, 3, 14, 0),
        local(2025, 6, 5, 14, 0),
        &calendar,
        &deployed_window(),
    );

    // 周二 3.5 + 周三(节假日) 0 + 周四 5.5
    assert_hours(hours, 9.0, "被夹节假日");
}

// ==========================================
// 测试用例 5: 倒挂与零长度区间
// ==========================================

#[test]
fn test_inverted_and_empty_intervals() {
    println!("\n=== 测试: 倒挂/零长度区间按0处理 ===");

    let engine = ElapsedEngine::new();
    let window = deployed_window();
    let calendar = HolidayCalendar::empty();

    let t0 = local(2025, 6, 2, 10, 0);
    let t1 = local(2025, 6, 2, 12, 0);

    assert_hours(engine.elapsed(t1, t0, &calendar, &window), 0.0, "倒挂区间");
    assert_hours(engine.elapsed(t0, t0, &calendar, &window), 0.0, "零长度区间");
}

// ==========================================
// 测试用例 6: 窗口边界时刻
// ==========================================

#[test]
fn test_window_boundary_instants() {
    println!("\n=== 测试: 开门/关门边界时刻 ===");

    let engine = ElapsedEngine::new();
    let window = deployed_window();
    let calendar = HolidayCalendar::empty();

    // 起点恰在开门: 从零偏移开始计满
    assert_hours(
        engine.elapsed(
            local(2025, 6, 2, 8, 30),
            local(2025, 6, 2, 12, 30),
            &calendar,
            &window,
        ),
        4.0,
        "开门时刻起点",
    );

    // 终点恰在关门: 整段计入
    assert_hours(
        engine.elapsed(
            local(2025, 6, 2, 13, 30),
            local(2025, 6, 2, 17, 30),
            &calendar,
            &window,
        ),
        4.0,
        "关门时刻终点",
    );

    // 起点恰在关门: 当日贡献0
    assert_hours(
        engine.elapsed(
            local(2025, 6, 2, 17, 30),
            local(2025, 6, 3, 8, 30),
            &calendar,
            &window,
        ),
        0.0,
        "关门时刻起点到次日开门",
    );
}

// ==========================================
// 测试用例 7: 不变量 (可加性/单调性/上界)
// ==========================================

#[test]
fn test_additivity_invariant() {
    println!("\n=== 测试: 可加性 elapsed(a,c)=elapsed(a,b)+elapsed(b,c) ===");

    let engine = ElapsedEngine::new();
    let window = deployed_window();
    let calendar = HolidayCalendar::new(vec![date(2025, 6, 4)]);

    let a = local(2025, 6, 2, 9, 17);
    let c = local(2025, 6, 9, 15, 43);

    // 多个切分点逐一验证
    for b in [
        local(2025, 6, 2, 17, 30),
        local(2025, 6, 4, 12, 0),
        local(2025, 6, 7, 3, 0),
        local(2025, 6, 9, 8, 30),
    ] {
        let whole = engine.elapsed(a, c, &calendar, &window);
        let split =
            engine.elapsed(a, b, &calendar, &window) + engine.elapsed(b, c, &calendar, &window);
        assert_hours(whole, split, "可加性");
    }
}

#[test]
fn test_monotonicity_invariant() {
    println!("\n=== 测试: 终点推进时结果单调不减 ===");

    let engine = ElapsedEngine::new();
    let window = deployed_window();
    let calendar = HolidayCalendar::new(vec![date(2025, 6, 5)]);
    let start = local(2025, 6, 2, 7, 45);

    let mut prev = 0.0;
    for step in 0..(4 * 24 * 7) {
        let end = start + chrono::Duration::minutes(15 * step);
        let hours = engine.elapsed(start, end, &calendar, &window);
        assert!(
            hours + 1e-9 >= prev,
            "终点 +{}×15min 处结果回退: {} -> {}",
            step,
            prev,
            hours
        );
        prev = hours;
    }
}

#[test]
fn test_long_span_stays_bounded() {
    println!("\n=== 测试: 年级别长跨度 ===");

    let engine = ElapsedEngine::new();
    let window = deployed_window();

    // 2025全年261个工作日,无节假日
    let hours = engine.elapsed(
        local(2025, 1, 1, 0, 0),
        local(2025, 12, 31, 23, 59),
        &HolidayCalendar::empty(),
        &window,
    );
    assert_hours(hours, 2349.0, "2025全年 261×9h");

    // 同跨度加一个周三节假日 → 恰好少9小时
    let with_holiday = engine.elapsed(
        local(2025, 1, 1, 0, 0),
        local(2025, 12, 31, 23, 59),
        &HolidayCalendar::new(vec![date(2025, 6, 4)]),
        &window,
    );
    assert_hours(with_holiday, 2340.0, "261个工作日剔除1个");
}
