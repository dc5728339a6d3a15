// ==========================================
// 工单SLA报表系统 - 展示辅助
// ==========================================
// 职责: 对核心输出的裸浮点做展示用舍入/格式化
// 红线: 只在核心之外使用; 计算路径上绝不提前舍入
// ==========================================

/// 按小数位数舍入 (四舍五入)
pub fn round_hours(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// 营业小时 → "9h30min" 样式
///
/// 分钟部分四舍五入; 负值 (已超期的剩余工时) 带前导负号。
pub fn format_hours_minutes(value: f64) -> String {
    let negative = value < 0.0;
    let total_minutes = (value.abs() * 60.0).round() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let sign = if negative { "-" } else { "" };
    if minutes == 0 {
        format!("{}{}h", sign, hours)
    } else {
        format!("{}{}h{:02}min", sign, hours, minutes)
    }
}

/// 消耗百分比 → "85.0%" 样式 (一位小数)
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
