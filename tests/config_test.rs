// ==========================================
// 配置层集成测试
// ==========================================
// 测试目标: 验证配置文件加载/保存/默认回退
// 覆盖范围: JSON往返 / 缺失回退 / 坏配置拒绝
// ==========================================

use chrono::NaiveDate;
use std::path::Path;
use tempfile::TempDir;
use ticket_sla_engine::config::{ConfigError, SlaConfig, SlaConfigManager};

// ==========================================
// 测试用例 1: 保存后重新加载
// ==========================================

#[test]
fn test_save_and_reload_roundtrip() {
    println!("\n=== 测试: 配置保存/加载往返 ===");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sla_config.json");

    let mut config = SlaConfig::deployed_default();
    config.thresholds.at_risk_pct = 60.0;
    config
        .holidays
        .push(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());

    SlaConfigManager::save_to_file(&config, &path).unwrap();
    let reloaded = SlaConfigManager::load_from_file(&path).unwrap();

    assert_eq!(reloaded, config, "往返后配置应完全一致");

    // 重新加载的配置能直接构造评估器
    let evaluator = reloaded.build_evaluator().unwrap();
    assert_eq!(evaluator.calendar().len(), 1);
    assert!((evaluator.thresholds().at_risk_pct - 60.0).abs() < 1e-9);
}

// ==========================================
// 测试用例 2: 缺失文件的回退策略
// ==========================================

#[test]
fn test_missing_file_falls_back_to_default() {
    println!("\n=== 测试: 缺失配置回退默认档案 ===");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nao_existe.json");

    let config = SlaConfigManager::load_or_default(Some(&path)).unwrap();
    assert_eq!(config, SlaConfig::deployed_default());
}

#[test]
fn test_load_from_file_requires_existing_path() {
    let result = SlaConfigManager::load_from_file(Path::new("definitely_missing.json"));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

// ==========================================
// 测试用例 3: 坏配置不静默通过
// ==========================================

#[test]
fn test_malformed_json_rejected() {
    println!("\n=== 测试: 坏JSON显式报错 ===");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sla_config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = SlaConfigManager::load_from_file(&path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_invalid_window_rejected_when_building() {
    println!("\n=== 测试: 开门晚于关门的配置在构造评估器时拒绝 ===");

    let mut config = SlaConfig::deployed_default();
    config.business_window.daily_open = "18:00".to_string();
    config.business_window.daily_close = "09:00".to_string();

    assert!(config.build_evaluator().is_err(), "open >= close 必须拒绝");
}

// ==========================================
// 测试用例 4: 部署默认档案
// ==========================================

#[test]
fn test_deployed_default_profile() {
    println!("\n=== 测试: 部署默认档案 Mon-Fri 08:30-17:30 UTC-3 ===");

    let config = SlaConfig::deployed_default();

    assert_eq!(config.business_window.weekdays.len(), 5);
    assert_eq!(config.business_window.daily_open, "08:30");
    assert_eq!(config.business_window.daily_close, "17:30");
    assert_eq!(config.business_window.utc_offset_minutes, -180);

    let evaluator = config.build_evaluator().unwrap();
    assert!((evaluator.window().hours_per_day() - 9.0).abs() < 1e-9);
    assert_eq!(evaluator.window().utc_offset_minutes(), -180);
}
