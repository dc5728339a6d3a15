// ==========================================
// 工单SLA报表系统 - SLA状态分类器
// ==========================================
// 依据: SLA_Engine_Design.md - 5. SLA Classifier
// 红线: 分类器是按需重算的纯函数,不是持久化状态机
// ==========================================
// 职责: 已消耗营业小时 + 宽限期 → 合规百分比/剩余工时/风险分档
// 输入: consumed_hours + grace_hours (grace_hours > 0 由调用方保证)
// 输出: SlaState
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::sla::SlaState;
use crate::domain::types::SlaBucket;
use serde::{Deserialize, Serialize};

// ==========================================
// BucketThresholds - 分档阈值 (策略配置)
// ==========================================
// 阈值来自配置而非常量: ok < at_risk_pct,
// atRisk [at_risk_pct, critical_pct), critical [critical_pct, 100),
// overdue ≥ 100。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketThresholds {
    /// 进入 AT_RISK 档的消耗百分比下限
    pub at_risk_pct: f64,
    /// 进入 CRITICAL 档的消耗百分比下限
    pub critical_pct: f64,
}

impl BucketThresholds {
    /// 构造并校验阈值策略
    ///
    /// 要求 0 < at_risk < critical < 100; 越界的策略属于配置错误,
    /// 在构造期拒绝而不是运行期兜底。
    pub fn new(at_risk_pct: f64, critical_pct: f64) -> DomainResult<Self> {
        let valid = at_risk_pct > 0.0
            && at_risk_pct < critical_pct
            && critical_pct < 100.0;
        if !valid {
            return Err(DomainError::InvalidThresholds {
                at_risk_pct,
                critical_pct,
            });
        }
        Ok(Self {
            at_risk_pct,
            critical_pct,
        })
    }

    /// 部署默认阈值: atRisk 70%, critical 90%
    pub fn deployed_default() -> Self {
        Self {
            at_risk_pct: 70.0,
            critical_pct: 90.0,
        }
    }
}

// ==========================================
// SlaClassifier - SLA状态分类器
// ==========================================
pub struct SlaClassifier {
    thresholds: BucketThresholds,
}

impl SlaClassifier {
    /// 以给定阈值策略创建分类器
    pub fn new(thresholds: BucketThresholds) -> Self {
        Self { thresholds }
    }

    /// 以部署默认阈值创建分类器
    pub fn with_default_thresholds() -> Self {
        Self::new(BucketThresholds::deployed_default())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 对单个工单的消耗情况分类
    ///
    /// # 参数
    /// - `consumed_hours`: 已消耗营业小时 (来自 ElapsedEngine, ≥ 0)
    /// - `grace_hours`: 宽限期营业小时
    ///
    /// # Panics
    /// `grace_hours <= 0` 属于调用方编程错误 (前置条件违约),
    /// 立即失败,不产出带误导性的百分比。
    pub fn classify(&self, consumed_hours: f64, grace_hours: f64) -> SlaState {
        assert!(
            grace_hours > 0.0,
            "宽限期必须为正数营业小时, 实际 grace_hours={}",
            grace_hours
        );

        let percent_consumed = consumed_hours / grace_hours * 100.0;
        let remaining_hours = grace_hours - consumed_hours;
        // 超期标志用严格大于; 恰好用满宽限期时百分比为100,
        // 分档落入 OVERDUE 而标志仍为 false
        let overdue = consumed_hours > grace_hours;

        let bucket = if percent_consumed >= 100.0 {
            SlaBucket::Overdue
        } else if percent_consumed >= self.thresholds.critical_pct {
            SlaBucket::Critical
        } else if percent_consumed >= self.thresholds.at_risk_pct {
            SlaBucket::AtRisk
        } else {
            SlaBucket::Ok
        };

        SlaState {
            consumed_hours,
            remaining_hours,
            percent_consumed,
            overdue,
            bucket,
        }
    }

    /// 当前阈值策略
    pub fn thresholds(&self) -> BucketThresholds {
        self.thresholds
    }
}
