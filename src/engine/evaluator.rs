// ==========================================
// 工单SLA报表系统 - SLA综合评估器
// ==========================================
// 依据: SLA_Engine_Design.md - 6. 数据流
// ==========================================
// 职责: 组合 日历+窗口+工时引擎+分类器, 对外提供单票/批量评估
// 输入: 每工单的 {创建时刻, 关闭时刻或当前时刻, 宽限期}
// 输出: SlaState 列表; 聚合/格式化/分页由调用方负责
// 红线: "当前时刻"永远由调用方显式传入,核心内部绝不取钟
// ==========================================

use crate::domain::calendar::HolidayCalendar;
use crate::domain::sla::{SlaState, SlaTarget, TimeInterval};
use crate::domain::window::BusinessWindow;
use crate::engine::classifier::{BucketThresholds, SlaClassifier};
use crate::engine::elapsed::ElapsedEngine;
use tracing::instrument;

// ==========================================
// SlaEvaluator - SLA综合评估器
// ==========================================
// 每个批次构造一次,随后只读共享: 所有方法取 &self,
// 可跨线程并行评估而无需任何同步。
pub struct SlaEvaluator {
    window: BusinessWindow,
    calendar: HolidayCalendar,
    elapsed_engine: ElapsedEngine,
    classifier: SlaClassifier,
}

impl SlaEvaluator {
    /// 创建评估器
    ///
    /// # 参数
    /// - `window`: 营业时间窗口 (构造期已校验)
    /// - `calendar`: 节假日日历快照
    /// - `thresholds`: 分档阈值策略
    pub fn new(
        window: BusinessWindow,
        calendar: HolidayCalendar,
        thresholds: BucketThresholds,
    ) -> Self {
        Self {
            window,
            calendar,
            elapsed_engine: ElapsedEngine::new(),
            classifier: SlaClassifier::new(thresholds),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算单个区间消耗的营业小时
    pub fn elapsed_hours(&self, interval: TimeInterval) -> f64 {
        self.elapsed_engine
            .elapsed(interval.start, interval.end, &self.calendar, &self.window)
    }

    /// 评估单个工单的SLA状态
    ///
    /// 未关闭工单由调用方把"当前时刻"作为 interval.end 传入;
    /// 同样的输入永远得到同样的输出。
    pub fn evaluate(&self, interval: TimeInterval, target: SlaTarget) -> SlaState {
        let consumed = self.elapsed_hours(interval);
        self.classifier.classify(consumed, target.grace_hours)
    }

    /// 批量评估 (推荐给报表调用方使用)
    ///
    /// 逐票独立求值,无票间顺序依赖; 调用方可自行并行切分。
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub fn evaluate_batch(&self, inputs: &[(TimeInterval, SlaTarget)]) -> Vec<SlaState> {
        inputs
            .iter()
            .map(|(interval, target)| self.evaluate(*interval, *target))
            .collect()
    }

    // ==========================================
    // 访问器
    // ==========================================

    pub fn window(&self) -> &BusinessWindow {
        &self.window
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn thresholds(&self) -> BucketThresholds {
        self.classifier.thresholds()
    }
}
