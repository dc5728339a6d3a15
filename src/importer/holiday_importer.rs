// ==========================================
// 工单SLA报表系统 - 节假日CSV导入器
// ==========================================
// 依据: SLA_Engine_Design.md - 7. 外部接口 (节假日来源)
// 支持: CSV (.csv), 表头必含 date 列, description 列可选
// ==========================================
// 职责: 运维维护的节假日清单 → holiday_calendar 表
// 红线: 单行错误不中断整批导入,逐行记入汇总
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::holiday_repo::HolidayRepository;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

/// 日期列的固定格式
const DATE_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// 导入结果汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayImportSummary {
    /// 新写入的节假日数
    pub imported: usize,
    /// 因日期已存在被跳过的行数
    pub duplicates: usize,
    /// 无法解析的行
    pub errors: Vec<HolidayRowError>,
}

/// 单行导入错误 (行号从数据区第1行起算)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRowError {
    pub row: usize,
    pub value: String,
    pub message: String,
}

// ==========================================
// HolidayImporter - 节假日CSV导入器
// ==========================================
pub struct HolidayImporter;

impl HolidayImporter {
    pub fn new() -> Self {
        Self {}
    }

    /// 解析节假日CSV文件
    ///
    /// # 返回
    /// (成功解析的 (日期, 描述) 列表, 逐行错误)
    pub fn parse_file(
        &self,
        file_path: &Path,
    ) -> Result<(Vec<(NaiveDate, Option<String>)>, Vec<HolidayRowError>), ImportError> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 定位 date / description 列
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let date_col = headers
            .iter()
            .position(|h| h == "date")
            .ok_or_else(|| ImportError::MissingColumn("date".to_string()))?;
        let description_col = headers.iter().position(|h| h == "description");

        let mut parsed = Vec::new();
        let mut errors = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            let row_no = row_idx + 1;
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    errors.push(HolidayRowError {
                        row: row_no,
                        value: String::new(),
                        message: format!("行解析失败: {}", e),
                    });
                    continue;
                }
            };

            // 跳过完全空白的行
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            let raw_date = record.get(date_col).unwrap_or("").trim().to_string();
            match NaiveDate::parse_from_str(&raw_date, DATE_FORMAT) {
                Ok(date) => {
                    let description = description_col
                        .and_then(|col| record.get(col))
                        .map(|v| v.trim())
                        .filter(|v| !v.is_empty())
                        .map(|v| v.to_string());
                    parsed.push((date, description));
                }
                Err(_) => {
                    errors.push(HolidayRowError {
                        row: row_no,
                        value: raw_date.clone(),
                        message: format!("日期格式错误 (期望 {}): {}", DATE_FORMAT, raw_date),
                    });
                }
            }
        }

        Ok((parsed, errors))
    }

    /// 导入CSV到节假日表
    ///
    /// 逐行写入: 坏行与重复日期只记入汇总,不中断整批。
    pub fn import_file(
        &self,
        file_path: &Path,
        repo: &HolidayRepository,
    ) -> Result<HolidayImportSummary, ImportError> {
        let (parsed, errors) = self.parse_file(file_path)?;

        let mut imported = 0;
        let mut duplicates = 0;
        for (date, description) in &parsed {
            if repo.insert(*date, description.as_deref())? {
                imported += 1;
            } else {
                duplicates += 1;
            }
        }

        if !errors.is_empty() {
            warn!(
                error_rows = errors.len(),
                "节假日导入存在无法解析的行,已跳过"
            );
        }
        info!(imported, duplicates, "节假日CSV导入完成");

        Ok(HolidayImportSummary {
            imported,
            duplicates,
            errors,
        })
    }
}
