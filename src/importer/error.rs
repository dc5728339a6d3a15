// ==========================================
// 工单SLA报表系统 - 导入层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入层错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),

    #[error("缺少必需列: {0}")]
    MissingColumn(String),

    #[error("CSV 解析失败: {0}")]
    CsvError(#[from] csv::Error),

    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Repository(#[from] crate::repository::error::RepositoryError),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
