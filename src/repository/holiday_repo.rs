// ==========================================
// 工单SLA报表系统 - 节假日表仓储
// ==========================================
// 依据: SLA_Engine_Design.md - 7. 外部接口 (节假日来源)
// ==========================================
// 职责: holiday_calendar 表的读写, 批次开始时产出日历快照
// 红线: 只在构造日历快照时被查询,核心求值期间绝不触库
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::calendar::HolidayCalendar;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};
use tracing::debug;

// ==========================================
// HolidayRepository - 节假日表仓储
// ==========================================
pub struct HolidayRepository {
    conn: Arc<Mutex<Connection>>,
}

impl HolidayRepository {
    /// 打开数据库并确保建表
    ///
    /// # 参数
    /// - `db_path`: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.ensure_schema()?;
        Ok(repo)
    }

    /// 从已有连接创建仓储 (测试用内存库也走这里)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            crate::db::configure_sqlite_connection(&guard)?;
        }

        let repo = Self { conn };
        repo.ensure_schema()?;
        Ok(repo)
    }

    /// 确保 holiday_calendar 表存在
    fn ensure_schema(&self) -> RepositoryResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS holiday_calendar (
                holiday_date TEXT PRIMARY KEY,
                description  TEXT
            );",
        )?;
        Ok(())
    }

    // ==========================================
    // 写入
    // ==========================================

    /// 插入一条节假日
    ///
    /// # 返回
    /// - true: 新插入
    /// - false: 日期已存在 (INSERT OR IGNORE)
    pub fn insert(&self, date: NaiveDate, description: Option<&str>) -> RepositoryResult<bool> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let affected = conn.execute(
            "INSERT OR IGNORE INTO holiday_calendar (holiday_date, description) VALUES (?1, ?2)",
            params![date, description],
        )?;
        Ok(affected > 0)
    }

    /// 清空节假日表
    ///
    /// # 返回
    /// 删除的行数
    pub fn clear(&self) -> RepositoryResult<usize> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let affected = conn.execute("DELETE FROM holiday_calendar", [])?;
        Ok(affected)
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 读取全部节假日 (升序)
    pub fn load_all(&self) -> RepositoryResult<Vec<NaiveDate>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let mut stmt =
            conn.prepare("SELECT holiday_date FROM holiday_calendar ORDER BY holiday_date")?;
        let rows = stmt.query_map([], |row| row.get::<_, NaiveDate>(0))?;

        let mut dates = Vec::new();
        for row in rows {
            dates.push(row?);
        }
        Ok(dates)
    }

    /// 读取某条节假日的描述
    pub fn find_description(&self, date: NaiveDate) -> RepositoryResult<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let description = conn
            .query_row(
                "SELECT description FROM holiday_calendar WHERE holiday_date = ?1",
                params![date],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?;
        Ok(description.flatten())
    }

    /// 节假日总数
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let count =
            conn.query_row("SELECT COUNT(*) FROM holiday_calendar", [], |row| row.get(0))?;
        Ok(count)
    }

    /// 产出只读日历快照 (每批次调用一次)
    pub fn load_calendar(&self) -> RepositoryResult<HolidayCalendar> {
        let dates = self.load_all()?;
        debug!(count = dates.len(), "已从 holiday_calendar 表构造日历快照");
        Ok(HolidayCalendar::new(dates))
    }
}
