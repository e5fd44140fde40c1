//! SQLite implementation of the salary store.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{Row, Sqlite, SqlitePool, migrate::MigrateDatabase};

use crate::error::SalaryResult;
use crate::models::{CostStatus, Period, ShipmentStatus};

use super::{
    AttendanceCount, CostBucketTotal, DriverFilter, DriverRecord, SalaryStore, ShipmentCount,
};

/// SQLite-backed [`SalaryStore`] using a connection pool.
///
/// The pool is opened once at process start and dropped at shutdown; the
/// schema is created on connect if it does not exist.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects to the database at `url`, creating it and its schema if needed.
    pub async fn connect(url: &str) -> SalaryResult<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?;
        }

        let pool = SqlitePool::connect(url).await?;
        Self::setup_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> SalaryResult<()> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS drivers (
                driver_code TEXT PRIMARY KEY,
                name TEXT NOT NULL
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS shipments (
                shipment_no TEXT PRIMARY KEY,
                shipment_date TEXT NOT NULL,
                shipment_status TEXT NOT NULL
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS shipment_costs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                driver_code TEXT NOT NULL REFERENCES drivers (driver_code),
                shipment_no TEXT NOT NULL REFERENCES shipments (shipment_no),
                cost_status TEXT NOT NULL
                    CHECK (cost_status IN ('PENDING', 'CONFIRMED', 'PAID')),
                total_costs REAL NOT NULL
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS driver_attendances (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                driver_code TEXT NOT NULL REFERENCES drivers (driver_code),
                attendance_date TEXT NOT NULL,
                attendance_status INTEGER NOT NULL
            );
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS variable_configs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        ];

        for statement in statements {
            sqlx::query(statement).execute(pool).await?;
        }

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn driver_filter_clause(filter: &DriverFilter) -> String {
        let mut clauses = Vec::new();
        if filter.driver_code.is_some() {
            clauses.push("lower(driver_code) LIKE '%' || lower(?) || '%'");
        }
        if filter.name.is_some() {
            clauses.push("lower(name) LIKE '%' || lower(?) || '%'");
        }
        if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        }
    }
}

#[async_trait]
impl SalaryStore for SqliteStore {
    async fn config_value(&self, key: &str) -> SalaryResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM variable_configs WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    async fn cost_totals(
        &self,
        period: &Period,
        include_cancelled: bool,
    ) -> SalaryResult<Vec<CostBucketTotal>> {
        let mut sql = String::from(
            "SELECT sc.driver_code AS driver_code, sc.cost_status AS cost_status, \
             SUM(sc.total_costs) AS total \
             FROM shipment_costs sc \
             JOIN shipments s ON s.shipment_no = sc.shipment_no \
             WHERE s.shipment_date >= ? AND s.shipment_date < ?",
        );
        if !include_cancelled {
            sql.push_str(" AND s.shipment_status <> ?");
        }
        sql.push_str(" GROUP BY sc.driver_code, sc.cost_status");

        let mut query = sqlx::query(&sql).bind(period.start()).bind(period.end());
        if !include_cancelled {
            query = query.bind(ShipmentStatus::Cancelled.as_str());
        }
        let rows = query.fetch_all(&self.pool).await?;

        // The CHECK constraint keeps cost_status within the known set.
        Ok(rows
            .iter()
            .filter_map(|row| {
                let status: String = row.get("cost_status");
                let total: f64 = row.get("total");
                CostStatus::parse(&status).map(|cost_status| CostBucketTotal {
                    driver_code: row.get("driver_code"),
                    cost_status,
                    total: Decimal::from_f64_retain(total).unwrap_or_default(),
                })
            })
            .collect())
    }

    async fn attendance_counts(&self, period: &Period) -> SalaryResult<Vec<AttendanceCount>> {
        let rows = sqlx::query(
            "SELECT driver_code, COUNT(*) AS present_days \
             FROM driver_attendances \
             WHERE attendance_date >= ? AND attendance_date < ? AND attendance_status = 1 \
             GROUP BY driver_code",
        )
        .bind(period.start())
        .bind(period.end())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| AttendanceCount {
                driver_code: row.get("driver_code"),
                present_days: row.get("present_days"),
            })
            .collect())
    }

    async fn drivers_page(
        &self,
        filter: &DriverFilter,
        offset: i64,
        limit: i64,
    ) -> SalaryResult<Vec<DriverRecord>> {
        let sql = format!(
            "SELECT driver_code, name FROM drivers{} ORDER BY driver_code LIMIT ? OFFSET ?",
            Self::driver_filter_clause(filter)
        );

        let mut query = sqlx::query(&sql);
        if let Some(code) = &filter.driver_code {
            query = query.bind(code);
        }
        if let Some(name) = &filter.name {
            query = query.bind(name);
        }
        let rows = query
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| DriverRecord {
                driver_code: row.get("driver_code"),
                name: row.get("name"),
            })
            .collect())
    }

    async fn count_drivers(&self, filter: &DriverFilter) -> SalaryResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) AS total FROM drivers{}",
            Self::driver_filter_clause(filter)
        );

        let mut query = sqlx::query(&sql);
        if let Some(code) = &filter.driver_code {
            query = query.bind(code);
        }
        if let Some(name) = &filter.name {
            query = query.bind(name);
        }
        let row = query.fetch_one(&self.pool).await?;

        Ok(row.get("total"))
    }

    async fn distinct_shipment_counts(
        &self,
        driver_codes: &[String],
        period: &Period,
        include_cancelled: bool,
    ) -> SalaryResult<Vec<ShipmentCount>> {
        if driver_codes.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; driver_codes.len()].join(", ");
        let mut sql = format!(
            "SELECT sc.driver_code AS driver_code, \
             COUNT(DISTINCT sc.shipment_no) AS distinct_shipments \
             FROM shipment_costs sc \
             JOIN shipments s ON s.shipment_no = sc.shipment_no \
             WHERE sc.driver_code IN ({placeholders}) \
             AND s.shipment_date >= ? AND s.shipment_date < ?"
        );
        if !include_cancelled {
            sql.push_str(" AND s.shipment_status <> ?");
        }
        sql.push_str(" GROUP BY sc.driver_code");

        let mut query = sqlx::query(&sql);
        for code in driver_codes {
            query = query.bind(code);
        }
        query = query.bind(period.start()).bind(period.end());
        if !include_cancelled {
            query = query.bind(ShipmentStatus::Cancelled.as_str());
        }
        let rows = query.fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| ShipmentCount {
                driver_code: row.get("driver_code"),
                distinct_shipments: row.get("distinct_shipments"),
            })
            .collect())
    }
}
