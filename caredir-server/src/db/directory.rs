//! Directory store - the four fixed queries behind the gateway
//!
//! Handlers never see the pool. They talk to a [`DirectoryStore`] trait
//! object, so tests substitute an in-memory fake and the MySQL
//! implementation stays a thin wrapper over `sqlx::query_as`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, MySqlPool};

/// Patient record from the `patients` table
#[derive(Debug, Clone, FromRow)]
pub struct Patient {
    pub patient_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

impl Patient {
    /// Table cells in column order, dates as ISO `YYYY-MM-DD`.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.patient_id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.date_of_birth.to_string(),
        ]
    }
}

/// Provider record from the `providers` table
#[derive(Debug, Clone, FromRow)]
pub struct Provider {
    pub first_name: String,
    pub last_name: String,
    pub provider_speciality: String,
}

impl Provider {
    /// Table cells in column order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.provider_speciality.clone(),
        ]
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Read-only access to the patients and providers tables.
///
/// Results come back in whatever order the database returns them; no
/// pagination or limit is applied.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn list_patients(&self) -> Result<Vec<Patient>, DbError>;

    async fn patients_by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, DbError>;

    async fn list_providers(&self) -> Result<Vec<Provider>, DbError>;

    async fn providers_by_speciality(&self, speciality: &str) -> Result<Vec<Provider>, DbError>;
}

/// MySQL-backed directory store
pub struct MySqlDirectory {
    pool: MySqlPool,
}

impl MySqlDirectory {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectoryStore for MySqlDirectory {
    async fn list_patients(&self) -> Result<Vec<Patient>, DbError> {
        let rows = sqlx::query_as::<_, Patient>(
            "SELECT patient_id, first_name, last_name, date_of_birth FROM patients",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn patients_by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, DbError> {
        let rows = sqlx::query_as::<_, Patient>(
            "SELECT patient_id, first_name, last_name, date_of_birth FROM patients \
             WHERE first_name = ?",
        )
        .bind(first_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_providers(&self) -> Result<Vec<Provider>, DbError> {
        let rows = sqlx::query_as::<_, Provider>(
            "SELECT first_name, last_name, provider_speciality FROM providers",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn providers_by_speciality(&self, speciality: &str) -> Result<Vec<Provider>, DbError> {
        let rows = sqlx::query_as::<_, Provider>(
            "SELECT first_name, last_name, provider_speciality FROM providers \
             WHERE provider_speciality = ?",
        )
        .bind(speciality)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
