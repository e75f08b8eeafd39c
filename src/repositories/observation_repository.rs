use crate::models::observation::DailyObservation;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ObservationRepository {
    pool: PgPool,
}

impl ObservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert por data: no máximo uma observação por dia.
    pub async fn upsert_by_date(
        &self,
        created_by: Uuid,
        date: NaiveDate,
        content: String,
    ) -> Result<DailyObservation, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, DailyObservation>(
            r#"
            INSERT INTO daily_observations (id, date, content, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (date) DO UPDATE
                SET content = EXCLUDED.content,
                    updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(content)
        .bind(created_by)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<DailyObservation>, AppError> {
        let row = sqlx::query_as::<_, DailyObservation>(
            "SELECT * FROM daily_observations WHERE date = $1",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn history_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<DailyObservation>, AppError> {
        let rows = sqlx::query_as::<_, DailyObservation>(
            "SELECT * FROM daily_observations WHERE date = $1 ORDER BY created_at DESC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update_content(
        &self,
        id: Uuid,
        content: String,
    ) -> Result<DailyObservation, AppError> {
        let row = sqlx::query_as::<_, DailyObservation>(
            r#"
            UPDATE daily_observations
            SET content = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(content)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Observação não encontrada".to_string()))?;

        Ok(row)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM daily_observations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Observação não encontrada".to_string()));
        }

        Ok(())
    }
}
