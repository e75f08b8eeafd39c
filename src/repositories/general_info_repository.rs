use crate::models::general_info::GeneralInfo;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct GeneralInfoRepository {
    pool: PgPool,
}

impl GeneralInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert por (date, created_by): um snapshot por dia por usuário.
    pub async fn upsert(
        &self,
        created_by: Uuid,
        date: NaiveDate,
        extravasamento: i32,
        servico_turma_02: i32,
        servico_turma_05: i32,
        oge: i32,
    ) -> Result<GeneralInfo, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, GeneralInfo>(
            r#"
            INSERT INTO general_info
                (id, date, extravasamento, servico_turma_02, servico_turma_05, oge,
                 created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            ON CONFLICT (date, created_by) DO UPDATE
                SET extravasamento = EXCLUDED.extravasamento,
                    servico_turma_02 = EXCLUDED.servico_turma_02,
                    servico_turma_05 = EXCLUDED.servico_turma_05,
                    oge = EXCLUDED.oge,
                    updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(extravasamento)
        .bind(servico_turma_02)
        .bind(servico_turma_05)
        .bind(oge)
        .bind(created_by)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Snapshot mais recente da data, de qualquer usuário.
    pub async fn latest_for_date(&self, date: NaiveDate) -> Result<Option<GeneralInfo>, AppError> {
        let row = sqlx::query_as::<_, GeneralInfo>(
            "SELECT * FROM general_info WHERE date = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
