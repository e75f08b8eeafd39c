use crate::models::status::DailyStatus;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Registro diário com o veículo resolvido via LEFT JOIN.
///
/// As colunas do veículo são opcionais: um registro pode apontar para um
/// veículo já excluído (linha órfã) e o agregador decide ignorá-lo.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StatusWithVehicleRow {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub status: String,
    pub observations: Option<String>,
    pub driver: Option<String>,
    pub vehicle_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub vehicle_driver: Option<String>,
}

pub struct StatusRepository {
    pool: PgPool,
}

impl StatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert pela chave natural (vehicle_id, date): no máximo um registro
    /// por veículo por dia.
    pub async fn upsert(
        &self,
        created_by: Uuid,
        vehicle_id: Uuid,
        date: NaiveDate,
        status: &str,
        observations: Option<String>,
        driver: Option<String>,
    ) -> Result<DailyStatus, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, DailyStatus>(
            r#"
            INSERT INTO vehicle_status
                (id, vehicle_id, date, status, observations, driver, created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            ON CONFLICT (vehicle_id, date) DO UPDATE
                SET status = EXCLUDED.status,
                    observations = EXCLUDED.observations,
                    driver = EXCLUDED.driver,
                    updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(date)
        .bind(status)
        .bind(observations)
        .bind(driver)
        .bind(created_by)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<DailyStatus>, AppError> {
        let rows = sqlx::query_as::<_, DailyStatus>(
            "SELECT * FROM vehicle_status WHERE date = $1",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_by_date_with_vehicle(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<StatusWithVehicleRow>, AppError> {
        let rows = sqlx::query_as::<_, StatusWithVehicleRow>(
            r#"
            SELECT s.id, s.vehicle_id, s.date, s.status, s.observations, s.driver,
                   v.name AS vehicle_name,
                   v.vehicle_type AS vehicle_type,
                   v.driver AS vehicle_driver
            FROM vehicle_status s
            LEFT JOIN vehicles v ON v.id = s.vehicle_id
            WHERE s.date = $1
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Todos os registros de um intervalo de datas (inclusive), com o
    /// veículo resolvido, em ordem crescente de data.
    pub async fn find_by_range_with_vehicle(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<StatusWithVehicleRow>, AppError> {
        let rows = sqlx::query_as::<_, StatusWithVehicleRow>(
            r#"
            SELECT s.id, s.vehicle_id, s.date, s.status, s.observations, s.driver,
                   v.name AS vehicle_name,
                   v.vehicle_type AS vehicle_type,
                   v.driver AS vehicle_driver
            FROM vehicle_status s
            LEFT JOIN vehicles v ON v.id = s.vehicle_id
            WHERE s.date >= $1 AND s.date <= $2
            ORDER BY s.date
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn delete_by_date(&self, date: NaiveDate) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehicle_status WHERE date = $1")
            .bind(date)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Insere cópias de registros sob outra data, preservando status,
    /// observações e motorista.
    pub async fn insert_copies(
        &self,
        created_by: Uuid,
        target_date: NaiveDate,
        rows: &[DailyStatus],
    ) -> Result<u64, AppError> {
        let now = Utc::now();
        let mut inserted = 0u64;

        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO vehicle_status
                    (id, vehicle_id, date, status, observations, driver, created_by, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(row.vehicle_id)
            .bind(target_date)
            .bind(&row.status)
            .bind(&row.observations)
            .bind(&row.driver)
            .bind(created_by)
            .bind(now)
            .execute(&self.pool)
            .await?;

            inserted += 1;
        }

        Ok(inserted)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicle_status WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Registro diário não encontrado".to_string(),
            ));
        }

        Ok(())
    }
}
