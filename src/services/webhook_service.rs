//! Envio do resumo diário ao webhook externo
//!
//! Dispara o payload JSON para a URL configurada. Fire-and-forget: o corpo
//! da resposta é ignorado, só o sucesso/falha de rede volta ao usuário.

use crate::dto::webhook_dto::DailySummaryPayload;
use crate::utils::errors::AppError;

pub struct WebhookService {
    webhook_url: String,
    client: reqwest::Client,
}

impl WebhookService {
    pub fn new(webhook_url: String, client: reqwest::Client) -> Self {
        Self {
            webhook_url,
            client,
        }
    }

    /// Envia o resumo do dia. Retorna o status HTTP do webhook; qualquer
    /// falha de rede vira erro terminal para esta ação (sem retry).
    pub async fn send_daily_summary(
        &self,
        payload: &DailySummaryPayload,
    ) -> Result<u16, AppError> {
        log::info!("📤 Enviando resumo diário para o webhook: {}", payload.data);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Falha ao enviar webhook: {}", e)))?;

        let status = response.status();
        log::info!("📡 Webhook respondeu com status: {}", status);

        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "Webhook respondeu com status {}",
                status
            )));
        }

        Ok(status.as_u16())
    }
}
