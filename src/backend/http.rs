//! reqwest implementation of the backend capabilities.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::backend::{
    AnalyticsReader, AuthGateway, BackendError, BackendResult, ChatbotRelay, ContractReader,
    ContractWriter, DirectoryReader, ImportRelay, ListQuery, ProposalReader, ProposalWriter,
    ScheduleReader, ScheduleWriter,
};
use crate::domain::analytics::{
    ConsultantHours, ConsultantProposals, DashboardSummary, MonthlyRevenue, StatusCount,
};
use crate::domain::chatbot::{ChatAnswer, ChatQuestion};
use crate::domain::contract::{Contract, NewContract};
use crate::domain::directory::{Company, Consultant};
use crate::domain::import::{ImportFile, ImportKind, ImportSummary};
use crate::domain::proposal::{NewProposal, Proposal};
use crate::domain::schedule::{NewSchedule, Schedule};
use crate::domain::types::{BearerToken, ContractId, ProposalId, ScheduleId};
use crate::domain::user::{AccessToken, LoginCredentials, UserProfile};

/// FastAPI error body. `detail` is a string for handled errors and a list of
/// field errors for request validation failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(message) => Some(message),
            serde_json::Value::Array(items) => items
                .into_iter()
                .find_map(|item| item.get("msg")?.as_str().map(str::to_string)),
            _ => None,
        }
    }
}

/// Backend client shared by all requests; the bearer token is supplied per
/// call from the caller's session.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// `base_url` is the API root, e.g. `http://localhost:8000/api/`.
    pub fn new(base_url: &str) -> BackendResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> BackendResult<Self> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url =
            Url::parse(&normalized).map_err(|e| BackendError::InvalidUrl(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> BackendResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::InvalidUrl(format!("{path}: {e}")))
    }

    fn get(&self, token: &BearerToken, path: &str) -> BackendResult<RequestBuilder> {
        Ok(self
            .client
            .get(self.endpoint(path)?)
            .bearer_auth(token.as_str()))
    }

    fn post(&self, token: &BearerToken, path: &str) -> BackendResult<RequestBuilder> {
        Ok(self
            .client
            .post(self.endpoint(path)?)
            .bearer_auth(token.as_str()))
    }

    fn delete(&self, token: &BearerToken, path: &str) -> BackendResult<RequestBuilder> {
        Ok(self
            .client
            .delete(self.endpoint(path)?)
            .bearer_auth(token.as_str()))
    }

    fn list(
        &self,
        token: &BearerToken,
        path: &str,
        query: &ListQuery,
        status_param: &str,
    ) -> BackendResult<RequestBuilder> {
        let mut params: Vec<(&str, String)> = vec![("limit", query.limit.to_string())];
        if let Some(status) = &query.status {
            params.push((status_param, status.clone()));
        }
        Ok(self.get(token, path)?.query(&params))
    }

    async fn send(request: RequestBuilder) -> BackendResult<Response> {
        // Callers log the failure with their own context.
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(BackendError::Unauthorized);
        }
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::into_message);
            return Err(BackendError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> BackendResult<T> {
        Self::send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ContractReader for HttpBackend {
    async fn list_contracts(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Contract>> {
        Self::fetch(self.list(token, "contratos/", &query, "status_pagamento")?).await
    }

    async fn contract_alerts(&self, token: &BearerToken) -> BackendResult<Vec<Contract>> {
        Self::fetch(self.get(token, "contratos/alertas")?).await
    }
}

#[async_trait]
impl ContractWriter for HttpBackend {
    async fn create_contract(
        &self,
        token: &BearerToken,
        contract: &NewContract,
    ) -> BackendResult<Contract> {
        Self::fetch(self.post(token, "contratos/")?.json(contract)).await
    }

    async fn delete_contract(&self, token: &BearerToken, id: ContractId) -> BackendResult<()> {
        Self::send(self.delete(token, &format!("contratos/{id}"))?).await?;
        Ok(())
    }
}

#[async_trait]
impl ScheduleReader for HttpBackend {
    async fn list_schedules(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Schedule>> {
        Self::fetch(self.list(token, "cronogramas/", &query, "status")?).await
    }

    async fn schedule_alerts(&self, token: &BearerToken) -> BackendResult<Vec<Schedule>> {
        Self::fetch(self.get(token, "cronogramas/alertas")?).await
    }
}

#[async_trait]
impl ScheduleWriter for HttpBackend {
    async fn create_schedule(
        &self,
        token: &BearerToken,
        schedule: &NewSchedule,
    ) -> BackendResult<Schedule> {
        Self::fetch(self.post(token, "cronogramas/")?.json(schedule)).await
    }

    async fn delete_schedule(&self, token: &BearerToken, id: ScheduleId) -> BackendResult<()> {
        Self::send(self.delete(token, &format!("cronogramas/{id}"))?).await?;
        Ok(())
    }
}

#[async_trait]
impl ProposalReader for HttpBackend {
    async fn list_proposals(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Proposal>> {
        Self::fetch(self.list(token, "propostas/", &query, "status_filter")?).await
    }
}

#[async_trait]
impl ProposalWriter for HttpBackend {
    async fn create_proposal(
        &self,
        token: &BearerToken,
        proposal: &NewProposal,
    ) -> BackendResult<Proposal> {
        Self::fetch(self.post(token, "propostas/")?.json(proposal)).await
    }

    async fn delete_proposal(&self, token: &BearerToken, id: ProposalId) -> BackendResult<()> {
        Self::send(self.delete(token, &format!("propostas/{id}"))?).await?;
        Ok(())
    }
}

#[async_trait]
impl DirectoryReader for HttpBackend {
    async fn list_companies(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Company>> {
        Self::fetch(self.list(token, "empresas/", &query, "status")?).await
    }

    async fn list_consultants(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Consultant>> {
        Self::fetch(self.list(token, "consultores/", &query, "status")?).await
    }
}

#[async_trait]
impl AnalyticsReader for HttpBackend {
    async fn dashboard_summary(&self, token: &BearerToken) -> BackendResult<DashboardSummary> {
        Self::fetch(self.get(token, "bi/dashboard")?).await
    }

    async fn proposals_by_status(&self, token: &BearerToken) -> BackendResult<Vec<StatusCount>> {
        Self::fetch(self.get(token, "bi/propostas-por-status")?).await
    }

    async fn monthly_revenue(&self, token: &BearerToken) -> BackendResult<Vec<MonthlyRevenue>> {
        Self::fetch(self.get(token, "bi/receita-mensal")?).await
    }

    async fn proposals_by_consultant(
        &self,
        token: &BearerToken,
    ) -> BackendResult<Vec<ConsultantProposals>> {
        Self::fetch(self.get(token, "bi/propostas-por-consultor")?).await
    }

    async fn consultant_productivity(
        &self,
        token: &BearerToken,
    ) -> BackendResult<Vec<ConsultantHours>> {
        Self::fetch(self.get(token, "bi/produtividade-consultores")?).await
    }
}

#[async_trait]
impl ChatbotRelay for HttpBackend {
    async fn ask(&self, token: &BearerToken, question: &ChatQuestion) -> BackendResult<ChatAnswer> {
        Self::fetch(self.post(token, "chatbot/perguntar")?.json(question)).await
    }
}

#[async_trait]
impl ImportRelay for HttpBackend {
    async fn import_file(
        &self,
        token: &BearerToken,
        kind: ImportKind,
        file: ImportFile,
    ) -> BackendResult<ImportSummary> {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| BackendError::Transport(e.to_string()))?;
        }
        let form = Form::new().part("file", part);

        Self::fetch(
            self.post(token, &format!("importacao/{}", kind.slug()))?
                .multipart(form),
        )
        .await
    }
}

#[async_trait]
impl AuthGateway for HttpBackend {
    async fn login(&self, credentials: &LoginCredentials) -> BackendResult<AccessToken> {
        let request = self.client.post(self.endpoint("login")?).form(&[
            ("username", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
        ]);
        Self::fetch(request).await
    }

    async fn current_user(&self, token: &BearerToken) -> BackendResult<UserProfile> {
        Self::fetch(self.get(token, "usuarios/me")?).await
    }
}
