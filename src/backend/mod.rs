//! Capabilities of the REST backend, split per resource into readers and
//! writers. Services are generic over these traits so they can run against
//! [`http::HttpBackend`] in production and mockall doubles in tests.

use async_trait::async_trait;
use thiserror::Error;

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

pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Page size requested for the entity lists.
pub const LIST_LIMIT: u32 = 100;
/// Page size requested for the select options of the create forms.
pub const OPTION_LIMIT: u32 = 1000;

#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP 401; the stored credential is no longer accepted.
    #[error("backend rejected the credential")]
    Unauthorized,

    #[error("backend answered {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("backend unreachable: {0}")]
    Transport(String),

    #[error("unexpected backend payload: {0}")]
    Decode(String),

    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    /// Server-provided `detail` message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BackendError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Query string of the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
    pub status: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(LIST_LIMIT)
    }
}

impl ListQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            status: None,
        }
    }

    /// Blank values leave the query unfiltered.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        let status = status.into();
        let status = status.trim();
        self.status = (!status.is_empty()).then(|| status.to_string());
        self
    }
}

#[async_trait]
pub trait ContractReader: Send + Sync {
    async fn list_contracts(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Contract>>;
    /// Contracts due within a week or already overdue.
    async fn contract_alerts(&self, token: &BearerToken) -> BackendResult<Vec<Contract>>;
}

#[async_trait]
pub trait ContractWriter: Send + Sync {
    async fn create_contract(
        &self,
        token: &BearerToken,
        contract: &NewContract,
    ) -> BackendResult<Contract>;
    async fn delete_contract(&self, token: &BearerToken, id: ContractId) -> BackendResult<()>;
}

#[async_trait]
pub trait ScheduleReader: Send + Sync {
    async fn list_schedules(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Schedule>>;
    /// Schedules ending within a week or already late.
    async fn schedule_alerts(&self, token: &BearerToken) -> BackendResult<Vec<Schedule>>;
}

#[async_trait]
pub trait ScheduleWriter: Send + Sync {
    async fn create_schedule(
        &self,
        token: &BearerToken,
        schedule: &NewSchedule,
    ) -> BackendResult<Schedule>;
    async fn delete_schedule(&self, token: &BearerToken, id: ScheduleId) -> BackendResult<()>;
}

#[async_trait]
pub trait ProposalReader: Send + Sync {
    async fn list_proposals(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Proposal>>;
}

#[async_trait]
pub trait ProposalWriter: Send + Sync {
    async fn create_proposal(
        &self,
        token: &BearerToken,
        proposal: &NewProposal,
    ) -> BackendResult<Proposal>;
    async fn delete_proposal(&self, token: &BearerToken, id: ProposalId) -> BackendResult<()>;
}

#[async_trait]
pub trait DirectoryReader: Send + Sync {
    async fn list_companies(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Company>>;
    async fn list_consultants(
        &self,
        token: &BearerToken,
        query: ListQuery,
    ) -> BackendResult<Vec<Consultant>>;
}

#[async_trait]
pub trait AnalyticsReader: Send + Sync {
    async fn dashboard_summary(&self, token: &BearerToken) -> BackendResult<DashboardSummary>;
    async fn proposals_by_status(&self, token: &BearerToken) -> BackendResult<Vec<StatusCount>>;
    async fn monthly_revenue(&self, token: &BearerToken) -> BackendResult<Vec<MonthlyRevenue>>;
    async fn proposals_by_consultant(
        &self,
        token: &BearerToken,
    ) -> BackendResult<Vec<ConsultantProposals>>;
    async fn consultant_productivity(
        &self,
        token: &BearerToken,
    ) -> BackendResult<Vec<ConsultantHours>>;
}

#[async_trait]
pub trait ChatbotRelay: Send + Sync {
    async fn ask(&self, token: &BearerToken, question: &ChatQuestion) -> BackendResult<ChatAnswer>;
}

#[async_trait]
pub trait ImportRelay: Send + Sync {
    async fn import_file(
        &self,
        token: &BearerToken,
        kind: ImportKind,
        file: ImportFile,
    ) -> BackendResult<ImportSummary>;
}

/// Credential exchange. `login` is the only call made without a token.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> BackendResult<AccessToken>;
    async fn current_user(&self, token: &BearerToken) -> BackendResult<UserProfile>;
}
