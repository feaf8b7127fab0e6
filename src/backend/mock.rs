//! Mock backend for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::{
    AnalyticsReader, AuthGateway, BackendResult, ChatbotRelay, ContractReader, ContractWriter,
    DirectoryReader, ImportRelay, ListQuery, ProposalReader, ProposalWriter, ScheduleReader,
    ScheduleWriter,
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

mock! {
    pub Backend {}

    #[async_trait]
    impl ContractReader for Backend {
        async fn list_contracts(
            &self,
            token: &BearerToken,
            query: ListQuery,
        ) -> BackendResult<Vec<Contract>>;
        async fn contract_alerts(&self, token: &BearerToken) -> BackendResult<Vec<Contract>>;
    }

    #[async_trait]
    impl ContractWriter for Backend {
        async fn create_contract(
            &self,
            token: &BearerToken,
            contract: &NewContract,
        ) -> BackendResult<Contract>;
        async fn delete_contract(&self, token: &BearerToken, id: ContractId) -> BackendResult<()>;
    }

    #[async_trait]
    impl ScheduleReader for Backend {
        async fn list_schedules(
            &self,
            token: &BearerToken,
            query: ListQuery,
        ) -> BackendResult<Vec<Schedule>>;
        async fn schedule_alerts(&self, token: &BearerToken) -> BackendResult<Vec<Schedule>>;
    }

    #[async_trait]
    impl ScheduleWriter for Backend {
        async fn create_schedule(
            &self,
            token: &BearerToken,
            schedule: &NewSchedule,
        ) -> BackendResult<Schedule>;
        async fn delete_schedule(&self, token: &BearerToken, id: ScheduleId) -> BackendResult<()>;
    }

    #[async_trait]
    impl ProposalReader for Backend {
        async fn list_proposals(
            &self,
            token: &BearerToken,
            query: ListQuery,
        ) -> BackendResult<Vec<Proposal>>;
    }

    #[async_trait]
    impl ProposalWriter for Backend {
        async fn create_proposal(
            &self,
            token: &BearerToken,
            proposal: &NewProposal,
        ) -> BackendResult<Proposal>;
        async fn delete_proposal(&self, token: &BearerToken, id: ProposalId) -> BackendResult<()>;
    }

    #[async_trait]
    impl DirectoryReader for Backend {
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
    impl AnalyticsReader for Backend {
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
    impl ChatbotRelay for Backend {
        async fn ask(&self, token: &BearerToken, question: &ChatQuestion) -> BackendResult<ChatAnswer>;
    }

    #[async_trait]
    impl ImportRelay for Backend {
        async fn import_file(
            &self,
            token: &BearerToken,
            kind: ImportKind,
            file: ImportFile,
        ) -> BackendResult<ImportSummary>;
    }

    #[async_trait]
    impl AuthGateway for Backend {
        async fn login(&self, credentials: &LoginCredentials) -> BackendResult<AccessToken>;
        async fn current_user(&self, token: &BearerToken) -> BackendResult<UserProfile>;
    }
}
