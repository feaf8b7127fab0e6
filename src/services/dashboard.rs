//! BI dashboard: KPI summary plus four aggregate charts.

use crate::backend::AnalyticsReader;
use crate::dto::dashboard::DashboardPageData;
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;
use crate::view::dashboard::{DashboardSeries, KpiView, build_charts};

/// Loads the summary, then the four aggregates concurrently.
///
/// The aggregates are all-or-nothing: the first failure drops every chart.
pub async fn load_dashboard<R>(
    backend: &R,
    session: &SessionContext<'_>,
) -> ServiceResult<DashboardPageData>
where
    R: AnalyticsReader + ?Sized,
{
    let token = session.token()?;

    let kpis = match session.guard(backend.dashboard_summary(&token).await) {
        Ok(summary) => Some(KpiView::from(&summary)),
        Err(ServiceError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to load dashboard summary: {err}");
            None
        }
    };

    let series = futures::try_join!(
        backend.proposals_by_status(&token),
        backend.monthly_revenue(&token),
        backend.proposals_by_consultant(&token),
        backend.consultant_productivity(&token),
    )
    .map(
        |(by_status, monthly_revenue, by_consultant, productivity)| DashboardSeries {
            by_status,
            monthly_revenue,
            by_consultant,
            productivity,
        },
    );

    let charts = match session.guard(series) {
        Ok(series) => build_charts(&series),
        Err(ServiceError::Unauthorized) => return Err(ServiceError::Unauthorized),
        Err(err) => {
            log::error!("Failed to load dashboard charts: {err}");
            Vec::new()
        }
    };

    Ok(DashboardPageData { kpis, charts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::backend::mock::MockBackend;
    use crate::domain::analytics::{
        ConsultantHours, ConsultantProposals, DashboardSummary, MonthlyRevenue, StatusCount,
    };
    use crate::services::fixtures::{expiring_store, signed_in_store};

    fn healthy_backend() -> MockBackend {
        let mut backend = MockBackend::new();
        backend.expect_dashboard_summary().returning(|_| {
            Ok(DashboardSummary {
                active_proposals: 12,
                conversion_rate: Some(40.0),
                ..DashboardSummary::default()
            })
        });
        backend.expect_proposals_by_status().returning(|_| {
            Ok(vec![
                StatusCount {
                    status: Some("Em andamento".to_string()),
                    total: 12,
                },
                StatusCount {
                    status: Some("Fechado".to_string()),
                    total: 8,
                },
            ])
        });
        backend.expect_monthly_revenue().returning(|_| {
            Ok(vec![MonthlyRevenue {
                month: "Mar/2024".to_string(),
                revenue: Some(45000.0),
            }])
        });
        backend.expect_proposals_by_consultant().returning(|_| {
            Ok(vec![ConsultantProposals {
                consultant: "Bruno".to_string(),
                total: 5,
            }])
        });
        backend
            .expect_consultant_productivity()
            .returning(|_| Ok(vec![]));
        backend
    }

    #[actix_web::test]
    async fn all_aggregates_yield_four_charts() {
        let store = signed_in_store();
        let session = SessionContext::new(&store);
        let backend = healthy_backend();

        let page = load_dashboard(&backend, &session).await.unwrap();

        assert_eq!(page.charts.len(), 4);
        for chart in &page.charts {
            assert_eq!(chart.labels.len(), chart.values.len());
        }
        assert_eq!(page.kpis.map(|k| k.conversion_rate).as_deref(), Some("40%"));
    }

    #[actix_web::test]
    async fn one_failing_aggregate_drops_all_charts() {
        let store = signed_in_store();
        let session = SessionContext::new(&store);
        let mut backend = MockBackend::new();
        backend
            .expect_dashboard_summary()
            .returning(|_| Ok(DashboardSummary::default()));
        backend
            .expect_proposals_by_status()
            .returning(|_| Ok(vec![]));
        backend.expect_monthly_revenue().returning(|_| {
            Err(BackendError::Status {
                status: 500,
                detail: None,
            })
        });
        backend
            .expect_proposals_by_consultant()
            .returning(|_| Ok(vec![]));
        backend
            .expect_consultant_productivity()
            .returning(|_| Ok(vec![ConsultantHours {
                consultant: "Ana".to_string(),
                hours: Some(10.0),
            }]));

        let page = load_dashboard(&backend, &session).await.unwrap();

        assert!(page.charts.is_empty());
        assert!(page.kpis.is_some());
    }

    #[actix_web::test]
    async fn unauthorized_aggregates_clear_session_once() {
        let store = expiring_store();
        let session = SessionContext::new(&store);
        let mut backend = MockBackend::new();
        backend
            .expect_dashboard_summary()
            .returning(|_| Ok(DashboardSummary::default()));
        backend
            .expect_proposals_by_status()
            .returning(|_| Err(BackendError::Unauthorized));
        backend
            .expect_monthly_revenue()
            .returning(|_| Err(BackendError::Unauthorized));
        backend
            .expect_proposals_by_consultant()
            .returning(|_| Err(BackendError::Unauthorized));
        backend
            .expect_consultant_productivity()
            .returning(|_| Err(BackendError::Unauthorized));

        let result = load_dashboard(&backend, &session).await;

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
