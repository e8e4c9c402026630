//! Account aggregation service: portfolio statistics and dashboard rollups

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};

use crate::domain::invoice::{summarize, AccountSummary};
use crate::domain::member::MemberStatus;
use crate::domain::{DomainResult, RepositoryProvider};

/// Dashboard statistics for the landing page.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_members: u64,
    pub active_members: u64,
    pub overdue_members: u64,
    /// Total consumption (m3) of readings in the current calendar month
    pub monthly_consumption: i64,
    pub readings_this_month: u64,
    /// Active members without a reading this month
    pub pending_readings: u64,
    pub billing: AccountSummary,
}

/// One row of the recent-activity feed.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    /// "member" | "reading" | "payment"
    pub kind: &'static str,
    pub description: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

/// Service computing portfolio-level statistics
pub struct AccountService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AccountService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Account Aggregator over the whole invoice portfolio.
    pub async fn billing_summary(&self) -> DomainResult<AccountSummary> {
        let invoices = self.repos.invoices().find_all().await?;
        Ok(summarize(&invoices))
    }

    /// Account Aggregator over one member's invoices.
    pub async fn member_summary(&self, member_id: i32) -> DomainResult<AccountSummary> {
        let invoices = self.repos.invoices().find_by_member(member_id).await?;
        Ok(summarize(&invoices))
    }

    /// Headline numbers for the dashboard.
    pub async fn dashboard(&self) -> DomainResult<DashboardStats> {
        let now = Utc::now();
        let (year, month) = (now.year(), now.month());

        let members = self.repos.members().find_all().await?;
        let total_members = members.len() as u64;
        let active_members = members
            .iter()
            .filter(|m| m.status == MemberStatus::Active)
            .count() as u64;
        let overdue_members = members
            .iter()
            .filter(|m| m.status == MemberStatus::Overdue)
            .count() as u64;

        let readings = self.repos.readings().find_in_period(year, month).await?;
        let monthly_consumption: i64 = readings.iter().map(|r| r.consumption).sum();
        let readings_this_month = readings.len() as u64;
        let pending_readings = active_members.saturating_sub(readings_this_month);

        let billing = self.billing_summary().await?;

        Ok(DashboardStats {
            total_members,
            active_members,
            overdue_members,
            monthly_consumption,
            readings_this_month,
            pending_readings,
            billing,
        })
    }

    /// Merged feed of the latest members, readings and payments, newest
    /// first, capped at `limit` entries.
    pub async fn recent_activity(&self, limit: usize) -> DomainResult<Vec<ActivityEntry>> {
        const PER_SOURCE: usize = 5;

        let mut entries = Vec::new();

        for member in self
            .repos
            .members()
            .find_all()
            .await?
            .into_iter()
            .take(PER_SOURCE)
        {
            entries.push(ActivityEntry {
                kind: "member",
                description: format!("Nuevo socio: {}", member.name),
                detail: member.rut.clone(),
                timestamp: member.created_at,
            });
        }

        for reading in self
            .repos
            .readings()
            .find_all()
            .await?
            .into_iter()
            .take(PER_SOURCE)
        {
            entries.push(ActivityEntry {
                kind: "reading",
                description: format!("Lectura registrada por {}", reading.recorded_by),
                detail: format!("{} m3", reading.consumption),
                timestamp: reading.reading_date,
            });
        }

        for payment in self.repos.payments().find_recent(PER_SOURCE as u64).await? {
            entries.push(ActivityEntry {
                kind: "payment",
                description: format!("Pago recibido ({})", payment.method),
                detail: format!("${}", payment.amount),
                timestamp: payment.paid_at,
            });
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);
        Ok(entries)
    }
}
