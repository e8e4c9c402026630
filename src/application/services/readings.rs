//! Reading service: meter capture with consumption derivation

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use tracing::{info, warn};

use crate::domain::reading::{compute_consumption, NewReading, Reading};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::{
    ChangeAction, ConsumptionAnomalyEvent, EntityKind, Event, SharedEventBus,
};

/// Input for registering a meter reading.
#[derive(Debug, Clone)]
pub struct RegisterReading {
    pub member_id: i32,
    pub current_reading: i64,
    /// When omitted, the member's latest reading (or 0) is used
    pub previous_reading: Option<i64>,
    /// When omitted, "now"
    pub reading_date: Option<DateTime<Utc>>,
    pub recorded_by: String,
    pub notes: Option<String>,
}

/// Service for meter reading capture
pub struct ReadingService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl ReadingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    pub async fn list(&self) -> DomainResult<Vec<Reading>> {
        self.repos.readings().find_all().await
    }

    pub async fn list_for_member(&self, member_id: i32) -> DomainResult<Vec<Reading>> {
        self.repos.readings().find_by_member(member_id).await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Option<Reading>> {
        self.repos.readings().find_by_id(id).await
    }

    /// Register a meter reading for a member.
    ///
    /// Applies the consumption delta (clamped at zero), enforces one reading
    /// per member per calendar month, and raises a non-blocking anomaly
    /// notice when the meter appears to have run backwards.
    pub async fn register(&self, input: RegisterReading) -> DomainResult<Reading> {
        if input.current_reading < 0 {
            return Err(DomainError::Validation(
                "current_reading must be >= 0".to_string(),
            ));
        }
        if matches!(input.previous_reading, Some(p) if p < 0) {
            return Err(DomainError::Validation(
                "previous_reading must be >= 0".to_string(),
            ));
        }

        let member = self
            .repos
            .members()
            .find_by_id(input.member_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Member",
                field: "id",
                value: input.member_id.to_string(),
            })?;

        let reading_date = input.reading_date.unwrap_or_else(Utc::now);
        let (year, month) = (reading_date.year(), reading_date.month());

        if self
            .repos
            .readings()
            .find_for_period(member.id, year, month)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "member {} already has a reading for {}-{:02}",
                member.id, year, month
            )));
        }

        let previous = match input.previous_reading {
            Some(p) => p,
            None => self
                .repos
                .readings()
                .find_latest_for_member(member.id)
                .await?
                .map(|r| r.current_reading)
                .unwrap_or(0),
        };

        let delta = compute_consumption(previous, input.current_reading);
        if delta.anomaly {
            warn!(
                member_id = member.id,
                previous_reading = previous,
                current_reading = input.current_reading,
                "Meter reading decreased; consumption clamped to zero, flagged for review"
            );
            self.event_bus
                .publish(Event::ConsumptionAnomaly(ConsumptionAnomalyEvent {
                    member_id: member.id,
                    previous_reading: previous,
                    current_reading: input.current_reading,
                    timestamp: Utc::now(),
                }));
        }

        let saved = self
            .repos
            .readings()
            .save(NewReading {
                member_id: member.id,
                previous_reading: previous,
                current_reading: input.current_reading,
                consumption: delta.consumption,
                anomaly: delta.anomaly,
                reading_date,
                recorded_by: input.recorded_by,
                notes: input.notes,
            })
            .await?;

        info!(
            reading_id = saved.id,
            member_id = member.id,
            consumption = saved.consumption,
            "Reading registered"
        );
        self.event_bus.publish(Event::data_changed(
            EntityKind::Readings,
            ChangeAction::Created,
            Some(saved.id.to_string()),
        ));

        Ok(saved)
    }
}
