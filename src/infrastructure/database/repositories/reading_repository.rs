//! SeaORM implementation of ReadingRepository

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::reading::{NewReading, Reading, ReadingRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::reading;

use super::db_err;

fn entity_to_domain(r: reading::Model) -> Reading {
    Reading {
        id: r.id,
        member_id: r.member_id,
        previous_reading: r.previous_reading,
        current_reading: r.current_reading,
        consumption: r.consumption,
        anomaly: r.anomaly,
        reading_date: r.reading_date,
        recorded_by: r.recorded_by,
        notes: r.notes,
        created_at: r.created_at,
    }
}

/// Half-open UTC range `[start, end)` covering a calendar month.
fn month_range(year: i32, month: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(|| Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .unwrap_or(start);
    (start, end)
}

// ── SeaOrmReadingRepository ─────────────────────────────────────

pub struct SeaOrmReadingRepository {
    db: DatabaseConnection,
}

impl SeaOrmReadingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadingRepository for SeaOrmReadingRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reading>> {
        let model = reading::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reading>> {
        let models = reading::Entity::find()
            .order_by_desc(reading::Column::ReadingDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_member(&self, member_id: i32) -> DomainResult<Vec<Reading>> {
        let models = reading::Entity::find()
            .filter(reading::Column::MemberId.eq(member_id))
            .order_by_desc(reading::Column::ReadingDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_latest_for_member(&self, member_id: i32) -> DomainResult<Option<Reading>> {
        let model = reading::Entity::find()
            .filter(reading::Column::MemberId.eq(member_id))
            .order_by_desc(reading::Column::ReadingDate)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_for_period(
        &self,
        member_id: i32,
        year: i32,
        month: u32,
    ) -> DomainResult<Option<Reading>> {
        let (start, end) = month_range(year, month);
        let model = reading::Entity::find()
            .filter(reading::Column::MemberId.eq(member_id))
            .filter(reading::Column::ReadingDate.gte(start))
            .filter(reading::Column::ReadingDate.lt(end))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_in_period(&self, year: i32, month: u32) -> DomainResult<Vec<Reading>> {
        let (start, end) = month_range(year, month);
        let models = reading::Entity::find()
            .filter(reading::Column::ReadingDate.gte(start))
            .filter(reading::Column::ReadingDate.lt(end))
            .order_by_desc(reading::Column::ReadingDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, r: NewReading) -> DomainResult<Reading> {
        let model = reading::ActiveModel {
            id: NotSet,
            member_id: Set(r.member_id),
            previous_reading: Set(r.previous_reading),
            current_reading: Set(r.current_reading),
            consumption: Set(r.consumption),
            anomaly: Set(r.anomaly),
            reading_date: Set(r.reading_date),
            recorded_by: Set(r.recorded_by),
            notes: Set(r.notes),
            created_at: Set(Utc::now()),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Reading saved: member={} consumption={} m3",
            result.member_id, result.consumption
        );
        Ok(entity_to_domain(result))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_range_covers_whole_month() {
        let (start, end) = month_range(2026, 2);
        assert_eq!(start.to_rfc3339(), "2026-02-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2026-03-01T00:00:00+00:00");
    }

    #[test]
    fn month_range_wraps_december() {
        let (start, end) = month_range(2025, 12);
        assert_eq!(start.to_rfc3339(), "2025-12-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    }
}
