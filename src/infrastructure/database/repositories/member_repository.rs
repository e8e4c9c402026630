//! SeaORM implementation of MemberRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::member::{Member, MemberPatch, MemberRepository, MemberStatus, NewMember};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::member;

use super::db_err;

// ── Conversion helpers ──────────────────────────────────────────

fn status_to_domain(s: member::MemberStatus) -> MemberStatus {
    match s {
        member::MemberStatus::Active => MemberStatus::Active,
        member::MemberStatus::Overdue => MemberStatus::Overdue,
        member::MemberStatus::Inactive => MemberStatus::Inactive,
    }
}

fn status_to_entity(s: MemberStatus) -> member::MemberStatus {
    match s {
        MemberStatus::Active => member::MemberStatus::Active,
        MemberStatus::Overdue => member::MemberStatus::Overdue,
        MemberStatus::Inactive => member::MemberStatus::Inactive,
    }
}

fn entity_to_domain(m: member::Model) -> Member {
    Member {
        id: m.id,
        rut: m.rut,
        name: m.name,
        address: m.address,
        meter_number: m.meter_number,
        status: status_to_domain(m.status),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── SeaOrmMemberRepository ──────────────────────────────────────

pub struct SeaOrmMemberRepository {
    db: DatabaseConnection,
}

impl SeaOrmMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for SeaOrmMemberRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Member>> {
        let model = member::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_rut(&self, rut: &str) -> DomainResult<Option<Member>> {
        let model = member::Entity::find()
            .filter(member::Column::Rut.eq(rut))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Member>> {
        let models = member::Entity::find()
            .order_by_desc(member::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn count_by_status(&self, status: MemberStatus) -> DomainResult<u64> {
        member::Entity::find()
            .filter(member::Column::Status.eq(status_to_entity(status)))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn save(&self, m: NewMember) -> DomainResult<Member> {
        let now = Utc::now();
        let model = member::ActiveModel {
            id: NotSet,
            rut: Set(m.rut),
            name: Set(m.name),
            address: Set(m.address),
            meter_number: Set(m.meter_number),
            status: Set(status_to_entity(m.status)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Member saved: {} ({})", result.name, result.rut);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, id: i32, patch: MemberPatch) -> DomainResult<Member> {
        let existing = member::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Member",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut model: member::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if let Some(address) = patch.address {
            model.address = Set(address);
        }
        if let Some(meter_number) = patch.meter_number {
            model.meter_number = Set(meter_number);
        }
        if let Some(status) = patch.status {
            model.status = Set(status_to_entity(status));
        }
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.db).await.map_err(db_err)?;
        Ok(entity_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = member::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Member",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
