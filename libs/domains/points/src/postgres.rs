use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};

use crate::{
    entity::{point, point_item},
    error::{PointError, PointResult},
    models::{CreatePoint, Point, SearchCriteria},
    repository::PointRepository,
};
use domain_items::models::Item;

pub struct PgPointRepository {
    db: DatabaseConnection,
}

impl PgPointRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PointRepository for PgPointRepository {
    async fn create(&self, input: CreatePoint, image_url: String) -> PointResult<Point> {
        // Collapse duplicate ids so the composite primary key on
        // point_items cannot trip over repeated input
        let mut unique_ids: Vec<i32> = Vec::with_capacity(input.items.len());
        for id in &input.items {
            if !unique_ids.contains(id) {
                unique_ids.push(*id);
            }
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        let active = point::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email),
            whatsapp: Set(input.whatsapp),
            latitude: Set(input.latitude),
            longitude: Set(input.longitude),
            city: Set(input.city),
            uf: Set(input.uf),
            image: Set(image_url),
        };

        let model = active
            .insert(&txn)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        if !unique_ids.is_empty() {
            let rows = unique_ids.into_iter().map(|item_id| point_item::ActiveModel {
                point_id: Set(model.id),
                item_id: Set(item_id),
            });

            // Dropping the transaction on error rolls the point row back
            // with the associations
            point_item::Entity::insert_many(rows)
                .exec(&txn)
                .await
                .map_err(|e| match e.sql_err() {
                    Some(SqlErr::ForeignKeyConstraintViolation(_)) => PointError::UnknownItem,
                    _ => PointError::Internal(format!("Database error: {}", e)),
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(point_id = model.id, "Created point");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> PointResult<Option<Point>> {
        let model = point::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn search(&self, criteria: SearchCriteria) -> PointResult<Vec<Point>> {
        // A fully empty Condition::any() would render no WHERE clause at
        // all, matching every point. No predicates means no matches.
        if criteria.is_empty() {
            return Ok(Vec::new());
        }

        let mut condition = Condition::any();

        if !criteria.item_ids.is_empty() {
            condition = condition.add(
                point::Column::Id.in_subquery(
                    Query::select()
                        .column(point_item::Column::PointId)
                        .from(point_item::Entity)
                        .and_where(point_item::Column::ItemId.is_in(criteria.item_ids))
                        .to_owned(),
                ),
            );
        }

        if let Some(city) = criteria.city {
            condition = condition.add(point::Column::City.eq(city));
        }

        if let Some(uf) = criteria.uf {
            condition = condition.add(point::Column::Uf.eq(uf));
        }

        let models = point::Entity::find()
            .filter(condition)
            .distinct()
            .order_by_asc(point::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn items_for_point(&self, point_id: i32) -> PointResult<Vec<Item>> {
        let Some(model) = point::Entity::find_by_id(point_id)
            .one(&self.db)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?
        else {
            return Ok(Vec::new());
        };

        let items = model
            .find_related(domain_items::entity::Entity)
            .order_by_asc(domain_items::entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PointError::Internal(format!("Database error: {}", e)))?;

        Ok(items.into_iter().map(|m| m.into()).collect())
    }
}
