//! Sea-ORM entities for the points and point_items tables.
//!
//! The item catalog entity lives in `domain_items`; this module only adds
//! the association table and the many-to-many relation through it.

/// Sea-ORM Entity for the points table
pub mod point {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "points")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(column_type = "Text")]
        pub name: String,
        #[sea_orm(column_type = "Text")]
        pub email: String,
        #[sea_orm(column_type = "Text")]
        pub whatsapp: String,
        pub latitude: f64,
        pub longitude: f64,
        #[sea_orm(column_type = "Text")]
        pub city: String,
        #[sea_orm(column_type = "Text")]
        pub uf: String,
        /// Full image URL, assigned from configuration at creation
        #[sea_orm(column_type = "Text")]
        pub image: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::point_item::Entity")]
        PointItem,
    }

    impl Related<super::point_item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::PointItem.def()
        }
    }

    impl Related<domain_items::entity::Entity> for Entity {
        fn to() -> RelationDef {
            super::point_item::Relation::Item.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::point_item::Relation::Point.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for crate::models::Point {
        fn from(model: Model) -> Self {
            Self {
                id: model.id,
                name: model.name,
                email: model.email,
                whatsapp: model.whatsapp,
                latitude: model.latitude,
                longitude: model.longitude,
                city: model.city,
                uf: model.uf,
                image: model.image,
            }
        }
    }
}

/// Sea-ORM Entity for the point_items association table
pub mod point_item {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "point_items")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub point_id: i32,
        #[sea_orm(primary_key, auto_increment = false)]
        pub item_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::point::Entity",
            from = "Column::PointId",
            to = "super::point::Column::Id"
        )]
        Point,
        #[sea_orm(
            belongs_to = "domain_items::entity::Entity",
            from = "Column::ItemId",
            to = "domain_items::entity::Column::Id"
        )]
        Item,
    }

    impl Related<super::point::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Point.def()
        }
    }

    impl Related<domain_items::entity::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Item.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
