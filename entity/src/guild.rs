use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    pub multiplier: f64,
    pub pb_channel_id: Option<i64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::point_source::Entity")]
    PointSource,
    #[sea_orm(has_many = "super::guild_boss::Entity")]
    GuildBoss,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::point_source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointSource.def()
    }
}

impl Related<super::guild_boss::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildBoss.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
