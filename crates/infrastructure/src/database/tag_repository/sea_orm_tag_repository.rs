use crate::database::entities::{items, tags};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use domain::{
    Cursor, DomainError, Item, ItemId, PopulatedTag, SortDirection, SortField, Tag, TagFilter,
    TagId, TagQuery, TagRepository, TagType, TagUid,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set, SqlErr,
};
use tracing::debug;

pub struct SeaOrmTagRepository {
    db: DatabaseConnection,
}

impl SeaOrmTagRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_tag(model: tags::Model) -> Result<Tag, DomainError> {
        // A row that fails to parse is a storage problem, not a client one
        let corrupt = |e: DomainError| DomainError::Store(format!("corrupt tag row: {e}"));

        let id = TagId::parse(&model.id).map_err(corrupt)?;
        let uid = model.uid.map(TagUid::new).transpose().map_err(corrupt)?;
        let tag_type = model.tag_type.parse::<TagType>().map_err(corrupt)?;
        let item = model.item_id.map(ItemId::new).transpose().map_err(corrupt)?;

        Ok(Tag::restore(
            id,
            uid,
            tag_type,
            item,
            model.created_at.with_timezone(&Utc),
            model.updated_at.with_timezone(&Utc),
        ))
    }

    fn model_to_item(model: items::Model) -> Result<Item, DomainError> {
        let id = ItemId::new(model.id)
            .map_err(|e| DomainError::Store(format!("corrupt item row: {e}")))?;
        Ok(Item::new(id, model.name, model.description))
    }

    fn to_offset(dt: DateTime<Utc>) -> DateTime<FixedOffset> {
        dt.fixed_offset()
    }

    fn db_error(e: DbErr) -> DomainError {
        DomainError::Store(format!("Database error: {e}"))
    }

    fn apply_filter(select: Select<tags::Entity>, filter: &TagFilter) -> Select<tags::Entity> {
        match filter.tag_type {
            Some(tag_type) => select.filter(tags::Column::TagType.eq(tag_type.as_str())),
            None => select,
        }
    }

    fn apply_cursor(mut select: Select<tags::Entity>, cursor: &Cursor) -> Select<tags::Entity> {
        for key in &cursor.sort {
            let column = match key.field {
                SortField::Id => tags::Column::Id,
                SortField::Uid => tags::Column::Uid,
                SortField::Type => tags::Column::TagType,
                SortField::Item => tags::Column::ItemId,
                SortField::CreatedAt => tags::Column::CreatedAt,
                SortField::UpdatedAt => tags::Column::UpdatedAt,
            };
            select = match key.direction {
                SortDirection::Ascending => select.order_by_asc(column),
                SortDirection::Descending => select.order_by_desc(column),
            };
        }

        if cursor.skip > 0 {
            select = select.offset(cursor.skip);
        }
        select.limit(cursor.limit)
    }
}

#[async_trait]
impl TagRepository for SeaOrmTagRepository {
    async fn find_many(&self, query: &TagQuery) -> Result<Vec<Tag>, DomainError> {
        let select = Self::apply_filter(tags::Entity::find(), &query.filter);
        let models = Self::apply_cursor(select, &query.cursor)
            .all(&self.db)
            .await
            .map_err(Self::db_error)?;

        debug!(rows = models.len(), "find_many");
        models.into_iter().map(Self::model_to_tag).collect()
    }

    async fn find_by_id(&self, id: &TagId) -> Result<Option<Tag>, DomainError> {
        let model = tags::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(Self::db_error)?;

        model.map(Self::model_to_tag).transpose()
    }

    async fn find_by_uid(&self, uid: &TagUid) -> Result<Option<Tag>, DomainError> {
        let model = tags::Entity::find()
            .filter(tags::Column::Uid.eq(uid.as_str()))
            .one(&self.db)
            .await
            .map_err(Self::db_error)?;

        model.map(Self::model_to_tag).transpose()
    }

    async fn create(&self, tag: &Tag) -> Result<Tag, DomainError> {
        let active_model = tags::ActiveModel {
            id: Set(tag.id().to_string()),
            uid: Set(tag.uid().map(|u| u.as_str().to_string())),
            tag_type: Set(tag.tag_type().as_str().to_string()),
            item_id: Set(tag.item().map(|i| i.as_str().to_string())),
            created_at: Set(Self::to_offset(tag.created_at())),
            updated_at: Set(Self::to_offset(tag.updated_at())),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                let uid = tag.uid().map(TagUid::as_str).unwrap_or_default();
                DomainError::UidConflict(uid.to_string())
            } else {
                Self::db_error(e)
            }
        })?;

        Self::model_to_tag(model)
    }

    async fn save(&self, tag: &Tag) -> Result<Tag, DomainError> {
        let active_model = tags::ActiveModel {
            id: ActiveValue::Unchanged(tag.id().to_string()),
            tag_type: Set(tag.tag_type().as_str().to_string()),
            item_id: Set(tag.item().map(|i| i.as_str().to_string())),
            updated_at: Set(Self::to_offset(tag.updated_at())),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::TagNotFound(tag.id().to_string()),
            e => Self::db_error(e),
        })?;

        Self::model_to_tag(model)
    }

    async fn remove(&self, tag: &Tag) -> Result<Tag, DomainError> {
        let result = tags::Entity::delete_by_id(tag.id().to_string())
            .exec(&self.db)
            .await
            .map_err(Self::db_error)?;

        // Already deleted by a concurrent request
        if result.rows_affected == 0 {
            return Err(DomainError::TagNotFound(tag.id().to_string()));
        }

        Ok(tag.clone())
    }

    async fn populate_item(&self, tag: Tag) -> Result<PopulatedTag, DomainError> {
        let item = match tag.item() {
            Some(item_id) => items::Entity::find_by_id(item_id.as_str().to_string())
                .one(&self.db)
                .await
                .map_err(Self::db_error)?
                .map(Self::model_to_item)
                .transpose()?,
            None => None,
        };

        Ok(PopulatedTag::new(tag, item))
    }
}
