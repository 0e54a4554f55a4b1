use sea_orm::{entity::prelude::*, DatabaseBackend, DatabaseConnection, QueryOrder, Set, Statement};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A usable title is present and non-empty after trimming. The raw value
/// is what gets persisted; trimming is only for the check.
pub fn validate_title(title: Option<&str>) -> Result<&str, ModelError> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(ModelError::Validation(
            "Title is required and cannot be empty".to_string(),
        )),
    }
}

/// Fetch every todo ordered by ascending id.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

/// Insert a todo after validation; the store assigns the id.
pub async fn create(
    db: &DatabaseConnection,
    title: Option<&str>,
    completed: bool,
) -> Result<Model, ModelError> {
    let title = validate_title(title)?;
    let am = ActiveModel {
        title: Set(title.to_owned()),
        completed: Set(completed),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Overwrite both columns with exactly the supplied values. An omitted
/// field binds SQL NULL and the NOT NULL constraint turns it into a
/// store error; there is no partial merge.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    title: Option<String>,
    completed: Option<bool>,
) -> Result<Model, ModelError> {
    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "UPDATE todo SET title = $1, completed = $2 WHERE id = $3 RETURNING id, title, completed",
        [title.into(), completed.into(), id.into()],
    );
    let updated = Entity::find()
        .from_raw_sql(stmt)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    updated.ok_or_else(|| ModelError::NotFound("Todo not found".to_string()))
}

/// Delete by id; returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
