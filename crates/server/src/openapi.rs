use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc { pub status: String, pub version: String }

#[derive(utoipa::ToSchema)]
pub struct TodoDoc { pub id: i64, pub title: String, pub completed: bool }

#[derive(utoipa::ToSchema)]
pub struct CreateTodoInputDoc {
    pub title: String,
    pub completed: Option<bool>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateTodoInputDoc {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::todos::list_todos,
        crate::routes::todos::create_todo,
        crate::routes::todos::update_todo,
        crate::routes::todos::delete_todo,
    ),
    components(
        schemas(
            HealthDoc,
            TodoDoc,
            CreateTodoInputDoc,
            UpdateTodoInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "todos")
    )
)]
pub struct ApiDoc;
