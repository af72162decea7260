//! Route handlers. Each one makes a single tracker call.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use taskboard_core::{
    models::{JobBoardEntry, Project, ProjectView, Resource, Task},
    params::{CreateResource, CreateTask, LinkResource, ProjectInput, UpdateTask},
    TrackerError,
};

use super::{
    errors::ApiError,
    extract::{ApiJson, ApiPath},
    AppState,
};

type ApiResult<T> = Result<T, ApiError>;

fn success() -> Json<Value> {
    Json(json!({ "status": "success" }))
}

/// A freshly created project, shaped like an overview entry.
#[derive(Serialize)]
pub struct CreatedProject {
    #[serde(flatten)]
    project: Project,
    tasks: Vec<Task>,
}

pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectView>>> {
    Ok(Json(state.tracker.project_overview().await?))
}

pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProjectInput>,
) -> ApiResult<(StatusCode, Json<CreatedProject>)> {
    let project = state.tracker.create_project(&input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedProject {
            project,
            tasks: Vec::new(),
        }),
    ))
}

pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Project>> {
    let project = state
        .tracker
        .get_project(id)
        .await?
        .ok_or(TrackerError::ProjectNotFound { id })?;
    Ok(Json(project))
}

pub async fn update_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(input): ApiJson<ProjectInput>,
) -> ApiResult<Json<Value>> {
    state.tracker.update_project(id, &input).await?;
    Ok(success())
}

pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Value>> {
    state.tracker.delete_project(id).await?;
    Ok(success())
}

pub async fn project_tasks(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.tracker.project_tasks(id).await?))
}

pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<CreateTask>,
) -> ApiResult<Json<Value>> {
    let task = state.tracker.create_task(&params).await?;
    Ok(Json(json!({ "status": "success", "TaskID": task.id })))
}

pub async fn get_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Task>> {
    let task = state
        .tracker
        .get_task(id)
        .await?
        .ok_or(TrackerError::TaskNotFound { id })?;
    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(params): ApiJson<UpdateTask>,
) -> ApiResult<Json<Value>> {
    state.tracker.update_task(id, &params).await?;
    Ok(success())
}

pub async fn delete_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Value>> {
    state.tracker.delete_task(id).await?;
    Ok(success())
}

pub async fn start_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Value>> {
    let started = state.tracker.start_task(id).await?;
    Ok(Json(json!({ "status": "success", "started_date": started.to_string() })))
}

pub async fn finish_task(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Value>> {
    let completed = state.tracker.finish_task(id).await?;
    Ok(Json(json!({ "status": "success", "completed_date": completed.to_string() })))
}

pub async fn list_resources(State(state): State<AppState>) -> ApiResult<Json<Vec<Resource>>> {
    Ok(Json(state.tracker.list_resources().await?))
}

pub async fn create_resource(
    State(state): State<AppState>,
    ApiJson(params): ApiJson<CreateResource>,
) -> ApiResult<Json<Value>> {
    let resource = state.tracker.create_resource(&params).await?;
    Ok(Json(json!({ "status": "success", "ResourceID": resource.id })))
}

pub async fn delete_resource(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<Value>> {
    state.tracker.delete_resource(id).await?;
    Ok(success())
}

pub async fn task_resources(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<u64>,
) -> ApiResult<Json<Vec<Resource>>> {
    Ok(Json(state.tracker.task_resources(task_id).await?))
}

pub async fn link_resource(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<u64>,
    ApiJson(link): ApiJson<LinkResource>,
) -> ApiResult<Json<Value>> {
    state
        .tracker
        .link_resource(task_id, link.resource_id)
        .await?;
    Ok(success())
}

pub async fn unlink_resource(
    State(state): State<AppState>,
    ApiPath((task_id, resource_id)): ApiPath<(u64, u64)>,
) -> ApiResult<Json<Value>> {
    state.tracker.unlink_resource(task_id, resource_id).await?;
    Ok(success())
}

pub async fn job_board(State(state): State<AppState>) -> ApiResult<Json<Vec<JobBoardEntry>>> {
    Ok(Json(state.tracker.job_board().await?))
}
