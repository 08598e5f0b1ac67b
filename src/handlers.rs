use crate::errors::AppError;
use crate::models::{AddGoalRequest, BoardResponse, CommitRequest, GoalId, GoalPatch};
use crate::state::{AppState, Tracker};
use crate::ui::render_index;
use crate::views::{summarize, GoalViews};
use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use std::sync::Arc;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    let views = GoalViews::from_goals(tracker.store.goals());
    let summary = summarize(tracker.store.goals());
    Html(render_index(&views, &summary, tracker.editor.editing()))
}

pub async fn get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let tracker = state.tracker.lock().await;
    Json(board(&tracker))
}

pub async fn add_goal(
    State(state): State<AppState>,
    payload: Result<Json<AddGoalRequest>, JsonRejection>,
) -> Result<Json<BoardResponse>, AppError> {
    let Json(payload) = payload?;
    let snapshot = mutate(&state, move |tracker| {
        apply_add(tracker, &payload);
        board(tracker)
    })
    .await?;
    Ok(Json(snapshot))
}

pub async fn toggle_goal(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
) -> Result<Json<BoardResponse>, AppError> {
    let snapshot = mutate(&state, move |tracker| {
        tracker.store.toggle(id);
        board(tracker)
    })
    .await?;
    Ok(Json(snapshot))
}

pub async fn remove_goal(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
) -> Result<Json<BoardResponse>, AppError> {
    let snapshot = mutate(&state, move |tracker| {
        apply_remove(tracker, id);
        board(tracker)
    })
    .await?;
    Ok(Json(snapshot))
}

pub async fn edit_goal(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
    payload: Result<Json<GoalPatch>, JsonRejection>,
) -> Result<Json<BoardResponse>, AppError> {
    let Json(patch) = payload?;
    let snapshot = mutate(&state, move |tracker| {
        tracker.store.edit(id, patch);
        board(tracker)
    })
    .await?;
    Ok(Json(snapshot))
}

pub async fn start_edit(State(state): State<AppState>, Path(id): Path<GoalId>) -> Json<BoardResponse> {
    let mut tracker = state.tracker.lock().await;
    apply_start_edit(&mut tracker, id);
    Json(board(&tracker))
}

pub async fn commit_edit(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
    payload: Result<Json<CommitRequest>, JsonRejection>,
) -> Result<Json<BoardResponse>, AppError> {
    let Json(payload) = payload?;
    let snapshot = mutate(&state, move |tracker| {
        apply_commit(tracker, id, payload.field.into_patch(payload.value));
        board(tracker)
    })
    .await?;
    Ok(Json(snapshot))
}

pub async fn form_add(
    State(state): State<AppState>,
    payload: Result<Form<AddGoalRequest>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(payload) = payload?;
    mutate(&state, move |tracker| apply_add(tracker, &payload)).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_toggle(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
) -> Result<Redirect, AppError> {
    mutate(&state, move |tracker| {
        tracker.store.toggle(id);
    })
    .await?;
    Ok(Redirect::to("/"))
}

pub async fn form_remove(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
) -> Result<Redirect, AppError> {
    mutate(&state, move |tracker| apply_remove(tracker, id)).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_start_edit(State(state): State<AppState>, Path(id): Path<GoalId>) -> Redirect {
    let mut tracker = state.tracker.lock().await;
    apply_start_edit(&mut tracker, id);
    Redirect::to("/")
}

// The page submits title and notes together; a missing field is left alone.
pub async fn form_commit(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
    payload: Result<Form<GoalPatch>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(patch) = payload?;
    mutate(&state, move |tracker| apply_commit(tracker, id, patch)).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_cancel(State(state): State<AppState>) -> Redirect {
    state.tracker.lock().await.editor.cancel_edit();
    Redirect::to("/")
}

// Slot writes are blocking file I/O, so mutations run off the async workers.
async fn mutate<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&mut Tracker) -> T + Send + 'static,
    T: Send + 'static,
{
    let mut tracker = Arc::clone(&state.tracker).lock_owned().await;
    tokio::task::spawn_blocking(move || op(&mut *tracker))
        .await
        .map_err(AppError::internal)
}

fn apply_add(tracker: &mut Tracker, payload: &AddGoalRequest) {
    if let Some(id) = tracker
        .store
        .add(&payload.title, &payload.notes, payload.due)
    {
        info!(%id, total = tracker.store.len(), "goal created");
    }
}

fn apply_remove(tracker: &mut Tracker, id: GoalId) {
    if tracker.store.remove(id) {
        tracker.editor.forget(id);
    }
}

// Only goals that exist can enter edit mode.
fn apply_start_edit(tracker: &mut Tracker, id: GoalId) {
    if tracker.store.get(id).is_some() {
        tracker.editor.start_edit(id);
    }
}

fn apply_commit(tracker: &mut Tracker, id: GoalId, patch: GoalPatch) {
    let Tracker { store, editor } = tracker;
    editor.commit_edit(store, id, patch);
}

fn board(tracker: &Tracker) -> BoardResponse {
    let goals = tracker.store.goals();
    let GoalViews { active, completed } = GoalViews::from_goals(goals);
    BoardResponse {
        active,
        completed,
        summary: summarize(goals),
        editing: tracker.editor.editing(),
    }
}
