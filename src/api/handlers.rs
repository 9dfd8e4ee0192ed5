//! HTTP request handlers for the leave engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler tags its log lines with a fresh correlation id and takes the
//! store lock once.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calendar_days_inclusive, count_effective_leave_days, effective_leave_days,
};
use crate::document::{
    Document, DocumentRenderer, LeaveLetterDocument, LeaveReportDocument, LetterDocument,
    letterhead_data_uri,
};
use crate::error::EngineError;
use crate::formatting::spell_number;
use crate::models::{
    EmployeeDraft, Holiday, HolidayCalendar, LeaveRequest, LeaveRequestDraft, LetterDraft,
    LetterheadDraft, StudentDraft,
};
use crate::store::{EmployeeQuery, RecordStore};

use super::request::{
    LeaveBalanceRequest, LeaveDaysRequest, LeaveReportQuery, LetterListQuery, StudentListQuery,
};
use super::response::{ApiErrorResponse, LeaveDaysResponse, LeaveRequestView, TerbilangResponse};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

const DOCUMENT_TEMPLATE_HEADER: HeaderName = HeaderName::from_static("x-document-template");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route(
            "/employees/:id/leave-requests",
            get(list_leave_requests).post(create_leave_request),
        )
        .route(
            "/employees/:id/leave-balance",
            get(get_leave_balance)
                .post(create_leave_balance)
                .put(put_leave_balance),
        )
        .route("/employees/:id/leave-report", get(leave_report))
        .route(
            "/leave-requests/:id",
            get(get_leave_request)
                .put(update_leave_request)
                .delete(delete_leave_request),
        )
        .route("/leave-requests/:id/letter", get(leave_letter))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/holidays", get(list_holidays).post(create_holiday))
        .route("/holidays/:date", put(update_holiday).delete(delete_holiday))
        .route("/letterheads", get(list_letterheads).post(create_letterhead))
        .route(
            "/letterheads/:id",
            get(get_letterhead)
                .put(update_letterhead)
                .delete(delete_letterhead),
        )
        .route("/letters", get(list_letters).post(create_letter))
        .route(
            "/letters/:id",
            get(get_letter).put(update_letter).delete(delete_letter),
        )
        .route("/letters/:id/document", get(letter_document))
        .route("/leave-days", post(calculate_leave_days))
        .route("/terbilang/:n", get(terbilang))
        .with_state(state)
}

/// Logs a failed operation and converts it to an error response.
fn fail(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    error.into()
}

/// Logs rejected request input (body, path or query) and converts it.
fn reject<R>(correlation_id: Uuid, rejection: R) -> ApiErrorResponse
where
    R: std::fmt::Display + Into<ApiErrorResponse>,
{
    warn!(correlation_id = %correlation_id, error = %rejection, "Invalid request input");
    rejection.into()
}

fn leave_request_view(request: LeaveRequest, holidays: &HolidayCalendar) -> LeaveRequestView {
    let period = request.period;
    LeaveRequestView {
        effective_days: effective_leave_days(&period, holidays),
        calendar_days: calendar_days_inclusive(Some(period.start()), Some(period.end())),
        request,
    }
}

/// Encodes the letterhead image, if any, off the store lock.
async fn letterhead_image(image_path: Option<String>) -> Option<String> {
    match image_path {
        Some(path) => letterhead_data_uri(path).await,
        None => None,
    }
}

/// Renders a document and wraps it as a download.
fn document_response<D: Document>(
    state: &AppState,
    document: &D,
    correlation_id: Uuid,
    started: Instant,
) -> ApiResult<Response> {
    let rendered = state
        .renderer()
        .render(document)
        .map_err(|e| fail(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        template = document.template(),
        filename = %rendered.filename,
        bytes = rendered.body.len(),
        duration_us = started.elapsed().as_micros(),
        "Document rendered"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, rendered.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", rendered.filename),
            ),
            (DOCUMENT_TEMPLATE_HEADER, document.template().to_string()),
        ],
        rendered.body,
    )
        .into_response())
}

// =============================================================================
// Employees
// =============================================================================

async fn list_employees(
    State(state): State<AppState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| reject(correlation_id, r))?;

    let page = state.store().read().await.list_employees(&query);
    info!(
        correlation_id = %correlation_id,
        page = page.page,
        returned = page.data.len(),
        total = page.total,
        "Listed employees"
    );
    Ok(Json(page))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let employee = state
        .store()
        .write()
        .await
        .create_employee(draft)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, employee_id = employee.id, "Employee registered");
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    let employee = state
        .store()
        .read()
        .await
        .employee(id)
        .map_err(|e| fail(correlation_id, e))?;
    Ok(Json(employee))
}

async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let employee = state
        .store()
        .write()
        .await
        .update_employee(id, draft)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, employee_id = id, "Employee updated");
    Ok(Json(employee))
}

async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    state
        .store()
        .write()
        .await
        .delete_employee(id)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, employee_id = id, "Employee removed");
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Leave requests
// =============================================================================

async fn list_leave_requests(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(employee_id) = id.map_err(|r| reject(correlation_id, r))?;

    let store = state.store().read().await;
    let requests = store
        .leave_requests_for(employee_id)
        .map_err(|e| fail(correlation_id, e))?;
    let holidays = store.holiday_calendar();
    drop(store);

    let views: Vec<LeaveRequestView> = requests
        .into_iter()
        .map(|r| leave_request_view(r, &holidays))
        .collect();
    info!(
        correlation_id = %correlation_id,
        employee_id,
        count = views.len(),
        "Listed leave requests"
    );
    Ok(Json(views))
}

async fn create_leave_request(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<LeaveRequestDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(employee_id) = id.map_err(|r| reject(correlation_id, r))?;
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let mut store = state.store().write().await;
    let request = store
        .create_leave_request(employee_id, draft)
        .map_err(|e| fail(correlation_id, e))?;
    let view = leave_request_view(request, &store.holiday_calendar());
    drop(store);

    info!(
        correlation_id = %correlation_id,
        employee_id,
        leave_request_id = view.request.id,
        effective_days = view.effective_days,
        "Leave request filed"
    );
    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_leave_request(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    let store = state.store().read().await;
    let request = store
        .leave_request(id)
        .map_err(|e| fail(correlation_id, e))?;
    Ok(Json(leave_request_view(request, &store.holiday_calendar())))
}

async fn update_leave_request(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<LeaveRequestDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let mut store = state.store().write().await;
    let request = store
        .update_leave_request(id, draft)
        .map_err(|e| fail(correlation_id, e))?;
    let view = leave_request_view(request, &store.holiday_calendar());
    drop(store);

    info!(
        correlation_id = %correlation_id,
        leave_request_id = id,
        effective_days = view.effective_days,
        "Leave request amended"
    );
    Ok(Json(view))
}

async fn delete_leave_request(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    state
        .store()
        .write()
        .await
        .delete_leave_request(id)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, leave_request_id = id, "Leave request withdrawn");
    Ok(StatusCode::NO_CONTENT)
}

async fn leave_letter(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Response> {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    let store = state.store().read().await;
    let lookup = || -> Result<_, EngineError> {
        let request = store.leave_request(id)?;
        let employee = store.employee(request.employee_id)?;
        let signer = request
            .letter
            .signer_id
            .map(|signer_id| store.employee(signer_id))
            .transpose()?;
        let image_path = request
            .letter
            .letterhead_id
            .map(|letterhead_id| store.letterhead(letterhead_id))
            .transpose()?
            .map(|letterhead| letterhead.image_path);
        Ok((request, employee, signer, image_path))
    };
    let (request, employee, signer, image_path) =
        lookup().map_err(|e| fail(correlation_id, e))?;
    let holidays = store.holiday_calendar();
    drop(store);

    let document = LeaveLetterDocument::assemble(
        request,
        employee,
        signer.as_ref(),
        letterhead_image(image_path).await,
        &holidays,
        state.config().office(),
    );
    document_response(&state, &document, correlation_id, started)
}

// =============================================================================
// Leave balances and reports
// =============================================================================

async fn get_leave_balance(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(employee_id) = id.map_err(|r| reject(correlation_id, r))?;

    let balance = state
        .store()
        .read()
        .await
        .leave_balance(employee_id)
        .and_then(|b| b.ok_or(EngineError::LeaveBalanceNotFound { employee_id }))
        .map_err(|e| fail(correlation_id, e))?;
    Ok(Json(balance))
}

async fn create_leave_balance(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<LeaveBalanceRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(employee_id) = id.map_err(|r| reject(correlation_id, r))?;
    let Json(request) = payload.map_err(|r| reject(correlation_id, r))?;

    let buckets = request.into_buckets(state.config().leave_policy().annual_allowance);
    let balance = state
        .store()
        .write()
        .await
        .create_leave_balance(employee_id, buckets)
        .map_err(|e| fail(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        employee_id,
        total = balance.total(),
        "Leave balance opened"
    );
    Ok((StatusCode::CREATED, Json(balance)))
}

async fn put_leave_balance(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<LeaveBalanceRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(employee_id) = id.map_err(|r| reject(correlation_id, r))?;
    let Json(request) = payload.map_err(|r| reject(correlation_id, r))?;

    let buckets = request.into_buckets(state.config().leave_policy().annual_allowance);
    let balance = state
        .store()
        .write()
        .await
        .put_leave_balance(employee_id, buckets)
        .map_err(|e| fail(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        employee_id,
        total = balance.total(),
        "Leave balance saved"
    );
    Ok(Json(balance))
}

async fn leave_report(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    query: Result<Query<LeaveReportQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let Path(employee_id) = id.map_err(|r| reject(correlation_id, r))?;
    let Query(query) = query.map_err(|r| reject(correlation_id, r))?;
    let keyword = &state.config().leave_policy().report_signer_keyword;

    let store = state.store().read().await;
    let lookup = || -> Result<_, EngineError> {
        let employee = store.employee(employee_id)?;
        let requests = store.leave_requests_for(employee_id)?;
        let balance = store.leave_balance(employee_id)?;
        let signer = match query.signer_id {
            Some(signer_id) => Some(store.employee(signer_id)?),
            None => store.find_by_position(keyword),
        };
        Ok((employee, requests, balance, signer))
    };
    let (employee, requests, balance, signer) =
        lookup().map_err(|e| fail(correlation_id, e))?;
    let holidays = store.holiday_calendar();
    drop(store);

    let document = LeaveReportDocument::assemble(
        employee,
        &requests,
        balance,
        &holidays,
        signer.as_ref(),
        state.config().office(),
        Local::now().date_naive(),
    );
    document_response(&state, &document, correlation_id, started)
}

// =============================================================================
// Holidays
// =============================================================================

async fn list_holidays(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().read().await.holidays())
}

async fn create_holiday(
    State(state): State<AppState>,
    payload: Result<Json<Holiday>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(holiday) = payload.map_err(|r| reject(correlation_id, r))?;

    let holiday = state
        .store()
        .write()
        .await
        .add_holiday(holiday)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, date = %holiday.date, "Holiday registered");
    Ok((StatusCode::CREATED, Json(holiday)))
}

async fn update_holiday(
    State(state): State<AppState>,
    date: Result<Path<NaiveDate>, PathRejection>,
    payload: Result<Json<Holiday>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(date) = date.map_err(|r| reject(correlation_id, r))?;
    let Json(holiday) = payload.map_err(|r| reject(correlation_id, r))?;

    let holiday = state
        .store()
        .write()
        .await
        .update_holiday(date, holiday)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, from = %date, date = %holiday.date, "Holiday changed");
    Ok(Json(holiday))
}

async fn delete_holiday(
    State(state): State<AppState>,
    date: Result<Path<NaiveDate>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(date) = date.map_err(|r| reject(correlation_id, r))?;

    state
        .store()
        .write()
        .await
        .remove_holiday(date)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, date = %date, "Holiday removed");
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Letterheads and letters
// =============================================================================

async fn list_letterheads(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store().read().await.letterheads())
}

async fn create_letterhead(
    State(state): State<AppState>,
    payload: Result<Json<LetterheadDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let letterhead = state
        .store()
        .write()
        .await
        .create_letterhead(draft)
        .map_err(|e| fail(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        letterhead_id = letterhead.id,
        "Letterhead registered"
    );
    Ok((StatusCode::CREATED, Json(letterhead)))
}

async fn get_letterhead(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    let letterhead = state
        .store()
        .read()
        .await
        .letterhead(id)
        .map_err(|e| fail(correlation_id, e))?;
    Ok(Json(letterhead))
}

async fn update_letterhead(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<LetterheadDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let letterhead = state
        .store()
        .write()
        .await
        .update_letterhead(id, draft)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, letterhead_id = id, "Letterhead changed");
    Ok(Json(letterhead))
}

async fn delete_letterhead(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    state
        .store()
        .write()
        .await
        .delete_letterhead(id)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, letterhead_id = id, "Letterhead removed");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_letters(
    State(state): State<AppState>,
    query: Result<Query<LetterListQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| reject(correlation_id, r))?;

    Ok(Json(state.store().read().await.list_letters(query.kind)))
}

async fn create_letter(
    State(state): State<AppState>,
    payload: Result<Json<LetterDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let letter = state
        .store()
        .write()
        .await
        .create_letter(draft)
        .map_err(|e| fail(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        letter_id = letter.id,
        kind = ?letter.details.kind,
        "Letter recorded"
    );
    Ok((StatusCode::CREATED, Json(letter)))
}

async fn get_letter(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    let letter = state
        .store()
        .read()
        .await
        .letter(id)
        .map_err(|e| fail(correlation_id, e))?;
    Ok(Json(letter))
}

async fn update_letter(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<LetterDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let letter = state
        .store()
        .write()
        .await
        .update_letter(id, draft)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, letter_id = id, "Letter amended");
    Ok(Json(letter))
}

async fn delete_letter(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    state
        .store()
        .write()
        .await
        .delete_letter(id)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, letter_id = id, "Letter removed");
    Ok(StatusCode::NO_CONTENT)
}

async fn letter_document(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Response> {
    let correlation_id = Uuid::new_v4();
    let started = Instant::now();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    let store = state.store().read().await;
    let lookup = || -> Result<_, EngineError> {
        let letter = store.letter(id)?;
        let details = &letter.details;
        let signer = details
            .signer_id
            .map(|signer_id| store.employee(signer_id))
            .transpose()?;
        let participants = details
            .participant_ids
            .iter()
            .map(|participant_id| store.employee(*participant_id))
            .collect::<Result<Vec<_>, _>>()?;
        let student = details
            .student_id
            .map(|student_id| store.student(student_id))
            .transpose()?;
        let image_path = details
            .letterhead_id
            .map(|letterhead_id| store.letterhead(letterhead_id))
            .transpose()?
            .map(|letterhead| letterhead.image_path);
        Ok((letter, signer, participants, student, image_path))
    };
    let (letter, signer, participants, student, image_path) =
        lookup().map_err(|e| fail(correlation_id, e))?;
    drop(store);

    let document = LetterDocument::assemble(
        letter,
        signer.as_ref(),
        participants,
        student,
        letterhead_image(image_path).await,
        state.config().office(),
    );
    document_response(&state, &document, correlation_id, started)
}

// =============================================================================
// Students
// =============================================================================

async fn list_students(
    State(state): State<AppState>,
    query: Result<Query<StudentListQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = query.map_err(|r| reject(correlation_id, r))?;

    let students = state.store().read().await.list_students(query.q.as_deref());
    info!(correlation_id = %correlation_id, returned = students.len(), "Listed students");
    Ok(Json(students))
}

async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let student = state
        .store()
        .write()
        .await
        .create_student(draft)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, student_id = student.id, "Student registered");
    Ok((StatusCode::CREATED, Json(student)))
}

async fn get_student(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    let student = state
        .store()
        .read()
        .await
        .student(id)
        .map_err(|e| fail(correlation_id, e))?;
    Ok(Json(student))
}

async fn update_student(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<StudentDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;
    let Json(draft) = payload.map_err(|r| reject(correlation_id, r))?;

    let student = state
        .store()
        .write()
        .await
        .update_student(id, draft)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, student_id = id, "Student updated");
    Ok(Json(student))
}

async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    let Path(id) = id.map_err(|r| reject(correlation_id, r))?;

    state
        .store()
        .write()
        .await
        .delete_student(id)
        .map_err(|e| fail(correlation_id, e))?;
    info!(correlation_id = %correlation_id, student_id = id, "Student removed");
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Calculators
// =============================================================================

/// Handler for POST /leave-days.
///
/// Counts business days in an ad-hoc range without storing anything.
async fn calculate_leave_days(
    State(state): State<AppState>,
    payload: Result<Json<LeaveDaysRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|r| reject(correlation_id, r))?;

    let start_time = Instant::now();
    let mut holidays = if request.use_registered_holidays {
        state.store().read().await.holiday_calendar()
    } else {
        HolidayCalendar::new()
    };
    holidays.extend(request.extra_holidays);

    let effective_days =
        count_effective_leave_days(request.start_date, request.end_date, &holidays);
    let response = LeaveDaysResponse {
        effective_days,
        effective_days_words: spell_number(u64::from(effective_days)),
        calendar_days: calendar_days_inclusive(request.start_date, request.end_date).max(0),
        holidays_considered: holidays.len(),
    };

    info!(
        correlation_id = %correlation_id,
        effective_days,
        holidays = holidays.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Leave days calculated"
    );
    Ok(Json(response))
}

/// Handler for GET /terbilang/:n.
async fn terbilang(n: Result<Path<u64>, PathRejection>) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Path(number) = n.map_err(|r| reject(correlation_id, r))?;

    Ok(Json(TerbilangResponse {
        number,
        words: spell_number(number),
    }))
}
