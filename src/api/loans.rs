//! Circulation endpoints: issue and return

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        item::ItemKind,
        record::{LoanDetails, Record},
    },
};

/// Issue book request
#[derive(Deserialize, ToSchema)]
pub struct IssueBookRequest {
    pub username: String,
    pub isbn_number: String,
    /// Loan period in days; defaults to the configured policy
    pub days: Option<i64>,
}

/// Return book request
#[derive(Deserialize, ToSchema)]
pub struct ReturnBookRequest {
    pub username: String,
    pub isbn_number: String,
}

/// Issue magazine request
#[derive(Deserialize, ToSchema)]
pub struct IssueMagazineRequest {
    pub username: String,
    pub issn_number: String,
    /// Loan period in days; defaults to the configured policy
    pub days: Option<i64>,
}

/// Return magazine request
#[derive(Deserialize, ToSchema)]
pub struct ReturnMagazineRequest {
    pub username: String,
    pub issn_number: String,
}

/// Issue response with the created record
#[derive(Serialize, ToSchema)]
pub struct IssueResponse {
    pub record: Record,
    pub message: String,
}

/// Return response carrying the computed fine
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Late fee in currency units; 0 when returned inside the grace window
    pub fine: i64,
    pub message: String,
}

/// Issue a book to a member
#[utoipa::path(
    post,
    path = "/loans/books",
    tag = "loans",
    request_body = IssueBookRequest,
    responses(
        (status = 201, description = "Book issued", body = IssueResponse),
        (status = 400, description = "Member already holds this book"),
        (status = 404, description = "Unknown member or ISBN"),
        (status = 409, description = "Book out of stock")
    )
)]
pub async fn issue_book(
    State(state): State<crate::AppState>,
    Json(request): Json<IssueBookRequest>,
) -> AppResult<(StatusCode, Json<IssueResponse>)> {
    let today = Utc::now().date_naive();
    let record = state
        .services
        .circulation
        .issue(
            ItemKind::Book,
            &request.username,
            &request.isbn_number,
            request.days,
            today,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(IssueResponse {
            record,
            message: "Book issued successfully".to_string(),
        }),
    ))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/books/return",
    tag = "loans",
    request_body = ReturnBookRequest,
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 404, description = "Unknown member or ISBN, or nothing to return")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<ReturnBookRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let today = Utc::now().date_naive();
    let fine = state
        .services
        .circulation
        .return_item(ItemKind::Book, &request.username, &request.isbn_number, today)
        .await?;

    Ok(Json(ReturnResponse {
        fine,
        message: "Book returned successfully".to_string(),
    }))
}

/// Issue a magazine to a member
#[utoipa::path(
    post,
    path = "/loans/magazines",
    tag = "loans",
    request_body = IssueMagazineRequest,
    responses(
        (status = 201, description = "Magazine issued", body = IssueResponse),
        (status = 400, description = "Member already holds this magazine"),
        (status = 404, description = "Unknown member or ISSN"),
        (status = 409, description = "Magazine out of stock")
    )
)]
pub async fn issue_magazine(
    State(state): State<crate::AppState>,
    Json(request): Json<IssueMagazineRequest>,
) -> AppResult<(StatusCode, Json<IssueResponse>)> {
    let today = Utc::now().date_naive();
    let record = state
        .services
        .circulation
        .issue(
            ItemKind::Magazine,
            &request.username,
            &request.issn_number,
            request.days,
            today,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(IssueResponse {
            record,
            message: "Magazine issued successfully".to_string(),
        }),
    ))
}

/// Return a borrowed magazine
#[utoipa::path(
    post,
    path = "/loans/magazines/return",
    tag = "loans",
    request_body = ReturnMagazineRequest,
    responses(
        (status = 200, description = "Magazine returned", body = ReturnResponse),
        (status = 404, description = "Unknown member or ISSN, or nothing to return")
    )
)]
pub async fn return_magazine(
    State(state): State<crate::AppState>,
    Json(request): Json<ReturnMagazineRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let today = Utc::now().date_naive();
    let fine = state
        .services
        .circulation
        .return_item(
            ItemKind::Magazine,
            &request.username,
            &request.issn_number,
            today,
        )
        .await?;

    Ok(Json(ReturnResponse {
        fine,
        message: "Magazine returned successfully".to_string(),
    }))
}

/// Items a member currently holds (open loans)
#[utoipa::path(
    get,
    path = "/users/{username}/loans",
    tag = "loans",
    params(
        ("username" = String, Path, description = "Member username")
    ),
    responses(
        (status = 200, description = "Member's open loans", body = Vec<LoanDetails>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_user_loans(
    State(state): State<crate::AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let today = Utc::now().date_naive();
    let loans = state
        .services
        .circulation
        .member_loans(&username, today)
        .await?;
    Ok(Json(loans))
}

/// A member's full circulation history
#[utoipa::path(
    get,
    path = "/users/{username}/records",
    tag = "loans",
    params(
        ("username" = String, Path, description = "Member username")
    ),
    responses(
        (status = 200, description = "Member's records, open and closed", body = Vec<Record>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_user_records(
    State(state): State<crate::AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<Record>>> {
    let records = state.services.circulation.member_history(&username).await?;
    Ok(Json(records))
}

/// All open loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All open loans", body = Vec<LoanDetails>)
    )
)]
pub async fn list_open_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let today = Utc::now().date_naive();
    let loans = state.services.circulation.open_loans(today).await?;
    Ok(Json(loans))
}
