//! HTTP route handlers for the toolkit API.
//!
//! Every endpoint reads its inputs from the query string, POST included.

use axum::Router;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::response::Json;
use axum::routing::{get, post};
use toolkit::handlers;
use toolkit::types::{
    ArithmeticRequest, ArithmeticResponse, FactorialRequest, FactorialResponse, InterestRequest,
    InterestResponse, PalindromeRequest, PalindromeResponse, TemperatureRequest,
    TemperatureResponse,
};

use crate::error::ApiError;

type QueryResult<T> = Result<Query<T>, QueryRejection>;

/// Build the API router.
pub fn api_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/calculate", post(calculate))
        .route("/temperature", get(temperature))
        .route("/factorial", post(factorial))
        .route("/interest", get(interest))
        .route("/palindrome", post(palindrome))
}

async fn health() -> &'static str {
    "ok"
}

/// POST /calculate?num1=&num2=&operation=
async fn calculate(
    query: QueryResult<ArithmeticRequest>,
) -> Result<Json<ArithmeticResponse>, ApiError> {
    let Query(req) = query?;
    Ok(Json(handlers::calculate(&req)?))
}

/// GET /temperature?fromUnit=&toUnit=&value=
async fn temperature(
    query: QueryResult<TemperatureRequest>,
) -> Result<Json<TemperatureResponse>, ApiError> {
    let Query(req) = query?;
    Ok(Json(handlers::temperature(&req)?))
}

/// POST /factorial?num=
async fn factorial(
    query: QueryResult<FactorialRequest>,
) -> Result<Json<FactorialResponse>, ApiError> {
    let Query(req) = query?;
    Ok(Json(handlers::factorial(&req)?))
}

/// GET /interest?principal=&rate=&time=
async fn interest(query: QueryResult<InterestRequest>) -> Result<Json<InterestResponse>, ApiError> {
    let Query(req) = query?;
    Ok(Json(handlers::interest(&req)?))
}

/// POST /palindrome?text=
async fn palindrome(
    query: QueryResult<PalindromeRequest>,
) -> Result<Json<PalindromeResponse>, ApiError> {
    let Query(req) = query?;
    Ok(Json(handlers::palindrome(&req)))
}
