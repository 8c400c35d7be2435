//! AWS Lambda handler for investment comparisons
//!
//! Accepts `initialInvestment`, `monthlyInvestment` and `timeInvestment` either
//! as query-string parameters or as a JSON body and returns the comparison
//! report. Rejected requests get a 400 with `{"error": ..., "code": ...}`.
//!
//! Supports Lambda Function URLs for direct HTTP access. Rates are read from
//! `SELIC_ANNUAL_RATE` / `ARCA_ANNUAL_RATE` on every invocation.

use aws_lambda_events::event::lambda_function_urls::{
    LambdaFunctionUrlRequest, LambdaFunctionUrlResponse,
};
use aws_lambda_events::http::{header, HeaderMap, HeaderValue};
use investment_compare::{ComparisonRequest, RateConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{error, info};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    code: &'a str,
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers
}

fn response(status_code: i64, body: Option<String>) -> LambdaFunctionUrlResponse {
    let mut headers = cors_headers();
    if body.is_some() {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    LambdaFunctionUrlResponse {
        status_code,
        headers,
        body,
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_response(
    status_code: i64,
    message: String,
    code: &str,
) -> Result<LambdaFunctionUrlResponse, Error> {
    let body = serde_json::to_string(&ErrorBody { error: message, code })?;
    Ok(response(status_code, Some(body)))
}

/// Read the comparison fields from a JSON body, falling back to the query string
fn parse_request(
    event: &LambdaFunctionUrlRequest,
) -> Result<ComparisonRequest, serde_json::Error> {
    match event.body.as_deref() {
        Some(body) if !event.is_base64_encoded && !body.trim().is_empty() => {
            serde_json::from_str(body)
        }
        _ => Ok(ComparisonRequest::from_params(&event.query_string_parameters)),
    }
}

/// Lambda handler function
async fn handler(
    event: LambdaEvent<LambdaFunctionUrlRequest>,
) -> Result<LambdaFunctionUrlResponse, Error> {
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, None));
    }

    let comparison_request = match parse_request(&request) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e), "invalid_json"),
    };

    let rates = match RateConfig::from_env() {
        Ok(rates) => rates,
        Err(e) => {
            error!("rate configuration rejected: {}", e);
            return error_response(500, e.to_string(), "invalid_configuration");
        }
    };

    match comparison_request.compare(&rates) {
        Ok(report) => {
            info!("comparison served for {} months", report.months);
            Ok(response(200, Some(serde_json::to_string(&report)?)))
        }
        Err(e) => error_response(400, e.to_string(), e.code()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
