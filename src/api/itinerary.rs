use axum::{extract::State, response::Json};
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::itinerary::{
    build_prompt, clean_json_response, fallback_itinerary, unwrap_itinerary, Budget,
    ItineraryRequest,
};
use crate::AppState;

#[derive(Serialize)]
pub struct GenerateItineraryResponse {
    pub success: bool,
    pub itinerary: Value,
    /// Set when provider output failed JSON parsing and the fixed fallback
    /// was substituted. Omitted on genuine provider output.
    #[serde(skip_serializing_if = "is_false")]
    pub degraded: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

pub async fn generate_itinerary(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<GenerateItineraryResponse>, AppError> {
    let request = parse_request(&body)?;

    tracing::info!(
        destination = %request.destination,
        days = request.days,
        "received itinerary request"
    );

    let prompt = build_prompt(&request);
    let raw = state.provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "provider call failed");
        AppError::Provider(e)
    })?;

    let (itinerary, degraded) = match clean_json_response(&raw) {
        Some(document) => (unwrap_itinerary(document), false),
        None => {
            tracing::warn!("provider output was not valid JSON, substituting fallback itinerary");
            let fallback = serde_json::to_value(fallback_itinerary())
                .unwrap_or(Value::Null);
            (fallback, true)
        }
    };

    Ok(Json(GenerateItineraryResponse {
        success: true,
        itinerary,
        degraded,
    }))
}

/// Explicit upfront validation of the request body. Each required field is
/// checked individually so a missing or malformed field comes back as a 400
/// with a field-specific message rather than a generic server error.
fn parse_request(body: &Value) -> Result<ItineraryRequest, AppError> {
    let destination = require_field(body, "destination")?
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .ok_or(AppError::InvalidField {
            field: "destination",
            reason: "must be a non-empty string".to_string(),
        })?
        .to_string();

    let days = require_field(body, "days")?
        .as_u64()
        .filter(|&n| n > 0)
        .ok_or(AppError::InvalidField {
            field: "days",
            reason: "must be a positive integer".to_string(),
        })? as u32;

    let budget: Budget = serde_json::from_value(require_field(body, "budget")?.clone())
        .map_err(|_| AppError::InvalidField {
            field: "budget",
            reason: "must be a number or a string".to_string(),
        })?;

    let interests: Vec<String> = serde_json::from_value(require_field(body, "interests")?.clone())
        .map_err(|_| AppError::InvalidField {
            field: "interests",
            reason: "must be an array of strings".to_string(),
        })?;

    let travel_style = require_field(body, "travel_style")?
        .as_str()
        .ok_or(AppError::InvalidField {
            field: "travel_style",
            reason: "must be a string".to_string(),
        })?
        .to_string();

    Ok(ItineraryRequest {
        destination,
        days,
        budget,
        interests,
        travel_style,
    })
}

fn require_field<'a>(body: &'a Value, field: &'static str) -> Result<&'a Value, AppError> {
    body.get(field).ok_or(AppError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "destination": "Prague",
            "days": 2,
            "budget": "200",
            "interests": ["history", "beer gardens"],
            "travel_style": "relaxed"
        })
    }

    #[test]
    fn valid_body_parses() {
        let request = parse_request(&valid_body()).unwrap();
        assert_eq!(request.destination, "Prague");
        assert_eq!(request.days, 2);
        assert_eq!(request.interests.len(), 2);
    }

    #[test]
    fn each_missing_field_is_reported_by_name() {
        for field in ["destination", "days", "budget", "interests", "travel_style"] {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);

            let err = parse_request(&body).unwrap_err();
            assert!(
                err.to_string().contains(field),
                "expected error for {}, got {}",
                field,
                err
            );
        }
    }

    #[test]
    fn zero_days_is_rejected() {
        let mut body = valid_body();
        body["days"] = json!(0);
        assert!(parse_request(&body).is_err());
    }

    #[test]
    fn numeric_budget_is_accepted() {
        let mut body = valid_body();
        body["budget"] = json!(350);
        assert!(parse_request(&body).is_ok());
    }

    #[test]
    fn non_string_interests_are_rejected() {
        let mut body = valid_body();
        body["interests"] = json!([1, 2, 3]);
        assert!(parse_request(&body).is_err());
    }
}
