//! Itinerary domain: request/response shapes, the generation prompt, the
//! sanitizer for provider output, and the fixed fallback payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryRequest {
    pub destination: String,
    pub days: u32,
    pub budget: Budget,
    pub interests: Vec<String>,
    pub travel_style: String,
}

/// Budget accepts either a number or free text ("300", 300, "shoestring").
/// Currency is EUR by convention of the prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Budget {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Budget::Number(n) => write!(f, "{}", n),
            Budget::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub summary: String,
    pub total_estimated_cost: String,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub date: String,
    pub theme: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub description: String,
    pub cost: String,
    pub location: String,
    #[serde(rename = "type")]
    pub activity_type: String,
}

/// Build the natural-language generation prompt for one request.
pub fn build_prompt(request: &ItineraryRequest) -> String {
    format!(
        r#"Create a detailed {days}-day budget-friendly travel itinerary for {destination} specifically for students.

CRITICAL CONSTRAINTS:
- Total budget: {budget} EUR for entire trip
- Travel style: {travel_style}
- Interests: {interests}
- MUST be realistic and budget-friendly for students

Return ONLY valid JSON in this exact structure:
{{
    "itinerary": {{
        "summary": "Brief overview",
        "total_estimated_cost": "X-X EUR",
        "days": [
            {{
                "day": 1,
                "date": "Day 1 - Arrival",
                "theme": "Theme",
                "activities": [
                    {{
                        "time": "09:00-11:00",
                        "activity": "Activity name",
                        "description": "Description",
                        "cost": "Free or X EUR",
                        "location": "Location",
                        "type": "sightseeing/food/transport"
                    }}
                ]
            }}
        ]
    }}
}}"#,
        days = request.days,
        destination = request.destination,
        budget = request.budget,
        travel_style = request.travel_style,
        interests = request.interests.join(", "),
    )
}

/// Strip Markdown code-fence markers from provider output and attempt a
/// strict JSON parse. Returns `None` when the cleaned text is not valid
/// JSON; the caller substitutes the fallback itinerary in that case.
pub fn clean_json_response(raw: &str) -> Option<Value> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    serde_json::from_str(cleaned.trim()).ok()
}

/// The model is prompted to wrap its output in a top-level `itinerary` key;
/// unwrap it when present so the response envelope never nests twice.
pub fn unwrap_itinerary(document: Value) -> Value {
    match document {
        Value::Object(mut map) if map.contains_key("itinerary") => {
            map.remove("itinerary").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Fixed single-day placeholder substituted when provider output fails JSON
/// parsing. Not a retry; the caller marks the response as degraded.
pub fn fallback_itinerary() -> Itinerary {
    Itinerary {
        summary: "AI-generated travel itinerary".to_string(),
        total_estimated_cost: "Budget-friendly".to_string(),
        days: vec![DayPlan {
            day: 1,
            date: "Day 1".to_string(),
            theme: "City Exploration".to_string(),
            activities: vec![Activity {
                time: "10:00-12:00".to_string(),
                activity: "City Center Tour".to_string(),
                description: "Explore the main attractions".to_string(),
                cost: "Free".to_string(),
                location: "City Center".to_string(),
                activity_type: "sightseeing".to_string(),
            }],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_request() -> ItineraryRequest {
        ItineraryRequest {
            destination: "Lisbon".to_string(),
            days: 3,
            budget: Budget::Number(300.0),
            interests: vec!["food".to_string(), "museums".to_string()],
            travel_style: "backpacker".to_string(),
        }
    }

    #[test]
    fn prompt_embeds_all_request_fields() {
        let prompt = build_prompt(&sample_request());

        assert!(prompt.contains("3-day"));
        assert!(prompt.contains("Lisbon"));
        assert!(prompt.contains("300 EUR"));
        assert!(prompt.contains("food, museums"));
        assert!(prompt.contains("backpacker"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn budget_accepts_number_or_text() {
        let numeric: Budget = serde_json::from_value(json!(250)).unwrap();
        assert_eq!(numeric.to_string(), "250");

        let text: Budget = serde_json::from_value(json!("250-300")).unwrap();
        assert_eq!(text.to_string(), "250-300");
    }

    #[test]
    fn clean_strips_code_fences() {
        let fenced = "```json\n{\"itinerary\": {\"summary\": \"ok\"}}\n```";
        let bare = "{\"itinerary\": {\"summary\": \"ok\"}}";

        let from_fenced = clean_json_response(fenced).unwrap();
        let from_bare = clean_json_response(bare).unwrap();
        assert_eq!(from_fenced, from_bare);
    }

    #[test]
    fn clean_handles_unlabelled_fences() {
        let fenced = "```\n{\"days\": []}\n```";
        assert_eq!(clean_json_response(fenced).unwrap(), json!({"days": []}));
    }

    #[test]
    fn prose_fails_to_parse() {
        assert!(clean_json_response("Here is your itinerary! Day 1: ...").is_none());
        assert!(clean_json_response("").is_none());
    }

    #[test]
    fn unwrap_removes_top_level_itinerary_key() {
        let wrapped = json!({"itinerary": {"summary": "trip"}});
        assert_eq!(unwrap_itinerary(wrapped), json!({"summary": "trip"}));

        let bare = json!({"summary": "trip"});
        assert_eq!(unwrap_itinerary(bare.clone()), bare);
    }

    #[test]
    fn fallback_has_one_city_center_tour_day() {
        let fallback = fallback_itinerary();

        assert_eq!(fallback.summary, "AI-generated travel itinerary");
        assert_eq!(fallback.days.len(), 1);
        assert_eq!(fallback.days[0].day, 1);
        assert_eq!(fallback.days[0].activities.len(), 1);
        assert_eq!(fallback.days[0].activities[0].activity, "City Center Tour");
    }

    #[test]
    fn fallback_serializes_with_type_tag() {
        let value = serde_json::to_value(fallback_itinerary()).unwrap();
        assert_eq!(
            value["days"][0]["activities"][0]["type"],
            json!("sightseeing")
        );
    }
}
