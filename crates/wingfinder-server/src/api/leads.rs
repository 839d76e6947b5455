//! POST /api/v1/leads/private-jet — contact-form intake forwarded to a human
//! broker. Unrelated to offer normalization: the lead is validated, logged,
//! and acknowledged; delivery to brokers happens outside this service.

use axum::{Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct PrivateJetLead {
    name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    route: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct LeadData {
    ok: bool,
    lead_id: String,
    message: &'static str,
}

pub(in crate::api) async fn submit_private_jet(
    Extension(req_id): Extension<RequestId>,
    Json(lead): Json<PrivateJetLead>,
) -> Result<Json<ApiResponse<LeadData>>, ApiError> {
    if let Err(reason) = validate_lead(&lead) {
        return Err(ApiError::new(req_id.0, "validation_error", reason));
    }

    let lead_id = format!("pj_{}", Utc::now().timestamp_millis());
    tracing::info!(
        lead_id = %lead_id,
        name = %lead.name,
        email = %lead.email,
        phone = lead.phone.as_deref().unwrap_or("-"),
        route = lead.route.as_deref().unwrap_or("-"),
        date = lead.date.as_deref().unwrap_or("-"),
        has_message = lead.message.is_some(),
        "private jet lead submitted"
    );

    Ok(Json(ApiResponse {
        data: LeadData {
            ok: true,
            lead_id,
            message: "Lead submitted to private jet brokers",
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn validate_lead(lead: &PrivateJetLead) -> Result<(), String> {
    if lead.name.trim().is_empty() {
        return Err("missing required field: name".to_owned());
    }
    let email = lead.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("missing or invalid field: email".to_owned());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_lead() -> PrivateJetLead {
        PrivateJetLead {
            name: "Ada Traveler".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: None,
            route: Some("NRT-PRG".to_owned()),
            date: Some("2025-08-26".to_owned()),
            message: None,
        }
    }

    #[test]
    fn valid_lead_passes() {
        assert!(validate_lead(&make_lead()).is_ok());
    }

    #[test]
    fn lead_requires_name() {
        let mut lead = make_lead();
        lead.name = " ".to_owned();
        assert!(validate_lead(&lead).is_err());
    }

    #[test]
    fn lead_requires_plausible_email() {
        let mut lead = make_lead();
        lead.email = "not-an-email".to_owned();
        assert!(validate_lead(&lead).is_err());
    }
}
