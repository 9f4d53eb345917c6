use std::fmt;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// Fields of the lead form, in the order they appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    CompanyName,
    ContactName,
    PhoneNumber,
}

impl LeadField {
    pub fn label(self) -> &'static str {
        match self {
            LeadField::CompanyName => "Nome da Empresa",
            LeadField::ContactName => "Seu Nome",
            LeadField::PhoneNumber => "WhatsApp",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeadField::CompanyName => "company name",
            LeadField::ContactName => "contact name",
            LeadField::PhoneNumber => "phone number",
        };
        f.write_str(name)
    }
}

/// Errors from validating or handing off a lead
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LeadError {
    /// A required field was blank
    #[error("{0} is required")]
    MissingField(LeadField),

    /// The request could not be built
    #[error("could not build lead request: {0}")]
    Request(String),

    /// The endpoint could not be reached
    #[error("lead endpoint unreachable: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("lead endpoint rejected submission with status {0}")]
    Rejected(u16),
}

impl LeadError {
    /// Message shown inside the form.
    pub fn user_message(&self) -> String {
        match self {
            LeadError::MissingField(field) => format!("Preencha o campo \"{}\".", field.label()),
            LeadError::Request(_) | LeadError::Network(_) => {
                "Não foi possível enviar seus dados. Verifique sua conexão e tente novamente.".to_string()
            }
            LeadError::Rejected(_) => {
                "Não conseguimos registrar seu pedido agora. Tente novamente em instantes.".to_string()
            }
        }
    }
}

/// A prospective customer's contact details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub company_name: String,
    pub contact_name: String,
    pub phone_number: String,
}

impl Lead {
    /// Trims every field and rejects the first one left empty.
    pub fn from_form(company_name: &str, contact_name: &str, phone_number: &str) -> Result<Self, LeadError> {
        let required = |value: &str, field: LeadField| {
            let value = value.trim();
            if value.is_empty() {
                Err(LeadError::MissingField(field))
            } else {
                Ok(value.to_string())
            }
        };

        Ok(Self {
            company_name: required(company_name, LeadField::CompanyName)?,
            contact_name: required(contact_name, LeadField::ContactName)?,
            phone_number: required(phone_number, LeadField::PhoneNumber)?,
        })
    }
}

/// Hands the lead to the configured intake endpoint.
///
/// Without an endpoint the lead is acknowledged locally and nothing leaves
/// the browser.
pub async fn submit_lead(lead: &Lead) -> Result<(), LeadError> {
    let Some(endpoint) = config::lead_endpoint() else {
        info!("No lead endpoint configured, acknowledging lead from {} locally", lead.company_name);
        return Ok(());
    };

    let request = Request::post(endpoint)
        .json(lead)
        .map_err(|e| LeadError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| LeadError::Network(e.to_string()))?;

    if response.ok() {
        info!("Lead from {} accepted by {}", lead.company_name, endpoint);
        Ok(())
    } else {
        warn!("Lead endpoint {} answered {}", endpoint, response.status());
        Err(LeadError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_all_fields() {
        let lead = Lead::from_form("  Pizzaria do João ", "João", " (11) 99999-9999\n").unwrap();
        assert_eq!(lead.company_name, "Pizzaria do João");
        assert_eq!(lead.contact_name, "João");
        assert_eq!(lead.phone_number, "(11) 99999-9999");
    }

    #[test]
    fn rejects_blank_fields_in_form_order() {
        assert_eq!(
            Lead::from_form("", "", ""),
            Err(LeadError::MissingField(LeadField::CompanyName))
        );
        assert_eq!(
            Lead::from_form("Oficina", "   ", ""),
            Err(LeadError::MissingField(LeadField::ContactName))
        );
        assert_eq!(
            Lead::from_form("Oficina", "Ricardo", "\t"),
            Err(LeadError::MissingField(LeadField::PhoneNumber))
        );
    }

    #[test]
    fn payload_uses_snake_case_keys() {
        let lead = Lead::from_form("Clínica", "Ana Silva", "11999999999").unwrap();
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "company_name": "Clínica",
                "contact_name": "Ana Silva",
                "phone_number": "11999999999",
            })
        );
    }

    #[test]
    fn missing_field_message_names_the_label() {
        let err = LeadError::MissingField(LeadField::PhoneNumber);
        assert_eq!(err.to_string(), "phone number is required");
        assert_eq!(err.user_message(), "Preencha o campo \"WhatsApp\".");
    }

    #[test]
    fn transport_failures_share_a_message() {
        assert_eq!(
            LeadError::Network("offline".into()).user_message(),
            LeadError::Request("bad body".into()).user_message()
        );
        assert_eq!(
            LeadError::Rejected(502).to_string(),
            "lead endpoint rejected submission with status 502"
        );
    }
}
