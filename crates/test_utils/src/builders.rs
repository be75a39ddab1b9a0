//! Test Data Builders
//!
//! Builders start from the fixtures and let a test override only the
//! fields it cares about. Each one can produce the domain form or the JSON
//! request body the HTTP layer accepts.

use chrono::NaiveDateTime;
use serde_json::{json, Map, Value};

use core_kernel::temporal::format_local_datetime;
use core_kernel::{ClientId, PolicyId};
use domain_client::ClientForm;
use domain_policy::{ClientRef, Policy, PolicyForm};

use crate::fixtures::{ClientFixtures, PolicyFixtures, TemporalFixtures};

/// Builder for client forms and request bodies
#[derive(Debug, Clone)]
pub struct ClientFormBuilder {
    form: ClientForm,
}

impl Default for ClientFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientFormBuilder {
    pub fn new() -> Self {
        Self { form: ClientFixtures::form() }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.form.name = Some(name.into());
        self
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.form.cpf = Some(cpf.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.form.city = Some(city.into());
        self
    }

    pub fn uf(mut self, uf: impl Into<String>) -> Self {
        self.form.uf = Some(uf.into());
        self
    }

    /// Drops the named field from the form and payload
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "name" => self.form.name = None,
            "cpf" => self.form.cpf = None,
            "city" => self.form.city = None,
            "uf" => self.form.uf = None,
            other => panic!("unknown client field {other}"),
        }
        self
    }

    pub fn build(self) -> ClientForm {
        self.form
    }

    /// JSON body for `POST`/`PUT /api/clients`; absent fields are omitted
    pub fn payload(self) -> Value {
        client_payload(&self.form)
    }
}

/// JSON request body carrying the fields of a client form
pub fn client_payload(form: &ClientForm) -> Value {
    let mut body = Map::new();
    for (key, value) in [
        ("name", &form.name),
        ("cpf", &form.cpf),
        ("city", &form.city),
        ("uf", &form.uf),
    ] {
        if let Some(value) = value {
            body.insert(key.to_string(), Value::String(value.clone()));
        }
    }
    Value::Object(body)
}

/// Builder for policy forms and request bodies
#[derive(Debug, Clone)]
pub struct PolicyFormBuilder {
    form: PolicyForm,
}

impl PolicyFormBuilder {
    /// Starts from the fixture form referencing `client_id`
    pub fn for_client(client_id: ClientId) -> Self {
        Self { form: PolicyFixtures::form(client_id) }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.form.number = Some(number);
        self
    }

    pub fn term(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.form.effective_date_start_at = Some(start);
        self.form.effective_date_end_at = Some(end);
        self
    }

    pub fn vehicle_plate(mut self, plate: impl Into<String>) -> Self {
        self.form.vehicle_plate = Some(plate.into());
        self
    }

    /// Keeps the client object but removes its id
    pub fn client_without_id(mut self) -> Self {
        self.form.client = Some(ClientRef::default());
        self
    }

    pub fn without_client(mut self) -> Self {
        self.form.client = None;
        self
    }

    pub fn build(self) -> PolicyForm {
        self.form
    }

    /// JSON body for `POST`/`PUT /api/policies`; `number` is never sent
    pub fn payload(self) -> Value {
        let mut body = Map::new();
        if let Some(start) = self.form.effective_date_start_at {
            body.insert("effectiveDateStartAt".into(), json!(format_local_datetime(&start)));
        }
        if let Some(end) = self.form.effective_date_end_at {
            body.insert("effectiveDateEndAt".into(), json!(format_local_datetime(&end)));
        }
        if let Some(plate) = self.form.vehicle_plate {
            body.insert("vehiclePlate".into(), json!(plate));
        }
        if let Some(client) = self.form.client {
            body.insert("client".into(), json!({ "id": client.id }));
        }
        Value::Object(body)
    }
}

/// Builder for stored policy records
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    pub fn new(number: i32, client_id: ClientId) -> Self {
        Self {
            policy: Policy {
                id: None,
                number,
                effective_date_start_at: TemporalFixtures::policy_start(),
                effective_date_end_at: TemporalFixtures::policy_end(),
                vehicle_plate: PolicyFixtures::PLATE.to_string(),
                client_id,
            },
        }
    }

    pub fn id(mut self, id: PolicyId) -> Self {
        self.policy.id = Some(id);
        self
    }

    pub fn term(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.policy.effective_date_start_at = start;
        self.policy.effective_date_end_at = end;
        self
    }

    pub fn build(self) -> Policy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_payload_omits_absent_fields() {
        let payload = ClientFormBuilder::new().without("uf").payload();
        assert!(payload.get("uf").is_none());
        assert_eq!(payload["cpf"], "728.687.544-22");
    }

    #[test]
    fn test_blank_form_payload_keeps_empty_strings() {
        let payload = client_payload(&ClientFixtures::blank_form());
        assert_eq!(payload["name"], "");
        assert_eq!(payload["uf"], "");
    }

    #[test]
    fn test_policy_payload_uses_wire_names() {
        let payload = PolicyFormBuilder::for_client(ClientId::new("c1")).payload();
        assert_eq!(payload["vehiclePlate"], "ABC1D23");
        assert_eq!(payload["client"]["id"], "c1");
        assert_eq!(payload["effectiveDateStartAt"], "2024-01-01T00:00:00");
        assert!(payload.get("number").is_none());
    }

    #[test]
    fn test_client_without_id_payload() {
        let payload = PolicyFormBuilder::for_client(ClientId::new("c1"))
            .client_without_id()
            .payload();
        assert!(payload["client"]["id"].is_null());
    }
}
