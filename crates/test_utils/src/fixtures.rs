//! Pre-built Test Fixtures
//!
//! Consistent, predictable data for unit and HTTP tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use core_kernel::ClientId;
use domain_client::{Client, ClientForm};
use domain_policy::{ClientRef, PolicyForm};

/// CPF test data
pub struct CpfFixtures;

impl CpfFixtures {
    /// Valid CPFs in punctuated form
    pub const VALID: [&'static str; 4] = [
        "728.687.544-22",
        "629.840.675-17",
        "831.685.877-02",
        "123.456.789-09",
    ];

    /// Well-formed but failing the checksum
    pub const INVALID: [&'static str; 3] = ["111.111.111-11", "728.687.544-23", "00000000000"];

    pub fn valid() -> &'static str {
        Self::VALID[0]
    }

    /// `valid()` without punctuation, as stored
    pub fn valid_bare() -> &'static str {
        "72868754422"
    }

    pub fn invalid() -> &'static str {
        Self::INVALID[1]
    }
}

/// Fixture for local date-times
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start (Jan 1, 2024 00:00)
    pub fn policy_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    /// Standard policy end, one year after start
    pub fn policy_end() -> NaiveDateTime {
        Self::policy_start() + Duration::days(366)
    }

    /// A start/end pair around `now` that is still in force
    pub fn in_force_around(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        (now - Duration::days(30), now + Duration::days(335))
    }

    /// A start/end pair that ended before `now`
    pub fn expired_before(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        (now - Duration::days(400), now - Duration::days(35))
    }
}

/// Fixture for client data
pub struct ClientFixtures;

impl ClientFixtures {
    /// A complete form with a punctuated CPF
    pub fn form() -> ClientForm {
        ClientForm {
            name: Some("Maria Souza".to_string()),
            cpf: Some(CpfFixtures::valid().to_string()),
            city: Some("Porto Alegre".to_string()),
            uf: Some("RS".to_string()),
        }
    }

    /// A form with every field set to an empty string
    pub fn blank_form() -> ClientForm {
        ClientForm {
            name: Some(String::new()),
            cpf: Some(String::new()),
            city: Some(String::new()),
            uf: Some(String::new()),
        }
    }

    /// The unsaved client built from `form()`
    pub fn maria() -> Client {
        Client::new("Maria Souza", CpfFixtures::valid(), "Porto Alegre", "RS")
    }
}

/// Fixture for policy data
pub struct PolicyFixtures;

impl PolicyFixtures {
    pub const PLATE: &'static str = "ABC1D23";

    /// A complete form referencing `client_id`, without a number
    pub fn form(client_id: ClientId) -> PolicyForm {
        PolicyForm {
            number: None,
            effective_date_start_at: Some(TemporalFixtures::policy_start()),
            effective_date_end_at: Some(TemporalFixtures::policy_end()),
            vehicle_plate: Some(Self::PLATE.to_string()),
            client: Some(ClientRef::new(client_id)),
        }
    }
}
