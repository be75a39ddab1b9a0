//! Property-Based Test Generators
//!
//! proptest strategies that keep domain invariants (valid CPF checksums,
//! non-empty fields), plus `fake`-backed one-off data with Brazilian names
//! and places.

use chrono::{Duration, NaiveDateTime};
use fake::faker::address::raw::CityName;
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use fake::Fake;
use proptest::prelude::*;

use domain_client::ClientForm;

use crate::fixtures::TemporalFixtures;

/// The 27 Brazilian federative units
pub const UFS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA",
    "PB", "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Mod-11 check digit, weighted from `len + 1` down to 2
fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits.iter().enumerate().map(|(i, d)| d * (top - i as u32)).sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

/// Completes nine base digits into a bare 11-digit CPF
pub fn cpf_from_base(base: &[u32]) -> String {
    let mut digits = base.to_vec();
    digits.push(check_digit(&digits));
    digits.push(check_digit(&digits));
    digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect()
}

/// Formats a bare CPF as `000.000.000-00`
pub fn punctuate_cpf(bare: &str) -> String {
    if bare.len() != 11 {
        return bare.to_string();
    }
    format!("{}.{}.{}-{}", &bare[0..3], &bare[3..6], &bare[6..9], &bare[9..11])
}

/// Strategy for bare valid CPFs
pub fn valid_cpf_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..10, 9)
        .prop_filter("repeated digit", |d| d.iter().any(|&x| x != d[0]))
        .prop_map(|base| cpf_from_base(&base))
}

/// Strategy for valid CPFs, punctuated or not
pub fn any_format_cpf_strategy() -> impl Strategy<Value = String> {
    (valid_cpf_strategy(), any::<bool>())
        .prop_map(|(bare, punctuated)| if punctuated { punctuate_cpf(&bare) } else { bare })
}

/// Strategy for state abbreviations
pub fn uf_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(UFS.to_vec())
}

/// Strategy for complete, valid client forms
pub fn client_form_strategy() -> impl Strategy<Value = ClientForm> {
    (
        "[A-Z][a-z]{2,12} [A-Z][a-z]{2,12}",
        any_format_cpf_strategy(),
        "[A-Z][a-z]{3,15}",
        uf_strategy(),
    )
        .prop_map(|(name, cpf, city, uf)| ClientForm {
            name: Some(name),
            cpf: Some(cpf),
            city: Some(city),
            uf: Some(uf.to_string()),
        })
}

/// Strategy for Mercosul-format plates (`ABC1D23`)
pub fn plate_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}[0-9][A-Z][0-9]{2}"
}

/// Strategy for policy terms: start plus a positive length in days
pub fn term_strategy() -> impl Strategy<Value = (NaiveDateTime, NaiveDateTime)> {
    (-3650i64..3650, 1i64..1100).prop_map(|(offset, length)| {
        let start = TemporalFixtures::policy_start() + Duration::days(offset);
        (start, start + Duration::days(length))
    })
}

/// A random valid client form with a pt-BR name and city
pub fn fake_client_form() -> ClientForm {
    let base: Vec<u32> = loop {
        let candidate: Vec<u32> = (0..9).map(|_| (0u32..10).fake::<u32>()).collect();
        if candidate.iter().any(|&d| d != candidate[0]) {
            break candidate;
        }
    };
    ClientForm {
        name: Some(Name(PT_BR).fake()),
        cpf: Some(punctuate_cpf(&cpf_from_base(&base))),
        city: Some(CityName(PT_BR).fake()),
        uf: Some(UFS[(0..UFS.len()).fake::<usize>()].to_string()),
    }
}
