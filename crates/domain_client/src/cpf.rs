//! CPF (Cadastro de Pessoas Físicas) rules
//!
//! A CPF is 11 digits where the last two are mod-11 check digits over the
//! preceding ones. Clients store it without punctuation.

/// Number of digits in a CPF
pub const CPF_LENGTH: usize = 11;

/// Strips surrounding whitespace and the `.`/`-` punctuation
pub fn normalize(raw: &str) -> String {
    raw.trim().replace(['.', '-'], "")
}

/// Checks the CPF checksum
///
/// Accepts punctuated or bare input. Sequences of a single repeated digit
/// pass the checksum arithmetic but are not issued, so they are rejected.
pub fn is_valid(raw: &str) -> bool {
    let normalized = normalize(raw);
    let Some(digits) = normalized
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };

    if digits.len() != CPF_LENGTH {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Mod-11 check digit over `digits`, weighted from `len + 1` down to 2
fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize(" 728.687.544-22 "), "72868754422");
        assert_eq!(normalize("72868754422"), "72868754422");
    }

    #[test]
    fn test_known_valid_numbers() {
        for cpf in ["728.687.544-22", "629.840.675-17", "831.685.877-02", "52998224725"] {
            assert!(is_valid(cpf), "{cpf} should be valid");
        }
    }

    #[test]
    fn test_rejects_bad_check_digit() {
        assert!(!is_valid("728.687.544-23"));
    }

    #[test]
    fn test_rejects_repeated_digits() {
        assert!(!is_valid("111.111.111-11"));
        assert!(!is_valid("00000000000"));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(!is_valid(""));
        assert!(!is_valid("7286875442"));
        assert!(!is_valid("728687544221"));
        assert!(!is_valid("72868754a22"));
        assert!(!is_valid("７２８６８７５４４２２"));
    }
}
