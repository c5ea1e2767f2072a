//! Placeholder tokens and random names for generated BPMN, DMN and form fixtures.

use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;

pub const PLACEHOLDER_ID: &str = "PLACEHOLDER_ID";
pub const PLACEHOLDER_NAME: &str = "PLACEHOLDER_NAME";
pub const PLACEHOLDER_PATH: &str = "PLACEHOLDER_PATH";
pub const PLACEHOLDER_FORM_KEY: &str = "PLACEHOLDER_FORM_KEY";
pub const PLACEHOLDER_DMN_KEY: &str = "PLACEHOLDER_DMN_KEY";

pub const AUTO_DATA_PREFIX: &str = "AUTO_DF";
pub const AUTO_DATA_INT_PREFIX: &str = "AUTO_DF_INT";
pub const AUTO_OP_PREFIX: &str = "AUTO_OP";
pub const AUTO_CP_PREFIX: &str = "AUTO_CP";
pub const AUTO_LC_INT_PREFIX: &str = "AUTO_LC_INT";

const ALPHABETIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// `Process_<5 alphanumerics>_AUTO`
pub fn process_definition_key() -> String {
    format!("Process_{}_AUTO", random_alphanumeric(5))
}

/// `ProcessName_<5 alphanumerics>_AUTO`
pub fn process_definition_name() -> String {
    format!("ProcessName_{}_AUTO", random_alphanumeric(5))
}

/// `<10 letters>AUTO`
pub fn form_key() -> String {
    format!("{}AUTO", random_alphabetic(10))
}

/// `AUTOValidationRule<5 alphanumerics>`
pub fn decision_definition_key() -> String {
    format!("AUTOValidationRule{}", random_alphanumeric(5))
}

/// `ValidationRule_<5 alphanumerics>_AUTO`
pub fn decision_definition_name() -> String {
    format!("ValidationRule_{}_AUTO", random_alphanumeric(5))
}

pub fn random_alphanumeric(len: usize) -> String {
    Alphanumeric.sample_string(&mut rand::thread_rng(), len)
}

pub fn random_alphabetic(len: usize) -> String {
    random_alphabetic_with(&mut rand::thread_rng(), len)
}

pub fn random_alphabetic_with<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABETIC[rng.gen_range(0..ALPHABETIC.len())] as char)
        .collect()
}

/// Lowercase ASCII letters, the alphabet used for human-looking name suffixes.
pub fn random_lowercase(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn middle<'a>(value: &'a str, prefix: &str, suffix: &str) -> &'a str {
        value
            .strip_prefix(prefix)
            .and_then(|v| v.strip_suffix(suffix))
            .unwrap()
    }

    #[test]
    fn test_process_definition_key_shape() {
        let key = process_definition_key();
        let random = middle(&key, "Process_", "_AUTO");

        assert_eq!(random.len(), 5);
        assert!(random.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_process_definition_name_shape() {
        let name = process_definition_name();
        assert_eq!(middle(&name, "ProcessName_", "_AUTO").len(), 5);
    }

    #[test]
    fn test_form_key_shape() {
        let key = form_key();
        let random = middle(&key, "", "AUTO");

        assert_eq!(random.len(), 10);
        assert!(random.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_decision_names_shape() {
        assert_eq!(middle(&decision_definition_key(), "AUTOValidationRule", "").len(), 5);
        assert_eq!(
            middle(&decision_definition_name(), "ValidationRule_", "_AUTO").len(),
            5
        );
    }

    #[test]
    fn test_random_alphabetic_is_seedable() {
        let a = random_alphabetic_with(&mut StdRng::seed_from_u64(7), 12);
        let b = random_alphabetic_with(&mut StdRng::seed_from_u64(7), 12);

        assert_eq!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_random_lowercase() {
        let value = random_lowercase(5);
        assert_eq!(value.len(), 5);
        assert!(value.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generated_keys_differ() {
        // 52^10 possibilities, a collision here means the RNG is broken
        assert_ne!(form_key(), form_key());
    }
}
