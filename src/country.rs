//! Country reference data for the evaluation.
//!
//! Two fixed allowlists drive everything: the countries the model was
//! trained on and the zero-shot countries used to test generalization.
//! Display names follow the ISO 3166 register, then go through the
//! cleanup rules used by the published comparison tables.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::{Error, Result};

/// Per-country test files the model was trained on.
pub const TRAINED_FILES: [&str; 20] = [
    "br.p", "us.p", "kp.p", "ru.p", "de.p", "fr.p", "nl.p", "ch.p", "fi.p", "es.p", "cz.p",
    "gb.p", "mx.p", "no.p", "ca.p", "it.p", "au.p", "dk.p", "pl.p", "at.p",
];

/// Per-country test files never seen during training (zero-shot).
pub const ZERO_SHOT_FILES: [&str; 41] = [
    "ie.p", "rs.p", "uz.p", "ua.p", "za.p", "py.p", "gr.p", "dz.p", "by.p", "se.p", "pt.p",
    "hu.p", "is.p", "co.p", "lv.p", "my.p", "ba.p", "in.p", "re.p", "hr.p", "ee.p", "nc.p",
    "jp.p", "nz.p", "sg.p", "ro.p", "bd.p", "sk.p", "ar.p", "kz.p", "ve.p", "id.p", "bg.p",
    "cy.p", "bm.p", "md.p", "si.p", "lt.p", "ph.p", "be.p", "fo.p",
];

/// ISO 3166 display names for every alpha-2 code in the allowlists.
static COUNTRY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("BR", "Brazil"),
        ("US", "United States"),
        ("KP", "Korea, Democratic People's Republic of"),
        ("RU", "Russian Federation"),
        ("DE", "Germany"),
        ("FR", "France"),
        ("NL", "Netherlands"),
        ("CH", "Switzerland"),
        ("FI", "Finland"),
        ("ES", "Spain"),
        ("CZ", "Czechia"),
        ("GB", "United Kingdom"),
        ("MX", "Mexico"),
        ("NO", "Norway"),
        ("CA", "Canada"),
        ("IT", "Italy"),
        ("AU", "Australia"),
        ("DK", "Denmark"),
        ("PL", "Poland"),
        ("AT", "Austria"),
        ("IE", "Ireland"),
        ("RS", "Serbia"),
        ("UZ", "Uzbekistan"),
        ("UA", "Ukraine"),
        ("ZA", "South Africa"),
        ("PY", "Paraguay"),
        ("GR", "Greece"),
        ("DZ", "Algeria"),
        ("BY", "Belarus"),
        ("SE", "Sweden"),
        ("PT", "Portugal"),
        ("HU", "Hungary"),
        ("IS", "Iceland"),
        ("CO", "Colombia"),
        ("LV", "Latvia"),
        ("MY", "Malaysia"),
        ("BA", "Bosnia and Herzegovina"),
        ("IN", "India"),
        ("RE", "Réunion"),
        ("HR", "Croatia"),
        ("EE", "Estonia"),
        ("NC", "New Caledonia"),
        ("JP", "Japan"),
        ("NZ", "New Zealand"),
        ("SG", "Singapore"),
        ("RO", "Romania"),
        ("BD", "Bangladesh"),
        ("SK", "Slovakia"),
        ("AR", "Argentina"),
        ("KZ", "Kazakhstan"),
        ("VE", "Venezuela, Bolivarian Republic of"),
        ("ID", "Indonesia"),
        ("BG", "Bulgaria"),
        ("CY", "Cyprus"),
        ("BM", "Bermuda"),
        ("MD", "Moldova, Republic of"),
        ("SI", "Slovenia"),
        ("LT", "Lithuania"),
        ("PH", "Philippines"),
        ("BE", "Belgium"),
        ("FO", "Faroe Islands"),
    ]
    .into_iter()
    .collect()
});

/// True exactly for files in [`TRAINED_FILES`].
pub fn is_trained_file(file: &str) -> bool {
    TRAINED_FILES.contains(&file)
}

/// True exactly for files in [`ZERO_SHOT_FILES`].
pub fn is_zero_shot_file(file: &str) -> bool {
    ZERO_SHOT_FILES.contains(&file)
}

/// Look up the ISO display name for an alpha-2 code (case-insensitive).
pub fn country_name(alpha2: &str) -> Option<&'static str> {
    COUNTRY_NAMES.get(alpha2.to_uppercase().as_str()).copied()
}

/// Normalize an ISO display name to the short form used in the tables.
///
/// Names not covered by a rule pass through unchanged.
pub fn clean_up_name(country: &str) -> String {
    if country.contains("Korea") {
        "South Korea".to_string()
    } else if country.contains("Russian Federation") {
        "Russia".to_string()
    } else if country.contains("Venezuela") {
        "Venezuela".to_string()
    } else if country.contains("Moldova") {
        "Moldova".to_string()
    } else if country.contains("Bosnia") {
        "Bosnia".to_string()
    } else {
        country.to_string()
    }
}

/// Resolve a `<iso2>.p` test-file name to its cleaned display name.
pub fn display_name_for_file(file: &str) -> Result<String> {
    let code = file.trim_end_matches(".p");
    let name = country_name(code).ok_or_else(|| Error::UnknownCountry(code.to_string()))?;
    Ok(clean_up_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trained_membership_exact() {
        for file in TRAINED_FILES {
            assert!(is_trained_file(file), "missing: {}", file);
        }
        assert!(!is_trained_file("ie.p"));
        assert!(!is_trained_file("br"));
        assert!(!is_trained_file(""));
    }

    #[test]
    fn test_zero_shot_membership_exact() {
        for file in ZERO_SHOT_FILES {
            assert!(is_zero_shot_file(file), "missing: {}", file);
        }
        assert!(!is_zero_shot_file("de.p"));
        assert!(!is_zero_shot_file("xx.p"));
    }

    #[test]
    fn test_allowlists_disjoint() {
        for file in TRAINED_FILES {
            assert!(!is_zero_shot_file(file), "{} in both lists", file);
        }
    }

    #[test]
    fn test_every_code_has_a_name() {
        for file in TRAINED_FILES.iter().chain(ZERO_SHOT_FILES.iter()) {
            let code = file.trim_end_matches(".p");
            assert!(country_name(code).is_some(), "no name for {}", code);
        }
    }

    #[test]
    fn test_country_name_case_insensitive() {
        assert_eq!(country_name("de"), Some("Germany"));
        assert_eq!(country_name("DE"), Some("Germany"));
        assert_eq!(country_name("De"), Some("Germany"));
        assert_eq!(country_name("zz"), None);
    }

    #[test]
    fn test_clean_up_name_rules() {
        assert_eq!(clean_up_name("Korea, Republic of"), "South Korea");
        assert_eq!(
            clean_up_name("Korea, Democratic People's Republic of"),
            "South Korea"
        );
        assert_eq!(clean_up_name("Russian Federation"), "Russia");
        assert_eq!(
            clean_up_name("Venezuela, Bolivarian Republic of"),
            "Venezuela"
        );
        assert_eq!(clean_up_name("Moldova, Republic of"), "Moldova");
        assert_eq!(clean_up_name("Bosnia and Herzegovina"), "Bosnia");
    }

    #[test]
    fn test_clean_up_name_passthrough() {
        for name in ["Germany", "New Zealand", "South Africa", "Réunion", ""] {
            assert_eq!(clean_up_name(name), name);
        }
    }

    #[test]
    fn test_display_name_for_file() {
        assert_eq!(display_name_for_file("ru.p").unwrap(), "Russia");
        assert_eq!(display_name_for_file("kp.p").unwrap(), "South Korea");
        assert_eq!(display_name_for_file("de.p").unwrap(), "Germany");
        assert!(matches!(
            display_name_for_file("zz.p"),
            Err(Error::UnknownCountry(_))
        ));
    }
}
