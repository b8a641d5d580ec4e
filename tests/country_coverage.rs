//! Coverage tests for the country reference data.

use addrbench::country::{
    clean_up_name, country_name, display_name_for_file, is_trained_file, is_zero_shot_file,
    TRAINED_FILES, ZERO_SHOT_FILES,
};

#[test]
fn test_list_sizes_match_article() {
    assert_eq!(TRAINED_FILES.len(), 20);
    assert_eq!(ZERO_SHOT_FILES.len(), 41);
}

#[test]
fn test_lists_are_disjoint_and_unique() {
    for file in TRAINED_FILES {
        assert!(!is_zero_shot_file(file), "{} in both lists", file);
    }
    let mut all: Vec<&str> = TRAINED_FILES.iter().chain(ZERO_SHOT_FILES.iter()).copied().collect();
    let before = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), before, "duplicate file entries");
}

#[test]
fn test_every_file_resolves_to_a_display_name() {
    for file in TRAINED_FILES.iter().chain(ZERO_SHOT_FILES.iter()) {
        let name = display_name_for_file(file).unwrap();
        assert!(!name.is_empty());
        // Cleanup must have removed the long ISO forms
        assert!(!name.contains(','), "uncleaned name for {}: {}", file, name);
    }
}

#[test]
fn test_cleaned_names_for_special_cases() {
    assert_eq!(display_name_for_file("kp.p").unwrap(), "South Korea");
    assert_eq!(display_name_for_file("ru.p").unwrap(), "Russia");
    assert_eq!(display_name_for_file("ve.p").unwrap(), "Venezuela");
    assert_eq!(display_name_for_file("md.p").unwrap(), "Moldova");
    assert_eq!(display_name_for_file("ba.p").unwrap(), "Bosnia");
}

#[test]
fn test_passthrough_names_unchanged() {
    assert_eq!(display_name_for_file("de.p").unwrap(), "Germany");
    assert_eq!(display_name_for_file("za.p").unwrap(), "South Africa");
    assert_eq!(display_name_for_file("fo.p").unwrap(), "Faroe Islands");
}

#[test]
fn test_predicates_reject_codes_without_extension() {
    // Predicates match file names, not bare codes
    assert!(is_trained_file("de.p"));
    assert!(!is_trained_file("de"));
    assert!(is_zero_shot_file("jp.p"));
    assert!(!is_zero_shot_file("jp"));
}

#[test]
fn test_cleanup_applies_to_any_matching_name() {
    assert_eq!(clean_up_name("Korea, Republic of"), "South Korea");
    assert_eq!(clean_up_name("Republic of Moldova"), "Moldova");
    assert_eq!(clean_up_name("Bosnia-Herzegovina"), "Bosnia");
}

#[test]
fn test_raw_iso_names_before_cleanup() {
    assert_eq!(country_name("ru"), Some("Russian Federation"));
    assert_eq!(country_name("md"), Some("Moldova, Republic of"));
    assert_eq!(country_name("ve"), Some("Venezuela, Bolivarian Republic of"));
}
