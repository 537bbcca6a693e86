//! Integration tests for the built-in dataset and its TOML form.

use pretty_assertions::assert_eq;
use seed_core::SeedDataset;
use seed_core::builtin;

#[test]
fn builtin_has_expected_counts() {
    let counts = builtin::dataset().counts();

    assert_eq!(counts.styles, 5);
    assert_eq!(counts.glossary, 5);
    assert_eq!(counts.stages, 2);
    assert_eq!(counts.stage_tasks, 6);
    assert_eq!(counts.prompts, 2);
    assert_eq!(counts.modules, 1);
    assert_eq!(counts.lessons, 2);
}

#[test]
fn quiet_luxury_keeps_tag_order() {
    let dataset = builtin::dataset();
    let quiet = &dataset.styles[0];

    assert_eq!(quiet.name, "Quiet Luxury");
    assert_eq!(quiet.tags, vec!["Premium", "Serif", "Warm"]);
    assert_eq!(quiet.category, "Минимализм");
}

#[test]
fn only_verstka_lacks_slang() {
    let dataset = builtin::dataset();
    let without_slang: Vec<_> = dataset
        .glossary
        .iter()
        .filter(|term| term.slang.is_none())
        .map(|term| term.term.as_str())
        .collect();

    assert_eq!(without_slang, vec!["Верстка"]);
}

#[test]
fn builtin_survives_toml_dump() {
    let dataset = builtin::dataset();
    let text = dataset.to_toml_string().unwrap();

    assert!(text.contains("[[styles]]"));
    assert!(text.contains("[[modules.lessons]]"));
    assert!(!text.contains("slang = \"\""), "absent slang must not be dumped as empty");

    let reparsed = SeedDataset::from_toml_str(&text).unwrap();
    assert_eq!(reparsed, dataset);
}
