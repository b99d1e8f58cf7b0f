mod common;

use buildsmith_core::component::Category;
use buildsmith_core::report::swap_component;
use buildsmith_core::selection::{swap_candidates, BuildGenerator};
use buildsmith_core::types::Build;

use common::*;

#[test]
fn swap_replaces_slot_and_reports_price_change() {
    let mut build = Build::from_components(vec![
        cpu("cpu-r5-5600", 129.99, "AM4", 6.0, 12.0, 4.4, 65.0),
        motherboard("mb-b550", 109.99, "AM4", "DDR4"),
    ]);

    let outcome = swap_component(&mut build, cpu("cpu-r7-5800x", 199.99, "AM4", 8.0, 16.0, 4.7, 105.0));

    assert_eq!(outcome.previous.unwrap().id.as_str(), "cpu-r5-5600");
    assert_eq!(outcome.price_difference, 70.0);
    assert!(outcome.report.compatible);
    assert_eq!(build.len(), 2);
    assert_eq!(build.get(Category::Cpu).unwrap().id.as_str(), "cpu-r7-5800x");
}

#[test]
fn swap_into_empty_slot_has_no_previous() {
    let mut build = Build::new();
    let outcome = swap_component(&mut build, storage("ssd-500", 39.99, 500.0, 3500.0));

    assert!(outcome.previous.is_none());
    assert_eq!(outcome.price_difference, 39.99);
}

#[test]
fn incompatible_swap_still_happens() {
    let mut build = Build::from_components(vec![
        cpu("cpu-r5-5600", 129.99, "AM4", 6.0, 12.0, 4.4, 65.0),
        motherboard("mb-b550", 109.99, "AM4", "DDR4"),
    ]);

    let outcome = build.swap(motherboard("mb-z790", 219.99, "LGA1700", "DDR5"));

    assert!(!outcome.report.compatible);
    assert_eq!(build.get(Category::Motherboard).unwrap().id.as_str(), "mb-z790");
}

#[test]
fn generated_build_swap_refreshes_derived_fields() {
    let catalog = mixed_catalog();
    let mut generated = BuildGenerator::default()
        .generate_with_rng(&catalog, 1500.0, &mut rng(4))
        .unwrap();

    let before_fingerprint = generated.fingerprint.clone();
    let before_total = generated.total_price;

    let candidates = swap_candidates(&catalog, &generated.build, Category::Storage);
    let replacement = candidates
        .into_iter()
        .find(|c| generated.build.get(Category::Storage).unwrap().id != c.id)
        .cloned()
        .expect("more than one storage part fits any build");

    let outcome = generated.swap(replacement.clone());

    assert!((generated.total_price - (before_total + outcome.price_difference)).abs() < 0.011);
    assert_eq!(generated.total_price, generated.build.total_price());
    assert_ne!(generated.fingerprint, before_fingerprint);
    assert_eq!(generated.fingerprint, generated.build.fingerprint());
    assert_eq!(generated.compatibility_report, outcome.report);
    assert!(generated.alternatives[&Category::Storage]
        .iter()
        .all(|c| c.id != replacement.id));
    assert!(generated.compatibility_report.compatible);
}

#[test]
fn psu_downgrade_surfaces_an_issue() {
    let catalog = mixed_catalog();
    let mut generated = BuildGenerator::default()
        .generate_with_rng(&catalog, 2000.0, &mut rng(8))
        .unwrap();

    let outcome = generated.swap(psu("psu-tiny", 19.99, 150.0, "80+"));

    assert!(!outcome.report.compatible);
    assert!(generated.compatibility_report.issues[0].starts_with("PSU wattage (150W) is insufficient"));
    assert_eq!(
        generated.budget_utilization,
        (generated.total_price / 2000.0 * 1000.0).round() / 10.0
    );
}

#[test]
fn swapping_back_through_alternatives_restores_the_build() {
    let catalog = uniform_catalog();
    let mut generated = BuildGenerator::default()
        .generate_with_rng(&catalog, 1200.0, &mut rng(13))
        .unwrap();

    let original = generated.build.get(Category::Gpu).unwrap().clone();
    let original_alts = generated.alternatives[&Category::Gpu].clone();
    let original_fingerprint = generated.fingerprint.clone();
    assert_eq!(original_alts.len(), 2);

    let replacement = original_alts[0].clone();
    let outcome = generated.swap(replacement.clone());
    assert_eq!(outcome.previous.as_ref().map(|p| &p.id), Some(&original.id));
    assert!(generated.build.contains_id(&replacement.id));
    assert!(!generated.build.contains_id(&original.id));

    let alts = &generated.alternatives[&Category::Gpu];
    assert_eq!(alts.len(), 2);
    assert!(alts.iter().any(|c| c.id == original.id));
    assert!(alts.iter().all(|c| c.id != replacement.id));
    assert!(alts.windows(2).all(|w| w[0].price <= w[1].price));

    generated.swap(original.clone());
    assert_eq!(generated.fingerprint, original_fingerprint);
    assert_eq!(generated.alternatives[&Category::Gpu], original_alts);
}

#[test]
fn swapping_in_an_outside_part_keeps_alternatives_bounded() {
    let catalog = mixed_catalog();
    let mut generated = BuildGenerator::default()
        .generate_with_rng(&catalog, 1500.0, &mut rng(2))
        .unwrap();
    let mut expected = generated.alternatives[&Category::Storage].clone();
    let before = expected.len();
    expected.push(generated.build.get(Category::Storage).unwrap().clone());
    expected.sort_by(|a, b| a.price.total_cmp(&b.price));
    expected.truncate(before);

    generated.swap(storage("ssd-free", 0.0, 128.0, 400.0));

    assert_eq!(generated.alternatives[&Category::Storage], expected);
}
