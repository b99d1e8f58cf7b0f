mod common;

use buildsmith_core::component::Category;
use buildsmith_core::report::check_compatibility;
use buildsmith_core::types::{Build, PartialBuild};

use common::*;

fn baseline() -> Build {
    Build::from_components(vec![
        cpu("cpu", 150.0, "AM4", 6.0, 12.0, 4.4, 65.0),
        motherboard("mb", 110.0, "AM4", "DDR4"),
        ram("ram", 45.0, "DDR4", 16.0, 3200.0),
        gpu("gpu", 400.0, 12.0, 220.0, 300.0),
        storage("ssd", 60.0, 1000.0, 3500.0),
        case("case", 80.0, Some(360.0)),
        psu("psu", 50.0, 450.0, "80+ Bronze"),
        cooler("cooler", 25.0, &["AM4"], 120.0),
    ])
}

#[test]
fn underrated_psu_warns_without_failing() {
    let report = check_compatibility(&baseline());

    assert_eq!(report.total_tdp, 385.0);
    assert_eq!(report.recommended_psu, 501.0);
    assert!(report.compatible);
    assert!(report.issues.is_empty());
    assert_eq!(
        report.warnings,
        vec!["PSU wattage (450W) is lower than recommended (501W)".to_string()]
    );
}

#[test]
fn report_is_pure() {
    let build = baseline();
    assert_eq!(check_compatibility(&build), check_compatibility(&build));
}

#[test]
fn each_rule_reports_its_own_issue() {
    let cases = [
        (
            cpu("cpu", 150.0, "LGA1700", 6.0, 12.0, 4.4, 65.0),
            "CPU socket does not match motherboard socket",
        ),
        (
            ram("ram", 45.0, "DDR5", 32.0, 6000.0),
            "RAM type does not match motherboard",
        ),
        (
            case("case", 60.0, Some(280.0)),
            "GPU (300mm) does not fit in case (max 280mm)",
        ),
        (
            psu("psu", 30.0, 300.0, "80+"),
            "PSU wattage (300W) is insufficient for system TDP (385W)",
        ),
    ];

    for (replacement, expected) in cases {
        let mut build = baseline();
        build.insert(replacement);
        let report = check_compatibility(&build);

        assert!(!report.compatible);
        assert!(
            report.issues.iter().any(|i| i == expected),
            "expected {expected:?} in {:?}",
            report.issues
        );
        assert_eq!(report.compatible, report.issues.is_empty());
    }
}

#[test]
fn cooler_rules() {
    let mut build = baseline();
    build.insert(cooler("cooler", 25.0, &["LGA1700"], 40.0));
    let report = check_compatibility(&build);

    assert_eq!(report.issues, vec!["Cooler does not support CPU socket".to_string()]);
    assert!(report
        .warnings
        .contains(&"Cooler TDP rating (40W) is lower than CPU TDP (65W)".to_string()));
}

#[test]
fn sufficient_psu_is_clean() {
    let mut build = baseline();
    build.insert(psu("psu", 80.0, 650.0, "80+ Gold"));
    let report = check_compatibility(&build);

    assert!(report.compatible);
    assert!(report.warnings.is_empty());
}

#[test]
fn partial_builds_skip_missing_pairs() {
    let full = baseline();
    let mut partial = PartialBuild::from(&full);
    partial.remove(Category::Motherboard);
    partial.remove(Category::Psu);

    let report = check_compatibility(&partial);
    assert!(report.compatible);
    assert!(report.warnings.is_empty());
    assert_eq!(report.total_tdp, 385.0);

    let empty = Build::new();
    let report = check_compatibility(&empty);
    assert!(report.compatible);
    assert_eq!(report.total_tdp, 100.0);
    assert_eq!(report.recommended_psu, 130.0);
}
