use serde::{Deserialize, Serialize};

use crate::component::{Category, Component};
use crate::selection::compatibility::system_draw;
use crate::types::build::PartLookup;

/// Headroom the reporter recommends over estimated draw. Stricter than the
/// selection-time floor; a PSU between the two earns a warning, not an issue.
pub const RECOMMENDED_PSU_HEADROOM: f64 = 1.3;

/// Outcome of validating a build.
///
/// `issues` are hard incompatibilities; `warnings` are risks that still leave
/// the build usable. `compatible` is exactly `issues.is_empty()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(rename = "totalTDP")]
    pub total_tdp: f64,
    #[serde(rename = "recommendedPSU")]
    pub recommended_psu: f64,
}

/// Validate every pairwise rule whose two parts are both present.
///
/// Pure: the same build always yields the same report. Works on partial builds
/// too, skipping checks for empty slots.
pub fn check_compatibility<B>(build: &B) -> CompatibilityReport
where
    B: PartLookup + ?Sized,
{
    let cpu = build.part(Category::Cpu).and_then(Component::cpu);
    let motherboard = build.part(Category::Motherboard).and_then(Component::motherboard);
    let ram = build.part(Category::Ram).and_then(Component::ram);
    let gpu = build.part(Category::Gpu).and_then(Component::gpu);
    let case = build.part(Category::Case).and_then(Component::case);
    let psu = build.part(Category::Psu).and_then(Component::psu);
    let cooler = build.part(Category::Cooler).and_then(Component::cooler);

    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if let (Some(cpu), Some(board)) = (cpu, motherboard) {
        if cpu.socket != board.socket {
            issues.push("CPU socket does not match motherboard socket".to_string());
        }
    }

    if let (Some(ram), Some(board)) = (ram, motherboard) {
        if ram.ram_type != board.ram_type {
            issues.push("RAM type does not match motherboard".to_string());
        }
    }

    if let (Some(gpu), Some(case)) = (gpu, case) {
        let length = gpu.length_mm();
        let clearance = case.max_gpu_length_mm();
        if length > clearance {
            issues.push(format!(
                "GPU ({length}mm) does not fit in case (max {clearance}mm)"
            ));
        }
    }

    let total_tdp = system_draw(cpu, gpu);
    let recommended_psu = (total_tdp * RECOMMENDED_PSU_HEADROOM).ceil();

    if let (Some(_), Some(_), Some(psu)) = (cpu, gpu, psu) {
        let wattage = psu.rated_watts();
        if wattage < total_tdp {
            issues.push(format!(
                "PSU wattage ({wattage}W) is insufficient for system TDP ({total_tdp}W)"
            ));
        } else if wattage < recommended_psu {
            warnings.push(format!(
                "PSU wattage ({wattage}W) is lower than recommended ({recommended_psu}W)"
            ));
        }
    }

    if let (Some(cooler), Some(cpu)) = (cooler, cpu) {
        if !cooler.supports(cpu.socket.as_deref()) {
            issues.push("Cooler does not support CPU socket".to_string());
        }

        let rating = cooler.tdp_rating_watts();
        let cpu_tdp = cpu.draw_watts();
        if rating < cpu_tdp {
            warnings.push(format!(
                "Cooler TDP rating ({rating}W) is lower than CPU TDP ({cpu_tdp}W)"
            ));
        }
    }

    CompatibilityReport {
        compatible: issues.is_empty(),
        issues,
        warnings,
        total_tdp,
        recommended_psu,
    }
}
