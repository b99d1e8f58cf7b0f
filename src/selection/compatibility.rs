//! Selection-time compatibility filtering.
//!
//! Every rule only fires once the part it depends on has been chosen; until
//! then the full pool passes through. Generation picks in
//! [`Category::SELECTION_ORDER`], so during generation only the forward rules
//! (dependent checked against prerequisite) ever apply. The reverse rules
//! matter when swapping a part inside an already complete build.

use crate::catalog::CategorySet;
use crate::component::{Category, Component, CpuSpecs, GpuSpecs};
use crate::types::build::{Build, PartLookup, PartialBuild};

/// Draw attributed to everything other than the CPU and GPU, in watts.
pub const BASELINE_DRAW_WATTS: f64 = 100.0;

/// Headroom demanded of a PSU when filtering candidates. Deliberately looser
/// than the reporter's recommendation so tight budgets still find a PSU.
pub const SELECTION_PSU_HEADROOM: f64 = 1.2;

/// Estimated system draw: CPU TDP + GPU TDP + baseline. Unknown TDPs count as 0.
pub fn system_draw(cpu: Option<&CpuSpecs>, gpu: Option<&GpuSpecs>) -> f64 {
    cpu.map_or(0.0, CpuSpecs::draw_watts)
        + gpu.map_or(0.0, GpuSpecs::draw_watts)
        + BASELINE_DRAW_WATTS
}

/// Minimum PSU wattage accepted during selection.
pub fn selection_psu_floor(cpu: &CpuSpecs, gpu: &GpuSpecs) -> f64 {
    (system_draw(Some(cpu), Some(gpu)) * SELECTION_PSU_HEADROOM).ceil()
}

/// Does `candidate` agree with the prerequisites already in `selected`?
pub fn is_compatible<B>(candidate: &Component, selected: &B) -> bool
where
    B: PartLookup + ?Sized,
{
    let cpu = selected.part(Category::Cpu).and_then(Component::cpu);
    let motherboard = selected.part(Category::Motherboard).and_then(Component::motherboard);
    let gpu = selected.part(Category::Gpu).and_then(Component::gpu);

    match candidate.category() {
        Category::Motherboard => match (candidate.motherboard(), cpu) {
            (Some(board), Some(cpu)) => board.socket == cpu.socket,
            _ => true,
        },
        Category::Ram => match (candidate.ram(), motherboard) {
            (Some(ram), Some(board)) => ram.ram_type == board.ram_type,
            _ => true,
        },
        Category::Case => match (candidate.case(), gpu) {
            (Some(case), Some(gpu)) => case.max_gpu_length_mm() >= gpu.length_mm(),
            _ => true,
        },
        Category::Psu => match (candidate.psu(), cpu, gpu) {
            (Some(psu), Some(cpu), Some(gpu)) => psu.rated_watts() >= selection_psu_floor(cpu, gpu),
            _ => true,
        },
        Category::Cooler => match (candidate.cooler(), cpu) {
            (Some(cooler), Some(cpu)) => cooler.supports(cpu.socket.as_deref()),
            _ => true,
        },
        Category::Cpu | Category::Gpu | Category::Storage => true,
    }
}

/// Checks a prerequisite candidate against dependents that are already chosen.
fn satisfies_dependents<B>(candidate: &Component, selected: &B) -> bool
where
    B: PartLookup + ?Sized,
{
    let motherboard = selected.part(Category::Motherboard).and_then(Component::motherboard);
    let case = selected.part(Category::Case).and_then(Component::case);
    let psu = selected.part(Category::Psu).and_then(Component::psu);
    let cooler = selected.part(Category::Cooler).and_then(Component::cooler);
    let ram = selected.part(Category::Ram).and_then(Component::ram);

    match candidate.category() {
        Category::Cpu => {
            let Some(cpu) = candidate.cpu() else { return true };
            let socket_ok = motherboard.map_or(true, |board| board.socket == cpu.socket);
            let cooler_ok = cooler.map_or(true, |cooler| cooler.supports(cpu.socket.as_deref()));
            let gpu = selected.part(Category::Gpu).and_then(Component::gpu);
            let psu_ok = match (psu, gpu) {
                (Some(psu), Some(gpu)) => psu.rated_watts() >= selection_psu_floor(cpu, gpu),
                _ => true,
            };
            socket_ok && cooler_ok && psu_ok
        }
        Category::Motherboard => match (candidate.motherboard(), ram) {
            (Some(board), Some(ram)) => ram.ram_type == board.ram_type,
            _ => true,
        },
        Category::Gpu => {
            let Some(gpu) = candidate.gpu() else { return true };
            let fits_case = case.map_or(true, |case| case.max_gpu_length_mm() >= gpu.length_mm());
            let cpu = selected.part(Category::Cpu).and_then(Component::cpu);
            let psu_ok = match (psu, cpu) {
                (Some(psu), Some(cpu)) => psu.rated_watts() >= selection_psu_floor(cpu, gpu),
                _ => true,
            };
            fits_case && psu_ok
        }
        _ => true,
    }
}

/// The slice of `category`'s pool consistent with what `selected` already holds.
pub fn compatible_pool<'a, B>(
    catalog: &'a CategorySet,
    category: Category,
    selected: &B,
) -> Vec<&'a Component>
where
    B: PartLookup + ?Sized,
{
    catalog
        .components(category)
        .iter()
        .filter(|c| is_compatible(c, selected))
        .collect()
}

/// Catalog parts that could replace `build`'s `category` slot without breaking
/// any rule against the other seven parts. The current part is included if it
/// still qualifies.
pub fn swap_candidates<'a>(
    catalog: &'a CategorySet,
    build: &Build,
    category: Category,
) -> Vec<&'a Component> {
    let mut others = PartialBuild::from(build);
    others.remove(category);

    catalog
        .components(category)
        .iter()
        .filter(|c| is_compatible(c, &others) && satisfies_dependents(c, &others))
        .collect()
}
