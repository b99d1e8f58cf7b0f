use crate::component::{Component, Specs};

pub trait Scorer {
    /// Value for money: higher is better. Never negative.
    fn score(&self, component: &Component) -> f64;
}

/// v0: category-specific performance per dollar.
///
/// Missing spec fields fall back to conservative defaults instead of erroring.
/// A free part scores zero rather than infinity.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueScorer;

impl Scorer for ValueScorer {
    fn score(&self, component: &Component) -> f64 {
        let price = component.price;
        if price <= 0.0 {
            return 0.0;
        }

        let performance = match &component.specs {
            Specs::Cpu(cpu) => {
                cpu.cores_or_default() * cpu.threads_or_default() * cpu.boost_clock_or_default()
            }
            Specs::Gpu(gpu) => gpu.vram_or_default() * gpu.tdp_or_default(),
            Specs::Ram(ram) => ram.capacity_or_default() * ram.speed_or_default(),
            Specs::Storage(storage) => {
                storage.capacity_or_default() * storage.read_speed_or_default()
            }
            Specs::Psu(psu) => psu.wattage_or_default() * psu.efficiency_multiplier(),
            Specs::Motherboard(_) | Specs::Case(_) | Specs::Cooler(_) => 100.0,
        };

        performance / price
    }
}
