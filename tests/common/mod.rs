#![allow(dead_code)]

use buildsmith_core::catalog::CategorySet;
use buildsmith_core::component::{
    CaseSpecs, Component, CoolerSpecs, CpuSpecs, GpuSpecs, MotherboardSpecs, PsuSpecs, RamSpecs,
    Specs, StorageSpecs,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn part(id: &str, price: f64, specs: Specs) -> Component {
    Component::new(id, id, "Generic", price, specs).unwrap()
}

pub fn cpu(id: &str, price: f64, socket: &str, cores: f64, threads: f64, boost: f64, tdp: f64) -> Component {
    part(
        id,
        price,
        Specs::Cpu(CpuSpecs {
            socket: Some(socket.to_string()),
            cores: Some(cores),
            threads: Some(threads),
            boost_clock: Some(boost),
            tdp: Some(tdp),
        }),
    )
}

pub fn motherboard(id: &str, price: f64, socket: &str, ram_type: &str) -> Component {
    part(
        id,
        price,
        Specs::Motherboard(MotherboardSpecs {
            socket: Some(socket.to_string()),
            ram_type: Some(ram_type.to_string()),
            form_factor: Some("ATX".to_string()),
        }),
    )
}

pub fn ram(id: &str, price: f64, ram_type: &str, capacity: f64, speed: f64) -> Component {
    part(
        id,
        price,
        Specs::Ram(RamSpecs {
            ram_type: Some(ram_type.to_string()),
            capacity: Some(capacity),
            speed: Some(speed),
        }),
    )
}

pub fn gpu(id: &str, price: f64, vram: f64, tdp: f64, length: f64) -> Component {
    part(
        id,
        price,
        Specs::Gpu(GpuSpecs {
            vram: Some(vram),
            tdp: Some(tdp),
            length: Some(length),
        }),
    )
}

pub fn storage(id: &str, price: f64, capacity: f64, read_speed: f64) -> Component {
    part(
        id,
        price,
        Specs::Storage(StorageSpecs {
            capacity: Some(capacity),
            read_speed: Some(read_speed),
        }),
    )
}

pub fn case(id: &str, price: f64, max_gpu_length: Option<f64>) -> Component {
    part(id, price, Specs::Case(CaseSpecs { max_gpu_length }))
}

pub fn psu(id: &str, price: f64, wattage: f64, efficiency: &str) -> Component {
    part(
        id,
        price,
        Specs::Psu(PsuSpecs {
            wattage: Some(wattage),
            efficiency: Some(efficiency.to_string()),
        }),
    )
}

pub fn cooler(id: &str, price: f64, sockets: &[&str], tdp_rating: f64) -> Component {
    part(
        id,
        price,
        Specs::Cooler(CoolerSpecs {
            socket_support: sockets.iter().map(|s| s.to_string()).collect(),
            tdp_rating: Some(tdp_rating),
        }),
    )
}

/// A small but realistic mixed-platform catalog. Cheapest-per-category sum is
/// 609.92, though that exact combination is not compatible.
pub fn mixed_catalog() -> CategorySet {
    CategorySet::from_components(vec![
        cpu("cpu-r5-5600", 129.99, "AM4", 6.0, 12.0, 4.4, 65.0),
        cpu("cpu-r7-5800x", 199.99, "AM4", 8.0, 16.0, 4.7, 105.0),
        cpu("cpu-i5-12400f", 119.99, "LGA1700", 6.0, 12.0, 4.4, 65.0),
        cpu("cpu-i7-13700k", 359.99, "LGA1700", 16.0, 24.0, 5.4, 125.0),
        motherboard("mb-b550", 109.99, "AM4", "DDR4"),
        motherboard("mb-b450", 74.99, "AM4", "DDR4"),
        motherboard("mb-b660", 119.99, "LGA1700", "DDR4"),
        motherboard("mb-z790", 219.99, "LGA1700", "DDR5"),
        ram("ram-ddr4-16", 39.99, "DDR4", 16.0, 3200.0),
        ram("ram-ddr4-32", 74.99, "DDR4", 32.0, 3600.0),
        ram("ram-ddr5-32", 104.99, "DDR5", 32.0, 6000.0),
        gpu("gpu-rx6600", 199.99, 8.0, 132.0, 190.0),
        gpu("gpu-rtx4060", 289.99, 8.0, 115.0, 240.0),
        gpu("gpu-rtx4070", 549.99, 12.0, 200.0, 285.0),
        gpu("gpu-rx7900xt", 749.99, 20.0, 315.0, 340.0),
        storage("ssd-500", 39.99, 500.0, 3500.0),
        storage("ssd-1tb", 69.99, 1000.0, 5000.0),
        storage("hdd-2tb", 54.99, 2000.0, 180.0),
        case("case-mini", 59.99, Some(300.0)),
        case("case-mid", 89.99, Some(360.0)),
        case("case-full", 139.99, None),
        psu("psu-550", 54.99, 550.0, "80+ Bronze"),
        psu("psu-650", 89.99, 650.0, "80+ Gold"),
        psu("psu-850", 129.99, 850.0, "80+ Gold"),
        cooler("cooler-stock", 19.99, &["AM4"], 95.0),
        cooler("cooler-tower", 34.99, &["AM4", "LGA1700"], 180.0),
        cooler("cooler-aio", 119.99, &["AM4", "LGA1700"], 250.0),
    ])
}

/// Every part is compatible with every other part. Cheapest-per-category sum
/// is 500.00.
pub fn uniform_catalog() -> CategorySet {
    CategorySet::from_components(vec![
        cpu("cpu-a", 100.0, "AM4", 6.0, 12.0, 4.2, 65.0),
        cpu("cpu-b", 160.0, "AM4", 8.0, 16.0, 4.6, 105.0),
        cpu("cpu-c", 240.0, "AM4", 12.0, 24.0, 4.9, 105.0),
        motherboard("mb-a", 80.0, "AM4", "DDR4"),
        motherboard("mb-b", 120.0, "AM4", "DDR4"),
        motherboard("mb-c", 180.0, "AM4", "DDR4"),
        ram("ram-a", 40.0, "DDR4", 16.0, 3200.0),
        ram("ram-b", 70.0, "DDR4", 32.0, 3600.0),
        ram("ram-c", 120.0, "DDR4", 64.0, 3600.0),
        gpu("gpu-a", 150.0, 8.0, 130.0, 200.0),
        gpu("gpu-b", 300.0, 12.0, 170.0, 260.0),
        gpu("gpu-c", 500.0, 16.0, 200.0, 300.0),
        storage("ssd-a", 40.0, 500.0, 3500.0),
        storage("ssd-b", 70.0, 1000.0, 5000.0),
        storage("ssd-c", 130.0, 2000.0, 7000.0),
        case("case-a", 30.0, Some(400.0)),
        case("case-b", 70.0, Some(400.0)),
        case("case-c", 120.0, None),
        psu("psu-a", 40.0, 550.0, "80+ Bronze"),
        psu("psu-b", 80.0, 650.0, "80+ Gold"),
        psu("psu-c", 130.0, 850.0, "80+ Gold"),
        cooler("cooler-a", 20.0, &["AM4"], 120.0),
        cooler("cooler-b", 45.0, &["AM4"], 180.0),
        cooler("cooler-c", 100.0, &["AM4"], 250.0),
    ])
}
