use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;

/// Typed specification sheet, one variant per category.
///
/// Every field is optional: catalogs are frequently incomplete, and the
/// accessors below supply the fallback each consumer expects. Scoring and
/// compatibility use different fallbacks for the same field (a missing TDP is
/// 100W for scoring but 0W for power budgeting), so the defaults live on the
/// accessors rather than in deserialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Specs {
    Cpu(CpuSpecs),
    Motherboard(MotherboardSpecs),
    Ram(RamSpecs),
    Gpu(GpuSpecs),
    Storage(StorageSpecs),
    Case(CaseSpecs),
    Psu(PsuSpecs),
    Cooler(CoolerSpecs),
}

impl Specs {
    /// Decode a raw specs object according to the category it was filed under.
    pub fn from_value(
        category: Category,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        let value = match value {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            other => other,
        };

        Ok(match category {
            Category::Cpu => Specs::Cpu(serde_json::from_value(value)?),
            Category::Motherboard => Specs::Motherboard(serde_json::from_value(value)?),
            Category::Ram => Specs::Ram(serde_json::from_value(value)?),
            Category::Gpu => Specs::Gpu(serde_json::from_value(value)?),
            Category::Storage => Specs::Storage(serde_json::from_value(value)?),
            Category::Case => Specs::Case(serde_json::from_value(value)?),
            Category::Psu => Specs::Psu(serde_json::from_value(value)?),
            Category::Cooler => Specs::Cooler(serde_json::from_value(value)?),
        })
    }

    /// An all-defaults sheet for the given category.
    pub fn empty(category: Category) -> Self {
        match category {
            Category::Cpu => Specs::Cpu(CpuSpecs::default()),
            Category::Motherboard => Specs::Motherboard(MotherboardSpecs::default()),
            Category::Ram => Specs::Ram(RamSpecs::default()),
            Category::Gpu => Specs::Gpu(GpuSpecs::default()),
            Category::Storage => Specs::Storage(StorageSpecs::default()),
            Category::Case => Specs::Case(CaseSpecs::default()),
            Category::Psu => Specs::Psu(PsuSpecs::default()),
            Category::Cooler => Specs::Cooler(CoolerSpecs::default()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Specs::Cpu(_) => Category::Cpu,
            Specs::Motherboard(_) => Category::Motherboard,
            Specs::Ram(_) => Category::Ram,
            Specs::Gpu(_) => Category::Gpu,
            Specs::Storage(_) => Category::Storage,
            Specs::Case(_) => Category::Case,
            Specs::Psu(_) => Category::Psu,
            Specs::Cooler(_) => Category::Cooler,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CpuSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub cores: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub threads: Option<f64>,
    /// GHz.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub boost_clock: Option<f64>,
    /// Watts.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub tdp: Option<f64>,
}

impl CpuSpecs {
    pub fn cores_or_default(&self) -> f64 {
        positive_or(self.cores, 1.0)
    }

    pub fn threads_or_default(&self) -> f64 {
        positive_or(self.threads, 1.0)
    }

    pub fn boost_clock_or_default(&self) -> f64 {
        positive_or(self.boost_clock, 3.0)
    }

    /// Electrical draw used for power budgeting. Unknown counts as zero.
    pub fn draw_watts(&self) -> f64 {
        self.tdp.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MotherboardSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RamSpecs {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ram_type: Option<String>,
    /// GB.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    /// MHz.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl RamSpecs {
    pub fn capacity_or_default(&self) -> f64 {
        positive_or(self.capacity, 8.0)
    }

    pub fn speed_or_default(&self) -> f64 {
        positive_or(self.speed, 2400.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GpuSpecs {
    /// GB.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub vram: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub tdp: Option<f64>,
    /// Card length in millimetres.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl GpuSpecs {
    pub fn vram_or_default(&self) -> f64 {
        positive_or(self.vram, 4.0)
    }

    /// TDP as a performance proxy for scoring.
    pub fn tdp_or_default(&self) -> f64 {
        positive_or(self.tdp, 100.0)
    }

    pub fn draw_watts(&self) -> f64 {
        self.tdp.unwrap_or(0.0)
    }

    pub fn length_mm(&self) -> f64 {
        self.length.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorageSpecs {
    /// GB.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    /// MB/s.
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub read_speed: Option<f64>,
}

impl StorageSpecs {
    pub fn capacity_or_default(&self) -> f64 {
        positive_or(self.capacity, 256.0)
    }

    pub fn read_speed_or_default(&self) -> f64 {
        positive_or(self.read_speed, 500.0)
    }
}

/// Cases without a published clearance are assumed to fit cards this long.
pub const DEFAULT_MAX_GPU_LENGTH_MM: f64 = 400.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseSpecs {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub max_gpu_length: Option<f64>,
}

impl CaseSpecs {
    pub fn max_gpu_length_mm(&self) -> f64 {
        positive_or(self.max_gpu_length, DEFAULT_MAX_GPU_LENGTH_MM)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PsuSpecs {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub wattage: Option<f64>,
    /// 80 PLUS rating, e.g. "80+ Gold".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<String>,
}

impl PsuSpecs {
    pub fn wattage_or_default(&self) -> f64 {
        positive_or(self.wattage, 450.0)
    }

    /// Rated output for power budgeting. Unknown counts as zero.
    pub fn rated_watts(&self) -> f64 {
        self.wattage.unwrap_or(0.0)
    }

    pub fn efficiency_multiplier(&self) -> f64 {
        match self.efficiency.as_deref() {
            Some(rating) if rating.contains("Gold") => 1.2,
            Some(rating) if rating.contains("Bronze") => 1.1,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoolerSpecs {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub socket_support: Vec<String>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub tdp_rating: Option<f64>,
}

impl CoolerSpecs {
    pub fn supports(&self, socket: Option<&str>) -> bool {
        socket.map_or(false, |socket| self.socket_support.iter().any(|s| s == socket))
    }

    pub fn tdp_rating_watts(&self) -> f64 {
        self.tdp_rating.unwrap_or(0.0)
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback,
    }
}

/// Accepts `16`, `16.5`, `"16"`, `"16GB"` or `"4.4 GHz"`. Anything without a
/// leading number, including `null`, decodes to `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

pub(crate) fn number_from_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => leading_number(s),
        _ => None,
    }
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
pub(crate) fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, ch) in s.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
            }
            '-' | '+' if i == 0 => {}
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
