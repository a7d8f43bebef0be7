//! Derived weighment calculations

use slip_format::{coerce_float, format_fixed};

/// Kilograms per metric ton, for the quantity conversion
const KG_PER_TON: f64 = 1000.0;

/// Net weight and quantity derived from a pair of weighbridge readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeighmentTotals {
    /// `max(0, load - empty)` in kilograms
    pub net_weight: f64,
    /// Net weight expressed in metric tons
    pub quantity: f64,
}

impl WeighmentTotals {
    /// Net weight as displayed: zero decimal places
    pub fn net_weight_display(&self) -> String {
        format_fixed(self.net_weight, 0)
    }

    /// Quantity as displayed: exactly two decimal places
    pub fn quantity_display(&self) -> String {
        format_fixed(self.quantity, 2)
    }
}

/// Compute the derived totals from the raw form values
///
/// Unparseable or absent readings count as zero. The net weight is clamped
/// at zero so a data-entry error (empty weight above load weight) never
/// displays as negative. This never fails.
pub fn compute_totals(load_raw: &str, empty_raw: &str) -> WeighmentTotals {
    let load = coerce_float(load_raw).unwrap_or(0.0);
    let empty = coerce_float(empty_raw).unwrap_or(0.0);

    let net_weight = (load - empty).max(0.0);
    WeighmentTotals {
        net_weight,
        quantity: net_weight / KG_PER_TON,
    }
}
