//! Material cost - fabric and trim consumption with waste

use crate::entities::bom::BomLine;

/// Sum of `consumption * (1 + waste% / 100) * unit_price` over all lines.
///
/// Currencies are summed nominally; mixed-currency BOMs are not converted.
pub fn material_cost(lines: &[BomLine]) -> f64 {
    lines.iter().fold(0.0, |sum, line| sum + line.cost())
}
