// pk-core/src/units.rs

use uom::si::f64::MolarConcentration as UomMolarConcentration;

// Public canonical unit types (SI, f64)
pub type Concentration = UomMolarConcentration;

#[inline]
pub fn mol_per_l(v: f64) -> Concentration {
    use uom::si::molar_concentration::mole_per_liter;
    Concentration::new::<mole_per_liter>(v)
}

#[inline]
pub fn to_mol_per_l(c: Concentration) -> f64 {
    use uom::si::molar_concentration::mole_per_liter;
    c.get::<mole_per_liter>()
}

pub mod constants {
    /// Ion product of water as a p-value at 25 °C.
    pub const PKW: f64 = 14.0;

    /// Largest number of points a pH grid may hold.
    pub const MAX_GRID_POINTS: usize = 10_000_000;
}
