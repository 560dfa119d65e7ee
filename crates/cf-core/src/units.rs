// cf-core/src/units.rs

use uom::si::f64::{Area as UomArea, Length as UomLength};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;

/// Length in millimetres, the working unit of the fill calculations.
#[inline]
pub fn to_mm(length: Length) -> f64 {
    use uom::si::length::millimeter;
    length.get::<millimeter>()
}

/// Area in square millimetres.
#[inline]
pub fn to_mm2(area: Area) -> f64 {
    use uom::si::area::square_millimeter;
    area.get::<square_millimeter>()
}

/// Length units accepted for dimensions read from outside the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    Millimeter,
    Centimeter,
    Meter,
    Inch,
}

impl LengthUnit {
    pub fn length(self, v: f64) -> Length {
        use uom::si::length::{centimeter, inch, meter, millimeter};
        match self {
            LengthUnit::Millimeter => Length::new::<millimeter>(v),
            LengthUnit::Centimeter => Length::new::<centimeter>(v),
            LengthUnit::Meter => Length::new::<meter>(v),
            LengthUnit::Inch => Length::new::<inch>(v),
        }
    }

    /// Convert a linear dimension expressed in this unit to millimetres.
    pub fn to_mm(self, v: f64) -> f64 {
        to_mm(self.length(v))
    }

    /// Convert an area expressed in this unit squared to square millimetres.
    pub fn area_to_mm2(self, v: f64) -> f64 {
        let unit_square: Area = self.length(1.0) * self.length(1.0);
        v * to_mm2(unit_square)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
        }
    }
}
