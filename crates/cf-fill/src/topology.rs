//! Cable core arrangements.

use crate::error::FillError;
use cf_core::numeric::Real;
use std::f64::consts::{FRAC_PI_3, SQRT_2};
use std::fmt;
use std::str::FromStr;

/// How the cores of a cable are packed inside its sheath.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CableTopology {
    /// One core at the centre.
    Single,
    /// Three cores at 120 degree intervals (trefoil).
    ThreeCore,
    /// Four cores on the cardinal points of a square (quad).
    FourCore,
}

impl CableTopology {
    pub const ALL: [CableTopology; 3] = [
        CableTopology::Single,
        CableTopology::ThreeCore,
        CableTopology::FourCore,
    ];

    /// Canonical text name, as written in scenario files.
    pub fn name(self) -> &'static str {
        match self {
            CableTopology::Single => "single",
            CableTopology::ThreeCore => "three",
            CableTopology::FourCore => "four",
        }
    }

    pub fn core_count(self) -> usize {
        match self {
            CableTopology::Single => 1,
            CableTopology::ThreeCore => 3,
            CableTopology::FourCore => 4,
        }
    }

    /// Distance from the cable centre to each core centre.
    ///
    /// Trefoil uses the circumradius of three mutually tangent cores,
    /// `2r / sqrt(3)`. Quad uses `sqrt(2) * r`, i.e. cores tangent along the
    /// square's diagonal rather than its edge.
    pub fn core_center_distance(self, core_radius: Real) -> Real {
        match self {
            CableTopology::Single => 0.0,
            CableTopology::ThreeCore => (2.0 * core_radius) / 3.0_f64.sqrt(),
            CableTopology::FourCore => SQRT_2 * core_radius,
        }
    }

    /// Core centre positions relative to the cable centre, unrotated.
    pub fn core_offsets(self, core_radius: Real) -> Vec<[Real; 2]> {
        let d = self.core_center_distance(core_radius);
        match self {
            CableTopology::Single => vec![[0.0, 0.0]],
            CableTopology::ThreeCore => [0.0, 2.0 * FRAC_PI_3, 4.0 * FRAC_PI_3]
                .iter()
                .map(|angle| [angle.cos() * d, angle.sin() * d])
                .collect(),
            CableTopology::FourCore => vec![[0.0, -d], [d, 0.0], [0.0, d], [-d, 0.0]],
        }
    }
}

impl fmt::Display for CableTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CableTopology {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single_core" | "1" => Ok(CableTopology::Single),
            "three" | "three_core" | "trefoil" | "3" => Ok(CableTopology::ThreeCore),
            "four" | "four_core" | "quad" | "4" => Ok(CableTopology::FourCore),
            _ => Err(FillError::UnknownTopology {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(p: [Real; 2]) -> Real {
        (p[0] * p[0] + p[1] * p[1]).sqrt()
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("single".parse::<CableTopology>().unwrap(), CableTopology::Single);
        assert_eq!("Trefoil".parse::<CableTopology>().unwrap(), CableTopology::ThreeCore);
        assert_eq!(" four_core ".parse::<CableTopology>().unwrap(), CableTopology::FourCore);
        assert_eq!("quad".parse::<CableTopology>().unwrap(), CableTopology::FourCore);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "five".parse::<CableTopology>().unwrap_err();
        assert_eq!(
            err,
            FillError::UnknownTopology {
                name: "five".into()
            }
        );
    }

    #[test]
    fn display_round_trips() {
        for topology in CableTopology::ALL {
            let parsed: CableTopology = topology.to_string().parse().unwrap();
            assert_eq!(parsed, topology);
        }
    }

    #[test]
    fn offsets_match_core_count() {
        for topology in CableTopology::ALL {
            assert_eq!(topology.core_offsets(30.0).len(), topology.core_count());
        }
    }

    #[test]
    fn trefoil_cores_are_mutually_tangent() {
        let r = 30.0;
        let offsets = CableTopology::ThreeCore.core_offsets(r);
        for (i, a) in offsets.iter().enumerate() {
            assert!((distance(*a) - 2.0 * r / 3.0_f64.sqrt()).abs() < 1e-9);
            for b in offsets.iter().skip(i + 1) {
                let gap = distance([a[0] - b[0], a[1] - b[1]]);
                assert!((gap - 2.0 * r).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn quad_cores_sit_on_the_axes() {
        let offsets = CableTopology::FourCore.core_offsets(10.0);
        let d = SQRT_2 * 10.0;
        assert_eq!(offsets, vec![[0.0, -d], [d, 0.0], [0.0, d], [-d, 0.0]]);
    }

    #[test]
    fn single_core_is_centred() {
        assert_eq!(CableTopology::Single.core_offsets(30.0), vec![[0.0, 0.0]]);
        assert_eq!(CableTopology::Single.core_center_distance(30.0), 0.0);
    }
}
