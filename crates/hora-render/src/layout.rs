//! Radii and spacing of the clock rings.
//!
//! All radii are fixed fractions of the chart size so the face scales as a
//! unit. From the center outwards: hour tick labels, the hour ring, the
//! vigil ring and the quarter ring.

use hora_types::Ring;

/// Gap between adjacent sectors unless configured otherwise, in radians.
pub const DEFAULT_PAD_ANGLE: f64 = 0.01;

/// Inner and outer radius of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingRadii {
    /// Inner radius in pixels.
    pub inner: f64,
    /// Outer radius in pixels.
    pub outer: f64,
}

impl RingRadii {
    /// Radius halfway through the ring, where labels run.
    pub fn mid(&self) -> f64 {
        (self.inner + self.outer) / 2.0
    }

    /// Radial thickness of the ring.
    pub fn thickness(&self) -> f64 {
        self.outer - self.inner
    }
}

/// Complete geometry of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Width and height of the square chart.
    pub size: f64,
    /// Radius on which the 24 tick labels sit.
    pub hour_label_radius: f64,
    /// The unequal-hour ring.
    pub hours: RingRadii,
    /// The vigil ring.
    pub vigils: RingRadii,
    /// The quarter ring.
    pub quarters: RingRadii,
    /// Gap between adjacent sectors, in radians.
    pub pad_angle: f64,
}

impl ChartLayout {
    /// Layout for a square chart of `size` pixels.
    pub fn for_size(size: f64) -> Self {
        Self {
            size,
            hour_label_radius: size * 0.25,
            hours: RingRadii {
                inner: size * 0.30,
                outer: size * 0.40,
            },
            vigils: RingRadii {
                inner: size * 0.405,
                outer: size * 0.445,
            },
            quarters: RingRadii {
                inner: size * 0.45,
                outer: size * 0.50,
            },
            pad_angle: DEFAULT_PAD_ANGLE,
        }
    }

    /// Replace the sector gap.
    #[must_use]
    pub const fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Radii of the given ring.
    pub const fn ring(&self, ring: Ring) -> RingRadii {
        match ring {
            Ring::Hours => self.hours,
            Ring::Vigils => self.vigils,
            Ring::Quarters => self.quarters,
        }
    }

    /// Center of the chart.
    pub fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::for_size(600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_nest_without_overlap() {
        let layout = ChartLayout::default();
        assert!(layout.hour_label_radius < layout.hours.inner);
        assert!(layout.hours.outer < layout.vigils.inner);
        assert!(layout.vigils.outer < layout.quarters.inner);
        assert!(layout.quarters.outer <= layout.size / 2.0);
    }

    #[test]
    fn radii_scale_with_size() {
        let layout = ChartLayout::for_size(1000.0);
        assert!((layout.hours.inner - 300.0).abs() < 1e-9);
        assert!((layout.hours.mid() - 350.0).abs() < 1e-9);
        assert!((layout.vigils.thickness() - 40.0).abs() < 1e-9);
        assert!((layout.ring(Ring::Quarters).outer - 500.0).abs() < 1e-9);
        assert_eq!(layout.center(), (500.0, 500.0));
    }

    #[test]
    fn pad_angle_is_configurable() {
        let layout = ChartLayout::default().with_pad_angle(0.0);
        assert!(layout.pad_angle.abs() < f64::EPSILON);
    }
}
