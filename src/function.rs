use nalgebra::DVector;

use crate::error::{FuzzyError, FuzzyResult};

/// An evenly spaced sample grid starting at zero.
///
/// Sample `i` sits at `x = i * step` for `i` in `0..=size`, so the grid holds
/// `size + 1` samples. The grid is fixed when the fuzzy set is built and never
/// changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    size: usize,
    step: f64,
}

impl Domain {

    pub fn new(size: usize, step: f64) -> Self {
        debug_assert!(step > 0.0, "Domain step must be positive");
        Self { size, step }
    }

    /// Number of samples minus one
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples on the grid
    pub fn len(&self) -> usize {
        self.size + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The x coordinate of sample `i`
    pub fn x(&self, i: usize) -> f64 {
        i as f64 * self.step
    }

    /// The largest x coordinate on the grid
    pub fn max_x(&self) -> f64 {
        self.size as f64 * self.step
    }

    /// All x coordinates, in sample order (for plotting collaborators)
    pub fn xs(&self) -> DVector<f64> {
        DVector::from_fn(self.len(), |i, _| self.x(i))
    }

    /// Maps a crisp value to its sample index by truncating to the nearest
    /// lower sample. Values past the grid (or negative) are rejected rather
    /// than silently zeroed, since that would mask caller mistakes.
    pub fn sample_index(&self, x: f64) -> FuzzyResult<usize> {
        let index = (x / self.step).floor();
        if index < 0.0 || index > self.size as f64 {
            return Err(FuzzyError::OutOfDomain {
                value: x,
                max: self.max_x(),
            });
        }
        Ok(index as usize)
    }

}

/// A function sampled over a [`Domain`], one value per grid point.
///
/// Values usually live in [0, 1] but that is not enforced. All operations
/// return new instances; nothing mutates in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscretizedFunction {
    values: DVector<f64>,
}

impl DiscretizedFunction {

    pub fn zeros(len: usize) -> Self {
        Self {
            values: DVector::zeros(len),
        }
    }

    pub fn from_vector(values: DVector<f64>) -> Self {
        Self { values }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            values: DVector::from_column_slice(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The sampled value at index `i`
    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    fn check_len(&self, other: &Self) -> FuzzyResult<()> {
        if self.len() != other.len() {
            return Err(FuzzyError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(())
    }

    /// Pointwise minimum (fuzzy AND)
    pub fn fuzzy_and(&self, other: &Self) -> FuzzyResult<Self> {
        self.check_len(other)?;
        Ok(Self {
            values: self.values.inf(&other.values),
        })
    }

    /// Pointwise maximum (fuzzy OR)
    pub fn fuzzy_or(&self, other: &Self) -> FuzzyResult<Self> {
        self.check_len(other)?;
        Ok(Self {
            values: self.values.sup(&other.values),
        })
    }

    /// Pointwise complement `1 - y` (fuzzy NOT)
    pub fn fuzzy_not(&self) -> Self {
        Self {
            values: self.values.map(|v| 1.0 - v),
        }
    }

    /// Caps every sample at `cap` (the Mamdani implication primitive)
    pub fn clamp_to(&self, cap: f64) -> Self {
        Self {
            values: self.values.map(|v| v.min(cap)),
        }
    }

}

/// Membership function shapes, evaluated analytically and then sampled onto a
/// [`Domain`]. Degenerate edges (equal bounds) collapse to a single point of
/// value 1 at that boundary instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipShape {
    /// 1 exactly at `a`, 0 everywhere else. Only achievable when `a` lands on
    /// a grid point, otherwise the sampled shape is all zero.
    Singleton(f64),
    /// Rising edge on `[a, b]`, peak at `b`, falling edge on `(b, c]`
    Triangle(f64, f64, f64),
    /// Rising edge on `[a, b]`, plateau 1 on `[b, c]`, falling edge on `(c, d]`
    Trapezoid(f64, f64, f64, f64),
    /// `exp(-0.5 * ((x - mean) / stddev)^2)`; a zero stddev degrades to a
    /// singleton at `mean`
    Gaussian { mean: f64, stddev: f64 },
}

impl MembershipShape {

    /// Evaluates the closed form at a single point.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            MembershipShape::Singleton(a) => {
                if x == a {
                    1.0
                } else {
                    0.0
                }
            }
            MembershipShape::Triangle(a, b, c) => {
                if a <= x && x <= b {
                    if b - a != 0.0 {
                        (x - a) / (b - a)
                    } else if x == a {
                        1.0
                    } else {
                        0.0
                    }
                } else if b < x && x <= c {
                    if c - b != 0.0 {
                        (c - x) / (c - b)
                    } else if x == c {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    0.0
                }
            }
            MembershipShape::Trapezoid(a, b, c, d) => {
                if a <= x && x <= b {
                    if b - a != 0.0 {
                        (x - a) / (b - a)
                    } else if x == a {
                        1.0
                    } else {
                        0.0
                    }
                } else if b <= x && x <= c {
                    1.0
                } else if c < x && x <= d {
                    if d - c != 0.0 {
                        (d - x) / (d - c)
                    } else if x == d {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    0.0
                }
            }
            MembershipShape::Gaussian { mean, stddev } => {
                if stddev != 0.0 {
                    (-0.5 * ((x - mean) / stddev).powi(2)).exp()
                } else if x == mean {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Samples the shape at every grid point of `domain`.
    pub fn discretize(&self, domain: &Domain) -> DiscretizedFunction {
        DiscretizedFunction::from_vector(DVector::from_fn(domain.len(), |i, _| {
            self.evaluate(domain.x(i))
        }))
    }

}
