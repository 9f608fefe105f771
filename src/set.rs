use nalgebra::DVector;

use crate::error::{FuzzyError, FuzzyResult};
use crate::function::{DiscretizedFunction, Domain};

/// One named membership function inside a [`FuzzySet`].
///
/// The color string is carried for plotting collaborators and never
/// interpreted here.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    name: String,
    color: String,
    function: DiscretizedFunction,
}

impl Term {

    fn unset(len: usize) -> Self {
        Self {
            name: String::new(),
            color: String::new(),
            function: DiscretizedFunction::zeros(len),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn function(&self) -> &DiscretizedFunction {
        &self.function
    }

}

/// A linguistic variable: a fixed number of term slots over one shared domain.
///
/// Slot order is significant, it defines the ordering of the vectors returned
/// by [`FuzzySet::membership_vector`] and expected by [`FuzzySet::clip`].
/// Unset slots hold an empty-named all-zero placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzySet {
    domain: Domain,
    terms: Vec<Term>,
    populated: usize,
    name: String,
}

impl FuzzySet {

    /// Creates a set with `capacity` empty term slots.
    pub fn new(domain: Domain, capacity: usize, name: impl Into<String>) -> Self {
        let terms = (0..capacity).map(|_| Term::unset(domain.len())).collect();
        Self {
            domain,
            terms,
            populated: 0,
            name: name.into(),
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of term slots (set at construction)
    pub fn capacity(&self) -> usize {
        self.terms.len()
    }

    /// All term slots, in membership-vector order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term(&self, index: usize) -> FuzzyResult<&Term> {
        self.terms.get(index).ok_or(FuzzyError::TermOutOfRange {
            index,
            capacity: self.capacity(),
        })
    }

    fn check_function(&self, function: &DiscretizedFunction) -> FuzzyResult<()> {
        if function.len() != self.domain.len() {
            return Err(FuzzyError::DimensionMismatch {
                expected: self.domain.len(),
                got: function.len(),
            });
        }
        Ok(())
    }

    /// Stores a term in the next free slot.
    pub fn add_term(
        &mut self,
        function: DiscretizedFunction,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> FuzzyResult<()> {
        let index = self.populated;
        if index >= self.capacity() {
            return Err(FuzzyError::TermOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        self.set_term(index, function, name, color)
    }

    /// Stores a term at an explicit slot, overwriting whatever was there.
    pub fn set_term(
        &mut self,
        index: usize,
        function: DiscretizedFunction,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> FuzzyResult<()> {
        self.check_function(&function)?;
        if index >= self.capacity() {
            return Err(FuzzyError::TermOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        self.terms[index] = Term {
            name: name.into(),
            color: color.into(),
            function,
        };
        self.populated = self.populated.max(index + 1);
        Ok(())
    }

    /// Fuzzification: the membership degree of every term at a crisp input,
    /// in slot order. The input is truncated to the nearest lower sample; an
    /// input past the domain is an error, never a silent zero vector.
    pub fn membership_vector(&self, x: f64) -> FuzzyResult<DVector<f64>> {
        let index = self.domain.sample_index(x)?;
        Ok(DVector::from_fn(self.capacity(), |i, _| {
            self.terms[i].function.value(index)
        }))
    }

    /// Mamdani implication: caps every term at its firing strength, producing
    /// a new set with the same shape, names and colors.
    pub fn clip(&self, strengths: &DVector<f64>) -> FuzzyResult<FuzzySet> {
        if strengths.len() != self.capacity() {
            return Err(FuzzyError::DimensionMismatch {
                expected: self.capacity(),
                got: strengths.len(),
            });
        }
        let terms = self
            .terms
            .iter()
            .enumerate()
            .map(|(i, term)| Term {
                name: term.name.clone(),
                color: term.color.clone(),
                function: term.function.clamp_to(strengths[i]),
            })
            .collect();
        Ok(FuzzySet {
            domain: self.domain,
            terms,
            populated: self.populated,
            name: self.name.clone(),
        })
    }

    /// Mamdani aggregation: the pointwise maximum across all terms, as a new
    /// single-term set labelled with a fixed sentinel.
    pub fn aggregate_all_terms(&self) -> FuzzySet {
        let mut combined = DVector::zeros(self.domain.len());
        for term in &self.terms {
            combined = combined.sup(term.function.values());
        }
        let mut result = FuzzySet::new(self.domain, 1, self.name.clone());
        result.terms[0] = Term {
            name: "Aggregate".to_string(),
            color: "black".to_string(),
            function: DiscretizedFunction::from_vector(combined),
        };
        result.populated = 1;
        result
    }

    /// Centroid defuzzification over all terms. A set with no mass (all-zero
    /// membership everywhere) defuzzifies to 0 rather than dividing by zero.
    pub fn defuzzify(&self) -> f64 {
        let xs = self.domain.xs();
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for term in &self.terms {
            numerator += xs.dot(term.function.values());
            denominator += term.function.values().sum();
        }
        if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::MembershipShape;

    const EPS: f64 = 1e-12;

    fn worked_input_set() -> FuzzySet {
        let domain = Domain::new(100, 0.5);
        let mut set = FuzzySet::new(domain, 3, "input");
        set.add_term(
            MembershipShape::Trapezoid(0.0, 0.0, 20.0, 30.0).discretize(&domain),
            "A",
            "red",
        )
        .unwrap();
        set.add_term(
            MembershipShape::Triangle(20.0, 30.0, 40.0).discretize(&domain),
            "B",
            "blue",
        )
        .unwrap();
        set.add_term(
            MembershipShape::Trapezoid(30.0, 40.0, 50.0, 50.0).discretize(&domain),
            "C",
            "green",
        )
        .unwrap();
        set
    }

    #[test]
    fn add_term_appends_in_slot_order() {
        let set = worked_input_set();
        assert_eq!(set.term(0).unwrap().name(), "A");
        assert_eq!(set.term(1).unwrap().name(), "B");
        assert_eq!(set.term(2).unwrap().name(), "C");
        assert_eq!(set.term(2).unwrap().color(), "green");
    }

    #[test]
    fn add_term_on_full_set_fails() {
        let mut set = worked_input_set();
        let extra = DiscretizedFunction::zeros(set.domain().len());
        assert_eq!(
            set.add_term(extra, "D", "black"),
            Err(FuzzyError::TermOutOfRange {
                index: 3,
                capacity: 3
            })
        );
    }

    #[test]
    fn set_term_overwrites_by_index() {
        let mut set = worked_input_set();
        let domain = *set.domain();
        set.set_term(
            1,
            MembershipShape::Singleton(10.0).discretize(&domain),
            "spike",
            "gray",
        )
        .unwrap();
        assert_eq!(set.term(1).unwrap().name(), "spike");
        assert_eq!(set.membership_vector(10.0).unwrap()[1], 1.0);
        assert!(set
            .set_term(3, DiscretizedFunction::zeros(domain.len()), "x", "y")
            .is_err());
    }

    #[test]
    fn term_length_must_match_domain() {
        let mut set = FuzzySet::new(Domain::new(10, 1.0), 1, "v");
        assert_eq!(
            set.add_term(DiscretizedFunction::zeros(10), "t", "red"),
            Err(FuzzyError::DimensionMismatch {
                expected: 11,
                got: 10
            })
        );
    }

    #[test]
    fn membership_vector_at_33() {
        let set = worked_input_set();
        let mv = set.membership_vector(33.0).unwrap();
        assert_eq!(mv.len(), 3);
        assert!((mv[0] - 0.0).abs() < EPS);
        assert!((mv[1] - 0.7).abs() < EPS);
        assert!((mv[2] - 0.3).abs() < EPS);
    }

    #[test]
    fn membership_vector_bounds() {
        let set = worked_input_set();
        // exactly at the upper bound resolves to the last sample
        let at_end = set.membership_vector(50.0).unwrap();
        assert_eq!(at_end[2], 1.0);
        // one step beyond is an error
        assert!(matches!(
            set.membership_vector(50.5),
            Err(FuzzyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn clip_caps_peak_and_keeps_shape_below_cap() {
        let domain = Domain::new(100, 1.0);
        let mut set = FuzzySet::new(domain, 1, "out");
        set.add_term(
            MembershipShape::Triangle(20.0, 60.0, 80.0).discretize(&domain),
            "E",
            "blue",
        )
        .unwrap();
        let clipped = set.clip(&DVector::from_column_slice(&[0.7])).unwrap();
        let f = clipped.term(0).unwrap().function();
        // peak is capped
        assert_eq!(f.value(60), 0.7);
        // values below the cap are untouched
        assert!((f.value(30) - 0.25).abs() < EPS);
        assert_eq!(f.value(0), 0.0);
        // the source set is untouched
        assert_eq!(set.term(0).unwrap().function().value(60), 1.0);
    }

    #[test]
    fn clip_requires_one_strength_per_slot() {
        let set = worked_input_set();
        assert_eq!(
            set.clip(&DVector::from_column_slice(&[0.3, 0.7])),
            Err(FuzzyError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn aggregate_takes_pointwise_max() {
        let domain = Domain::new(2, 1.0);
        let mut set = FuzzySet::new(domain, 2, "v");
        set.add_term(DiscretizedFunction::from_slice(&[0.2, 0.5, 0.1]), "a", "red")
            .unwrap();
        set.add_term(DiscretizedFunction::from_slice(&[0.9, 0.0, 0.3]), "b", "blue")
            .unwrap();
        let agg = set.aggregate_all_terms();
        assert_eq!(agg.capacity(), 1);
        let term = agg.term(0).unwrap();
        assert_eq!(term.name(), "Aggregate");
        assert_eq!(term.color(), "black");
        assert_eq!(term.function().values().as_slice(), &[0.9, 0.5, 0.3]);
    }

    #[test]
    fn defuzzify_of_empty_mass_is_zero() {
        let set = FuzzySet::new(Domain::new(10, 1.0), 2, "v");
        assert_eq!(set.defuzzify(), 0.0);
    }

    #[test]
    fn defuzzify_of_symmetric_shape_is_its_center() {
        let domain = Domain::new(100, 1.0);
        let mut set = FuzzySet::new(domain, 1, "v");
        set.add_term(
            MembershipShape::Triangle(20.0, 50.0, 80.0).discretize(&domain),
            "t",
            "red",
        )
        .unwrap();
        assert!((set.defuzzify() - 50.0).abs() < 1e-9);
    }
}
