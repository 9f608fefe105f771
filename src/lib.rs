//! Small numerical teaching exercises: a discretized fuzzy-set engine
//! (fuzzification, Mamdani clipping, aggregation, centroid defuzzification)
//! plus perceptron and sigmoid-network training loops for toy logic problems.
//!
//! The fuzzy core is a plain in-process library: build a [`FuzzySet`] per
//! linguistic variable from [`MembershipShape`]s, query it at a crisp input,
//! combine the resulting membership vectors with an application-level rule
//! table, then [`FuzzySet::clip`], [`FuzzySet::aggregate_all_terms`] and
//! [`FuzzySet::defuzzify`] the output variable.

pub mod error;
pub mod function;
pub mod neuron;
pub mod set;

pub use error::{FuzzyError, FuzzyResult};
pub use function::{DiscretizedFunction, Domain, MembershipShape};
pub use neuron::{NeuronLayer, Perceptron, SigmoidNetwork};
pub use set::{FuzzySet, Term};
