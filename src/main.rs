use fuzzy_engine::{Domain, FuzzyResult, FuzzySet, MembershipShape};

/// Runs the worked single-input pipeline: fuzzify a crisp reading, clip the
/// output variable with the resulting memberships, aggregate and defuzzify.
fn main() -> FuzzyResult<()> {
    // Input variable with three overlapping terms on [0, 50]
    let input_domain = Domain::new(100, 0.5);
    let mut input_set = FuzzySet::new(input_domain, 3, "input");
    input_set.add_term(
        MembershipShape::Trapezoid(0.0, 0.0, 20.0, 30.0).discretize(&input_domain),
        "A",
        "red",
    )?;
    input_set.add_term(
        MembershipShape::Triangle(20.0, 30.0, 40.0).discretize(&input_domain),
        "B",
        "blue",
    )?;
    input_set.add_term(
        MembershipShape::Trapezoid(30.0, 40.0, 50.0, 50.0).discretize(&input_domain),
        "C",
        "green",
    )?;

    // Output variable on [0, 100]
    let output_domain = Domain::new(100, 1.0);
    let mut output_set = FuzzySet::new(output_domain, 3, "output");
    output_set.add_term(
        MembershipShape::Triangle(0.0, 0.0, 50.0).discretize(&output_domain),
        "D",
        "red",
    )?;
    output_set.add_term(
        MembershipShape::Triangle(20.0, 60.0, 80.0).discretize(&output_domain),
        "E",
        "blue",
    )?;
    output_set.add_term(
        MembershipShape::Triangle(60.0, 100.0, 100.0).discretize(&output_domain),
        "F",
        "green",
    )?;

    let input_value = 33.0;
    let memberships = input_set.membership_vector(input_value)?;
    for (term, degree) in input_set.terms().iter().zip(memberships.iter()) {
        println!("{} : {}", term.name(), degree);
    }

    let aggregated = output_set.clip(&memberships)?.aggregate_all_terms();
    println!("Defuzzified value: {}", aggregated.defuzzify());
    Ok(())
}
