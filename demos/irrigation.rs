use fuzzy_engine::{Domain, FuzzyResult, FuzzySet, MembershipShape};

/// Two-input Mamdani-style controller: temperature and humidity drive the
/// amount of irrigation water. The rule table lives here in the application;
/// the engine only supplies fuzzification and the min/max primitives.
fn main() -> FuzzyResult<()> {
    let temp_domain = Domain::new(70, 0.5);
    let mut temp_set = FuzzySet::new(temp_domain, 4, "temperature");
    temp_set.set_term(
        0,
        MembershipShape::Trapezoid(0.0, 0.0, 5.0, 15.0).discretize(&temp_domain),
        "cold",
        "blue",
    )?;
    temp_set.set_term(
        1,
        MembershipShape::Triangle(5.0, 15.0, 25.0).discretize(&temp_domain),
        "cool",
        "green",
    )?;
    temp_set.set_term(
        2,
        MembershipShape::Triangle(15.0, 25.0, 35.0).discretize(&temp_domain),
        "warm",
        "yellow",
    )?;
    temp_set.set_term(
        3,
        MembershipShape::Trapezoid(25.0, 35.0, 45.0, 45.0).discretize(&temp_domain),
        "hot",
        "red",
    )?;

    let humidity_domain = Domain::new(100, 1.0);
    let mut humidity_set = FuzzySet::new(humidity_domain, 3, "humidity");
    humidity_set.set_term(
        0,
        MembershipShape::Trapezoid(0.0, 0.0, 25.0, 50.0).discretize(&humidity_domain),
        "low",
        "blue",
    )?;
    humidity_set.set_term(
        1,
        MembershipShape::Triangle(25.0, 50.0, 100.0).discretize(&humidity_domain),
        "medium",
        "green",
    )?;
    humidity_set.set_term(
        2,
        MembershipShape::Triangle(50.0, 100.0, 100.0).discretize(&humidity_domain),
        "high",
        "red",
    )?;

    let temperature = 17.5;
    let humidity = 60.0;

    let fuzzy_temp = temp_set.membership_vector(temperature)?;
    let fuzzy_humidity = humidity_set.membership_vector(humidity)?;

    println!("Temperature:");
    for (term, degree) in temp_set.terms().iter().zip(fuzzy_temp.iter()) {
        println!("{} : {}", term.name(), degree);
    }
    println!("\nHumidity:");
    for (term, degree) in humidity_set.terms().iter().zip(fuzzy_humidity.iter()) {
        println!("{} : {}", term.name(), degree);
    }

    // Consequents are crisp water levels (singleton outputs)
    let water_levels = [
        ("zero", 0.0),
        ("low", 25.0),
        ("medium", 50.0),
        ("high", 75.0),
        ("maximum", 100.0),
    ];
    // rules[temp term][humidity term] -> water level
    let rules = [
        [50.0, 25.0, 0.0],
        [75.0, 25.0, 0.0],
        [75.0, 50.0, 25.0],
        [100.0, 75.0, 50.0],
    ];

    // Firing strength per rule is the min across its antecedents; rules firing
    // the same consequent are combined with max
    let mut water_out = [0.0f64; 5];
    for (k, (_, level)) in water_levels.iter().enumerate() {
        for i in 0..temp_set.capacity() {
            for j in 0..humidity_set.capacity() {
                if rules[i][j] == *level {
                    water_out[k] = water_out[k].max(fuzzy_temp[i].min(fuzzy_humidity[j]));
                }
            }
        }
    }

    println!("\nWater:");
    for ((name, _), strength) in water_levels.iter().zip(&water_out) {
        println!("{} : {}", name, strength);
    }

    // Weighted average over the singleton consequents
    let numerator: f64 = water_levels
        .iter()
        .zip(&water_out)
        .map(|((_, level), strength)| level * strength)
        .sum();
    let denominator: f64 = water_out.iter().sum();
    println!("\ny = {}", numerator / denominator);
    Ok(())
}
