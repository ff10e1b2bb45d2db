use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashMap;
use std::convert::TryFrom;
use streetview_core::{Location, Session, select_location};

const SAMPLE_SIZE: usize = 5000;
const TOLERANCE: f64 = 0.025;

fn embed(tag: &str) -> String {
    format!("https://www.google.com/maps/embed?pb={tag}")
}

fn share(counts: &HashMap<String, usize>, key: &str) -> f64 {
    let hits = counts.get(key).copied().unwrap_or(0);
    f64::from(u32::try_from(hits).expect("count fits"))
        / f64::from(u32::try_from(SAMPLE_SIZE).expect("sample size fits u32"))
}

#[test]
fn crowded_and_rare_names_split_evenly() {
    let mut locations: Vec<Location> = (0..100)
        .map(|i| Location::new(embed(&format!("crowd{i}")), "Torre"))
        .collect();
    locations.push(Location::new(embed("alone"), "Faro"));

    let mut rng = SmallRng::seed_from_u64(2024);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..SAMPLE_SIZE {
        let pick = select_location(&locations, &mut rng).expect("candidates present");
        *counts.entry(pick.name.clone()).or_default() += 1;
    }

    let observed = share(&counts, "Faro");
    assert!(
        (observed - 0.5).abs() <= TOLERANCE,
        "rare name drifted: observed {observed:.4}"
    );
}

#[test]
fn members_within_a_group_are_uniform() {
    let locations: Vec<Location> = (0..4)
        .map(|i| Location::new(embed(&format!("m{i}")), "Plaza"))
        .collect();

    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..SAMPLE_SIZE {
        let pick = select_location(&locations, &mut rng).expect("candidates present");
        *counts.entry(pick.url.clone()).or_default() += 1;
    }

    for location in &locations {
        let observed = share(&counts, &location.url);
        assert!(
            (observed - 0.25).abs() <= TOLERANCE,
            "{} drifted: observed {observed:.4}",
            location.url
        );
    }
}

#[test]
fn three_names_are_each_a_third_through_session_draws() {
    let mut text = String::new();
    for i in 0..30 {
        text.push_str(&format!("{}, Norte\n", embed(&format!("n{i}"))));
    }
    for i in 0..5 {
        text.push_str(&format!("{}, Centro\n", embed(&format!("c{i}"))));
    }
    text.push_str(&format!("{}, Sur\n", embed("s0")));

    let mut session = Session::new(0xC0FFEE);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..SAMPLE_SIZE {
        let current = session.select_random(&text).expect("candidates present");
        *counts.entry(current.real_name.clone()).or_default() += 1;
    }

    for name in ["Norte", "Centro", "Sur"] {
        let observed = share(&counts, name);
        assert!(
            (observed - 1.0 / 3.0).abs() <= TOLERANCE,
            "{name} drifted: observed {observed:.4}"
        );
    }
}
