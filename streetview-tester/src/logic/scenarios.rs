//! Built-in engine checks. Each scenario is a pure function of a seed so a
//! failure can be replayed from the report alone.
use anyhow::{Result, bail, ensure};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;
use streetview_core::constants::{FANTASY_ADJECTIVES, FANTASY_DECORATIONS, FANTASY_NOUNS};
use streetview_core::{
    HistoryEntry, Location, RevealOutcome, SelectionError, Session, SessionPhase, pseudonym,
    select_location,
};

const FAIRNESS_DRAWS: usize = 2_000;
const FAIRNESS_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub check: fn(u64) -> Result<()>,
}

impl TestScenario {
    /// Run the check for one seed.
    pub fn run(&self, seed: u64) -> Result<()> {
        (self.check)(seed)
    }
}

const CATALOG: &[TestScenario] = &[
    TestScenario {
        key: "group-fairness",
        name: "Group Fairness",
        description: "A crowded name and a lone name are drawn equally often",
        check: group_fairness,
    },
    TestScenario {
        key: "duplicate-avoidance",
        name: "Duplicate Avoidance",
        description: "Revealed URLs are skipped until avoidance is turned off",
        check: duplicate_avoidance,
    },
    TestScenario {
        key: "reveal-idempotence",
        name: "Reveal Idempotence",
        description: "Revealing twice records a single history entry",
        check: reveal_idempotence,
    },
    TestScenario {
        key: "exhaustion",
        name: "Exhaustion",
        description: "A draw with no eligible candidates leaves the session unchanged",
        check: exhaustion,
    },
    TestScenario {
        key: "revisit",
        name: "Revisit",
        description: "Revisiting restores an entry without growing the history",
        check: revisit,
    },
    TestScenario {
        key: "pseudonym-stability",
        name: "Pseudonym Stability",
        description: "Fantasy names are deterministic and drawn from the vocabularies",
        check: pseudonym_stability,
    },
];

#[must_use]
pub fn get_scenario(key: &str) -> Option<&'static TestScenario> {
    CATALOG.iter().find(|scenario| scenario.key == key)
}

#[must_use]
pub fn scenario_keys() -> Vec<&'static str> {
    CATALOG.iter().map(|scenario| scenario.key).collect()
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

fn embed(tag: &str) -> String {
    format!("https://www.google.com/maps/embed?pb={tag}")
}

fn pasted(entries: &[(&str, &str)]) -> String {
    entries
        .iter()
        .map(|(tag, name)| format!("{}, {name}\n", embed(tag)))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn group_fairness(seed: u64) -> Result<()> {
    let mut locations: Vec<Location> = (0..20)
        .map(|i| Location::new(embed(&format!("crowd{i}")), "Norte"))
        .collect();
    locations.push(Location::new(embed("lone"), "Sur"));

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut lone_hits = 0_usize;
    for _ in 0..FAIRNESS_DRAWS {
        if select_location(&locations, &mut rng)?.name == "Sur" {
            lone_hits += 1;
        }
    }
    let share = lone_hits as f64 / FAIRNESS_DRAWS as f64;
    ensure!(
        (share - 0.5).abs() <= FAIRNESS_TOLERANCE,
        "lone name drawn {share:.3} of the time, expected 0.5 ± {FAIRNESS_TOLERANCE}"
    );
    Ok(())
}

fn duplicate_avoidance(seed: u64) -> Result<()> {
    let text = pasted(&[("a", "Lima"), ("b", "Cusco"), ("c", "Cusco"), ("d", "Arequipa")]);
    let mut session = Session::new(seed);
    session.set_avoid_duplicates(true);

    let mut seen = HashSet::new();
    for round in 1..=4 {
        let url = session.select_random(&text)?.url.clone();
        ensure!(seen.insert(url.clone()), "round {round} repeated {url}");
        session.reveal();
    }
    match session.select_random(&text) {
        Err(SelectionError::Exhausted) => {}
        Ok(current) => bail!("expected exhaustion, drew {}", current.url),
    }

    session.set_avoid_duplicates(false);
    let url = session.select_random(&text)?.url.clone();
    ensure!(seen.contains(&url), "drew unknown url {url} after disabling avoidance");
    Ok(())
}

fn reveal_idempotence(seed: u64) -> Result<()> {
    let mut session = Session::new(seed);
    ensure!(
        session.reveal() == RevealOutcome::Ignored,
        "reveal on an empty session must be ignored"
    );

    session.select_random(&pasted(&[("a", "Lima"), ("b", "Cusco")]))?;
    let first = session.reveal();
    let second = session.reveal();
    ensure!(
        first == RevealOutcome::Revealed { recorded: true },
        "first reveal returned {first:?}"
    );
    ensure!(
        second == RevealOutcome::Revealed { recorded: false },
        "second reveal returned {second:?}"
    );
    ensure!(
        session.history().len() == 1,
        "history holds {} entries after two reveals",
        session.history().len()
    );
    Ok(())
}

fn exhaustion(seed: u64) -> Result<()> {
    let text = pasted(&[("only", "Lima")]);
    let mut session = Session::new(seed);
    session.set_avoid_duplicates(true);
    session.select_random(&text)?;
    session.reveal();

    let before = session.clone();
    ensure!(
        session.select_random(&text).is_err(),
        "draw succeeded with every url revealed"
    );
    ensure!(session == before, "exhausted draw changed the session");
    ensure!(
        session.select_random("no locations here").is_err(),
        "draw succeeded on unparseable input"
    );
    Ok(())
}

fn revisit(seed: u64) -> Result<()> {
    let text = pasted(&[("a", "Lima"), ("b", "Cusco"), ("c", "Arequipa")]);
    let mut session = Session::new(seed);
    for _ in 0..2 {
        session.select_random(&text)?;
        session.reveal();
    }
    let target: HistoryEntry = session.history().all()[1].clone();
    session.select_random(&text)?;

    session.revisit(&target);
    ensure!(
        session.phase() == SessionPhase::SelectedRevealed,
        "revisit left phase {:?}",
        session.phase()
    );
    ensure!(session.current_url() == target.url, "revisit restored the wrong url");
    ensure!(
        session.current_fantasy_name() == target.fantasy_name,
        "revisit restored the wrong fantasy name"
    );
    ensure!(
        session.history().len() == 2,
        "revisit grew the history to {}",
        session.history().len()
    );
    session.reveal();
    ensure!(
        session.history().len() == 2,
        "reveal after revisit appended a duplicate"
    );
    Ok(())
}

fn pseudonym_stability(seed: u64) -> Result<()> {
    use rand::Rng;

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    for _ in 0..200 {
        let url = embed(&format!("{:x}", rng.r#gen::<u64>()));
        let name = pseudonym(&url);
        ensure!(name == pseudonym(&url), "pseudonym for {url} is not stable");

        let mut parts = name.splitn(3, ' ');
        let (Some(adjective), Some(noun), Some(decoration)) =
            (parts.next(), parts.next(), parts.next())
        else {
            bail!("pseudonym {name:?} does not have three parts");
        };
        ensure!(
            FANTASY_ADJECTIVES.contains(&adjective),
            "unknown adjective {adjective:?}"
        );
        ensure!(FANTASY_NOUNS.contains(&noun), "unknown noun {noun:?}");
        ensure!(
            FANTASY_DECORATIONS.contains(&decoration),
            "unknown decoration {decoration:?}"
        );
    }
    Ok(())
}
