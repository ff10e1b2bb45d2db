use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use streetview_core::{Session, group_by_name, parse_locations};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationPlan {
    pub draws: usize,
    pub avoid_duplicates: bool,
    pub seed: u64,
}

/// Outcome of drawing repeatedly from one pasted location list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawSimulation {
    pub seed: u64,
    pub avoid_duplicates: bool,
    pub requested_draws: usize,
    pub completed_draws: usize,
    pub candidates: usize,
    pub groups: usize,
    /// Draw number (1-based) that first came back empty, if any.
    pub exhausted_at: Option<usize>,
    pub name_counts: BTreeMap<String, usize>,
    pub fantasy_names: BTreeMap<String, String>,
}

impl DrawSimulation {
    /// Largest deviation of any name's share from the uniform share.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn max_share_deviation(&self) -> f64 {
        if self.completed_draws == 0 || self.name_counts.is_empty() {
            return 0.0;
        }
        let expected = 1.0 / self.groups.max(1) as f64;
        self.name_counts
            .values()
            .map(|&hits| (hits as f64 / self.completed_draws as f64 - expected).abs())
            .fold(0.0, f64::max)
    }
}

/// Draw and reveal `plan.draws` times, stopping at the first exhausted draw.
#[must_use]
pub fn run_draw_simulation(raw_text: &str, plan: &SimulationPlan) -> DrawSimulation {
    let parsed = parse_locations(raw_text);
    let groups = group_by_name(&parsed).len();

    let mut session = Session::new(plan.seed);
    session.set_avoid_duplicates(plan.avoid_duplicates);

    let mut name_counts = BTreeMap::new();
    let mut fantasy_names = BTreeMap::new();
    let mut exhausted_at = None;
    let mut completed = 0;

    for draw in 1..=plan.draws {
        match session.select_random(raw_text) {
            Ok(current) => {
                *name_counts.entry(current.real_name.clone()).or_insert(0) += 1;
                fantasy_names
                    .entry(current.url.clone())
                    .or_insert_with(|| current.fantasy_name.clone());
            }
            Err(err) => {
                log::debug!("draw {draw}: {err}");
                exhausted_at = Some(draw);
                break;
            }
        }
        session.reveal();
        completed += 1;
    }

    DrawSimulation {
        seed: plan.seed,
        avoid_duplicates: plan.avoid_duplicates,
        requested_draws: plan.draws,
        completed_draws: completed,
        candidates: parsed.len(),
        groups,
        exhausted_at,
        name_counts,
        fantasy_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "https://www.google.com/maps/embed?pb=1, Lima\n\
                        https://www.google.com/maps/embed?pb=2, Lima\n\
                        https://www.google.com/maps/embed?pb=3, Cusco\n\
                        not a location\n";

    #[test]
    fn avoidance_exhausts_after_every_url_is_seen() {
        let plan = SimulationPlan {
            draws: 10,
            avoid_duplicates: true,
            seed: 7,
        };
        let sim = run_draw_simulation(TEXT, &plan);
        assert_eq!(sim.candidates, 3);
        assert_eq!(sim.groups, 2);
        assert_eq!(sim.completed_draws, 3);
        assert_eq!(sim.exhausted_at, Some(4));
        assert_eq!(sim.fantasy_names.len(), 3);
    }

    #[test]
    fn without_avoidance_every_draw_completes() {
        let plan = SimulationPlan {
            draws: 400,
            avoid_duplicates: false,
            seed: 11,
        };
        let sim = run_draw_simulation(TEXT, &plan);
        assert_eq!(sim.completed_draws, 400);
        assert!(sim.exhausted_at.is_none());
        assert!(sim.max_share_deviation() < 0.1);
    }

    #[test]
    fn empty_input_exhausts_immediately() {
        let plan = SimulationPlan {
            draws: 3,
            avoid_duplicates: false,
            seed: 1,
        };
        let sim = run_draw_simulation("", &plan);
        assert_eq!(sim.completed_draws, 0);
        assert_eq!(sim.exhausted_at, Some(1));
        assert!(sim.max_share_deviation().abs() < f64::EPSILON);
    }
}
