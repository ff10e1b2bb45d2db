use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use super::{DrawSimulation, ScenarioResult};

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    scenarios: &'a [ScenarioResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    simulation: Option<&'a DrawSimulation>,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    (passed as f64 / results.len() as f64) * 100.0
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    simulation: Option<&DrawSimulation>,
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Logic Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==============================".cyan())?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();
    let failed_tests = total_tests - passed_tests;

    writeln!(out, "Total scenarios: {total_tests}")?;
    writeln!(out, "Passed: {}", passed_tests.to_string().green())?;
    writeln!(out, "Failed: {}", failed_tests.to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };

        writeln!(out, "{} {} (seed {})", status, result.scenario_name.bold(), result.seed)?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;

        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    if let Some(sim) = simulation {
        write_console_simulation(out, sim)?;
    }
    Ok(())
}

fn write_console_simulation(out: &mut dyn Write, sim: &DrawSimulation) -> Result<()> {
    writeln!(out, "{}", "🎲 Draw Simulation".bright_yellow().bold())?;
    writeln!(out, "{}", "==================".yellow())?;
    writeln!(
        out,
        "Candidates: {} in {} name groups (seed {}, avoid duplicates: {})",
        sim.candidates, sim.groups, sim.seed, sim.avoid_duplicates
    )?;
    writeln!(
        out,
        "Draws: {}/{} completed",
        sim.completed_draws, sim.requested_draws
    )?;
    if let Some(draw) = sim.exhausted_at {
        writeln!(out, "{}", format!("Exhausted at draw {draw}").yellow())?;
    }
    for (name, hits) in &sim.name_counts {
        writeln!(out, "   {name:30} {hits}")?;
    }
    writeln!(
        out,
        "Max deviation from a fair share: {:.3}",
        sim.max_share_deviation()
    )?;
    Ok(())
}

pub fn generate_json_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    simulation: Option<&DrawSimulation>,
) -> Result<()> {
    let report = JsonReport {
        generated_at: timestamp(),
        scenarios: results,
        simulation,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    simulation: Option<&DrawSimulation>,
) -> Result<()> {
    writeln!(out, "# Street View Roulette Logic Test Results\n")?;
    writeln!(out, "_Generated {}_\n", timestamp())?;

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|r| r.passed).count();

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total_tests}")?;
    writeln!(out, "- **Passed**: {passed_tests}")?;
    writeln!(out, "- **Failed**: {}", total_tests - passed_tests)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    if !results.is_empty() {
        writeln!(out, "## Detailed Results\n")?;
    }
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {} {} (seed {})\n", status, result.scenario_name, result.seed)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }

    if let Some(sim) = simulation {
        writeln!(out, "## Draw Simulation\n")?;
        writeln!(out, "| Name | Draws |")?;
        writeln!(out, "|------|-------|")?;
        for (name, hits) in &sim.name_counts {
            writeln!(out, "| {name} | {hits} |")?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "- **Completed**: {}/{}",
            sim.completed_draws, sim.requested_draws
        )?;
        if let Some(draw) = sim.exhausted_at {
            writeln!(out, "- **Exhausted at draw**: {draw}")?;
        }
    }
    Ok(())
}
