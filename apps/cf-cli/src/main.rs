use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use cf_app::{AppError, AppResult, FillReport, load_scenario, render_report, resolve_scenario};
use cf_fill::{
    CableTopology, ComplianceTable, FillEvaluation, core_radius_from_area, effective_area,
    effective_radius, max_allowable_fill, min_outer_diameter, outer_diameter_from_construction,
};

#[derive(Parser)]
#[command(name = "cf-cli")]
#[command(about = "Conduit fill CLI - cable fill and AS/NZS 3000 compliance checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Evaluate conduit fill; exits with status 2 when non-compliant
    Check {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective size of one cable construction
    Preview {
        /// Cable topology (single, three, four)
        #[arg(short, long, default_value = "single")]
        topology: String,
        /// Conductor cross-sectional area in mm²
        #[arg(long)]
        core_area: f64,
        /// Sheath thickness in mm
        #[arg(long, default_value_t = cf_fill::CableDefaults::SHEATH_THICKNESS)]
        sheath: f64,
        /// Installation margin in mm
        #[arg(long, default_value_t = cf_fill::CableDefaults::MARGIN)]
        margin: f64,
        /// Core insulation thickness in mm
        #[arg(long, default_value_t = 0.0)]
        insulation: f64,
    },
    /// Print the fill limit table, or the limit for one cable count
    Limits {
        /// Number of cables in the conduit
        #[arg(short, long)]
        count: Option<i64>,
    },
    /// Rewrite a scenario at the latest file version
    Migrate {
        /// Input scenario (any supported version)
        input: PathBuf,
        /// Output path; `.json` writes JSON, anything else YAML
        output: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Check {
            scenario_path,
            json,
        } => {
            let compliant = cmd_check(&scenario_path, json)?;
            if !compliant {
                std::process::exit(2);
            }
            Ok(())
        }
        Commands::Preview {
            topology,
            core_area,
            sheath,
            margin,
            insulation,
        } => cmd_preview(&topology, core_area, sheath, margin, insulation),
        Commands::Limits { count } => {
            cmd_limits(count);
            Ok(())
        }
        Commands::Migrate { input, output } => cmd_migrate(&input, &output),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    let resolved = resolve_scenario(&scenario)?;
    println!(
        "✓ Scenario is valid ({} cables)",
        resolved.snapshot.cable_count()
    );
    Ok(())
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    name: &'a str,
    evaluation: FillEvaluation,
    headroom: f64,
}

fn cmd_check(scenario_path: &Path, json: bool) -> AppResult<bool> {
    let scenario = load_scenario(scenario_path)?;
    let resolved = resolve_scenario(&scenario)?;

    let evaluation = match resolved.evaluate() {
        Ok(evaluation) => evaluation,
        Err(e) => {
            if !json {
                print!("{}", render_report(&FillReport::failed(&resolved.name, &e)));
            }
            return Err(e);
        }
    };

    if json {
        let output = CheckOutput {
            name: &resolved.name,
            evaluation,
            headroom: evaluation.headroom(),
        };
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| AppError::InvalidInput(format!("Failed to encode JSON: {}", e)))?;
        println!("{}", text);
    } else {
        print!(
            "{}",
            render_report(&FillReport::from_evaluation(&resolved.name, &evaluation))
        );
    }
    Ok(evaluation.compliant)
}

fn cmd_preview(
    topology: &str,
    core_area: f64,
    sheath: f64,
    margin: f64,
    insulation: f64,
) -> AppResult<()> {
    let topology: CableTopology = topology.parse()?;
    let core_radius = core_radius_from_area(core_area)?;
    let packing_radius = core_radius + insulation;

    let radius = effective_radius(topology, packing_radius, sheath, margin)?;
    let area = effective_area(topology, packing_radius, sheath, margin)?;
    let outer_diameter =
        outer_diameter_from_construction(topology, core_area, sheath, margin, insulation)?;
    let minimum = min_outer_diameter(topology, core_radius, sheath, insulation)?;

    println!("Topology:          {} ({} cores)", topology, topology.core_count());
    println!("Core radius:       {:.3} mm", core_radius);
    println!("Effective radius:  {:.3} mm", radius);
    println!("Effective area:    {:.2} mm²", area);
    println!("Outer diameter:    {:.3} mm", outer_diameter);
    println!("Minimum diameter:  {:.3} mm", minimum);
    for (i, [x, y]) in topology.core_offsets(packing_radius).into_iter().enumerate() {
        println!("  core {}: ({:+.3}, {:+.3}) mm", i + 1, x, y);
    }
    Ok(())
}

fn cmd_limits(count: Option<i64>) {
    match count {
        Some(n) => println!(
            "Max fill for {} cable(s): {:.1} %",
            n,
            max_allowable_fill(n)
        ),
        None => {
            let table = ComplianceTable::AS_NZS_3000;
            println!("AS/NZS 3000 conduit fill limits:");
            println!("  0 cables:    {:.1} %", table.no_cables);
            println!("  1 cable:     {:.1} %", table.one_cable);
            println!("  2 cables:    {:.1} %", table.two_cables);
            println!("  3 or more:   {:.1} %", table.three_or_more);
        }
    }
}

fn cmd_migrate(input: &Path, output: &Path) -> AppResult<()> {
    let scenario = load_scenario(input)?;
    cf_app::save_scenario(output, &scenario)?;
    println!(
        "✓ Wrote {} at version {}",
        output.display(),
        cf_project::LATEST_VERSION
    );
    Ok(())
}
