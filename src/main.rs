use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use timeslot_scheduler::display::{
    print_schedule_summary, write_capacity_report, write_configuration, write_constraint_summary,
    write_interval_notes,
};
use timeslot_scheduler::export::{export_result_json, export_schedule_csv};
use timeslot_scheduler::parser::{load_constraints, ConstraintSet};
use timeslot_scheduler::roster::{build_roster, load_names};
use timeslot_scheduler::schedule::{build_slots, capacity_report, run_schedule, Participant};
use timeslot_scheduler::{logger, IntervalMessages, Result, SchedulerConfig};

#[derive(Parser)]
#[command(name = "timeslot-scheduler")]
#[command(version)]
#[command(about = "Spreads participants over presentation time slots across one or more days", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the slot grid, assign participants and export the schedule
    Schedule {
        #[command(flatten)]
        grid: GridArgs,

        /// Constraints file: Name,AvailableDays,AvailableHours per line
        #[arg(short, long)]
        constraints: Option<PathBuf>,

        /// Participant names, one per line
        #[arg(short, long)]
        names: Option<PathBuf>,

        /// CSV file for the schedule
        #[arg(short, long, default_value = "presentation_schedule.csv")]
        output: PathBuf,

        /// Also write the full result as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Only compare slot capacity with the number of participants
    Check {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Run the preset example: 37 participants over two 9-16 days, 10-minute slots
    Demo {
        /// CSV file for the schedule
        #[arg(short, long, default_value = "presentation_schedule.csv")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct GridArgs {
    /// Number of participants to schedule
    #[arg(short, long)]
    participants: usize,

    /// Minutes per slot
    #[arg(long, default_value = "10")]
    slot_minutes: u32,

    /// Minutes of break between consecutive slots
    #[arg(long, default_value = "0")]
    break_minutes: u32,

    /// Time intervals of one day, e.g. "9-16" or "8:30-11:30,14-17"; repeat once per day
    #[arg(long = "day", value_name = "INTERVALS")]
    day: Vec<String>,

    /// Number of days sharing --hours when no --day is given
    #[arg(long, default_value = "1")]
    days: usize,

    /// Time intervals used for every day when no --day is given
    #[arg(long, default_value = "9-16")]
    hours: String,
}

impl GridArgs {
    fn into_config(self) -> Result<(SchedulerConfig, IntervalMessages)> {
        let day_specs = if self.day.is_empty() {
            vec![self.hours; self.days]
        } else {
            self.day
        };
        SchedulerConfig::from_interval_text(self.participants, self.slot_minutes, self.break_minutes, &day_specs)
    }
}

/// Appends `.csv` unless the path already ends with it
fn with_csv_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "csv") {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(".csv");
        raw.into()
    }
}

fn execute(
    config: &SchedulerConfig,
    participants: &[Participant],
    notes: &[String],
    mut warnings: Vec<String>,
    output: &Path,
    json: Option<&Path>,
) -> Result<()> {
    {
        let mut out = io::stdout().lock();
        write_configuration(&mut out, config)?;
        write_interval_notes(&mut out, notes)?;
        write_constraint_summary(&mut out, participants)?;
    }

    log::info!("Generating presentation schedule...");
    let (mut result, report) = run_schedule(config, participants);
    write_capacity_report(&mut io::stdout().lock(), &report)?;

    warnings.append(&mut result.warnings);
    result.warnings = warnings;

    print_schedule_summary(config, &result)?;

    export_schedule_csv(output, config, &result)?;
    if let Some(json) = json {
        export_result_json(json, &result)?;
    }

    if !result.unassigned_participants.is_empty() {
        log::warn!(
            "{} participants could not be scheduled",
            result.unassigned_participants.len()
        );
    }
    println!("\n✅ Schedule generated and exported to {}", output.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Schedule {
            grid,
            constraints,
            names,
            output,
            json,
        } => {
            let (config, messages) = grid.into_config()?;
            let mut warnings = messages.warnings;

            let constraint_set = match constraints {
                Some(path) => load_constraints(path)?,
                None => ConstraintSet::default(),
            };
            let names = names.map(load_names).transpose()?;
            let roster = build_roster(config.total_participants, names, &constraint_set.records);

            warnings.extend(constraint_set.warnings);
            warnings.extend(roster.warnings);

            execute(
                &config,
                &roster.participants,
                &messages.notes,
                warnings,
                &with_csv_extension(output),
                json.as_deref(),
            )
        }
        Commands::Check { grid } => {
            let (config, messages) = grid.into_config()?;
            let slots = build_slots(&config.days, config.slot_settings());
            let report = capacity_report(&config, slots.len(), config.total_participants);

            let mut out = io::stdout().lock();
            write_configuration(&mut out, &config)?;
            write_interval_notes(&mut out, &messages.notes)?;
            write_capacity_report(&mut out, &report)?;
            Ok(())
        }
        Commands::Demo { output } => {
            let (config, messages) = SchedulerConfig::from_interval_text(37, 10, 0, &["9-16", "9-16"])?;
            let roster = build_roster(config.total_participants, None, &[]);
            execute(
                &config,
                &roster.participants,
                &messages.notes,
                messages.warnings,
                &with_csv_extension(output),
                None,
            )
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
