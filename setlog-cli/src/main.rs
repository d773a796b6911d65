use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::info;
use std::collections::HashMap;

use setlog::WorkoutSession;
use setlog::logging::{self, Target};
use setlog::session::SummaryReport;

mod tui;

#[derive(Parser, Debug)]
#[command(version, about = "Setlog - Workout Logger CLI", long_about = None)]
struct Args {
    /// off, error, warn, info, debug or trace
    #[arg(long, global = true, env = "SETLOG_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive setup, rep logging and summary
    Interactive,
    /// Log a whole workout from arguments and print the summary
    Log {
        /// Exercise as NAME:SETS (repeatable)
        #[arg(short, long = "exercise", required = true)]
        exercises: Vec<String>,
        /// Reps for one exercise as NAME=R1,R2,... (repeatable)
        #[arg(short, long = "reps")]
        reps: Vec<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Splits `NAME:SETS` at the last colon.
fn parse_exercise_arg(arg: &str) -> Result<(&str, &str)> {
    match arg.rsplit_once(':') {
        Some((name, sets)) => Ok((name, sets)),
        None => bail!("expected NAME:SETS, got {:?}", arg),
    }
}

/// Splits `NAME=R1,R2,...` into the name and the raw text of each set.
fn parse_reps_arg(arg: &str) -> Result<(&str, HashMap<usize, String>)> {
    let Some((name, values)) = arg.split_once('=') else {
        bail!("expected NAME=R1,R2,..., got {:?}", arg);
    };
    let reps = values
        .split(',')
        .map(|v| v.trim().to_string())
        .enumerate()
        .collect();
    Ok((name.trim(), reps))
}

fn run_log(exercises: &[String], reps: &[String]) -> Result<SummaryReport> {
    let mut session = WorkoutSession::new();

    for arg in exercises {
        let (name, sets) = parse_exercise_arg(arg)?;
        session
            .add_exercise_raw(name, sets)
            .with_context(|| format!("Failed to add {:?}", arg))?;
    }
    session.start_workout()?;

    for arg in reps {
        let (name, raw) = parse_reps_arg(arg)?;
        let index = session
            .find_exercise(name)
            .with_context(|| format!("No exercise named {:?}", name))?;
        session.select_exercise_for_editing(index)?;
        let saved = session.record_reps_raw(&raw)?;
        info!("Logged {}", saved);
    }

    session.finish_workout()?;
    Ok(session.compute_summary())
}

fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    if !logging::set_log_level(&args.log_level, Target::Stderr) {
        bail!("Unknown log level {:?}", args.log_level);
    }

    match args.command {
        Commands::Interactive => {
            let terminal = ratatui::init();
            let result = tui::run(terminal);
            ratatui::restore();
            result
        }
        Commands::Log {
            exercises,
            reps,
            json,
        } => {
            let report = run_log(&exercises, &reps)?;
            if json {
                println!("{}", report.to_json_pretty()?);
            } else {
                print!("{}", report);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlog::{ErrorKind, WorkoutError};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from([
            "setlog", "log", "-e", "Squat:3", "-e", "Curl:2", "-r", "Squat=10,8,0", "--json",
        ])
        .unwrap();
        match args.command {
            Commands::Log {
                exercises,
                reps,
                json,
            } => {
                assert_eq!(exercises, ["Squat:3", "Curl:2"]);
                assert_eq!(reps, ["Squat=10,8,0"]);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Args::try_parse_from(["setlog", "log"]).is_err());
    }

    #[test]
    fn exercise_arg() {
        assert_eq!(parse_exercise_arg("Squat:3").unwrap(), ("Squat", "3"));
        assert_eq!(
            parse_exercise_arg("Row: pendlay:4").unwrap(),
            ("Row: pendlay", "4")
        );
        assert!(parse_exercise_arg("Squat").is_err());
    }

    #[test]
    fn reps_arg() {
        let (name, reps) = parse_reps_arg(" Squat =10, 8,").unwrap();
        assert_eq!(name, "Squat");
        assert_eq!(reps.len(), 3);
        assert_eq!(reps[&1], "8");
        assert_eq!(reps[&2], "");
        assert!(parse_reps_arg("Squat 10").is_err());
    }

    #[test]
    fn log_produces_summary() {
        let report = run_log(
            &strings(&["Squat:3", "Curl:3", "Press:2"]),
            &strings(&["Squat=10,8,0", "Press=3,4"]),
        )
        .unwrap();
        let names: Vec<&str> = report.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Squat", "Press"]);
        assert_eq!(report.total_reps, 25);
        assert_eq!(report.total_sets_logged, 4);
        assert_eq!(report.total_exercises_with_progress, 2);
    }

    #[test]
    fn log_surfaces_workout_errors() {
        let err = run_log(&strings(&["Squat:3"]), &strings(&["Squat=10,8,0"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WorkoutError>().map(WorkoutError::kind),
            Some(ErrorKind::NoCompletedExercises)
        );

        let err = run_log(&strings(&["Squat:12"]), &[]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WorkoutError>().map(WorkoutError::kind),
            Some(ErrorKind::InvalidSetCount)
        );

        assert!(run_log(&strings(&["Squat:1"]), &strings(&["Lunge=5"])).is_err());
    }
}
