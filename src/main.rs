mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction, ProfileAction};
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::EnvFilter;

use fitcalc::models::config::Config;
use fitcalc::output;

/// `FITCALC_LOG` wins over `[log] level` in the config file. Logs go to
/// stderr so stdout stays parseable JSON.
fn init_logging() {
    let filter = EnvFilter::try_from_env("FITCALC_LOG").unwrap_or_else(|_| {
        let level = Config::load()
            .map(|c| c.log.level)
            .unwrap_or_else(|_| "warn".to_string());
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Profile { .. } => "profile",
        Commands::Track { .. } => "track",
        Commands::Bmr { .. } => "bmr",
        Commands::Macros { .. } => "macros",
        Commands::Protein { .. } => "protein",
        Commands::Hydration { .. } => "hydration",
        Commands::Glycemic { .. } => "glycemic",
        Commands::OneRm { .. } => "one-rm",
        Commands::Volume { .. } => "volume",
        Commands::Body { .. } => "body",
        Commands::Balance { .. } => "balance",
        Commands::Periodize { .. } => "periodize",
        Commands::Progress { .. } => "progress",
        Commands::Export { .. } => "export",
        Commands::Import { .. } => "import",
        Commands::Clear { .. } => "clear",
        Commands::Config { .. } => "config",
        Commands::Completions { .. } => "completions",
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let name = command_name(&cli.command);
    let human = cli.human;

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Profile { action } => match action {
            ProfileAction::Show => cmd::profile::run_show(human),
            ProfileAction::Set {
                body,
                goal,
                target_weight,
                bmr_method,
                meals,
                climate,
                units,
            } => cmd::profile::run_set(
                cmd::profile::ProfileArgs {
                    body: &body,
                    goal: goal.as_deref(),
                    target_weight,
                    bmr_method: bmr_method.as_deref(),
                    meals,
                    climate: climate.as_deref(),
                    units: units.as_deref(),
                },
                human,
            ),
        },
        Commands::Track { action } => cmd::track::run(action, cli.date, human),
        Commands::Bmr { body, method } => cmd::calc::run_bmr(&body, method.as_deref(), human),
        Commands::Macros {
            calories,
            goal,
            protein,
            fat,
            carb,
        } => cmd::calc::run_macros(
            cmd::calc::MacroArgs {
                calories,
                goal: goal.as_deref(),
                protein,
                fat,
                carb,
            },
            human,
        ),
        Commands::Protein {
            objective,
            weight,
            meals,
        } => cmd::calc::run_protein(&objective, weight, meals, human),
        Commands::Hydration {
            weight,
            activity,
            climate,
            exercise,
        } => cmd::calc::run_hydration(
            weight,
            activity.as_deref(),
            climate.as_deref(),
            exercise,
            human,
        ),
        Commands::Glycemic {
            gi,
            carbs,
            fiber,
            meal,
        } => cmd::calc::run_glycemic(gi, carbs, fiber, meal.as_deref(), human),
        Commands::OneRm { weight, reps } => cmd::calc::run_one_rm(weight, reps, human),
        Commands::Volume {
            sets,
            one_rm,
            tempo,
        } => cmd::calc::run_volume(&sets, one_rm, tempo.as_deref(), human),
        Commands::Body {
            body,
            waist,
            neck,
            hip,
        } => cmd::calc::run_body(&body, waist, neck, hip, human),
        Commands::Balance {
            intake,
            weeks,
            experience,
        } => cmd::calc::run_balance(intake, weeks, &experience, human),
        Commands::Periodize { weeks, objective } => {
            cmd::plan::run_periodize(weeks, &objective, human)
        }
        Commands::Progress {
            current,
            target,
            weeks,
            strategy,
        } => cmd::plan::run_progress(current, target, weeks, &strategy, human),
        Commands::Export { output } => cmd::data::run_export(output.as_deref(), human),
        Commands::Import { file } => cmd::data::run_import(&file, human),
        Commands::Clear { yes } => cmd::data::run_clear(yes, human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "fitcalc", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let err = output::error(name, output::error_code(&e), &format!("{:#}", e));
        eprintln!("{}", err);
        process::exit(1);
    }
}
