use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use level_switch::{LevelSwitch, LevelSwitchConfig, LevelSwitchDelegate, SwitchResponse};
use tracing::info;

mod canvas;
mod output;
mod script;

use canvas::{LogFeedback, TextCanvas};
use script::Script;

#[derive(Parser)]
#[command(name = "level-switch-demo")]
#[command(version, about = "Replay pointer events against a level switch", long_about = None)]
struct Cli {
    /// Switch configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pointer event script (TOML); defaults to a top-to-bottom sweep
    #[arg(short, long)]
    script: Option<PathBuf>,
    /// Override the requested number of segments
    #[arg(long, allow_hyphen_values = true)]
    levels: Option<i32>,
    /// Override the initial level
    #[arg(long, allow_hyphen_values = true)]
    level: Option<i32>,
    /// Add a level 0 row beneath the segments
    #[arg(long)]
    off_stop: bool,
    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

struct Reporter;

impl LevelSwitchDelegate for Reporter {
    fn level_changed(&self, switch: &LevelSwitch, level: usize) {
        info!(level, levels = switch.level_count(), "level changed");
    }

    fn dismissed(&self, switch: &LevelSwitch) {
        info!(level = switch.level(), "dismiss requested");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => LevelSwitchConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => LevelSwitchConfig::default(),
    };
    if let Some(levels) = cli.levels {
        config.levels = levels;
    }
    if let Some(level) = cli.level {
        config.level = level;
    }
    config.off_stop |= cli.off_stop;

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => Script::sweep(&config),
    };

    let canvas = TextCanvas::default();
    let reporter = Arc::new(Reporter);
    let mut switch = LevelSwitch::new(
        config
            .to_args()
            .feedback(Arc::new(LogFeedback))
            .canvas(canvas.clone()),
    );
    switch.set_delegate(&reporter);

    output::status(
        "Configured",
        format!(
            "{} segments of {:.0}dp, level {}",
            switch.level_count(),
            switch.segment_height().0,
            switch.level()
        ),
    );
    output::stack(&canvas.snapshot(), switch.has_off_stop());

    for (index, event) in script.events.iter().enumerate() {
        let response = switch.handle_event(event.to_pointer_event());
        output::step(format!("#{index:<3} {event} -> {response:?}"));
        match response {
            SwitchResponse::LevelChanged(_) => {
                output::stack(&canvas.snapshot(), switch.has_off_stop());
            }
            SwitchResponse::Dismissed => {
                output::note("switch dismissed, remaining events skipped");
                break;
            }
            _ => {}
        }
    }

    output::status(
        "Finished",
        format!("level {} of {}", switch.level(), switch.level_count()),
    );
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "error,level_switch=debug,level_switch_demo=debug"
    } else {
        "error,level_switch=info,level_switch_demo=info"
    };
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(default_directives) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
