use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::LevelFilter;
use navlink::core::config;
use navlink::core::{Intent, NavigationState, NavigatorTree, Outcome, Route, link_to};
use navlink::linking::{RecordingDispatcher, route_table::HOME_SCREEN};
use serde::Serialize;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "navlink", about = "Resolve a deep link against a live navigation tree")]
struct Args {
    /// Path to resolve, e.g. /r/123/details
    path: String,

    /// JSON file holding the live navigation state (default: a Home-only tree)
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Key of the navigator the link is followed from (default: the root)
    #[arg(short, long)]
    from: Option<String>,

    /// Why the link is followed
    #[arg(short, long, value_enum)]
    intent: Option<Intent>,

    /// Route table TOML file, overrides config and NAVLINK_LINKING_FILE
    #[arg(long)]
    linking: Option<PathBuf>,

    /// Log level written to navlink.log
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug)]
enum InputError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, serde_json::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(path, e) => write!(f, "failed to read {}: {e}", path.display()),
            InputError::Parse(path, e) => write!(f, "invalid navigation state in {}: {e}", path.display()),
        }
    }
}

impl std::error::Error for InputError {}

#[derive(Serialize)]
struct Report<'a> {
    outcome: &'static str,
    #[serde(flatten)]
    dispatcher: &'a RecordingDispatcher,
}

fn load_state(path: Option<&Path>) -> Result<NavigationState, InputError> {
    let Some(path) = path else {
        return Ok(NavigationState::new(vec![Route::new(HOME_SCREEN).with_key("home")]).with_key("root"));
    };
    let json = fs::read_to_string(path).map_err(|e| InputError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&json).map_err(|e| InputError::Parse(path.to_path_buf(), e))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to navlink.log in current directory.
    // The level is narrowed once the config is resolved.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("navlink.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config, args.linking.as_deref(), args.log_level.as_deref())?;
    log::set_max_level(resolved.log_level);

    log::info!("Resolving '{}' (intent: {:?})", args.path, args.intent);

    let live = load_state(args.state.as_deref())?;
    let tree = NavigatorTree::new(&live);
    let handle = match &args.from {
        Some(key) => tree.find(key),
        None => Some(tree.root()),
    };

    let mut dispatcher = RecordingDispatcher::new();
    let outcome = link_to(handle, &args.path, args.intent, &resolved.linking, &mut dispatcher)?;

    let report = Report {
        outcome: match outcome {
            Outcome::Minimal => "minimal",
            Outcome::Classified => "classified",
            Outcome::Reset => "reset",
        },
        dispatcher: &dispatcher,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
