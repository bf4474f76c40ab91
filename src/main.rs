//! Extmove - extended cursor motions from the command line.
//!
//! # Usage
//!
//! ```bash
//! extmove notes.txt next-whitespace --at 3:0
//! extmove src/lib.rs next-char --char '(' --at 10:4 --at 12:4 --select
//! extmove src/lib.rs prev-last-char --at 10:20
//! extmove src/lib.rs exit --at 7:18
//! ```
//!
//! Prints the resulting selections, one per line, as `LINE:CHAR` for a
//! caret or `ANCHOR-ACTIVE` for a range.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use extmove::buffer::Position;
use extmove::config::{
    ConfigFlags, clear_config_flags, default_state_path, global_config_path, load_config_flags,
    load_search_memory, local_override_path, parse_flag_tokens, save_config_flags,
    save_search_memory,
};
use extmove::editor::{CommandError, Direction, Editor, Motion, SelectionSet, parse_search_char};

/// Extended cursor motions: whitespace, characters and surrounding pairs
#[derive(Parser, Debug)]
#[command(name = "extmove", version, about, long_about = None)]
struct Cli {
    /// Text file to navigate
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Motion to run
    #[arg(value_enum)]
    motion: MotionArg,

    /// Cursor position (zero-based); repeat for multiple cursors
    #[arg(long = "at", value_name = "LINE:CHAR", default_value = "0:0")]
    at: Vec<Position>,

    /// Character to search for with next-char / prev-char
    #[arg(long = "char", value_name = "C")]
    search: Option<String>,

    /// Extend selections instead of moving carets
    #[arg(long)]
    select: bool,

    /// File holding the last searched character
    #[arg(long, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum MotionArg {
    NextWhitespace,
    PrevWhitespace,
    NextChar,
    PrevChar,
    NextLastChar,
    PrevLastChar,
    Exit,
    Enter,
}

impl MotionArg {
    fn resolve(self, search: Option<&str>) -> Result<Motion> {
        Ok(match self {
            Self::NextWhitespace => Motion::Whitespace(Direction::Forward),
            Self::PrevWhitespace => Motion::Whitespace(Direction::Backward),
            Self::NextChar => Motion::Char(search_char(search)?, Direction::Forward),
            Self::PrevChar => Motion::Char(search_char(search)?, Direction::Backward),
            Self::NextLastChar => Motion::LastChar(Direction::Forward),
            Self::PrevLastChar => Motion::LastChar(Direction::Backward),
            Self::Exit => Motion::ExitSurrounding,
            Self::Enter => Motion::EnterSurrounding,
        })
    }
}

fn search_char(search: Option<&str>) -> Result<char> {
    let input = search.context("--char is required for character motions")?;
    Ok(parse_search_char(input)?)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    init_logging(effective.verbose);

    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let state_path = effective
        .state_file
        .clone()
        .unwrap_or_else(default_state_path);
    let memory = load_search_memory(&state_path)?;
    let motion = cli.motion.resolve(cli.search.as_deref())?;
    let selections =
        SelectionSet::carets(cli.at.iter().copied()).context("no cursor positions given")?;

    let mut editor = Editor::from_text(&text)
        .with_selections(selections)
        .with_memory(memory);
    tracing::debug!(?motion, file = %cli.file.display(), "running motion");

    match editor.execute(motion, effective.select) {
        Ok(true) => {}
        Ok(false) => tracing::info!("no cursor moved"),
        Err(err @ CommandError::CharNotFound { .. }) => eprintln!("[warn] {err}"),
        Err(err) => return Err(err.into()),
    }

    if editor.memory() != memory {
        save_search_memory(&state_path, &editor.memory())
            .with_context(|| format!("Failed to save search state {}", state_path.display()))?;
    }

    for selection in editor.selections().iter() {
        if selection.is_caret() {
            println!("{}", selection.active);
        } else {
            println!("{}-{}", selection.anchor, selection.active);
        }
    }
    Ok(())
}
