use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use fretlab::tuning::InstrumentKind;
use fretlab::{render, TheoryEngine};

#[derive(Parser)]
#[command(name = "fretlab", version, about = "Scales and chords on fretboards and keyboards")]
struct Cli {
    /// YAML preset applied before any selection flags
    #[arg(long, global = true)]
    preset: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Default)]
struct Selection {
    /// Key, e.g. C, F#, Bb
    #[arg(long)]
    key: Option<String>,

    /// Category id, e.g. diatonicModes, seventh
    #[arg(long)]
    category: Option<String>,

    /// Scale or chord id within the category
    #[arg(long)]
    item: Option<String>,

    /// Instrument id: guitar, bassGuitar, piano
    #[arg(long)]
    instrument: Option<String>,

    /// Tuning id for the instrument
    #[arg(long)]
    tuning: Option<String>,

    /// Number of strings (or keys for piano)
    #[arg(long)]
    strings: Option<u16>,

    /// Label notes with scale degrees
    #[arg(long)]
    degrees: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fretboard or keyboard for a selection
    Board(Selection),

    /// Print the name and formulas of a selection
    Formula(Selection),

    /// Print the layout as JSON
    Json(Selection),

    /// List categories and their items
    List {
        /// List instruments and tunings instead
        #[arg(long)]
        instruments: bool,
    },

    /// Print the current selection as a YAML preset
    Save(Selection),
}

fn build_engine(preset: Option<&PathBuf>, selection: &Selection) -> Result<TheoryEngine> {
    let mut engine = match preset {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading preset {}", path.display()))?;
            let engine = fretlab::engine_from_preset(&content)?;
            log::info!("Loaded preset from {}", path.display());
            engine
        }
        None => TheoryEngine::new(),
    };

    if let Some(instrument) = &selection.instrument {
        if !engine.set_instrument(instrument) {
            bail!("unknown instrument '{}'", instrument);
        }
    }
    if let Some(tuning) = &selection.tuning {
        engine.set_tuning(tuning);
    }
    if let Some(count) = selection.strings {
        engine.set_string_count(count);
    }
    if let Some(category) = &selection.category {
        if !engine.set_category(category) {
            bail!("unknown category '{}'", category);
        }
    }
    if let Some(item) = &selection.item {
        engine.set_item(item);
        if engine.current_item().is_none() {
            bail!("unknown item '{}' in category '{}'", item, engine.state().category);
        }
    }
    if let Some(key) = &selection.key {
        if engine.note_index(key).is_none() {
            bail!("unknown key '{}'", key);
        }
        engine.set_key(key);
    }
    if selection.degrees && !engine.state().show_degrees {
        engine.toggle_notation_labels();
    }

    log::debug!("selection: {:?}", engine.state());
    Ok(engine)
}

fn is_keyboard(engine: &TheoryEngine) -> bool {
    engine.current_instrument().map(|i| i.kind) == Some(InstrumentKind::Keyboard)
}

fn print_board(engine: &TheoryEngine) -> Result<()> {
    let show_degrees = engine.state().show_degrees;
    let text = if is_keyboard(engine) {
        let keys = engine.generate_keyboard();
        if keys.is_empty() {
            bail!("tuning '{}' has no {}-key layout", engine.state().tuning, engine.state().string_count);
        }
        render::to_text_keyboard(&keys, show_degrees)
    } else {
        let board = engine.generate_fretboard();
        if board.is_empty() {
            bail!(
                "tuning '{}' has no {}-string layout",
                engine.state().tuning,
                engine.state().string_count
            );
        }
        render::to_text_fretboard(&board, show_degrees)
    };

    println!("{}", engine.display_name());
    print!("{}", text);
    Ok(())
}

fn print_json(engine: &TheoryEngine) -> Result<()> {
    let json = if is_keyboard(engine) {
        serde_json::to_string_pretty(&engine.generate_keyboard())?
    } else {
        serde_json::to_string_pretty(&engine.generate_fretboard())?
    };
    println!("{}", json);
    Ok(())
}

fn print_list(engine: &TheoryEngine, instruments: bool) {
    if instruments {
        for instrument in engine.instruments() {
            let counts: Vec<String> = instrument.supported_counts.iter().map(|c| c.to_string()).collect();
            println!("{} ({}) [{}]", instrument.id, instrument.name, counts.join(", "));
            for tuning in instrument.tunings {
                let marker = if tuning.id == instrument.default_tuning { "*" } else { " " };
                let counts: Vec<String> = tuning.counts().map(|c| c.to_string()).collect();
                println!("  {} {:<16} {:<24} [{}]", marker, tuning.id, tuning.name, counts.join(", "));
            }
        }
        return;
    }

    for category in engine.categories() {
        println!("{} ({}: {})", category.id, category.item_label(), category.name);
        for item in category.items {
            println!("  {:<20} {}", item.id, item.name);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let preset = cli.preset.as_ref();
    match &cli.command {
        Commands::Board(selection) => print_board(&build_engine(preset, selection)?),
        Commands::Formula(selection) => {
            let engine = build_engine(preset, selection)?;
            print!("{}", render::to_text_formula(&engine));
            Ok(())
        }
        Commands::Json(selection) => print_json(&build_engine(preset, selection)?),
        Commands::List { instruments } => {
            print_list(&build_engine(preset, &Selection::default())?, *instruments);
            Ok(())
        }
        Commands::Save(selection) => {
            let engine = build_engine(preset, selection)?;
            print!("{}", fretlab::save_preset(engine.state())?);
            Ok(())
        }
    }
}
