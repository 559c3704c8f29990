//! CLI frontend for the Arcana tarot reader.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — tarot catalog, readings, and reveals in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory where readings and the profile are saved
    #[arg(long, global = true, default_value = ".arcana")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cards in the catalog
    Cards {
        /// Filter by category: major, minor, court
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by suit: wands, cups, swords, pentacles
        #[arg(short = 'u', long)]
        suit: Option<String>,

        /// Filter by name or keyword
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show detailed information about a card
    Card {
        /// Card id, e.g. the-fool or ace-of-cups
        id: String,
    },

    /// List the available spreads
    Spreads,

    /// Show the positions and layout of a spread
    Spread {
        /// Spread id: three-card, celtic-cross, tree-of-life
        id: String,
    },

    /// Draw a reading and reveal it
    Draw(DrawArgs),

    /// List saved readings
    History,

    /// Show a saved reading, fully revealed
    Show {
        /// Reading id or id prefix
        id: String,
    },

    /// Delete a saved reading
    Delete {
        /// Reading id or id prefix
        id: String,
    },

    /// Export a saved reading
    Export {
        /// Reading id or id prefix
        id: String,

        /// Output format: markdown, text, json
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or update the user profile
    Profile {
        /// Set the display name
        #[arg(long)]
        name: Option<String>,

        /// Set the birthdate (YYYY-MM-DD)
        #[arg(long)]
        birthdate: Option<String>,

        /// Set the default spread
        #[arg(long)]
        spread: Option<String>,

        /// Clear the saved profile
        #[arg(long, conflicts_with_all = ["name", "birthdate", "spread"])]
        clear: bool,
    },
}

/// Options for `arcana draw`.
#[derive(Args)]
pub struct DrawArgs {
    /// Spread id (default: profile favourite, else three-card)
    spread: Option<String>,

    /// The question to ask
    #[arg(short, long)]
    question: Option<String>,

    /// RNG seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the reveal animation
    #[arg(long)]
    instant: bool,

    /// Deal face down and wait instead of revealing automatically
    #[arg(long)]
    no_auto_reveal: bool,

    /// Shuffle duration in milliseconds
    #[arg(long, default_value = "2000")]
    shuffle_ms: u64,

    /// Pause before the first reveal in milliseconds
    #[arg(long, default_value = "2000")]
    pre_reveal_ms: u64,

    /// Interval between reveals in milliseconds
    #[arg(long, default_value = "1200")]
    interval_ms: u64,

    /// Save the reading when done
    #[arg(short, long)]
    save: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let store = cli.store;

    let result = match cli.command {
        Commands::Cards {
            category,
            suit,
            search,
        } => commands::cards::list(category.as_deref(), suit.as_deref(), search.as_deref()),
        Commands::Card { id } => commands::cards::show(&id),
        Commands::Spreads => commands::spreads::list(),
        Commands::Spread { id } => commands::spreads::show(&id),
        Commands::Draw(args) => commands::draw::run(&store, &args),
        Commands::History => commands::history::list(&store),
        Commands::Show { id } => commands::history::show(&store, &id),
        Commands::Delete { id } => commands::history::delete(&store, &id),
        Commands::Export { id, format, output } => {
            commands::export::run(&store, &id, &format, output.as_deref())
        }
        Commands::Profile {
            name,
            birthdate,
            spread,
            clear,
        } => commands::profile::run(
            &store,
            commands::profile::ProfileUpdate {
                name,
                birthdate,
                spread,
                clear,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
