pub mod completions;
pub mod convert;
pub mod init;
pub mod parse;
pub mod show;
pub mod validate;

use clap::{Parser, Subcommand};

/// hexaban - Hexoban puzzle collection converter
#[derive(Parser, Debug)]
#[command(name = "hexaban")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert the collections listed in hexaban.yaml to JSON
    Convert(convert::ConvertArgs),

    /// Parse a single collection file and print its puzzles as JSON
    Parse(parse::ParseArgs),

    /// Validate converted puzzle files
    Validate(validate::ValidateArgs),

    /// Print converted puzzles as text grids
    Show(show::ShowArgs),

    /// Initialize a hexaban project (generates hexaban.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
