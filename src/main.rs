use clap::Parser;
use hexaban::cli::{Cli, Commands};
use hexaban::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Convert(args) => hexaban::cli::convert::run(args, &printer)?,
        Commands::Parse(args) => hexaban::cli::parse::run(args, &printer)?,
        Commands::Validate(args) => hexaban::cli::validate::run(args, &printer)?,
        Commands::Show(args) => hexaban::cli::show::run(args, &printer)?,
        Commands::Init(args) => hexaban::cli::init::run(args, &printer)?,
        Commands::Completions(args) => hexaban::cli::completions::run(args)?,
    }

    Ok(())
}
