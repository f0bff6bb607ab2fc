use std::error;

use biborcid::{IdentifierTable, Parser};

use clap;
use clap::Parser as CLIParser;

#[cfg(not(feature = "serde_json"))]
#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Settings {
    /// Filepath to a file holding one bib entry
    #[clap(short, long)]
    input: String,

    /// Filepath to a CSV table with 'author' and 'orcid' columns
    #[clap(short, long)]
    table: Option<String>,
}

#[cfg(feature = "serde_json")]
#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Settings {
    /// Filepath to a file holding one bib entry
    #[clap(short, long)]
    input: String,

    /// Filepath to a CSV table with 'author' and 'orcid' columns
    #[clap(short, long)]
    table: Option<String>,

    #[clap(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let settings = Settings::parse();

    let parser = Parser::from_file(&settings.input)?;
    let mut parsed = parser.parse()?;
    for warning in &parsed.warnings {
        eprintln!("{}", warning);
    }

    if let Some(path) = &settings.table {
        let table = IdentifierTable::from_csv_path(path)?;
        table.enrich(&mut parsed.entry);
    }

    #[cfg(feature = "serde_json")]
    {
        if settings.json {
            println!("{}", serde_json::to_string(&parsed.entry)?);
            return Ok(());
        }
    }

    print!("{}", parsed.entry);

    Ok(())
}
