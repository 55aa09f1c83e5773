//! Extract command - find an IBAN in plain text from a file or stdin.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;

use ibandetect_core::scan_text;

use super::OutputFormat;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print only the formatted IBAN
    #[arg(short, long)]
    quiet: bool,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let Some(found) = scan_text(&text) else {
        eprintln!("{}", style("No valid IBAN found.").yellow());
        std::process::exit(1);
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
        OutputFormat::Text => {
            if args.quiet {
                println!("{}", found.formatted);
            } else {
                println!("{} {}", style("IBAN:").green().bold(), found.formatted);
                println!("Matched line: {}", found.raw);
            }
        }
    }

    Ok(())
}
