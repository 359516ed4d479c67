use std::io::{self, BufRead};
use std::process;

use clap::{Parser, Subcommand};

use hanpin::converter::{full_form_with, initials_form_with};
use hanpin::{default_dict, hex_encode, HanziReadings, OutputFormat, PhraseDict};

#[derive(Parser)]
#[command(name = "hanpin", about = "Chinese-to-pinyin transliteration")]
struct Cli {
    /// Path to a custom phrase dictionary (reading:word1 word2 ... per line)
    #[arg(long)]
    dict: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full pinyin of the given text, or of each stdin line if omitted
    Full {
        text: Option<String>,
    },

    /// Pinyin initials of the given text, or of each stdin line if omitted
    Initials {
        text: Option<String>,
    },

    /// Lowercase hex dump of the text's UTF-8 bytes
    Hex {
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let custom;
    let dict: &PhraseDict = match &cli.dict {
        Some(path) => {
            custom = PhraseDict::load_or_empty(path);
            &custom
        }
        None => default_dict(),
    };

    match cli.command {
        Command::Full { text } => convert(dict, false, text),
        Command::Initials { text } => convert(dict, true, text),
        Command::Hex { text } => println!("{}", hex_encode(&text)),
    }
}

fn convert(dict: &PhraseDict, initials: bool, text: Option<String>) {
    match text {
        Some(text) => println!("{}", convert_line(dict, initials, &text)),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        eprintln!("error reading stdin: {e}");
                        process::exit(1);
                    }
                };
                println!("{}", convert_line(dict, initials, &line));
            }
        }
    }
}

fn convert_line(dict: &PhraseDict, initials: bool, line: &str) -> String {
    let format = OutputFormat::default();
    let result = if initials {
        initials_form_with(dict, &HanziReadings, &format, line)
    } else {
        full_form_with(dict, &HanziReadings, &format, line)
    };
    match result {
        Ok(out) => out,
        Err(e) => {
            eprintln!("conversion failed: {e}");
            process::exit(1);
        }
    }
}
