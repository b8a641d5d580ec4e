//! Countries command - list the evaluation countries

use clap::Parser;

use crate::cli::parser::parse_bool_arg;
use crate::country::{display_name_for_file, TRAINED_FILES, ZERO_SHOT_FILES};

/// List evaluation countries with their display names
#[derive(Parser, Debug)]
pub struct CountriesArgs {
    /// List the zero-shot countries instead of the trained ones
    #[arg(long, value_parser = parse_bool_arg, default_value = "false", value_name = "BOOL", action = clap::ArgAction::Set)]
    pub zero_shot: bool,

    /// Print bare alpha-2 codes only
    #[arg(long)]
    pub codes: bool,
}

pub fn run(args: CountriesArgs) -> Result<(), String> {
    let (label, files): (&str, &[&str]) = if args.zero_shot {
        ("zero-shot", &ZERO_SHOT_FILES)
    } else {
        ("trained", &TRAINED_FILES)
    };

    if !args.codes {
        println!("{} countries ({}):", label, files.len());
    }

    for file in files {
        let code = file.trim_end_matches(".p");
        if args.codes {
            println!("{}", code);
        } else {
            let name = display_name_for_file(file).map_err(|e| e.to_string())?;
            println!("  {}  {}", code, name);
        }
    }
    Ok(())
}
