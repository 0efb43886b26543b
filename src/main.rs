// SPDX-License-Identifier: MPL-2.0
use feline_fascination::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Feline Fascination

USAGE:
  feline_fascination [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <ID>              Interface language (e.g. en-US, fr)
  --facts <FILE>           TOML file with a custom fact deck (facts = [\"...\"])
  --config-dir <DIR>       Directory holding settings.toml
  --data-dir <DIR>         Directory receiving diagnostics exports
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let facts_path: Option<PathBuf> = args.opt_value_from_str("--facts")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {:?}", remaining);
    }

    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    Ok(Some(Flags {
        lang,
        facts_path,
        config_dir: config_dir.map(PathBuf::from),
        data_dir: data_dir.map(PathBuf::from),
    }))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{}", HELP);
            return Ok(());
        }
        Err(error) => {
            eprintln!("Error: {}\n\n{}", error, HELP);
            std::process::exit(2);
        }
    };

    app::run(flags)
}
