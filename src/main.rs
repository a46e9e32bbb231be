// SPDX-License-Identifier: MPL-2.0
use ai_gallery::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: ai_gallery [OPTIONS] [FILES...]

Options:
  --lang <LOCALE>            UI language (e.g. en-US, fr)
  --endpoint <URL>           Analyze service endpoint
  --config-dir <DIR>         Directory holding settings.toml
  --diagnostics-out <FILE>   Write a diagnostics report on exit
  -h, --help                 Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let endpoint = args.opt_value_from_str("--endpoint")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let diagnostics_out = args.opt_value_from_str("--diagnostics-out")?;
    let files = args
        .finish()
        .into_iter()
        .map(PathBuf::from)
        .collect();

    Ok(Flags {
        lang,
        endpoint,
        config_dir,
        diagnostics_out,
        files,
    })
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
