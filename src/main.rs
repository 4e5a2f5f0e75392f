// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced-toast

USAGE:
  iced-toast [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
                        (overrides ICED_TOAST_CONFIG_DIR)
  -h, --help            Print this help

ENVIRONMENT:
  RUST_LOG              Log filter (default: iced_toast=info)
";

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iced_toast=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    setup_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(lang = ?flags.lang, "starting iced-toast");
    app::run(flags)
}
