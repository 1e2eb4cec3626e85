// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use wallgen_client::app::{self, paths, Flags};

const HELP: &str = "\
WallGen - wallpaper generation client

USAGE:
  wallgen_client [OPTIONS] [FILE]

ARGS:
  [FILE]                    Image to stage on startup

OPTIONS:
  --lang <LOCALE>           UI language (e.g. en-US, fr)
  --endpoint <URL>          Generation service base URL
  --resolutions <LIST>      Comma-separated resolutions to offer
  --config-dir <DIR>        Directory containing settings.toml
  -h, --help                Print this help

ENVIRONMENT:
  WALLGEN_CONFIG_DIR        Same as --config-dir
  RUST_LOG                  Log filter (default: wallgen_client=info)
";

const DEFAULT_LOG_FILTER: &str = "wallgen_client=info";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting WallGen client");

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let endpoint = args.opt_value_from_str("--endpoint")?;
    let resolutions = args.opt_value_from_str("--resolutions")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        file_path,
        endpoint,
        config_dir,
        resolutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_all_options_and_file() {
        let flags = parse_flags(args(&[
            "--lang",
            "fr",
            "--endpoint",
            "http://localhost:9000",
            "--resolutions",
            "1080p,4k",
            "--config-dir",
            "/tmp/wallgen",
            "photo.png",
        ]))
        .expect("valid arguments");

        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.endpoint.as_deref(), Some("http://localhost:9000"));
        assert_eq!(flags.resolutions.as_deref(), Some("1080p,4k"));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/wallgen"));
        assert_eq!(flags.file_path.as_deref(), Some("photo.png"));
    }

    #[test]
    fn everything_is_optional() {
        let flags = parse_flags(args(&[])).expect("valid arguments");
        assert!(flags.lang.is_none());
        assert!(flags.file_path.is_none());
        assert!(flags.endpoint.is_none());
    }

    #[test]
    fn missing_option_value_is_an_error() {
        assert!(parse_flags(args(&["--endpoint"])).is_err());
    }
}
