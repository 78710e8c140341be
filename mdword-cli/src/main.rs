// Command-line interface for mdword
//
// Converts one Markdown file into one Word document:
//
//  mdword <input.md> <output.docx> [--config <path>] [-v...] [--extra-<key> [value]]
//
// Exactly two positional arguments are accepted. Any other count prints the usage line to stdout
// and exits with status 1. On success a single confirmation line naming both paths is printed.
// Paths need not be valid UTF-8. A path starting with '-' must follow `--`, which ends option
// parsing:
//
//  mdword -- -notes.md out.docx
//
// The conversion itself lives in mdword-babel, this binary only resolves configuration, wires up
// logging and maps errors to exit codes.
//
// Configuration:
//
// Built-in defaults are layered with ./mdword.toml (if present) and then with the file given to
// --config. Individual settings can be overridden with --extra-<key> [value]:
//
//  --extra-code-font <name>      style.code.font
//  --extra-code-size <points>    style.code.size_pt
//  --extra-code-color <RRGGBB>   style.code.color
//  --extra-rule-char <char>      style.rule.character
//  --extra-rule-width <n>        style.rule.width
//  --extra-quote-indent <inches> style.quote.indent_inches
//  --extra-title <text>          document.title
//  --extra-author <text>         document.author
//  --extra-flush-fence [bool]    convert.unterminated_fence = "flush"

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, ValueHint};
use mdword_babel::{publish, ConvertError, PublishSpec};
use mdword_config::{Loader, MdwordConfig};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: mdword <input.md> <output.docx>";

/// Extra parameter name → configuration key.
const EXTRA_KEYS: &[(&str, &str)] = &[
    ("code-font", "style.code.font"),
    ("code-size", "style.code.size_pt"),
    ("code-color", "style.code.color"),
    ("rule-char", "style.rule.character"),
    ("rule-width", "style.rule.width"),
    ("quote-indent", "style.quote.indent_inches"),
    ("title", "document.title"),
    ("author", "document.author"),
];

/// Extra parameters that are booleans and may appear without a value.
const BOOLEAN_EXTRAS: &[&str] = &["flush-fence"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
///
/// A boolean key only consumes the next argument when it reads as a boolean, so
/// `mdword --extra-flush-fence in.md out.docx` keeps both paths. Everything after
/// `--` is passed through untouched.
fn parse_extra_args(args: &[OsString]) -> (Vec<OsString>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            cleaned_args.extend(args[i..].iter().cloned());
            break;
        }

        if let Some(key) = arg.to_str().and_then(|a| a.strip_prefix("--extra-")) {
            let next = args.get(i + 1).map(|n| n.to_string_lossy());
            let has_value = match next.as_deref() {
                Some(next) if next.starts_with('-') => false,
                Some(next) if BOOLEAN_EXTRAS.contains(&key) => parse_bool(next).is_some(),
                Some(_) => true,
                None => false,
            };

            match next {
                Some(value) if has_value => {
                    extra_params.insert(key.to_string(), value.into_owned());
                    i += 2;
                }
                _ => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mdword")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file into a Word (.docx) document")
        .long_about(
            "mdword converts a Markdown file into a Word document.\n\n\
            Headings, bullet and numbered list items, horizontal rules, blockquotes and\n\
            fenced code blocks become their Word counterparts. Inline emphasis and code\n\
            markers are stripped from paragraph text.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override a configuration setting.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdword notes.md notes.docx\n  \
            mdword notes.md notes.docx --extra-code-font Consolas\n  \
            mdword notes.md notes.docx --config mdword.toml -v\n  \
            mdword -- -notes.md notes.docx",
        )
        .arg(
            Arg::new("paths")
                .help("Source Markdown file followed by the destination .docx file")
                .value_name("PATH")
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdword.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let matches = match build_cli().try_get_matches_from(cleaned_args) {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    init_logging(matches.get_count("verbose"));

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let (input, output) = positional_pair(&paths).unwrap_or_else(|e| {
        log::debug!("{e}");
        println!("{USAGE}");
        std::process::exit(1);
    });

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &extra_params,
    );
    handle_convert_command(input, output, &config);
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Exactly one source and one destination.
fn positional_pair(paths: &[PathBuf]) -> Result<(&Path, &Path), ConvertError> {
    match paths {
        [input, output] => Ok((input.as_path(), output.as_path())),
        other => Err(ConvertError::InvalidArguments(format!(
            "expected a source and a destination path, got {} argument(s)",
            other.len()
        ))),
    }
}

/// Handle the conversion
fn handle_convert_command(input: &Path, output: &Path, config: &MdwordConfig) {
    let render_options = config.render_options().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    });

    let spec = PublishSpec::new(input, output)
        .with_scan_options(config.scan_options())
        .with_render_options(render_options);

    let result = publish(spec).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    log::debug!("{} block(s) written", result.blocks);
    println!("{}", result.confirmation_message());
}

fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &HashMap<String, String>,
) -> MdwordConfig {
    let loader = Loader::new().with_optional_file("mdword.toml");
    let loader = if let Some(path) = explicit_path {
        log::debug!("Using config from: {path}");
        loader.with_file(path)
    } else {
        loader
    };

    let loader = apply_config_overrides(loader, extra_params).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(
    mut loader: Loader,
    extra_params: &HashMap<String, String>,
) -> Result<Loader, String> {
    // Sorted so that errors are reported deterministically.
    let mut keys: Vec<&String> = extra_params.keys().collect();
    keys.sort();

    for key in keys {
        let raw = &extra_params[key];
        if key == "flush-fence" {
            let flush = parse_bool(raw)
                .ok_or_else(|| format!("Invalid boolean value '{raw}' for --extra-{key}"))?;
            let policy = if flush { "flush" } else { "discard" };
            loader = loader
                .set_override("convert.unterminated_fence", policy)
                .map_err(|e| e.to_string())?;
            continue;
        }

        let config_key = EXTRA_KEYS
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, config_key)| *config_key)
            .ok_or_else(|| format!("Unknown parameter --extra-{key}"))?;
        loader = loader
            .set_override(config_key, raw.as_str())
            .map_err(|e| e.to_string())?;
    }

    Ok(loader)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}
