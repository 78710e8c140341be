use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdword")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file into a Word (.docx) document")
        .arg(
            Arg::new("paths")
                .help("Source Markdown file followed by the destination .docx file")
                .value_name("PATH")
                .num_args(0..)
                .action(ArgAction::Append)
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdword", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdword", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdword", &outdir)?;

    Ok(())
}
