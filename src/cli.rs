use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 fastagen version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   random FASTA test-data generator with composition reporting
   all run parameters are read interactively: length, ID, description, marker";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

/// The generator takes no flags or subcommands: every run parameter is
/// prompted for on standard input. clap only provides the standard
/// `--help`/`--version` surface around the interactive session.
#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    styles = STYLES
)]
pub struct Cli {}
