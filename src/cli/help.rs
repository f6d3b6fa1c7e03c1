//! CLI help: banner, usage screen and command names.

use crate::cli::parse::Commands;
use crate::cli::presentation::Palette;
use owo_colors::OwoColorize;

const BANNER: &str = r"
  ██╗   ██╗███████╗██████╗ ██╗████████╗ █████╗ ███████╗
  ██║   ██║██╔════╝██╔══██╗██║╚══██╔══╝██╔══██╗██╔════╝
  ██║   ██║█████╗  ██████╔╝██║   ██║   ███████║███████╗
  ╚██╗ ██╔╝██╔══╝  ██╔══██╗██║   ██║   ██╔══██║╚════██║
   ╚████╔╝ ███████╗██║  ██║██║   ██║   ██║  ██║███████║
    ╚═══╝  ╚══════╝╚═╝  ╚═╝╚═╝   ╚═╝   ╚═╝  ╚═╝╚══════╝
     { F I L E   I N T E G R I T Y   C H E C K E R }
";

/// Gradient endpoints for the banner, top line to bottom line.
const GRADIENT_START: (u8, u8, u8) = (0x00, 0x87, 0xff);
const GRADIENT_END: (u8, u8, u8) = (0xff, 0x5f, 0xd7);

/// Command name used in logs (e.g. "init", "check").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Check { .. } => "check",
        Commands::Update { .. } => "update",
    }
}

/// Banner with a vertical blue-to-pink gradient.
pub fn banner(palette: &Palette) -> String {
    let lines: Vec<&str> = BANNER.lines().collect();
    let steps = lines.len().saturating_sub(1).max(1) as f32;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if !palette.color || line.trim().is_empty() {
                return line.to_string();
            }
            let t = i as f32 / steps;
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            let (r, g, b) = (
                mix(GRADIENT_START.0, GRADIENT_END.0),
                mix(GRADIENT_START.1, GRADIENT_END.1),
                mix(GRADIENT_START.2, GRADIENT_END.2),
            );
            line.truecolor(r, g, b).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Usage screen shown for no command, an unknown command, or a missing path.
pub fn usage(palette: &Palette) -> String {
    let heading = |s: &str| palette.bold(s);
    let cmd = |s: &str| palette.accent(s);

    let mut out = banner(palette);
    out.push('\n');
    out.push_str(&format!(" {}\n", heading("USAGE")));
    out.push_str("  $ veritas <command> [path]\n\n");
    out.push_str(&format!(" {}\n", heading("COMMANDS")));
    out.push_str(&format!(
        "  {}    <path>   Establish a new security baseline for a file or directory\n",
        cmd("init")
    ));
    out.push_str(&format!(
        "  {}            Scan and verify the integrity of all monitored files\n",
        cmd("check")
    ));
    out.push_str(&format!(
        "  {}  <path>   Synchronize the baseline with intentional file changes\n",
        cmd("update")
    ));
    out.push_str(&format!("\n {}\n", heading("EXAMPLES")));
    out.push_str("  $ veritas init ./src\n");
    out.push_str("  $ veritas check\n");
    out.push_str("  $ veritas check --format json\n");
    out
}
