//! docker-pretty-ps CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use docker_pretty_ps::{assign_colors, fetch_containers, RenderOptions, Renderer, Theme};

/// A colorful, human-friendly front end for `docker ps`
///
/// Lists containers from the local Docker CLI with color-coded names,
/// readable state badges, and a totals summary.
#[derive(Parser, Debug)]
#[command(name = "docker-pretty-ps", version, about)]
struct Cli {
    /// Include stopped containers, not just running ones
    #[arg(short, long)]
    all: bool,

    /// One line per container: the name only
    #[arg(short, long)]
    slim: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut records = fetch_containers(cli.all).context("Failed to list containers")?;
    assign_colors(&mut records);

    let renderer = Renderer::new(Theme::new());
    let opts = RenderOptions {
        show_all: cli.all,
        slim: cli.slim,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer
        .render(&records, opts, &mut out)
        .context("Failed to write listing")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_means_running_detail_view() {
        let cli = Cli::parse_from(["docker-pretty-ps"]);
        assert!(!cli.all);
        assert!(!cli.slim);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["docker-pretty-ps", "-a", "-s"]);
        assert!(cli.all);
        assert!(cli.slim);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::parse_from(["docker-pretty-ps", "--all", "--slim"]);
        assert!(cli.all);
        assert!(cli.slim);
    }

    #[test]
    fn test_combined_short_flags() {
        let cli = Cli::parse_from(["docker-pretty-ps", "-as"]);
        assert!(cli.all);
        assert!(cli.slim);
    }

    #[test]
    fn test_slim_alone() {
        let cli = Cli::parse_from(["docker-pretty-ps", "--slim"]);
        assert!(!cli.all);
        assert!(cli.slim);
    }
}
