//! `docker ps` command builder
//!
//! Constructs `std::process::Command` for listing containers with one
//! JSON object per line on stdout.

use std::process::Command;

/// Build a `Command` that lists containers as JSON lines.
///
/// `all` maps to `--all`, including stopped containers; without it docker
/// reports running containers only. `--format '{{json .}}'` makes docker
/// emit exactly one JSON object per container.
#[must_use]
pub fn build_command(all: bool) -> Command {
    let mut cmd = Command::new("docker");
    cmd.arg("ps");

    if all {
        cmd.arg("--all");
    }

    cmd.arg("--format").arg("{{json .}}");
    cmd
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_build_sets_docker_binary() {
        let cmd = super::build_command(false);
        let program = cmd.get_program().to_str().unwrap();
        assert_eq!(program, "docker");
    }

    #[test]
    fn test_build_uses_ps_subcommand_first() {
        let cmd = super::build_command(false);
        let args: Vec<&str> = cmd.get_args().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(args.first(), Some(&"ps"));
    }

    #[test]
    fn test_build_requests_json_lines_format() {
        let cmd = super::build_command(false);
        let args: Vec<&str> = cmd.get_args().map(|a| a.to_str().unwrap()).collect();

        let fmt_pos = args
            .iter()
            .position(|a| *a == "--format")
            .unwrap_or_else(|| panic!("Expected --format flag, got: {args:?}"));
        assert_eq!(args[fmt_pos + 1], "{{json .}}");
    }

    #[test]
    fn test_build_without_all_omits_flag() {
        let cmd = super::build_command(false);
        let args: Vec<&str> = cmd.get_args().map(|a| a.to_str().unwrap()).collect();

        assert!(
            !args.contains(&"--all"),
            "Should not include --all for running-only listing, got: {args:?}"
        );
    }

    #[test]
    fn test_build_with_all_includes_flag() {
        let cmd = super::build_command(true);
        let args: Vec<&str> = cmd.get_args().map(|a| a.to_str().unwrap()).collect();

        assert!(
            args.contains(&"--all"),
            "Expected --all flag, got: {args:?}"
        );
    }

    #[test]
    fn test_build_args_order_is_all_before_format() {
        let cmd = super::build_command(true);
        let args: Vec<&str> = cmd.get_args().map(|a| a.to_str().unwrap()).collect();

        let all_pos = args.iter().position(|a| *a == "--all").unwrap();
        let fmt_pos = args.iter().position(|a| *a == "--format").unwrap();
        assert!(
            all_pos < fmt_pos,
            "Expected --all before --format, got: {args:?}"
        );
    }
}
