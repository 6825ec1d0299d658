//! Port list reflow

/// Continuation indent, aligned under the detail-view value column.
const PORT_INDENT: &str = "\n\t\t\t     ";

/// Break a comma-separated port mapping list across lines.
///
/// Each comma becomes a newline plus indent so the mappings stack under
/// the `Ports` label. The port strings themselves pass through untouched;
/// no syntax validation.
#[must_use]
pub fn reflow_ports(ports: &str) -> String {
    ports.replace(',', PORT_INDENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(reflow_ports(""), "");
    }

    #[test]
    fn test_single_mapping_unchanged() {
        assert_eq!(reflow_ports("80/tcp"), "80/tcp");
        assert_eq!(reflow_ports("0.0.0.0:8080->80/tcp"), "0.0.0.0:8080->80/tcp");
    }

    #[test]
    fn test_commas_are_replaced_with_breaks() {
        let out = reflow_ports("80/tcp,443/tcp");
        assert!(!out.contains(','));
        assert_eq!(out.matches('\n').count(), 1);
        assert!(out.starts_with("80/tcp\n"));
        assert!(out.ends_with("443/tcp"));
    }

    #[test]
    fn test_one_break_per_original_comma() {
        let out = reflow_ports("80/tcp, 443/tcp, 8080/tcp");
        assert_eq!(out.matches('\n').count(), 2);
        assert!(!out.contains(','));
    }

    #[test]
    fn test_continuation_lines_are_indented() {
        let out = reflow_ports("80/tcp,443/tcp");
        let second = out.lines().nth(1).unwrap();
        assert!(second.starts_with("\t\t\t     "));
    }

    #[test]
    fn test_no_validation_of_port_syntax() {
        assert_eq!(reflow_ports("garbage"), "garbage");
    }
}
