//! JSON output formatting

use std::io::{self, Write};

/// Serialize rendered lines as a pretty-printed JSON array.
pub fn to_json(lines: &[String]) -> io::Result<String> {
    serde_json::to_string_pretty(lines).map_err(io::Error::other)
}

/// Print rendered lines as a pretty-printed JSON array to stdout.
pub fn print_json(lines: &[String]) -> io::Result<()> {
    write_json(&mut io::stdout().lock(), lines)
}

/// Write rendered lines as a JSON array to `out`.
pub fn write_json<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{}", to_json(lines)?)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_array_of_lines() {
        let lines = vec!["/root/".to_string(), "└── \"quoted\".txt".to_string()];
        let json = to_json(&lines).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lines);
    }

    #[test]
    fn test_write_json_ends_with_newline() {
        let mut out = Vec::new();
        write_json(&mut out, &["/root/".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\n  \"/root/\"\n]\n");
    }

    #[test]
    fn test_write_json_propagates_write_errors() {
        let err = write_json(&mut ClosedPipe, &["/root/".to_string()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
