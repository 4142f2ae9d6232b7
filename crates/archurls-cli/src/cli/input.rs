//! Domain list from stdin.

use std::io::{BufRead, Write};

/// One domain per line, trimmed; blank lines skipped.
///
/// Invalid UTF-8 is replaced rather than rejected. A read error is reported to
/// `err` and ends input; the domains read before it are still returned.
pub fn read_domains<R: BufRead, E: Write>(mut reader: R, err: &mut E) -> Vec<String> {
    let mut domains = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let domain = line.trim();
                if !domain.is_empty() {
                    domains.push(domain.to_string());
                }
            }
            Err(e) => {
                let _ = writeln!(err, "failed to read input: {}", e);
                break;
            }
        }
    }
    domains
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    #[test]
    fn reads_one_domain_per_line() {
        let mut err = Vec::new();
        let domains = read_domains(Cursor::new("a.com\n  b.com \r\n\n\nc.com"), &mut err);
        assert_eq!(domains, ["a.com", "b.com", "c.com"]);
        assert!(err.is_empty());
    }

    #[test]
    fn empty_input() {
        let mut err = Vec::new();
        assert!(read_domains(Cursor::new(""), &mut err).is_empty());
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_input() {
        let mut err = Vec::new();
        let input: &[u8] = b"a.com\n\xff\xfe.com\nb.com\n";
        let domains = read_domains(Cursor::new(input), &mut err);
        assert_eq!(domains.len(), 3);
        assert_eq!(domains[0], "a.com");
        assert_eq!(domains[1], "\u{FFFD}\u{FFFD}.com");
        assert_eq!(domains[2], "b.com");
        assert!(err.is_empty());
    }

    /// Yields `data`, then fails.
    struct FailsAfter {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailsAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "stdin went away"));
            }
            Ok(n)
        }
    }

    #[test]
    fn read_error_keeps_earlier_domains() {
        let reader = BufReader::new(FailsAfter {
            data: Cursor::new(b"a.com\nb.com\npartial".to_vec()),
        });
        let mut err = Vec::new();
        let domains = read_domains(reader, &mut err);
        assert_eq!(domains, ["a.com", "b.com"]);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "failed to read input: stdin went away\n"
        );
    }
}
