use crate::error::{PpmError, PpmResult};

// ── Tokenizer ─────────────────────────────────────────────────────────────

/// Byte-level reader for PPM sources.
///
/// Tracks the current line for diagnostics and supports a single byte of
/// pushback, which is how every "peek" in the decoder is expressed: read a
/// byte, decide, and hand it back if it belongs to the next token.
pub struct Tokenizer<'s> {
    src: &'s [u8],
    pos: usize,
    /// 1-based; counts newlines consumed so far.
    line: usize,
    pending: Option<u8>,
}

impl<'s> Tokenizer<'s> {
    pub fn new(src: &'s [u8]) -> Self {
        Self { src, pos: 0, line: 1, pending: None }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns true once every byte (including a pushed-back one) is consumed.
    pub fn is_at_end(&self) -> bool {
        self.pending.is_none() && self.pos >= self.src.len()
    }

    /// Bytes left to read, counting a pushed-back byte.
    pub(crate) fn remaining(&self) -> usize {
        self.src.len().saturating_sub(self.pos) + usize::from(self.pending.is_some())
    }

    fn read(&mut self) -> Option<u8> {
        let byte = match self.pending.take() {
            Some(b) => b,
            None => {
                let b = *self.src.get(self.pos)?;
                self.pos += 1;
                b
            }
        };
        if byte == b'\n' {
            self.line += 1;
        }
        Some(byte)
    }

    /// Reads the next raw byte.
    pub fn next_byte(&mut self) -> PpmResult<u8> {
        match self.read() {
            Some(b) => Ok(b),
            None => Err(PpmError::UnexpectedEndOfInput { line: self.line }),
        }
    }

    /// Hands `byte` back so the next [`next_byte`](Self::next_byte) returns it.
    ///
    /// Only one byte may be pending at a time.
    pub fn push_back(&mut self, byte: u8) {
        debug_assert!(self.pending.is_none(), "tokenizer pushback slot already occupied");
        if byte == b'\n' {
            self.line = self.line.saturating_sub(1);
        }
        self.pending = Some(byte);
    }

    /// Reads one byte and fails unless it equals `expected`.
    pub fn expect(&mut self, expected: u8) -> PpmResult<()> {
        let found = self.next_byte()?;
        if found == expected {
            Ok(())
        } else {
            Err(PpmError::UnexpectedToken { expected, found, line: self.line })
        }
    }

    /// Consumes a maximal run of whitespace. Returns whether anything was consumed.
    pub fn skip_whitespace(&mut self) -> PpmResult<bool> {
        let mut skipped = false;
        loop {
            let b = self.next_byte()?;
            if !is_space(b) {
                self.push_back(b);
                return Ok(skipped);
            }
            skipped = true;
        }
    }

    /// Consumes a `#` comment through its terminating newline, if one starts here.
    pub fn skip_comment(&mut self) -> PpmResult<bool> {
        let b = self.next_byte()?;
        if b != b'#' {
            self.push_back(b);
            return Ok(false);
        }
        while self.next_byte()? != b'\n' {}
        Ok(true)
    }

    /// Skips whitespace and comments in any interleaving.
    pub fn skip_comments_and_whitespace(&mut self) -> PpmResult<()> {
        while self.skip_whitespace()? || self.skip_comment()? {}
        Ok(())
    }

    /// Parses a base-10 number at the current position.
    ///
    /// Accepts an optional sign, integer digits, an optional fraction and an
    /// optional exponent. The byte after the number stays unconsumed; running
    /// out of input right after the digits ends the number normally.
    ///
    /// On `MalformedNumber` the byte that stopped the scan is left unconsumed,
    /// on success and failure alike. Sign, point and exponent marker bytes read
    /// before it are consumed, since only one byte can be pushed back.
    pub fn next_number(&mut self) -> PpmResult<f64> {
        let mut text = String::new();
        let mut digits = 0usize;

        let mut cur = self.read();
        if let Some(sign @ (b'+' | b'-')) = cur {
            text.push(char::from(sign));
            cur = self.read();
        }

        cur = self.take_digits(cur, &mut text, &mut digits);
        if cur == Some(b'.') {
            text.push('.');
            cur = self.read();
            cur = self.take_digits(cur, &mut text, &mut digits);
        }

        if digits == 0 {
            return Err(self.malformed_at(cur));
        }

        if let Some(e @ (b'e' | b'E')) = cur {
            text.push(char::from(e));
            cur = self.read();
            if let Some(sign @ (b'+' | b'-')) = cur {
                text.push(char::from(sign));
                cur = self.read();
            }
            let mut exp_digits = 0usize;
            cur = self.take_digits(cur, &mut text, &mut exp_digits);
            if exp_digits == 0 {
                return Err(self.malformed_at(cur));
            }
        }

        if let Some(b) = cur {
            self.push_back(b);
        }

        text.parse::<f64>()
            .map_err(|_| PpmError::MalformedNumber { line: self.line })
    }

    fn malformed_at(&mut self, stop: Option<u8>) -> PpmError {
        if let Some(b) = stop {
            self.push_back(b);
        }
        PpmError::MalformedNumber { line: self.line }
    }

    fn take_digits(&mut self, mut cur: Option<u8>, text: &mut String, count: &mut usize) -> Option<u8> {
        while let Some(d @ b'0'..=b'9') = cur {
            text.push(char::from(d));
            *count += 1;
            cur = self.read();
        }
        cur
    }
}

/// The C `isspace` set: space, tab, newline, vertical tab, form feed, carriage return.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(src: &str) -> Tokenizer<'_> {
        Tokenizer::new(src.as_bytes())
    }

    // ── next_byte / push_back ─────────────────────────────────────────────

    #[test]
    fn next_byte_counts_newlines() {
        let mut t = tok("a\nb\n");
        assert_eq!(t.line(), 1);
        t.next_byte().unwrap();
        t.next_byte().unwrap();
        assert_eq!(t.line(), 2);
        t.next_byte().unwrap();
        t.next_byte().unwrap();
        assert_eq!(t.line(), 3);
    }

    #[test]
    fn next_byte_at_end_fails_with_line() {
        let mut t = tok("\n");
        t.next_byte().unwrap();
        match t.next_byte() {
            Err(PpmError::UnexpectedEndOfInput { line }) => assert_eq!(line, 2),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn pushed_back_byte_is_reread() {
        let mut t = tok("xy");
        let b = t.next_byte().unwrap();
        t.push_back(b);
        assert_eq!(t.next_byte().unwrap(), b'x');
        assert_eq!(t.next_byte().unwrap(), b'y');
        assert!(t.is_at_end());
    }

    #[test]
    fn pushing_back_newline_uncounts_it() {
        let mut t = tok("\nz");
        let b = t.next_byte().unwrap();
        assert_eq!(t.line(), 2);
        t.push_back(b);
        assert_eq!(t.line(), 1);
        t.next_byte().unwrap();
        assert_eq!(t.line(), 2);
    }

    // ── expect ────────────────────────────────────────────────────────────

    #[test]
    fn expect_matching_byte() {
        tok("P").expect(b'P').unwrap();
    }

    #[test]
    fn expect_mismatch_reports_found_byte() {
        match tok("Q").expect(b'P') {
            Err(PpmError::UnexpectedToken { expected, found, .. }) => {
                assert_eq!(expected, b'P');
                assert_eq!(found, b'Q');
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    // ── skipping ──────────────────────────────────────────────────────────

    #[test]
    fn skip_whitespace_reports_progress() {
        let mut t = tok(" \t\r\n7");
        assert!(t.skip_whitespace().unwrap());
        assert!(!t.skip_whitespace().unwrap());
        assert_eq!(t.next_byte().unwrap(), b'7');
        assert_eq!(t.line(), 2);
    }

    #[test]
    fn skip_comment_only_on_hash() {
        let mut t = tok("1");
        assert!(!t.skip_comment().unwrap());
        assert_eq!(t.next_byte().unwrap(), b'1');

        let mut t = tok("# note\n2");
        assert!(t.skip_comment().unwrap());
        assert_eq!(t.next_byte().unwrap(), b'2');
    }

    #[test]
    fn comments_and_whitespace_position_at_next_token() {
        let mut t = tok("  # hi\n  5");
        t.skip_comments_and_whitespace().unwrap();
        assert_eq!(t.next_byte().unwrap(), b'5');
    }

    #[test]
    fn interleaved_comments_are_skipped() {
        let mut t = tok("# a\n# b\n\n  # c\n\t9");
        t.skip_comments_and_whitespace().unwrap();
        assert_eq!(t.next_byte().unwrap(), b'9');
        assert_eq!(t.line(), 5);
    }

    #[test]
    fn unterminated_comment_is_end_of_input() {
        let mut t = tok("# never ends");
        assert!(matches!(
            t.skip_comments_and_whitespace(),
            Err(PpmError::UnexpectedEndOfInput { .. })
        ));
    }

    // ── next_number ───────────────────────────────────────────────────────

    #[test]
    fn number_leaves_trailing_space() {
        let mut t = tok("42 ");
        assert_eq!(t.next_number().unwrap(), 42.0);
        assert!(!t.is_at_end());
        assert_eq!(t.next_byte().unwrap(), b' ');
        assert!(t.is_at_end());
    }

    #[test]
    fn whitespace_running_into_end_of_input_fails() {
        let mut t = tok("1 ");
        t.next_number().unwrap();
        assert!(matches!(t.skip_whitespace(), Err(PpmError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn number_at_end_of_input() {
        let mut t = tok("255");
        assert_eq!(t.next_number().unwrap(), 255.0);
        assert!(t.is_at_end());
    }

    #[test]
    fn number_with_fraction_and_sign() {
        assert_eq!(tok("-1.5x").next_number().unwrap(), -1.5);
        assert_eq!(tok("+.25").next_number().unwrap(), 0.25);
        assert_eq!(tok("3.").next_number().unwrap(), 3.0);
    }

    #[test]
    fn number_with_exponent() {
        assert_eq!(tok("2e2 ").next_number().unwrap(), 200.0);
        assert_eq!(tok("5E-1").next_number().unwrap(), 0.5);
    }

    #[test]
    fn number_stops_before_comment() {
        let mut t = tok("10#x\n");
        assert_eq!(t.next_number().unwrap(), 10.0);
        assert!(t.skip_comment().unwrap());
    }

    #[test]
    fn missing_digits_is_malformed() {
        let mut t = tok("abc");
        assert!(matches!(t.next_number(), Err(PpmError::MalformedNumber { line: 1 })));
        // The offending byte is still available.
        assert_eq!(t.next_byte().unwrap(), b'a');
    }

    #[test]
    fn lone_sign_is_malformed() {
        let mut t = tok("- 1");
        assert!(matches!(t.next_number(), Err(PpmError::MalformedNumber { line: 1 })));
        // Sign consumed, the byte that stopped the scan is not.
        assert_eq!(t.next_byte().unwrap(), b' ');
        assert_eq!(t.next_byte().unwrap(), b'1');
    }

    #[test]
    fn lone_sign_before_newline_keeps_line_count() {
        let mut t = tok("+
");
        assert!(matches!(t.next_number(), Err(PpmError::MalformedNumber { line: 1 })));
        assert_eq!(t.next_byte().unwrap(), b'\n');
        assert_eq!(t.line(), 2);
    }

    #[test]
    fn dangling_exponent_is_malformed() {
        let mut t = tok("1e x");
        assert!(matches!(t.next_number(), Err(PpmError::MalformedNumber { .. })));
        assert_eq!(t.next_byte().unwrap(), b' ');
    }
}
