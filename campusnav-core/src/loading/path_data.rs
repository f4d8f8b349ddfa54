//! Tolerant reader for the `M`/`L`/`C` subset of vector path data.
//!
//! Curves are reduced to the chord between the pen position and the curve's
//! end point; control points only shape rendering and carry no connectivity.
//! Anything the reader does not understand is skipped and counted instead of
//! failing the whole path.

use geo::{Coord, Line};

use crate::model::{distance, is_finite};

/// Segments read from path data together with parse diagnostics
#[derive(Debug, Clone, Default)]
pub struct ParsedPath {
    pub segments: Vec<Line<f64>>,
    /// Tokens that were skipped: unknown commands, stray characters,
    /// numbers outside a command and incomplete coordinate groups
    pub skipped_tokens: usize,
    /// Segments dropped as shorter than the minimum length or as repeats
    /// of the segment before them
    pub dropped_segments: usize,
}

/// Parses path data into ordered line segments.
///
/// Segments shorter than `min_segment_length` are dropped, as is any segment
/// whose endpoints match the previously kept segment within the same
/// tolerance.
pub fn parse_path_data(data: &str, min_segment_length: f64) -> ParsedPath {
    let mut reader = PathReader::default();
    for token in Tokenizer::new(data) {
        reader.feed(token);
    }
    reader.finish(min_segment_length)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(u8),
    Number(f64),
    Unknown,
}

struct Tokenizer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            bytes: data.as_bytes(),
            pos: 0,
        }
    }

    fn digits_from(&self, start: usize) -> usize {
        self.bytes[start.min(self.bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    }

    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        let mut end = start;

        if matches!(self.bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let int_digits = self.digits_from(end);
        end += int_digits;

        let mut frac_digits = 0;
        if self.bytes.get(end) == Some(&b'.') {
            frac_digits = self.digits_from(end + 1);
            end += 1 + frac_digits;
        }
        if int_digits + frac_digits == 0 {
            return None;
        }

        // an exponent marker only belongs to the number when digits follow it
        if matches!(self.bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(self.bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_digits = self.digits_from(exp);
            if exp_digits > 0 {
                end = exp + exp_digits;
            }
        }

        let value = std::str::from_utf8(&self.bytes[start..end])
            .ok()?
            .parse()
            .ok()?;
        self.pos = end;
        Some(value)
    }

    fn skip_char(&mut self) {
        self.pos += 1;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| (b & 0xC0) == 0x80)
        {
            self.pos += 1;
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace() || *b == b',')
        {
            self.pos += 1;
        }

        let byte = *self.bytes.get(self.pos)?;
        if byte.is_ascii_alphabetic() {
            self.pos += 1;
            return Some(Token::Command(byte));
        }
        if (byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.'))
            && let Some(value) = self.number()
        {
            return Some(Token::Number(value));
        }

        self.skip_char();
        Some(Token::Unknown)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    MoveTo,
    LineTo,
    CurveTo,
}

impl Command {
    fn from_letter(letter: u8) -> Option<(Self, bool)> {
        let command = match letter.to_ascii_uppercase() {
            b'M' => Self::MoveTo,
            b'L' => Self::LineTo,
            b'C' => Self::CurveTo,
            _ => return None,
        };
        Some((command, letter.is_ascii_lowercase()))
    }

    /// Numbers in one coordinate group
    fn arity(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo => 2,
            Self::CurveTo => 6,
        }
    }
}

#[derive(Default)]
struct PathReader {
    pen: Coord<f64>,
    active: Option<(Command, bool)>,
    operands: Vec<f64>,
    raw: Vec<Line<f64>>,
    skipped: usize,
}

impl PathReader {
    fn feed(&mut self, token: Token) {
        match token {
            Token::Command(letter) => {
                self.discard_operands();
                self.active = Command::from_letter(letter);
                if self.active.is_none() {
                    self.skipped += 1;
                }
            }
            Token::Number(value) => {
                let Some((command, relative)) = self.active else {
                    self.skipped += 1;
                    return;
                };
                self.operands.push(value);
                if self.operands.len() == command.arity() {
                    self.apply(command, relative);
                    self.operands.clear();
                    // coordinate pairs repeated after a move draw lines
                    if command == Command::MoveTo {
                        self.active = Some((Command::LineTo, relative));
                    }
                }
            }
            Token::Unknown => self.skipped += 1,
        }
    }

    fn discard_operands(&mut self) {
        self.skipped += self.operands.len();
        self.operands.clear();
    }

    fn apply(&mut self, command: Command, relative: bool) {
        // the group's last pair is the on-curve end point for every command
        let [.., x, y] = self.operands[..] else {
            return;
        };
        let target = if relative {
            Coord {
                x: self.pen.x + x,
                y: self.pen.y + y,
            }
        } else {
            Coord { x, y }
        };

        if !is_finite(target) {
            log::trace!("Skipping non-finite path coordinate {target:?}");
            self.skipped += command.arity();
            return;
        }

        if command != Command::MoveTo {
            self.raw.push(Line::new(self.pen, target));
        }
        self.pen = target;
    }

    fn finish(mut self, min_segment_length: f64) -> ParsedPath {
        self.discard_operands();

        let mut segments: Vec<Line<f64>> = Vec::with_capacity(self.raw.len());
        let mut dropped_segments = 0;
        for segment in self.raw {
            let degenerate = distance(segment.start, segment.end) < min_segment_length;
            let repeated = segments.last().is_some_and(|previous| {
                distance(previous.start, segment.start) < min_segment_length
                    && distance(previous.end, segment.end) < min_segment_length
            });

            if degenerate || repeated {
                dropped_segments += 1;
            } else {
                segments.push(segment);
            }
        }

        ParsedPath {
            segments,
            skipped_tokens: self.skipped,
            dropped_segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line<f64> {
        Line::new(Coord { x: x1, y: y1 }, Coord { x: x2, y: y2 })
    }

    fn parse(data: &str) -> ParsedPath {
        parse_path_data(data, 1e-6)
    }

    #[test]
    fn absolute_lines_chain_from_the_pen() {
        let parsed = parse("M0,0 L10,0 L10,10");
        assert_eq!(
            parsed.segments,
            vec![line(0.0, 0.0, 10.0, 0.0), line(10.0, 0.0, 10.0, 10.0)]
        );
        assert_eq!(parsed.skipped_tokens, 0);
    }

    #[test]
    fn relative_commands_offset_from_the_pen() {
        let parsed = parse("m5 5 l10 0 0 10");
        assert_eq!(
            parsed.segments,
            vec![line(5.0, 5.0, 15.0, 5.0), line(15.0, 5.0, 15.0, 15.0)]
        );
    }

    #[test]
    fn pairs_after_a_move_draw_lines() {
        let parsed = parse("M0 0 10 0 10 10");
        assert_eq!(parsed.segments.len(), 2);
        assert_eq!(parsed.segments[1], line(10.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn move_relocates_without_drawing() {
        let parsed = parse("M0 0 L5 0 M100 100 L105 100");
        assert_eq!(
            parsed.segments,
            vec![line(0.0, 0.0, 5.0, 0.0), line(100.0, 100.0, 105.0, 100.0)]
        );
    }

    #[rstest]
    #[case("M0,0 C3,4 7,4 10,0", line(0.0, 0.0, 10.0, 0.0))]
    #[case("M2,2 c1,1 2,2 8,0", line(2.0, 2.0, 10.0, 2.0))]
    fn curves_become_chords(#[case] data: &str, #[case] expected: Line<f64>) {
        assert_eq!(parse(data).segments, vec![expected]);
    }

    #[test]
    fn repeated_curve_groups_reuse_the_command() {
        let parsed = parse("M0 0 C1 1 2 2 3 3 4 4 5 5 6 6");
        assert_eq!(
            parsed.segments,
            vec![line(0.0, 0.0, 3.0, 3.0), line(3.0, 3.0, 6.0, 6.0)]
        );
    }

    #[rstest]
    #[case("M-5-5L.5.5", line(-5.0, -5.0, 0.5, 0.5))]
    #[case("M1e1,2E-1 L-1.5e+1,0", line(10.0, 0.2, -15.0, 0.0))]
    #[case("M 0 0\n\tL\t3 , 4", line(0.0, 0.0, 3.0, 4.0))]
    fn compact_number_forms(#[case] data: &str, #[case] expected: Line<f64>) {
        assert_eq!(parse(data).segments, vec![expected]);
    }

    #[test]
    fn degenerate_and_repeated_segments_are_dropped() {
        let parsed = parse("M0 0 L0 0 L10 0 M0 0 L10 0 L10 5");
        assert_eq!(
            parsed.segments,
            vec![line(0.0, 0.0, 10.0, 0.0), line(10.0, 0.0, 10.0, 5.0)]
        );
        assert_eq!(parsed.dropped_segments, 2);
    }

    #[test]
    fn unknown_input_is_skipped_and_counted() {
        // Z, H and its operand, the stray '#', and a dangling number
        let parsed = parse("M0 0 L10 0 Z H 20 # L10 10 7");
        assert_eq!(
            parsed.segments,
            vec![line(0.0, 0.0, 10.0, 0.0), line(10.0, 0.0, 10.0, 10.0)]
        );
        assert_eq!(parsed.skipped_tokens, 5);
    }

    #[test]
    fn numbers_before_any_command_are_skipped() {
        let parsed = parse("1 2 M0 0 L1 0");
        assert_eq!(parsed.segments.len(), 1);
        assert_eq!(parsed.skipped_tokens, 2);
    }

    #[test]
    fn non_finite_coordinates_never_reach_segments() {
        let parsed = parse("M0 0 L1e400 0 L5 0");
        assert_eq!(parsed.segments, vec![line(0.0, 0.0, 5.0, 0.0)]);
        assert_eq!(parsed.skipped_tokens, 2);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("M10 10")]
    fn empty_paths_yield_no_segments(#[case] data: &str) {
        let parsed = parse(data);
        assert!(parsed.segments.is_empty());
        assert_eq!(parsed.skipped_tokens, 0);
    }
}
