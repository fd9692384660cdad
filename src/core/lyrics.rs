//! Lyrics display lines

/// Rendered in place of an empty line so it keeps its height
pub const BLANK_LINE: &str = "\u{00A0}";

/// Two-character line separator used by some imported lyrics
const ESCAPED_NEWLINE: &str = "\\n";

/// Lyrics library
pub struct LyricsLib;

impl LyricsLib {
    /// Split lyrics into display lines
    ///
    /// Real line breaks (`\n`, `\r\n`) and the literal `\n` escape both
    /// separate lines, also when mixed in one text. Empty lines become
    /// [`BLANK_LINE`]; none are dropped.
    pub fn lines(lyrics: &str) -> Vec<String> {
        lyrics
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .flat_map(|line| line.split(ESCAPED_NEWLINE))
            .map(|line| {
                if line.is_empty() {
                    BLANK_LINE.to_string()
                } else {
                    line.to_string()
                }
            })
            .collect()
    }
}
