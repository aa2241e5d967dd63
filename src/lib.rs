//! sendseq builds keybindings.json entries for the
//! `workbench.action.terminal.sendSequence` command. The text to send is
//! written as a string of `\u00XX` escapes followed by an escaped line feed,
//! so the terminal runs it as soon as the key is pressed.
//!
//! Only code points 0-255 fit the fixed `\u00` prefix. Use `check_input` to
//! find out whether a string will escape cleanly.
use anyhow::{bail, Result};
use compact_str::{format_compact, CompactString};
use std::{borrow::Cow, fmt};


/// used when no words are given on the command line
pub const DEFAULT_INPUT: &str = "node index.js";

/// placeholder shortcut, the user is expected to change it
pub const DEFAULT_KEY: &str = "ctrl+shift+alt+X";

pub const SEND_SEQUENCE_COMMAND: &str = "workbench.action.terminal.sendSequence";

/// escaped line feed plus the closing quote
const SUFFIX: &str = "\\u000A\"";

/// the largest code point that renders as exactly two hex digits
const MAX_CODE_POINT: u32 = 0xFF;

/// the number of bytes in one `\u00XX` group
const GROUP_LEN: usize = 6;

/// Join the command line words with single spaces. If there are no words at
/// all return `DEFAULT_INPUT`.
pub fn collect_input<I, S>(words: I) -> Cow<'static, str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = words.into_iter();
    match words.next() {
        None => Cow::Borrowed(DEFAULT_INPUT),
        Some(first) => {
            let mut input = String::from(first.as_ref());
            for w in words {
                input.push(' ');
                input.push_str(w.as_ref());
            }
            Cow::Owned(input)
        }
    }
}

/// Escape a single char as `\u00` followed by its code point in upper case
/// hex, zero padded to two digits.
///
/// A code point above 255 needs more than two digits and produces a
/// malformed escape, e.g. `\u{100}` becomes `\u00100`.
pub fn escape_char(c: char) -> CompactString {
    format_compact!("\\u00{:02X}", c as u32)
}

/// the length of the literal produced for `n` in range chars
pub fn literal_len(n: usize) -> usize {
    1 + GROUP_LEN * n + SUFFIX.len()
}

/// Escape every char in the string and place the quoted literal, including
/// the trailing line feed escape, into the buffer.
pub fn escape_to<T>(s: &T, buf: &mut String)
where
    T: AsRef<str> + ?Sized,
{
    buf.push('"');
    for c in s.as_ref().chars() {
        buf.push_str(&escape_char(c));
    }
    buf.push_str(SUFFIX);
}

/// Escape the string into a new quoted literal
pub fn escape_literal<T>(s: &T) -> String
where
    T: AsRef<str> + ?Sized,
{
    let s = s.as_ref();
    let mut out = String::with_capacity(literal_len(s.chars().count()));
    escape_to(s, &mut out);
    out
}

/// Return an error naming the first char that does not fit in a `\u00XX`
/// escape. Strings made only of code points 0-255 always pass.
pub fn check_input<T>(s: &T) -> Result<()>
where
    T: AsRef<str> + ?Sized,
{
    for (i, c) in s.as_ref().char_indices() {
        if c as u32 > MAX_CODE_POINT {
            bail!(
                "{c:?} (U+{:04X}) at byte {i} does not fit in a \\u00XX escape",
                c as u32
            )
        }
    }
    Ok(())
}

/// One keybindings.json entry that sends `input` to the terminal followed
/// by Enter. `Display` renders the block the user pastes into the file.
///
/// The description field embeds the input verbatim, so an input containing
/// `"` or `\` yields JSON the editor will reject.
#[derive(Debug, Clone)]
pub struct Keybinding {
    input: String,
    literal: String,
}

impl Keybinding {
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let literal = escape_literal(&input);
        Self { input, literal }
    }

    /// return the raw input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// return the escaped literal, quotes included
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for Keybinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "### Paste the following JSON block into keybindings.json")?;
        writeln!(f)?;
        writeln!(f, ",")?;
        writeln!(f, "{{")?;
        writeln!(f, "    \"key\": \"{DEFAULT_KEY}\", // use your own shortcut")?;
        writeln!(f, "    \"description\": \"Runs '{}' in the  Terminal\",", self.input)?;
        writeln!(f, "    \"command\": \"{SEND_SEQUENCE_COMMAND}\",")?;
        writeln!(f, "    \"args\": {{")?;
        writeln!(f, "        \"text\": {}", self.literal)?;
        writeln!(f, "    }}")?;
        write!(f, "}}")
    }
}
