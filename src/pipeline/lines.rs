//! Line splitting for uploaded text files

/// Non-empty trimmed lines of `text`.
///
/// Accepts both `\n` and `\r\n` endings. Whitespace-only lines are dropped
/// and never reach the caller.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
