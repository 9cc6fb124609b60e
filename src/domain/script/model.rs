/// Which of the two podcast hosts speaks a line.
///
/// Roles alternate by the line's position in the full script, counting blank
/// lines too, so a blank line still flips parity for the lines after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRole {
    Host1,
    Host2,
}

impl HostRole {
    /// Role for the 0-based index of a line within the full script.
    pub fn for_line_index(index: usize) -> Self {
        if index % 2 == 0 {
            HostRole::Host1
        } else {
            HostRole::Host2
        }
    }
}

/// One non-blank line of the script, ready for synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenLine {
    /// Index within the full script, blank lines included.
    pub index: usize,
    /// Trimmed line text.
    pub text: String,
    pub role: HostRole,
}

/// A dialogue script split on newlines.
///
/// Keeps the raw lines so that blank ones still count for voice alternation
/// and for deciding whether a spoken line is the last line overall.
#[derive(Debug, Clone)]
pub struct DialogueScript {
    lines: Vec<String>,
}

impl DialogueScript {
    pub fn parse(raw: &str) -> Self {
        Self {
            lines: raw.split('\n').map(str::to_string).collect(),
        }
    }

    /// Number of lines in the full script, blank lines included.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when `index` is the last line of the full script.
    ///
    /// Gap placement keys off this, not off the last non-blank line: a spoken
    /// line followed only by blank lines still gets a trailing gap. That
    /// mirrors the behavior existing consumers rely on.
    pub fn is_last_line(&self, index: usize) -> bool {
        index + 1 == self.lines.len()
    }

    /// Non-blank lines in order, trimmed, with their original index and role.
    pub fn spoken_lines(&self) -> impl Iterator<Item = SpokenLine> + '_ {
        self.lines.iter().enumerate().filter_map(|(index, line)| {
            let text = line.trim();
            if text.is_empty() {
                return None;
            }
            Some(SpokenLine {
                index,
                text: text.to_string(),
                role: HostRole::for_line_index(index),
            })
        })
    }
}
