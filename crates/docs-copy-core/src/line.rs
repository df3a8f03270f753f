/// One line of a document and the byte offset where it starts.
///
/// `text` excludes the line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord<'a> {
    pub text: &'a str,
    pub start: usize,
}

pub fn split_lines(input: &str) -> Vec<LineRecord<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0usize;

    for raw in input.split_inclusive('\n') {
        let mut text = raw;
        if let Some(stripped) = text.strip_suffix('\n') {
            text = stripped.strip_suffix('\r').unwrap_or(stripped);
        }

        lines.push(LineRecord {
            text,
            start: offset,
        });

        offset += raw.len();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_line_starts() {
        let input = "# Title\r\n\nbody";
        let lines = split_lines(input);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "# Title");
        assert_eq!(lines[0].start, 0);
        assert_eq!(lines[1].text, "");
        assert_eq!(lines[1].start, 9);
        assert_eq!(lines[2].text, "body");
        assert_eq!(lines[2].start, 10);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }
}
