/// Reserved delimiter character. Any line containing it is a marker line.
pub const MARKER: char = '#';

/// Contiguous line range `[start, end)` holding one filament's samples.
///
/// `start` is the index of the segment's marker line; `end` is the index of
/// the next marker line, or the end of the file for the final segment. The
/// marker line itself is inside the range and is skipped by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

/// Indices of every marker line, in file order.
pub fn marker_lines(lines: &[String]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(MARKER))
        .map(|(i, _)| i)
        .collect()
}

/// Derive one segment range per marker line.
///
/// The final segment always extends to end-of-file, even when that range is
/// empty. Zero marker lines yield an empty list.
pub fn segment_ranges(lines: &[String]) -> Vec<Segment> {
    let markers = marker_lines(lines);
    markers
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = markers.get(i + 1).copied().unwrap_or(lines.len());
            Segment { start, end }
        })
        .collect()
}
