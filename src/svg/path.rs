//! Path-data tokenizer and coordinate extraction.
//!
//! Parses the subset of the SVG path mini-language needed for bounding box
//! estimation: absolute M/L/Q/C/A (plus argument-less Z). The goal is
//! coordinate recovery, not path semantics; curvature and directionality
//! are never computed.
//!
//! Tokenization splits the string at each ASCII command letter; numeric
//! arguments are scanned with a signed-float regex, so comma, whitespace and
//! compact sign-separated runs all work.

use std::sync::LazyLock;

use regex::Regex;

/// One command letter with everything up to the next letter.
static COMMANDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])([^A-Za-z]*)").unwrap());

/// Signed decimal or signed integer literal.
static NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d*\.\d+|[-+]?\d+").unwrap());

/// A single (x, y) coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A command letter paired with its ordered numeric arguments.
///
/// The argument list is raw: grouping into per-repetition strides happens
/// lazily in [`PathCommand::points`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub letter: char,
    pub args: Vec<f64>,
}

/// Per-command argument layout: numbers consumed per repetition, and which
/// (x, y) index pairs within a group are geometric points.
///
/// Arc radii, rotation and the two flag arguments are deliberately absent
/// from the `A` pair list. H, V, S, T and all lowercase relative forms map
/// to no layout and contribute nothing.
fn layout(letter: char) -> Option<(usize, &'static [(usize, usize)])> {
    match letter {
        'M' | 'L' => Some((2, &[(0, 1)])),
        'Q' => Some((4, &[(0, 1), (2, 3)])),
        'C' => Some((6, &[(0, 1), (2, 3), (4, 5)])),
        'A' => Some((7, &[(5, 6)])),
        _ => None,
    }
}

impl PathCommand {
    /// Iterate the geometrically meaningful points of this command.
    ///
    /// Endpoints and control points are emitted; arc radii, rotation and
    /// flags are skipped. Commands repeat their argument group implicitly,
    /// so the argument list is walked in fixed-size strides. A trailing
    /// group shorter than the command's arity is silently dropped, matching
    /// the lenient handling of hand-edited path data.
    ///
    /// The iterator is stateless per call: invoking this twice on the same
    /// command yields identical sequences.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        // Unhandled letters get an empty pair list; arity 1 keeps
        // chunks_exact well-formed without emitting anything.
        let (arity, pairs) = layout(self.letter).unwrap_or((1, &[]));

        self.args
            .chunks_exact(arity)
            .flat_map(move |group| {
                pairs
                    .iter()
                    .map(move |&(x, y)| Point::new(group[x], group[y]))
            })
    }
}

/// Tokenize path data into ordered commands.
///
/// Text before the first command letter is ignored, as are letters with
/// no parseable numbers (their argument list is simply empty).
pub fn tokenize(d: &str) -> Vec<PathCommand> {
    COMMANDS
        .captures_iter(d)
        .map(|cap| PathCommand {
            letter: cap[1].chars().next().unwrap(),
            args: scan_numbers(&cap[2]),
        })
        .collect()
}

/// Extract every point from a full path-data string.
pub fn path_points(d: &str) -> Vec<Point> {
    let mut points = Vec::new();
    for cmd in tokenize(d) {
        points.extend(cmd.points());
    }
    points
}

/// Scan numeric literals from a command's argument text.
fn scan_numbers(args: &str) -> Vec<f64> {
    NUMBERS
        .find_iter(args)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}
