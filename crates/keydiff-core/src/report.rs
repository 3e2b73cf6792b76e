//! Human and machine readable summaries of a [`KeyDiff`].

use std::fmt::Write as _;

use serde::Serialize;

use crate::{diff::Path, KeyDiff, Node};

const COLOR_RESET: &str = "\u{1b}[0m";
const COLOR_RED: &str = "\u{1b}[31m";
const COLOR_GREEN: &str = "\u{1b}[32m";

/// Number of paths listed per category unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 100;

/// Configuration toggles for text rendering.
///
/// ```
/// # use keydiff_core::RenderConfig;
/// let config = RenderConfig::new().with_limit(10).with_color(true);
/// assert_eq!(config.limit(), Some(10));
/// assert!(config.color_enabled());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    color: bool,
    limit: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { color: false, limit: Some(DEFAULT_LIMIT) }
    }
}

impl RenderConfig {
    /// Constructs a configuration with default settings (no color, 100 paths per list).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables ANSI color output.
    #[must_use]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Caps each listing at `limit` paths. Zero lifts the cap.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// Indicates whether color output is enabled.
    #[must_use]
    pub fn color_enabled(self) -> bool {
        self.color
    }

    /// Returns the listing cap, `None` when unlimited.
    #[must_use]
    pub fn limit(self) -> Option<usize> {
        self.limit
    }
}

/// Entry counts of both documents together with their key diff.
///
/// ```
/// # use keydiff_core::{Node, RenderConfig, Report};
/// let en = Node::from_json_str("{\"a\":1,\"b\":{\"c\":2}}")?;
/// let ar = Node::from_json_str("{\"a\":1}")?;
/// let report = Report::compare(&en, &ar);
/// let text = report.render(&RenderConfig::default());
/// assert!(text.starts_with("Reference entries: 2\nTarget entries: 1\n"));
/// assert!(text.contains("\nM b\n"));
/// # Ok::<(), keydiff_core::LoadError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    reference_entries: usize,
    target_entries: usize,
    #[serde(flatten)]
    diff: KeyDiff,
}

impl Report {
    /// Diffs `reference` against `target` and counts the leaves of both.
    #[must_use]
    pub fn compare(reference: &Node, target: &Node) -> Self {
        Self::new(reference.leaf_count(), target.leaf_count(), reference.diff(target))
    }

    /// Assembles a report from precomputed parts.
    #[must_use]
    pub fn new(reference_entries: usize, target_entries: usize, diff: KeyDiff) -> Self {
        Self { reference_entries, target_entries, diff }
    }

    /// Leaf count of the reference document.
    #[must_use]
    pub fn reference_entries(&self) -> usize {
        self.reference_entries
    }

    /// Leaf count of the target document.
    #[must_use]
    pub fn target_entries(&self) -> usize {
        self.target_entries
    }

    /// The underlying key diff.
    #[must_use]
    pub fn diff(&self) -> &KeyDiff {
        &self.diff
    }

    /// Renders the plain-text summary followed by the (possibly truncated)
    /// `M`/`E` listings.
    #[must_use]
    pub fn render(&self, config: &RenderConfig) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "Reference entries: {}", self.reference_entries);
        let _ = writeln!(output, "Target entries: {}", self.target_entries);
        let _ = writeln!(output, "Missing translations: {}", self.diff.missing().len());
        let _ = writeln!(output, "Extra translations: {}", self.diff.extra().len());
        render_listing(&mut output, "Missing keys:", "M", COLOR_RED, self.diff.missing(), config);
        render_listing(&mut output, "Extra keys:", "E", COLOR_GREEN, self.diff.extra(), config);
        output
    }

    /// Renders the full, untruncated report as a single JSON object.
    ///
    /// ```
    /// # use keydiff_core::{Node, Report};
    /// let en = Node::from_json_str("{}")?;
    /// let ar = Node::from_json_str("{\"y\":1}")?;
    /// let json = Report::compare(&en, &ar).render_json()?;
    /// assert_eq!(
    ///     json,
    ///     "{\"reference_entries\":0,\"target_entries\":1,\"missing\":[],\"extra\":[\"y\"]}"
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn render_listing(
    output: &mut String,
    heading: &str,
    marker: &str,
    color: &str,
    paths: &[Path],
    config: &RenderConfig,
) {
    if paths.is_empty() {
        return;
    }
    let shown = config.limit().map_or(paths.len(), |limit| limit.min(paths.len()));

    output.push('\n');
    output.push_str(heading);
    output.push('\n');
    for path in &paths[..shown] {
        if config.color_enabled() {
            let _ = writeln!(output, "{color}{marker}{COLOR_RESET} {path}");
        } else {
            let _ = writeln!(output, "{marker} {path}");
        }
    }
    if shown < paths.len() {
        let _ = writeln!(output, "... {} more", paths.len() - shown);
    }
}
