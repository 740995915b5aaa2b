//! Slicer comment markers
//!
//! Slicers annotate their output with comments naming the region being
//! printed (`;TYPE:WALL-OUTER`, `; perimeter`) and the layer structure
//! (`;LAYER_COUNT:120`, `;LAYER:3`). Only the semicolon comment is inspected.

use std::sync::LazyLock;

use regex::Regex;

static TYPE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TYPE:\s*(\w+)").expect("valid TYPE pattern"));
static REGION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"; (skirt|perimeter|infill|support)").expect("valid region pattern")
});
static LAYER_COUNT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"LAYER_COUNT:").expect("valid LAYER_COUNT pattern"));
static LAYER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"LAYER:\s*(\d+)").expect("valid LAYER pattern"));

/// A marker recognized in a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Region tag for the following moves, e.g. "infill"
    Region(String),
    /// The program announces its layer count, so layers are marked explicitly
    LayerCount,
    /// Explicit start of layer `n`
    Layer(usize),
}

/// Detect a marker in a semicolon comment. The first matching rule wins.
pub fn detect(comment: &str) -> Option<Annotation> {
    if let Some(caps) = TYPE_MARKER.captures(comment) {
        return Some(Annotation::Region(caps[1].to_lowercase()));
    }
    if let Some(caps) = REGION_MARKER.captures(comment) {
        return Some(Annotation::Region(caps[1].to_string()));
    }
    if LAYER_COUNT_MARKER.is_match(comment) {
        return Some(Annotation::LayerCount);
    }
    LAYER_MARKER
        .captures(comment)
        .and_then(|caps| caps[1].parse().ok())
        .map(Annotation::Layer)
}
