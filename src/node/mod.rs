//! Positioned box tree consumed and produced by pagination

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback invoked once per fragment when it is assigned to an output page.
///
/// The fragment is passed mutably so the caller may adjust it in place (for
/// example to renumber a header). It runs after the fragment's geometry is
/// set and before its children are processed for that page.
pub type PageHook = Arc<dyn Fn(&mut Node) + Send + Sync>;

/// A positioned rectangle, optionally with ordered children; the unit being
/// paginated.
///
/// `top` and `left` are offsets from the top-left corner of the containing
/// page at the time of splitting. Geometry comes in already resolved from an
/// upstream layout pass; heights are final inputs, never re-measured here.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    /// Offset from the left edge of the containing page
    pub left: f32,
    /// Offset from the top edge of the containing page
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Start this node on a fresh page regardless of remaining room
    pub forced_break_before: bool,
    /// Whether the node's content may be divided across pages
    pub splittable: bool,
    /// Minimum room required below the node on its page before it is
    /// deferred whole instead (orphan avoidance)
    pub min_trailing_space: f32,
    /// Emit an identical clone of this node on every page its ancestor
    /// chain produces (running header/footer)
    pub repeat_on_every_page: bool,
    /// Observer called for each fragment of this node
    #[serde(skip)]
    pub on_page_assigned: Option<PageHook>,
    /// Child nodes in reading order, positioned relative to this node
    pub children: Vec<Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            forced_break_before: false,
            splittable: true,
            min_trailing_space: 0.0,
            repeat_on_every_page: false,
            on_page_assigned: None,
            children: Vec::new(),
        }
    }
}

impl Node {
    /// Create a leaf node with the given geometry and default policies
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            ..Self::default()
        }
    }

    /// Append a child, keeping reading order
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Bottom edge of this node in its parent's frame
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

// The hook is a shared callable: it has no useful Debug or equality, so both
// are written by hand and only report its presence.

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("left", &self.left)
            .field("top", &self.top)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("forced_break_before", &self.forced_break_before)
            .field("splittable", &self.splittable)
            .field("min_trailing_space", &self.min_trailing_space)
            .field("repeat_on_every_page", &self.repeat_on_every_page)
            .field("has_hook", &self.on_page_assigned.is_some())
            .field("children", &self.children)
            .finish()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left
            && self.top == other.top
            && self.width == other.width
            && self.height == other.height
            && self.forced_break_before == other.forced_break_before
            && self.splittable == other.splittable
            && self.min_trailing_space == other.min_trailing_space
            && self.repeat_on_every_page == other.repeat_on_every_page
            && self.children == other.children
    }
}
