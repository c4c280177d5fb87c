//! Pagination entry point and input validation

use crate::error::{Error, Result};
use crate::node::Node;
use crate::paginate::split::{split_node, Outcome};

/// Split a laid-out node tree into pages of the given height.
///
/// Returns one freshly allocated tree per output page, in reading order.
/// The input is read-only: every fragment is a deep copy, with `top`
/// re-based so each page is self-contained. An absent root yields an empty
/// sequence.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] when `page_height` is not finite and
///   positive.
/// - [`Error::MalformedInput`] when any node carries non-finite or negative
///   geometry (including `min_trailing_space`).
pub fn paginate(root: Option<&Node>, page_height: f32) -> Result<Vec<Node>> {
    let Some(root) = root else {
        return Ok(Vec::new());
    };

    if !page_height.is_finite() || page_height <= 0.0 {
        return Err(Error::InvalidArgument {
            message: format!("page height must be finite and positive, got {page_height}"),
        });
    }
    validate(root)?;

    let mut pages = Vec::new();
    let mut pending = Some(root.clone());

    while let Some(node) = pending {
        match split_node(node, page_height, page_height) {
            Outcome::Placed(page) => {
                pages.push(page);
                pending = None;
            }
            Outcome::Clipped { placed, rest } => {
                pages.push(placed);
                pending = Some(rest);
            }
            // The root starts past the boundary or asked for a break: no
            // content lands on this iteration. Pages that would hold nothing
            // are not emitted, so whole-page multiples of the offset can be
            // collapsed at once.
            Outcome::Moved(mut next) | Outcome::Break { moved: mut next, .. } => {
                if next.top >= page_height {
                    next.top %= page_height;
                }
                pending = Some(next);
            }
        }
    }

    Ok(pages)
}

/// Reject geometry the splitter must never see.
fn validate(node: &Node) -> Result<()> {
    for (name, value) in [
        ("left", node.left),
        ("top", node.top),
        ("width", node.width),
        ("height", node.height),
        ("minTrailingSpace", node.min_trailing_space),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::MalformedInput {
                message: format!("{name} must be finite and non-negative, got {value}"),
            });
        }
    }

    for child in &node.children {
        validate(child)?;
    }

    Ok(())
}
