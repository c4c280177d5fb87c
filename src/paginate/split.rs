//! The recursive splitter
//!
//! One node at a time is measured against the boundary of the page being
//! filled. The boundary travels through the recursion as an explicit cursor
//! value, so sibling walks share the page without any hidden mutable state.

use crate::node::Node;

/// What became of a single node measured against the current page.
pub(crate) enum Outcome {
    /// Ends on the current page.
    Placed(Node),
    /// Clipped at the page boundary; the rest continues on the next page.
    Clipped { placed: Node, rest: Node },
    /// Moved whole to the next page; the current page keeps filling.
    Moved(Node),
    /// Moved whole and closes the current page at its own top edge; the
    /// siblings that follow move with it.
    Break { moved: Node, closed_at: f32 },
}

/// Split one node against the page ending at `cursor` in the node's frame.
///
/// `cursor` is the distance from the node's coordinate origin to the bottom
/// edge of the page being filled. The root starts with the full
/// `page_height`; children inherit their parent's remaining room so the
/// whole sibling row shares one boundary.
pub(crate) fn split_node(node: Node, cursor: f32, page_height: f32) -> Outcome {
    let avail = cursor - node.top;

    // No room above the boundary: the node starts on the next page.
    if avail <= 0.0 {
        return Outcome::Moved(rebase(node, cursor));
    }

    // A forced break only applies when the node is not already the first
    // thing at the top of a fresh page. The flag is cleared on the moved
    // copy so the break fires once.
    if node.forced_break_before && node.top > 0.0 {
        let closed_at = node.top;
        let mut moved = rebase(node, closed_at);
        moved.forced_break_before = false;
        return Outcome::Break { moved, closed_at };
    }

    if node.height <= avail {
        // The node would end on this page. Before committing, check the room
        // left under it; too little means the whole node is deferred, never
        // a partial placement. Skipped at the top of a page, where deferring
        // again could never gain room.
        if node.top > 0.0 && avail - node.height < node.min_trailing_space {
            let closed_at = node.top;
            return Outcome::Break {
                moved: rebase(node, closed_at),
                closed_at,
            };
        }
        return place(node, avail, page_height);
    }

    // Taller than the room left. An unbreakable node moves whole as long as
    // a fresh page could hold it; one that cannot fit any page falls back to
    // ordinary clipping.
    if !node.splittable && node.height <= page_height {
        return Outcome::Moved(rebase(node, cursor));
    }

    place(node, avail, page_height)
}

/// Emit the node's fragment for the current page and, when its height
/// exceeds `avail`, the continuation holding the rest.
fn place(mut node: Node, avail: f32, page_height: f32) -> Outcome {
    let full_height = node.height;
    let children = std::mem::take(&mut node.children);
    let placed_height = full_height.min(avail);

    let mut placed = node.clone();
    placed.height = placed_height;
    if let Some(hook) = placed.on_page_assigned.clone() {
        hook(&mut placed);
    }

    // Children are positioned in the parent's frame, so the parent's room is
    // their page boundary.
    let (kept, carried) = split_children(children, avail, page_height);
    placed.children = kept;

    let rest_height = full_height - placed_height;
    if rest_height <= 0.0 {
        // The node's own height budget is spent. Children still carrying
        // content have no continuation to land in, so the excess is dropped:
        // ancestor height is authoritative for page count.
        return Outcome::Placed(placed);
    }

    let mut rest = node;
    rest.top = 0.0;
    rest.height = rest_height;
    rest.children = carried;
    Outcome::Clipped { placed, rest }
}

/// Walk a sibling row against the shared page boundary.
///
/// Returns the fragments kept on the current page and the nodes carried to
/// the parent's continuation. A sibling that closes the page takes everyone
/// after it along, re-based against the break edge; repeated nodes still
/// show on the closed page.
fn split_children(children: Vec<Node>, cursor: f32, page_height: f32) -> (Vec<Node>, Vec<Node>) {
    let mut kept = Vec::new();
    let mut carried = Vec::new();
    let mut rest = children.into_iter();

    while let Some(child) = rest.next() {
        // Repeated nodes sit outside ordinary space accounting: an identical
        // clone lands on this page and the original travels on.
        if child.repeat_on_every_page {
            kept.push(repeat_clone(&child));
            carried.push(child);
            continue;
        }

        match split_node(child, cursor, page_height) {
            Outcome::Placed(fragment) => kept.push(fragment),
            Outcome::Clipped {
                placed,
                rest: continuation,
            } => {
                kept.push(placed);
                carried.push(continuation);
            }
            Outcome::Moved(moved) => carried.push(moved),
            Outcome::Break { moved, closed_at } => {
                carried.push(moved);
                for sibling in rest.by_ref() {
                    if sibling.repeat_on_every_page {
                        kept.push(repeat_clone(&sibling));
                        carried.push(sibling);
                    } else {
                        carried.push(rebase(sibling, closed_at));
                    }
                }
                break;
            }
        }
    }

    (kept, carried)
}

/// Identical per-page clone of a repeated node, geometry untouched.
fn repeat_clone(node: &Node) -> Node {
    let mut copy = node.clone();
    if let Some(hook) = copy.on_page_assigned.clone() {
        hook(&mut copy);
    }
    copy
}

/// Move a node whole past `boundary`: its continuation starts at the top of
/// the next page, keeping any overhang beyond the boundary as its offset.
fn rebase(mut node: Node, boundary: f32) -> Node {
    node.top = (node.top - boundary).max(0.0);
    node
}
