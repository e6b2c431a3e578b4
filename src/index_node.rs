use crate::listing::{Listing, ListingId};
use crate::{HasEnvelope, Rectangle};

/// A node of the listing tree.
///
/// Leaves hold handles into the owning index's listing storage; internal
/// nodes own their children. Both carry a bounding box used to prune
/// searches.
#[derive(Clone, Debug, PartialEq)]
pub enum IndexNode {
    Leaf {
        bounding_box: Rectangle,
        listings: Vec<ListingId>,
    },
    Internal {
        bounding_box: Rectangle,
        children: Vec<IndexNode>,
    },
}

impl HasEnvelope for IndexNode {
    fn envelope(&self) -> Rectangle {
        self.bounding_box()
    }
}

impl IndexNode {
    pub fn new_leaf(bounding_box: Rectangle) -> Self {
        IndexNode::Leaf {
            bounding_box,
            listings: Vec::new(),
        }
    }

    pub fn new_internal(bounding_box: Rectangle) -> Self {
        IndexNode::Internal {
            bounding_box,
            children: Vec::new(),
        }
    }

    pub fn bounding_box(&self) -> Rectangle {
        match self {
            IndexNode::Leaf { bounding_box, .. } | IndexNode::Internal { bounding_box, .. } => {
                *bounding_box
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, IndexNode::Leaf { .. })
    }

    /// Number of listings reachable beneath this node.
    pub fn len(&self) -> usize {
        match self {
            IndexNode::Leaf { listings, .. } => listings.len(),
            IndexNode::Internal { children, .. } => children.iter().map(IndexNode::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Levels from this node down to its deepest leaf; a lone leaf is 1.
    pub fn depth(&self) -> usize {
        match self {
            IndexNode::Leaf { .. } => 1,
            IndexNode::Internal { children, .. } => {
                1 + children.iter().map(IndexNode::depth).max().unwrap_or(0)
            }
        }
    }

    /// Add a listing beneath this node.
    ///
    /// A leaf only appends the handle: its bounding box is left as it was.
    /// An internal node wraps the listing in a new one-listing child and
    /// then widens its own box to cover the children.
    ///
    /// The new child is a leaf holding the listing's handle, boxed by the
    /// listing's bbox. A child carrying only the box would keep the parent's
    /// extent right but lose the listing; this one is still found by
    /// `search`.
    pub fn insert_listing(&mut self, id: ListingId, bbox: Rectangle) {
        match self {
            IndexNode::Leaf { listings, .. } => listings.push(id),
            IndexNode::Internal { children, .. } => {
                children.push(IndexNode::Leaf {
                    bounding_box: bbox,
                    listings: vec![id],
                });
                self.recompute_bounding_box(&[]);
            }
        }
    }

    /// Fold the boxes of the children (or, for a leaf, of its listings, as
    /// found in `storage`) into the current bounding box. The box only
    /// grows. Handles with no entry in `storage` are skipped.
    pub fn recompute_bounding_box(&mut self, storage: &[Listing]) {
        match self {
            IndexNode::Leaf {
                bounding_box,
                listings,
            } => {
                *bounding_box = listings
                    .iter()
                    .filter_map(|id| storage.get(id.0))
                    .map(|listing| listing.bbox)
                    .fold(*bounding_box, |acc, r| acc.union(r));
            }
            IndexNode::Internal {
                bounding_box,
                children,
            } => {
                *bounding_box = children
                    .iter()
                    .map(IndexNode::bounding_box)
                    .fold(*bounding_box, |acc, r| acc.union(r));
            }
        }
    }

    /// Widen this node's box to cover `rect`.
    pub(crate) fn expand(&mut self, rect: Rectangle) {
        match self {
            IndexNode::Leaf { bounding_box, .. } | IndexNode::Internal { bounding_box, .. } => {
                *bounding_box = bounding_box.union(rect);
            }
        }
    }

    /// Collect the listings beneath this node whose bbox intersects `range`,
    /// in insertion order. Subtrees whose box misses `range` are skipped
    /// without looking at their contents. Handles with no entry in `storage`
    /// are skipped.
    pub fn search<'a>(
        &self,
        range: Rectangle,
        storage: &'a [Listing],
        results: &mut Vec<&'a Listing>,
    ) {
        let mut stack: Vec<&IndexNode> = vec![self];
        while let Some(node) = stack.pop() {
            if !node.bounding_box().intersects(range) {
                continue;
            }
            match node {
                IndexNode::Leaf { listings, .. } => {
                    results.extend(
                        listings
                            .iter()
                            .filter_map(|id| storage.get(id.0))
                            .filter(|listing| range.intersects(listing.bbox)),
                    );
                }
                // Reversed so children pop off the stack in order.
                IndexNode::Internal { children, .. } => stack.extend(children.iter().rev()),
            }
        }
    }
}
