//! Balancing strategies.
//!
//! A strategy is a per-node metadata type together with the two fix-up walks
//! that restore its invariant after an insertion or a removal. The map is
//! generic over the strategy, so the choice is made at compile time and
//! dispatch is static.

use crate::map::node::{Link, NodeId, Removal, Tree};

/// Per-node balancing metadata and the walks that maintain it.
///
/// [`Avl`] keeps sibling subtree heights within one of each other;
/// [`RedBlack`] keeps the trees colored so that no red node has a red child
/// and every root-to-leaf path crosses the same number of black nodes.
/// Either way the tree's height stays logarithmic in its size.
pub trait Balance: Clone + Default {
    /// Restores the invariant after the freshly attached leaf `id` was
    /// inserted.
    fn rebalance_insert<K, V>(tree: &mut Tree<K, V, Self>, id: NodeId);

    /// Restores the invariant after a node was spliced out of the tree.
    fn rebalance_remove<K, V>(tree: &mut Tree<K, V, Self>, removal: Removal<Self>);
}

/// Height-balance metadata: the height of the subtree rooted at the node.
///
/// A leaf has height zero and an absent subtree height -1, so a node's
/// height is one more than the larger of its children's.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Avl(i32);

impl Avl {
    /// The recorded height of the node's subtree.
    pub fn height(&self) -> i32 { self.0 }

    fn height_of<K, V>(tree: &Tree<K, V, Avl>, link: Link) -> i32 {
        link.map_or(-1, |id| tree.balance(id).0)
    }

    fn update_height<K, V>(tree: &mut Tree<K, V, Avl>, id: NodeId) {
        let height = 1 + Self::height_of(tree, tree.left(id))
            .max(Self::height_of(tree, tree.right(id)));
        tree.balance_mut(id).0 = height;
    }

    fn is_balanced<K, V>(tree: &Tree<K, V, Avl>, id: NodeId) -> bool {
        let diff = Self::height_of(tree, tree.left(id))
            - Self::height_of(tree, tree.right(id));
        (-1..=1).contains(&diff)
    }

    /// The child rooting the taller subtree. Equal heights, which arise
    /// only on the removal walk, resolve toward `prefer_left`: picking the
    /// grandchild on the same side as its parent keeps the shape zig-zig,
    /// and the single rotation leaves every node below the new top
    /// balanced.
    fn taller_child<K, V>(tree: &Tree<K, V, Avl>, id: NodeId, prefer_left: bool) -> NodeId {
        let left = tree.left(id);
        let right = tree.right(id);
        let left_height = Self::height_of(tree, left);
        let right_height = Self::height_of(tree, right);

        if left_height > right_height || (left_height == right_height && prefer_left) {
            left.expect("taller_child: node has no children")
        } else {
            right.expect("taller_child: node has no children")
        }
    }

    /// Walks from `start` to the root, recomputing heights and restructuring
    /// at every unbalanced node. Insertions need at most one restructure;
    /// removals may cascade all the way up.
    fn rebalance_from<K, V>(tree: &mut Tree<K, V, Avl>, start: Link) {
        let mut cur = start;

        while let Some(id) = cur {
            Self::update_height(tree, id);

            if Self::is_balanced(tree, id) {
                cur = tree.parent(id);
            } else {
                // An unbalanced node's children differ by two, so the tie
                // side passed for y is moot.
                let y = Self::taller_child(tree, id, true);
                let y_is_left = tree.left(id) == Some(y);
                let x = Self::taller_child(tree, y, y_is_left);
                let top = tree.restructure(x);

                if let Some(left) = tree.left(top) {
                    Self::update_height(tree, left);
                }
                if let Some(right) = tree.right(top) {
                    Self::update_height(tree, right);
                }
                Self::update_height(tree, top);

                cur = tree.parent(top);
            }
        }
    }
}

impl Default for Avl {
    fn default() -> Self { Avl(0) }
}

impl Balance for Avl {
    fn rebalance_insert<K, V>(tree: &mut Tree<K, V, Self>, id: NodeId) {
        Self::rebalance_from(tree, Some(id));
    }

    fn rebalance_remove<K, V>(tree: &mut Tree<K, V, Self>, removal: Removal<Self>) {
        // parent is None only when the root itself was spliced out; the
        // replacement child (if any) is then the new root, so starting
        // there covers the whole changed path.
        Self::rebalance_from(tree, removal.parent.or(removal.child));
    }
}

/// The color of a node in a red-black tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Red,
    Black,
}

/// Color-balance metadata.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RedBlack(Color);

impl RedBlack {
    /// The node's color.
    pub fn color(&self) -> Color { self.0 }

    // Absent children are black nil leaves.
    fn color_of<K, V>(tree: &Tree<K, V, RedBlack>, link: Link) -> Color {
        link.map_or(Color::Black, |id| tree.balance(id).0)
    }

    fn set_color<K, V>(tree: &mut Tree<K, V, RedBlack>, id: NodeId, color: Color) {
        tree.balance_mut(id).0 = color;
    }
}

impl Default for RedBlack {
    // New nodes start red: inserting a red leaf never changes any path's
    // black count.
    fn default() -> Self { RedBlack(Color::Red) }
}

impl Balance for RedBlack {
    fn rebalance_insert<K, V>(tree: &mut Tree<K, V, Self>, id: NodeId) {
        let mut z = id;

        loop {
            let parent = match tree.parent(z) {
                Some(parent) => parent,
                None => break,
            };

            if Self::color_of(tree, Some(parent)) == Color::Black {
                break;
            }

            // A red parent is never the root, so the grandparent exists.
            let grandparent = match tree.parent(parent) {
                Some(grandparent) => grandparent,
                None => break,
            };

            let uncle = if tree.left(grandparent) == Some(parent) {
                tree.right(grandparent)
            } else {
                tree.left(grandparent)
            };

            if Self::color_of(tree, uncle) == Color::Red {
                // Recolor and push the double red two levels up.
                Self::set_color(tree, parent, Color::Black);
                if let Some(uncle) = uncle {
                    Self::set_color(tree, uncle, Color::Black);
                }
                Self::set_color(tree, grandparent, Color::Red);
                z = grandparent;
            } else {
                // A black uncle: one restructure over z, its parent, and its
                // grandparent resolves the double red for good.
                let top = tree.restructure(z);
                Self::set_color(tree, top, Color::Black);
                if let Some(left) = tree.left(top) {
                    Self::set_color(tree, left, Color::Red);
                }
                if let Some(right) = tree.right(top) {
                    Self::set_color(tree, right, Color::Red);
                }
                break;
            }
        }

        if let Some(root) = tree.root() {
            Self::set_color(tree, root, Color::Black);
        }
    }

    fn rebalance_remove<K, V>(tree: &mut Tree<K, V, Self>, removal: Removal<Self>) {
        // Splicing out a red node changes no path's black count.
        if removal.spliced.0 == Color::Red {
            return;
        }

        // The vacated position is one black short. `x` (possibly a nil leaf)
        // carries the deficit; its parent is tracked explicitly since `x`
        // may be absent.
        let mut x = removal.child;
        let mut parent = removal.parent;

        while x != tree.root() && Self::color_of(tree, x) == Color::Black {
            let p = match parent {
                Some(p) => p,
                None => break,
            };

            if tree.left(p) == x {
                let mut w = match tree.right(p) {
                    Some(w) => w,
                    None => break,
                };

                if Self::color_of(tree, Some(w)) == Color::Red {
                    // Red sibling: rotate it above the parent, exposing a
                    // black sibling for the cases below.
                    Self::set_color(tree, w, Color::Black);
                    Self::set_color(tree, p, Color::Red);
                    tree.rotate_left(p);
                    w = match tree.right(p) {
                        Some(w) => w,
                        None => break,
                    };
                }

                if Self::color_of(tree, tree.left(w)) == Color::Black
                    && Self::color_of(tree, tree.right(w)) == Color::Black
                {
                    // Both of the sibling's children black: recolor the
                    // sibling red and move the deficit up.
                    Self::set_color(tree, w, Color::Red);
                    x = Some(p);
                    parent = tree.parent(p);
                } else {
                    if Self::color_of(tree, tree.right(w)) == Color::Black {
                        // Near child red, far child black: rotate at the
                        // sibling to expose a red far child.
                        if let Some(w_left) = tree.left(w) {
                            Self::set_color(tree, w_left, Color::Black);
                        }
                        Self::set_color(tree, w, Color::Red);
                        tree.rotate_right(w);
                        w = match tree.right(p) {
                            Some(w) => w,
                            None => break,
                        };
                    }

                    // Red far child: one rotation at the parent absorbs the
                    // deficit.
                    Self::set_color(tree, w, Self::color_of(tree, Some(p)));
                    Self::set_color(tree, p, Color::Black);
                    if let Some(w_right) = tree.right(w) {
                        Self::set_color(tree, w_right, Color::Black);
                    }
                    tree.rotate_left(p);
                    x = tree.root();
                    parent = None;
                }
            } else {
                let mut w = match tree.left(p) {
                    Some(w) => w,
                    None => break,
                };

                if Self::color_of(tree, Some(w)) == Color::Red {
                    Self::set_color(tree, w, Color::Black);
                    Self::set_color(tree, p, Color::Red);
                    tree.rotate_right(p);
                    w = match tree.left(p) {
                        Some(w) => w,
                        None => break,
                    };
                }

                if Self::color_of(tree, tree.left(w)) == Color::Black
                    && Self::color_of(tree, tree.right(w)) == Color::Black
                {
                    Self::set_color(tree, w, Color::Red);
                    x = Some(p);
                    parent = tree.parent(p);
                } else {
                    if Self::color_of(tree, tree.left(w)) == Color::Black {
                        if let Some(w_right) = tree.right(w) {
                            Self::set_color(tree, w_right, Color::Black);
                        }
                        Self::set_color(tree, w, Color::Red);
                        tree.rotate_left(w);
                        w = match tree.left(p) {
                            Some(w) => w,
                            None => break,
                        };
                    }

                    Self::set_color(tree, w, Self::color_of(tree, Some(p)));
                    Self::set_color(tree, p, Color::Black);
                    if let Some(w_left) = tree.left(w) {
                        Self::set_color(tree, w_left, Color::Black);
                    }
                    tree.rotate_right(p);
                    x = tree.root();
                    parent = None;
                }
            }
        }

        if let Some(x) = x {
            Self::set_color(tree, x, Color::Black);
        }
    }
}
