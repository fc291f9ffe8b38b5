//! # Navigator Tree
//!
//! Mounted navigators, indexed with explicit parent links so any handle can
//! find the root in O(depth). The tree borrows a snapshot of the live state
//! for the duration of one resolution; it never owns or mutates it.
//!
//! ```text
//! NavigatorTree
//! └── nodes: Vec<NavigatorNode>      // 0 is the root, children follow breadth-first
//!     ├── state: &NavigationState    // this navigator's slice of the live tree
//!     └── parent: Option<NavigatorId>
//! ```

use crate::core::state::NavigationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NavigatorId(usize);

#[derive(Debug)]
struct NavigatorNode<'s> {
    state: &'s NavigationState,
    parent: Option<NavigatorId>,
}

#[derive(Debug)]
pub struct NavigatorTree<'s> {
    nodes: Vec<NavigatorNode<'s>>,
}

impl<'s> NavigatorTree<'s> {
    /// Registers the root and every nested navigator below it.
    pub fn new(root: &'s NavigationState) -> Self {
        let mut nodes = vec![NavigatorNode {
            state: root,
            parent: None,
        }];

        let mut next = 0;
        while next < nodes.len() {
            let parent = NavigatorId(next);
            let state = nodes[next].state;
            for child in state.routes.iter().filter_map(|route| route.state.as_ref()) {
                nodes.push(NavigatorNode {
                    state: child,
                    parent: Some(parent),
                });
            }
            next += 1;
        }

        Self { nodes }
    }

    pub fn root(&self) -> NavigatorHandle<'_> {
        NavigatorHandle {
            tree: self,
            id: NavigatorId(0),
        }
    }

    /// Handle for the navigator whose state carries `key`.
    pub fn find(&self, key: &str) -> Option<NavigatorHandle<'_>> {
        self.nodes
            .iter()
            .position(|node| node.state.key.as_deref() == Some(key))
            .map(|index| NavigatorHandle {
                tree: self,
                id: NavigatorId(index),
            })
    }
}

/// A mounted navigator, as seen from a screen inside it.
#[derive(Debug, Clone, Copy)]
pub struct NavigatorHandle<'a> {
    tree: &'a NavigatorTree<'a>,
    id: NavigatorId,
}

impl<'a> NavigatorHandle<'a> {
    pub fn key(&self) -> Option<&'a str> {
        self.state().key.as_deref()
    }

    pub fn state(&self) -> &'a NavigationState {
        self.tree.nodes[self.id.0].state
    }

    pub fn parent(&self) -> Option<NavigatorHandle<'a>> {
        self.tree.nodes[self.id.0].parent.map(|id| NavigatorHandle {
            tree: self.tree,
            id,
        })
    }

    /// Walks parent links until a navigator has none.
    pub fn root(&self) -> NavigatorHandle<'a> {
        let mut root = *self;
        while let Some(parent) = root.parent() {
            root = parent;
        }
        root
    }
}
