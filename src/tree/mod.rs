/// Tree node and its selective traversals.
pub mod node;

pub use node::*;

/// Generic tree with `N` children per node and a shape bounding the whole tree.
///
/// Only the shape of the root is stored, the shape of any other node is derived from it every time
/// the tree is traversed.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree<P, const N: usize, S> {
    root: Node<P, N>,
    shape: S,
}

impl<P: Default, const N: usize, S> Tree<P, N, S> {
    /// Creates a new [`Tree`] bounded by `shape`, with a single root node holding the default
    /// payload.
    #[inline]
    pub fn new(shape: S) -> Self {
        Self {
            root: Node::default(),
            shape,
        }
    }
}

impl<P, const N: usize, S> Tree<P, N, S> {
    /// Returns the indices of every child slot, `[0, 1, ..., N - 1]`.
    #[inline]
    pub fn indexes() -> [usize; N] {
        std::array::from_fn(|i| i)
    }

    /// Returns a reference to the root [`Node`].
    #[inline]
    pub const fn root(&self) -> &Node<P, N> {
        &self.root
    }

    /// Returns a mutable reference to the root [`Node`].
    #[inline]
    pub fn root_mut(&mut self) -> &mut Node<P, N> {
        &mut self.root
    }

    /// Returns the shape bounding the tree.
    #[inline]
    pub const fn shape(&self) -> &S {
        &self.shape
    }

    /// Number of nodes in the tree, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Number of levels in the tree, a lone root having a depth of 1.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

impl<P, const N: usize, S: Clone> Tree<P, N, S> {
    /// Recursively inserts nodes in the tree.
    ///
    /// At every visited node, `insert` receives the node's shape and the arguments and returns the
    /// indices of the children to create. Empty slots among them are populated with default nodes,
    /// then every selected child is visited in turn. The shape of a child is computed by `shape_fn`
    /// from its index and the shape of its parent.
    pub fn insert_nodes<A, I, F, G>(&mut self, mut insert: F, shape_fn: G, args: A)
    where
        P: Default,
        A: Clone,
        I: IntoIterator<Item = usize>,
        F: FnMut(&S, &A) -> I,
        G: Fn(usize, &S) -> S,
    {
        self.root.process_children(
            &mut |children: &mut Children<P, N>, (shape, args): &(S, A)| {
                let targets = insert(shape, args).into_iter().collect::<Vec<_>>();
                for &index in &targets {
                    match children.get_mut(index) {
                        Some(slot) if slot.is_none() => *slot = Some(Box::default()),
                        _ => {}
                    }
                }
                targets
            },
            &Self::interpolate(&shape_fn),
            (self.shape.clone(), args),
        );
    }

    /// Recursively removes nodes from the tree.
    ///
    /// At every visited node, `remove` receives the node's shape and the arguments and returns the
    /// indices of the children to remove along with their whole subtree. Every remaining child is
    /// then visited in turn, so removal cascades down the children that were kept. The shape of a
    /// child is computed by `shape_fn` from its index and the shape of its parent.
    pub fn remove_nodes<A, I, F, G>(&mut self, mut remove: F, shape_fn: G, args: A)
    where
        A: Clone,
        I: IntoIterator<Item = usize>,
        F: FnMut(&S, &A) -> I,
        G: Fn(usize, &S) -> S,
    {
        self.root.process_children(
            &mut |children: &mut Children<P, N>, (shape, args): &(S, A)| {
                let targets = remove(shape, args).into_iter().collect::<Vec<_>>();
                for &index in &targets {
                    if let Some(slot) = children.get_mut(index) {
                        *slot = None;
                    }
                }
                Self::indexes()
                    .into_iter()
                    .filter(move |index| !targets.contains(index))
            },
            &Self::interpolate(&shape_fn),
            (self.shape.clone(), args),
        );
    }

    /// Recursively processes the payloads of existing nodes without changing the structure of the
    /// tree.
    ///
    /// At every visited node, `process` receives the node's payload, shape and the arguments and
    /// returns the indices of the children to visit next. The shape of a child is computed by
    /// `shape_fn` from its index and the shape of its parent.
    pub fn process_nodes<A, I, F, G>(&mut self, mut process: F, shape_fn: G, args: A)
    where
        A: Clone,
        I: IntoIterator<Item = usize>,
        F: FnMut(&mut P, &S, &A) -> I,
        G: Fn(usize, &S) -> S,
    {
        self.root.process_payload(
            &mut |payload: &mut P, (shape, args): &(S, A)| process(payload, shape, args),
            &Self::interpolate(&shape_fn),
            (self.shape.clone(), args),
        );
    }

    /// Recursively reads the payloads of existing nodes.
    ///
    /// Same as [`Tree::process_nodes`] through a shared reference.
    pub fn visit_nodes<A, I, F, G>(&self, mut visit: F, shape_fn: G, args: A)
    where
        A: Clone,
        I: IntoIterator<Item = usize>,
        F: FnMut(&P, &S, &A) -> I,
        G: Fn(usize, &S) -> S,
    {
        self.root.visit_payload(
            &mut |payload: &P, (shape, args): &(S, A)| visit(payload, shape, args),
            &Self::interpolate(&shape_fn),
            (self.shape.clone(), args),
        );
    }

    #[inline]
    fn interpolate<A, G>(shape_fn: &G) -> impl Fn(usize, &(S, A)) -> (S, A) + '_
    where
        A: Clone,
        G: Fn(usize, &S) -> S,
    {
        move |index, (shape, args)| (shape_fn(index, shape), args.clone())
    }
}
