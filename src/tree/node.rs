/// Fixed-size array of child slots, one per subdivision of the parent region.
pub type Orthant<const X: usize, N> = [N; X];

/// Child slots of a [`Node`], each either empty or owning a child node.
pub type Children<P, const N: usize> = Orthant<N, Option<Box<Node<P, N>>>>;

/// Tree node owning a payload and exactly `N` child slots.
///
/// A node does not know the region of space it represents: regions are derived from the path
/// leading to the node on every traversal.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<P, const N: usize> {
    payload: P,
    children: Children<P, N>,
}

impl<P: Default, const N: usize> Default for Node<P, N> {
    #[inline]
    fn default() -> Self {
        Self::new(P::default(), std::array::from_fn(|_| None))
    }
}

impl<P, const N: usize> Node<P, N> {
    /// Creates a new [`Node`] from a payload and its child slots.
    #[inline]
    pub const fn new(payload: P, children: Children<P, N>) -> Self {
        Self { payload, children }
    }

    /// Returns a reference to the payload.
    #[inline]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns a mutable reference to the payload.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Returns the child slots of the node.
    #[inline]
    pub const fn children(&self) -> &Children<P, N> {
        &self.children
    }

    /// Returns the child at `index`, if the index is in range and the slot is populated.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)?.as_deref()
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Number of nodes in the subtree rooted at this node, itself included.
    pub fn len(&self) -> usize {
        1 + self.children.iter().flatten().map(|c| c.len()).sum::<usize>()
    }

    /// Number of levels of the subtree rooted at this node, a leaf having a depth of 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().flatten().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// Recursively processes the subtree in depth-first pre-order, selecting the children to
    /// visit from the payload of each node.
    ///
    /// `select` receives the payload of the current node and its arguments and returns the indices
    /// of the children to visit next, in order. Out of range indices and empty slots are skipped.
    /// The arguments of each visited child are computed by `interpolate` from its index and the
    /// arguments of the current node.
    pub fn process_payload<A, I, F, G>(&mut self, select: &mut F, interpolate: &G, args: A)
    where
        F: FnMut(&mut P, &A) -> I,
        G: Fn(usize, &A) -> A,
        I: IntoIterator<Item = usize>,
    {
        for index in select(&mut self.payload, &args) {
            if let Some(Some(child)) = self.children.get_mut(index) {
                child.process_payload(select, interpolate, interpolate(index, &args));
            }
        }
    }

    /// Read-only counterpart of [`Node::process_payload`].
    pub fn visit_payload<A, I, F, G>(&self, select: &mut F, interpolate: &G, args: A)
    where
        F: FnMut(&P, &A) -> I,
        G: Fn(usize, &A) -> A,
        I: IntoIterator<Item = usize>,
    {
        for index in select(&self.payload, &args) {
            if let Some(Some(child)) = self.children.get(index) {
                child.visit_payload(select, interpolate, interpolate(index, &args));
            }
        }
    }

    /// Recursively processes the subtree in depth-first pre-order, selecting the children to
    /// visit from the child slots of each node.
    ///
    /// Same as [`Node::process_payload`], except that `select` receives the child slots of the
    /// current node, which it may populate or clear before returning the indices to visit.
    pub fn process_children<A, I, F, G>(&mut self, select: &mut F, interpolate: &G, args: A)
    where
        F: FnMut(&mut Children<P, N>, &A) -> I,
        G: Fn(usize, &A) -> A,
        I: IntoIterator<Item = usize>,
    {
        for index in select(&mut self.children, &args) {
            if let Some(Some(child)) = self.children.get_mut(index) {
                child.process_children(select, interpolate, interpolate(index, &args));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: usize = 8;

    fn with_children<const N: usize>(populated: &[usize]) -> Node<usize, N> {
        let mut node = Node::default();
        for &index in populated {
            if let Some(slot) = node.children.get_mut(index) {
                *slot = Some(Box::default());
            }
        }
        node
    }

    fn read<const N: usize>(node: &mut Node<usize, N>, path: Vec<usize>) -> usize {
        let mut value = 0;
        node.process_payload(
            &mut |payload: &mut usize, depth: &usize| {
                value = *payload;
                path.get(*depth).copied()
            },
            &|_, depth| depth + 1,
            0,
        );
        value
    }

    fn write_all<const N: usize>(node: &mut Node<usize, N>, targets: &[usize]) {
        node.process_payload(
            &mut |payload: &mut usize, _: &()| {
                *payload = PAYLOAD;
                targets.to_vec()
            },
            &|_, _| (),
            (),
        );
    }

    macro_rules! tests_arity {
        ($($n: literal),*) => {$(
            paste::paste! {
                #[test]
                fn [<process_root_ $n>]() {
                    let mut node = with_children::<$n>(&[0, 1, 2, 3]);

                    assert_ne!(read(&mut node, vec![]), PAYLOAD);
                    write_all(&mut node, &[]);
                    assert_eq!(read(&mut node, vec![]), PAYLOAD);
                    assert!((0..$n).all(|i| *node.child(i).map_or(&0, Node::payload) != PAYLOAD));
                }

                #[test]
                fn [<process_selected_children_ $n>]() {
                    for populated in [vec![], vec![0], vec![1, 3], vec![0, 1, 2, 3]] {
                        for targets in [vec![], vec![0], vec![3, 1], vec![2, 7, 0], vec![9]] {
                            let mut node = with_children::<$n>(&populated);
                            write_all(&mut node, &targets);

                            for &i in populated.iter().filter(|&&i| i < $n) {
                                let expected = targets.contains(&i);
                                assert_eq!(read(&mut node, vec![i]) == PAYLOAD, expected);
                            }
                        }
                    }
                }
            }
        )*};
    }

    tests_arity!(0, 1, 2, 3, 4, 8);

    #[test]
    fn visits_in_selection_order() {
        let mut node = with_children::<4>(&[0, 1, 2, 3]);
        for (i, child) in node.children.iter_mut().flatten().enumerate() {
            *child.payload_mut() = i;
        }

        let mut visited = Vec::new();
        node.process_payload(
            &mut |payload: &mut usize, root: &bool| {
                if !root {
                    visited.push(*payload);
                }
                if *root {
                    vec![3, 1, 3, 5, 0]
                } else {
                    vec![]
                }
            },
            &|_, _| false,
            true,
        );

        assert_eq!(visited, [3, 1, 3, 0]);
    }

    #[test]
    fn interpolated_arguments_reach_children() {
        let mut node = with_children::<2>(&[0, 1]);
        node.children[1].as_mut().unwrap().children[0] = Some(Box::default());

        node.process_payload(
            &mut |payload: &mut usize, path: &usize| {
                *payload = *path;
                0..2
            },
            &|index, path| path * 10 + index + 1,
            0,
        );

        assert_eq!(*node.payload(), 0);
        assert_eq!(*node.child(0).unwrap().payload(), 1);
        assert_eq!(*node.child(1).unwrap().payload(), 2);
        assert_eq!(*node.child(1).unwrap().child(0).unwrap().payload(), 21);
    }

    #[test]
    fn visit_matches_process() {
        let mut node = with_children::<2>(&[0, 1]);
        node.children[1].as_mut().unwrap().children[0] = Some(Box::default());
        node.process_payload(
            &mut |payload: &mut usize, path: &usize| {
                *payload = *path;
                [1, 0]
            },
            &|index, path| path * 10 + index + 1,
            0,
        );

        let mut visited = Vec::new();
        node.visit_payload(
            &mut |payload: &usize, path: &usize| {
                visited.push((*payload, *path));
                [1, 0, 3]
            },
            &|index, path| path * 10 + index + 1,
            0,
        );

        assert_eq!(visited, [(0, 0), (2, 2), (21, 21), (1, 1)]);
    }

    #[test]
    fn process_children_grows_selected_path() {
        let mut node = Node::<(), 4>::default();

        node.process_children(
            &mut |children: &mut Children<(), 4>, depth: &usize| {
                if *depth == 3 {
                    return None;
                }
                children[*depth] = Some(Box::default());
                Some(*depth)
            },
            &|_, depth| depth + 1,
            0,
        );

        assert_eq!(node.len(), 4);
        assert_eq!(node.depth(), 4);
        let leaf = node.child(0).and_then(|n| n.child(1)).and_then(|n| n.child(2));
        assert!(leaf.is_some_and(Node::is_leaf));
        assert!(!node.is_leaf());
    }

    #[test]
    fn process_children_skips_cleared_slots() {
        let mut node = with_children::<4>(&[0, 1, 2, 3]);
        let mut calls = 0;

        node.process_children(
            &mut |children: &mut Children<usize, 4>, root: &bool| {
                calls += 1;
                if *root {
                    children[2] = None;
                    vec![0, 2, 4]
                } else {
                    vec![]
                }
            },
            &|_, _| false,
            true,
        );

        assert_eq!(calls, 2);
        assert_eq!(node.len(), 4);
        assert!(node.child(2).is_none());
    }
}
