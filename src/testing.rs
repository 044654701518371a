/// Randomized test suite shared by all simple edge stores.
///
/// Every store is checked against a reference model keeping the ordered pairs of all
/// edges in a `BTreeMap`. Arguments: name of the generated module, store type,
/// whether the store is undirected, whether it is weighted.
macro_rules! test_edges_ops {
    ($env:ident, $store:ident, $undirected:literal, $weighted:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, edges::*, orientation::EdgeOrientation};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use std::collections::BTreeMap;

            type Entry = (Node, Weight, EdgeType);

            /// Ordered pairs of all edges; undirected edges appear in both directions
            struct Model {
                n: NumNodes,
                pairs: BTreeMap<(Node, Node), (Weight, EdgeType)>,
            }

            impl Model {
                fn new(n: NumNodes) -> Self {
                    Self {
                        n,
                        pairs: BTreeMap::new(),
                    }
                }

                fn number_of_edges(&self) -> NumEdges {
                    self.pairs
                        .keys()
                        .filter(|(u, v)| !$undirected || u <= v)
                        .count() as NumEdges
                }

                fn combine(incoming: Weight, outgoing: Weight) -> Weight {
                    if $weighted {
                        incoming + outgoing
                    } else {
                        DEFAULT_WEIGHT
                    }
                }

                fn add(&mut self, u: Node, v: Node, w: Weight, t: EdgeType) -> bool {
                    if u >= self.n || v >= self.n || self.pairs.contains_key(&(u, v)) {
                        return false;
                    }
                    let w = if $weighted { w } else { DEFAULT_WEIGHT };
                    self.pairs.insert((u, v), (w, t));
                    if $undirected {
                        self.pairs.insert((v, u), (w, t));
                    }
                    true
                }

                fn remove(&mut self, u: Node, v: Node) -> bool {
                    if self.pairs.remove(&(u, v)).is_none() {
                        return false;
                    }
                    if $undirected {
                        self.pairs.remove(&(v, u));
                    }
                    true
                }

                fn remove_node(&mut self, id: Node) {
                    let shift = |x: Node| if x > id { x - 1 } else { x };
                    self.pairs = std::mem::take(&mut self.pairs)
                        .into_iter()
                        .filter(|((u, v), _)| *u != id && *v != id)
                        .map(|((u, v), x)| ((shift(u), shift(v)), x))
                        .collect();
                    self.n -= 1;
                }

                /// Expected views of `u` in the order of `EdgeOrientation::ALL`
                fn views(&self, u: Node) -> Vec<Vec<Entry>> {
                    let out = self
                        .pairs
                        .range((u, 0)..=(u, Node::MAX))
                        .map(|(&(_, v), &(w, t))| (v, w, t))
                        .collect_vec();
                    if $undirected {
                        return vec![out.clone(), out.clone(), out.clone(), out];
                    }

                    let inc = self
                        .pairs
                        .iter()
                        .filter(|((_, v), _)| *v == u)
                        .map(|(&(x, _), &(w, t))| (x, w, t))
                        .collect_vec();

                    let mut und: BTreeMap<Node, (Weight, EdgeType)> =
                        inc.iter().map(|&(v, w, t)| (v, (w, t))).collect();
                    for &(v, w, t) in &out {
                        und.entry(v)
                            .and_modify(|e| *e = (Self::combine(e.0, w), t))
                            .or_insert((w, t));
                    }
                    let und = und.into_iter().map(|(v, (w, t))| (v, w, t)).collect_vec();

                    let mutual = out
                        .iter()
                        .filter_map(|&(v, w, t)| {
                            inc.iter()
                                .find(|x| x.0 == v)
                                .map(|x| (v, Self::combine(x.1, w), t))
                        })
                        .collect_vec();

                    vec![out, inc, und, mutual]
                }

                fn assert_matches<E: Edges>(&self, store: &E) {
                    assert_eq!(store.number_of_nodes(), self.n);
                    assert_eq!(store.number_of_edges(), self.number_of_edges());

                    for u in 0..self.n {
                        for (o, expected) in EdgeOrientation::ALL.into_iter().zip(self.views(u)) {
                            assert_eq!(
                                store.neighbourhood(u, o).collect_vec(),
                                expected.iter().map(|x| x.0).collect_vec(),
                                "{o} nodes of {u}"
                            );
                            assert_eq!(
                                store.neighbourhood_weights(u, o).collect_vec(),
                                expected.iter().map(|x| (x.0, x.1)).collect_vec(),
                                "{o} weights of {u}"
                            );
                            assert_eq!(
                                store.neighbourhood_types(u, o).collect_vec(),
                                expected.iter().map(|x| (x.0, x.2)).collect_vec(),
                                "{o} types of {u}"
                            );
                            assert_eq!(store.degree(u, o) as usize, expected.len());
                        }
                    }

                    for (&(u, v), &(w, t)) in &self.pairs {
                        assert!(store.contains_edge(u, v));
                        assert_eq!(store.edge_weight(u, v), w);
                        assert_eq!(store.edge_type(u, v), t);
                    }

                    let edges = self
                        .pairs
                        .iter()
                        .filter(|((u, v), _)| !$undirected || u <= v)
                        .map(|(&(u, v), &(w, t))| (Edge(u, v), w, t))
                        .collect_vec();
                    assert_eq!(store.edges().collect_vec(), edges);
                }
            }

            fn random_store<R: Rng>(rng: &mut R, n: NumNodes, attempts: u32) -> ($store, Model) {
                let mut store = <$store>::new(n);
                let mut model = Model::new(n);
                for _ in 0..attempts {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w = rng.random_range(1..10) as Weight;
                    let t = rng.random_range(0..4);
                    assert_eq!(store.add_edge(u, v, w, t), model.add(u, v, w, t));
                }
                (store, model)
            }

            #[test]
            fn flags() {
                let store = <$store>::new(3);
                assert_eq!(store.is_directed(), !$undirected);
                assert_eq!(store.is_weighted(), $weighted);
            }

            #[test]
            fn add_user_is_sequential() {
                let mut store = <$store>::default();
                for id in 0..10 {
                    assert!(!store.add_user(id + 1));
                    assert!(store.add_user(id));
                }
                assert_eq!(store.number_of_nodes(), 10);
                assert!(store.add_edge(9, 0, 2.0, 1));
                assert!(!store.add_edge(10, 0, 2.0, 1));
                assert_eq!(store.number_of_edges(), 1);
            }

            #[test]
            fn random_editing_matches_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5 as NumNodes, 10, 25] {
                    for _ in 0..10 {
                        let mut store = <$store>::new(n);
                        let mut model = Model::new(n);
                        let mut m: NumEdges = 0;

                        for _ in 0..(n * 4) {
                            // ids up to `n` to hit the out-of-range path
                            let u = rng.random_range(0..=n);
                            let v = rng.random_range(0..n);

                            if rng.random_bool(0.7) {
                                let w = rng.random_range(1..10) as Weight;
                                let t = rng.random_range(0..4);
                                let added = store.add_edge(u, v, w, t);
                                assert_eq!(added, model.add(u, v, w, t));
                                m += added as NumEdges;
                            } else {
                                let removed = store.remove_edge(u, v);
                                assert_eq!(removed, model.remove(u, v));
                                m -= removed as NumEdges;
                            }

                            assert_eq!(store.number_of_edges(), m);
                            assert_eq!(store.contains_edge(v, u), model.pairs.contains_key(&(v, u)));
                        }

                        model.assert_matches(&store);
                    }
                }
            }

            #[test]
            fn weight_and_type_updates() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for n in [5 as NumNodes, 20] {
                    let (mut store, mut model) = random_store(rng, n, n * 3);

                    for _ in 0..(n * 3) {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w = rng.random_range(10..20) as Weight;
                        let t = rng.random_range(4..8);

                        let exists = model.pairs.contains_key(&(u, v));
                        assert_eq!(store.update_edge_weight(u, v, w), exists);
                        assert_eq!(store.update_edge_type(u, v, t), exists);

                        if exists {
                            let w = if $weighted { w } else { DEFAULT_WEIGHT };
                            model.pairs.insert((u, v), (w, t));
                            if $undirected {
                                model.pairs.insert((v, u), (w, t));
                            }
                        } else {
                            assert!(store.edge_weight(u, v).is_nan());
                            assert_eq!(store.edge_type(u, v), MISSING_TYPE);
                        }
                    }

                    model.assert_matches(&store);
                }
            }

            #[test]
            fn node_removal_renumbers() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [5 as NumNodes, 10, 25] {
                    for _ in 0..5 {
                        let (mut store, mut model) = random_store(rng, n, n * 3);

                        while model.n > 0 {
                            let id = rng.random_range(0..model.n);
                            assert!(store.remove_node(id));
                            model.remove_node(id);
                            model.assert_matches(&store);
                        }

                        assert!(!store.remove_node(0));
                        assert_eq!(store.number_of_edges(), 0);
                    }
                }
            }
        }
    };
}

pub(crate) use test_edges_ops;
