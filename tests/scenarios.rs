use itertools::Itertools;
use relgraph::prelude::*;

#[test]
fn directed_unweighted_neighbours_are_merged() {
    let mut g: DirectedGraph<u32> = Graph::new();
    for u in 0..5 {
        assert!(g.add_node(u));
    }
    for (u, v) in [(0, 1), (0, 3), (1, 3), (2, 0), (2, 4)] {
        assert!(g.add_edge(&u, &v, DEFAULT_WEIGHT, DEFAULT_TYPE, false));
    }

    assert_eq!(
        g.neighbourhood(&2, EdgeOrientation::Und).copied().collect_vec(),
        vec![0, 4]
    );
    assert_eq!(
        g.neighbourhood_weights(&2, EdgeOrientation::Und)
            .map(|(v, w)| (*v, w))
            .collect_vec(),
        vec![(0, 1.0), (4, 1.0)]
    );
}

#[test]
fn directed_weights_accumulate() {
    let mut g: WeightedDirectedGraph<u32> = Graph::new();
    g.add_edge(&0, &1, 2.0, DEFAULT_TYPE, true);
    g.add_edge(&1, &0, 3.0, DEFAULT_TYPE, true);

    let weights = g
        .neighbourhood_weights(&0, EdgeOrientation::Und)
        .map(|(v, w)| (*v, w))
        .collect_vec();
    assert!(weights.contains(&(1, 5.0)));
}

#[test]
fn ring_removal_remaps_ids() {
    let mut g: DirectedGraph<char> = Graph::new();
    for (u, v) in [('a', 'b'), ('b', 'c'), ('c', 'a')] {
        g.add_default_edge(&u, &v);
    }
    assert_eq!(g.number_of_edges(), 3);

    assert!(g.remove_node(&'b'));
    assert_eq!(g.number_of_edges(), 1);
    assert_eq!(g.index().all_ids(), 0..2);
    assert_eq!(g.index().object_to_idx(&'a'), Some(0));
    assert_eq!(g.index().object_to_idx(&'c'), Some(1));
    assert!(g.edge_store().contains_edge(1, 0));
    assert!(g.contains_edge(&'c', &'a'));
}

#[test]
fn undirected_self_loop_counts_once() {
    let mut g: WeightedUndirectedGraph<u32> = Graph::new();
    assert!(g.add_edge(&0, &0, 4.0, DEFAULT_TYPE, true));
    g.add_edge(&0, &1, 1.0, DEFAULT_TYPE, true);

    assert!(g.contains_edge(&0, &0));
    assert_eq!(g.edge_weight(&0, &0), 4.0);
    assert_eq!(g.number_of_edges(), 2);

    assert!(g.remove_node(&1));
    assert_eq!(g.number_of_edges(), 1);
    assert!(g.remove_node(&0));
    assert_eq!(g.number_of_edges(), 0);
}

#[test]
fn multigraph_keeps_parallel_edges() {
    let mut g: Multigraph<u32> = Multigraph::new(true);
    assert!(g.add_edge(&0, &1, 1.0, DEFAULT_TYPE, true));
    assert!(g.add_edge(&0, &1, 1.0, DEFAULT_TYPE, true));

    assert_eq!(g.num_parallel_edges(&0, &1), 2);
    assert_eq!(g.edge_weights(&0, &1), vec![1.0, 1.0]);
    assert_eq!(g.number_of_edges(), 2);
}

#[test]
fn runtime_selected_graph_behaves_like_static_one() {
    for kind in ["directed", "undirected", "directed-weighted", "undirected-weighted"] {
        let kind: GraphKind = kind.parse().unwrap();
        let mut g: DynGraph<&str> = GraphBuilder::new().kind(kind).build().unwrap();

        g.add_edge(&"x", &"y", 2.0, 3, true);
        g.add_edge(&"y", &"z", 4.0, 5, true);

        assert_eq!(g.is_directed(), kind.directed);
        assert_eq!(g.contains_edge(&"y", &"x"), !kind.directed);
        assert_eq!(g.edge_weight(&"y", &"z"), if kind.weighted { 4.0 } else { 1.0 });
        assert_eq!(g.edge_type(&"y", &"z"), 5);
        assert_eq!(g.degree(&"y", EdgeOrientation::Und), 2);

        let edges = g.edges().map(|(u, v, _, _)| (*u, *v)).collect_vec();
        assert_eq!(edges, vec![("x", "y"), ("y", "z")]);
    }
}
