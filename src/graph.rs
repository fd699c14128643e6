use itertools::Itertools;
use petgraph::algo::astar;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;
use varisat::Lit;

/// A candidate edge between two lattice points, part of the solution graph exactly when its
/// gate literal is true.
#[derive(Copy, Clone)]
pub(crate) struct GatedEdge {
    pub(crate) endpoints: UnorderedPair<usize>,
    pub(crate) gate: Lit,
}

impl GatedEdge {
    fn is_active(&self, model: &[Lit]) -> bool {
        model
            .get(self.gate.var().index())
            .is_some_and(|lit| lit.is_positive() == self.gate.is_positive())
    }
}

/// Keeps the subgraph of active gated edges acyclic, by refutation: each satisfying assignment
/// proposed by the engine is scanned for cycles, and any cycle found is ruled out with a
/// blocking clause before the engine is asked for another assignment.
pub(crate) struct AcyclicEdges {
    edges: Vec<GatedEdge>,
}

impl From<Vec<GatedEdge>> for AcyclicEdges {
    fn from(edges: Vec<GatedEdge>) -> Self {
        Self { edges }
    }
}

impl AcyclicEdges {
    /// Scan `model` for a cycle among active edges.
    ///
    /// Returns a clause forcing at least one gate on some cycle false, or `None` if the active
    /// subgraph is a forest.
    pub(crate) fn find_violation(&self, model: &[Lit]) -> Option<Vec<Lit>> {
        let mut active: UnGraphMap<usize, Lit> = UnGraphMap::new();

        for edge in self.edges.iter().filter(|edge| edge.is_active(model)) {
            let UnorderedPair(a, b) = edge.endpoints;

            if active.contains_node(a) && active.contains_node(b) {
                // an existing path between the endpoints means this edge closes a cycle
                if let Some((_, path)) = astar(&active, a, |node| node == b, |_| 1usize, |_| 0) {
                    let mut clause = path
                        .into_iter()
                        .tuple_windows()
                        .map(|(from, to)| !*active.edge_weight(from, to).unwrap())
                        .collect_vec();
                    clause.push(!edge.gate);

                    return Some(clause);
                }
            }

            active.add_edge(a, b, edge.gate);
        }

        None
    }
}
