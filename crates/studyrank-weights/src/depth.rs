//! Longest-chain depth resolution over the prerequisite graph.
//!
//! The graph may contain cycles and references to ids that do not exist in
//! the subject; both are tolerated rather than rejected.

use std::collections::HashMap;

use studyrank_core::plan::{Subtopic, SubtopicId};

/// Traversal state per node.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Compute the longest resolvable prerequisite chain below each subtopic.
///
/// Depth is 0 for a subtopic with no prerequisites, otherwise
/// `1 + max(prerequisite depths)`. A prerequisite id not present in the
/// subject contributes nothing. A node reached while already on the active
/// traversal path is a cycle member: it is pinned to depth 0 and the
/// back-edge contributes nothing, which breaks the cycle deterministically
/// and bounds the traversal by the subtopic count.
///
/// The returned map is total: every input id receives exactly one depth.
pub fn resolve_depths(subtopics: &[Subtopic]) -> HashMap<SubtopicId, u32> {
    let index: HashMap<&SubtopicId, usize> = subtopics
        .iter()
        .enumerate()
        .map(|(i, st)| (&st.id, i))
        .collect();

    // Adjacency restricted to ids that actually exist in this subject.
    let adjacency: Vec<Vec<usize>> = subtopics
        .iter()
        .map(|st| {
            st.prerequisites
                .iter()
                .filter_map(|p| index.get(p).copied())
                .collect()
        })
        .collect();

    let mut resolver = Resolver {
        adjacency,
        marks: vec![Mark::Unvisited; subtopics.len()],
        depths: vec![None; subtopics.len()],
    };

    for node in 0..subtopics.len() {
        resolver.visit(node);
    }

    subtopics
        .iter()
        .enumerate()
        .map(|(i, st)| (st.id.clone(), resolver.depths[i].unwrap_or(0)))
        .collect()
}

struct Resolver {
    adjacency: Vec<Vec<usize>>,
    marks: Vec<Mark>,
    depths: Vec<Option<u32>>,
}

impl Resolver {
    fn visit(&mut self, node: usize) -> u32 {
        if let Some(depth) = self.depths[node] {
            return depth;
        }
        self.marks[node] = Mark::InProgress;

        let prerequisites = self.adjacency[node].clone();
        let mut deepest: Option<u32> = None;
        for prereq in prerequisites {
            if self.marks[prereq] == Mark::InProgress {
                // Cycle member: pin it to depth 0 and skip the back-edge,
                // same treatment as an unresolvable reference.
                self.depths[prereq] = Some(0);
            } else {
                let d = self.visit(prereq);
                deepest = Some(deepest.map_or(d, |m| m.max(d)));
            }
        }

        let computed = match deepest {
            Some(m) => m + 1,
            None => 0,
        };

        // A node pinned mid-traversal keeps its pinned depth.
        let depth = *self.depths[node].get_or_insert(computed);
        self.marks[node] = Mark::Done;
        depth
    }
}
