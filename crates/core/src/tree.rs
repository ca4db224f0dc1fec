//! Subtree reconstruction over parent references.
//!
//! Parent links point at a topic id, not a version, so every node is
//! expanded with the current version of its children at the moment that node
//! is visited. No snapshot is taken across the traversal.

use crate::error::CoreError;
use crate::store::TopicStore;
use crate::topic::Topic;

/// Materialize `root` and all of its descendants into nested `subtopics`.
///
/// Traversal uses an explicit work stack, so depth is bounded only by memory.
/// Children keep the order returned by the store. Any storage error aborts
/// the whole assembly; no partial tree is returned.
pub async fn assemble_subtree<S>(store: &S, root: Topic) -> Result<Topic, CoreError>
where
    S: TopicStore + ?Sized,
{
    // Arena of visited nodes; a child's index is always greater than its
    // parent's, which the bottom-up pass below relies on.
    let mut nodes: Vec<Option<Topic>> = vec![Some(root)];
    let mut children: Vec<Vec<usize>> = vec![Vec::new()];
    let mut stack: Vec<usize> = vec![0];

    while let Some(idx) = stack.pop() {
        let parent_id = match nodes[idx].as_ref() {
            Some(node) => node.id.clone(),
            None => continue,
        };
        let found = store.find_children(&parent_id).await?;
        for child in found {
            let child_idx = nodes.len();
            nodes.push(Some(child));
            children.push(Vec::new());
            children[idx].push(child_idx);
            stack.push(child_idx);
        }
    }

    tracing::debug!(nodes = nodes.len(), "Assembled topic subtree");

    for idx in (0..nodes.len()).rev() {
        let subtopics: Vec<Topic> = children[idx]
            .iter()
            .filter_map(|&child_idx| nodes[child_idx].take())
            .collect();
        if let Some(node) = nodes[idx].as_mut() {
            node.subtopics = subtopics;
        }
    }

    nodes
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| CoreError::Internal("Subtree assembly lost its root".into()))
}
