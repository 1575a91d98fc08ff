//! Tree builder
//!
//! Assembles the forest for one menu from its flat record set: index by
//! id, assign parents, sort siblings, stamp depths. Operates purely on
//! the sequence given - no retrieval happens here and the input is never
//! mutated.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::entities::{Forest, Node, NodeId};
use crate::models::{ItemId, MenuItemRecord};

/// Build result: the forest plus non-fatal policy warnings
#[derive(Debug, Clone)]
pub struct TreeBuild {
    pub forest: Forest,
    pub warnings: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeBuildError {
    #[error("duplicate menu item id {id} in input set")]
    DuplicateId { id: ItemId },

    #[error("cyclic parent chain involving menu item {id}")]
    CycleDetected { id: ItemId },
}

/// Assemble the forest for one menu.
///
/// The input must already be restricted to a single menu. A `parent_id`
/// that does not resolve within the set roots the record and records a
/// warning; duplicate ids and parent cycles fail the whole build, so a
/// partial tree is never returned.
pub fn build(records: Vec<MenuItemRecord>) -> Result<TreeBuild, TreeBuildError> {
    let mut index: HashMap<ItemId, usize> = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if index.insert(record.id, position).is_some() {
            return Err(TreeBuildError::DuplicateId { id: record.id });
        }
    }

    detect_cycles(&records, &index)?;

    let mut warnings = Vec::new();
    let mut parents: Vec<Option<usize>> = vec![None; records.len()];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (position, record) in records.iter().enumerate() {
        match record.parent_id {
            Some(parent_id) => match index.get(&parent_id) {
                Some(&parent_position) => {
                    parents[position] = Some(parent_position);
                    children[parent_position].push(position);
                }
                None => {
                    // Tolerance policy: a parent outside this set roots the record.
                    warnings.push(format!(
                        "menu item {} ('{}') references parent {} outside this menu; \
                         treating it as a root item",
                        record.id, record.title, parent_id
                    ));
                    roots.push(position);
                }
            },
            None => roots.push(position),
        }
    }

    // Stable sort: equal keys keep their input order.
    roots.sort_by(|a, b| records[*a].order.cmp(&records[*b].order));
    for list in &mut children {
        list.sort_by(|a, b| records[*a].order.cmp(&records[*b].order));
    }

    let mut depths = vec![0usize; records.len()];
    let mut queue: VecDeque<usize> = roots.iter().copied().collect();
    while let Some(position) = queue.pop_front() {
        for &child in &children[position] {
            depths[child] = depths[position] + 1;
            queue.push_back(child);
        }
    }

    let nodes: Vec<Node> = records
        .into_iter()
        .enumerate()
        .map(|(position, record)| Node {
            record,
            parent: parents[position].map(NodeId),
            children: std::mem::take(&mut children[position])
                .into_iter()
                .map(NodeId)
                .collect(),
            depth: depths[position],
        })
        .collect();

    Ok(TreeBuild {
        forest: Forest::new(nodes, roots.into_iter().map(NodeId).collect()),
        warnings,
    })
}

/// Walk every record's parent chain with a per-walk visiting set so a
/// cyclic chain fails fast instead of recursing unbounded.
fn detect_cycles(
    records: &[MenuItemRecord],
    index: &HashMap<ItemId, usize>,
) -> Result<(), TreeBuildError> {
    for record in records {
        let mut visiting: HashSet<ItemId> = HashSet::new();
        visiting.insert(record.id);

        let mut next = record.parent_id;
        while let Some(parent_id) = next {
            let Some(&position) = index.get(&parent_id) else {
                // Dangling parents terminate the chain.
                break;
            };
            if !visiting.insert(parent_id) {
                return Err(TreeBuildError::CycleDetected { id: record.id });
            }
            next = records[position].parent_id;
        }
    }
    Ok(())
}
