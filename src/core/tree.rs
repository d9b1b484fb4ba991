//! Lazily expanded folder tree for the sidebar.

use std::collections::{HashMap, HashSet};

use crate::models::FolderNode;

/// One visible row of the flattened tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub name: String,
    pub path: String,
    pub depth: usize,
    pub expanded: bool,
    pub loading: bool,
}

/// Expansion state and cached children per folder path.
///
/// Children are fetched the first time a folder is expanded and kept when it
/// collapses.
#[derive(Clone, Debug, Default)]
pub struct FolderTree {
    children: HashMap<String, Vec<FolderNode>>,
    expanded: HashSet<String>,
    loading: HashSet<String>,
}

impl FolderTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand or collapse `path`.
    ///
    /// Returns the path to fetch when expanding a folder whose children are
    /// not known yet.
    pub fn toggle(&mut self, path: &str) -> Option<String> {
        if self.expanded.remove(path) {
            return None;
        }
        self.expanded.insert(path.to_string());
        if self.children.contains_key(path) || !self.loading.insert(path.to_string()) {
            return None;
        }
        Some(path.to_string())
    }

    /// Store a fetched subtree rooted at `path`.
    pub fn insert(&mut self, path: &str, node: FolderNode) {
        self.loading.remove(path);
        self.cache(path.to_string(), node.children.unwrap_or_default());
    }

    fn cache(&mut self, path: String, nodes: Vec<FolderNode>) {
        let mut shallow = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(grandchildren) = node.children {
                self.cache(node.path.clone(), grandchildren);
            }
            shallow.push(FolderNode::leaf(&node.name, &node.path));
        }
        self.children.insert(path, shallow);
    }

    /// Give up on a failed fetch; the folder collapses and can be retried.
    pub fn fail(&mut self, path: &str) {
        self.loading.remove(path);
        self.expanded.remove(path);
    }

    #[cfg(test)]
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Rows to render for the given root folders, depth-first.
    pub fn rows(&self, roots: &[String]) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for root in roots {
            self.push_rows(root, root, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, name: &str, path: &str, depth: usize, rows: &mut Vec<TreeRow>) {
        let expanded = self.expanded.contains(path);
        rows.push(TreeRow {
            name: name.to_string(),
            path: path.to_string(),
            depth,
            expanded,
            loading: self.loading.contains(path),
        });
        if !expanded {
            return;
        }
        if let Some(children) = self.children.get(path) {
            for child in children {
                self.push_rows(&child.name, &child.path, depth + 1, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtree() -> FolderNode {
        FolderNode {
            name: "C:".to_string(),
            path: "C:".to_string(),
            children: Some(vec![
                FolderNode {
                    name: "Users".to_string(),
                    path: "C:/Users".to_string(),
                    children: Some(vec![FolderNode::leaf("me", "C:/Users/me")]),
                },
                FolderNode::leaf("Windows", "C:/Windows"),
            ]),
        }
    }

    #[test]
    fn test_first_expand_requests_fetch() {
        let mut tree = FolderTree::new();
        assert_eq!(tree.toggle("C:"), Some("C:".to_string()));
        assert!(tree.rows(&["C:".to_string()])[0].loading);
        tree.insert("C:", subtree());

        // Collapse then expand again: cached, no fetch
        assert_eq!(tree.toggle("C:"), None);
        assert_eq!(tree.toggle("C:"), None);
        assert!(tree.is_expanded("C:"));
    }

    #[test]
    fn test_rows_follow_expansion() {
        let mut tree = FolderTree::new();
        tree.toggle("C:");
        tree.insert("C:", subtree());
        let roots = vec!["C:".to_string()];

        let names: Vec<_> = tree.rows(&roots).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["C:", "Users", "Windows"]);

        // Grandchildren arrived with the subtree, so expanding needs no fetch
        assert_eq!(tree.toggle("C:/Users"), None);
        let rows = tree.rows(&roots);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].name, "me");
        assert_eq!(rows[2].depth, 2);
    }

    #[test]
    fn test_failed_fetch_collapses() {
        let mut tree = FolderTree::new();
        tree.toggle("D:");
        tree.fail("D:");
        assert!(!tree.is_expanded("D:"));
        assert_eq!(tree.toggle("D:"), Some("D:".to_string()));
    }
}
