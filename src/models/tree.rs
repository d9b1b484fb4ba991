use serde::{Deserialize, Serialize};

/// A folder in the sidebar tree, as returned by the folder tree endpoint.
///
/// `children` is `None` when the backend did not descend into the folder.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolderNode {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FolderNode>>,
}

impl FolderNode {
    pub fn leaf(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            children: None,
        }
    }
}
