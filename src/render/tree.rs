//! Box-drawing tree rendering.

use crate::domain::{TreeNode, TREE_TITLE};
use indexmap::IndexMap;

/// Render the tree as lines of text, one node per line.
///
/// The first line is the fixed title. Entries keep their stored order; the
/// last entry at each level gets the `└── ` connector, the rest `├── `, and
/// directory recursion extends the prefix with `│   ` or blank padding
/// depending on whether more siblings follow.
pub fn render_tree(root: &TreeNode) -> Vec<String> {
    let mut lines = vec![TREE_TITLE.to_string()];
    if let TreeNode::Directory(children) = root {
        render_children(children, "", &mut lines);
    }
    lines
}

fn render_children(children: &IndexMap<String, TreeNode>, prefix: &str, lines: &mut Vec<String>) {
    let total = children.len();
    for (idx, (name, node)) in children.iter().enumerate() {
        let is_last = idx + 1 == total;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, connector, name));

        if let TreeNode::Directory(sub) = node {
            let extension = if is_last { "    " } else { "│   " };
            render_children(sub, &format!("{}{}", prefix, extension), lines);
        }
    }
}
