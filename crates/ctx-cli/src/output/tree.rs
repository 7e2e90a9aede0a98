//! Selected-file tree for console feedback.

use std::path::MAIN_SEPARATOR;

#[derive(Default)]
struct Node {
    children: Vec<(String, Node)>,
}

impl Node {
    fn child(&mut self, name: &str) -> &mut Self {
        let index = match self.children.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.children.push((name.to_string(), Self::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }
}

/// Render `paths` as a box-drawing tree, one line per node.
///
/// Paths are sorted first; siblings keep the order in which they are first
/// seen, so directories and files interleave by full-path order.
#[must_use]
pub fn render(paths: &[String]) -> String {
    let mut sorted: Vec<&str> = paths.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut root = Node::default();
    for path in sorted {
        let mut node = &mut root;
        for segment in path.split(MAIN_SEPARATOR) {
            node = node.child(segment);
        }
    }

    let mut lines = Vec::new();
    render_children(&root, "", &mut lines);
    lines.join("\n")
}

fn render_children(node: &Node, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (index, (name, child)) in node.children.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{name}"));

        if !child.children.is_empty() {
            let extension = if is_last { "    " } else { "│   " };
            render_children(child, &format!("{prefix}{extension}"), lines);
        }
    }
}
