use crate::graph_exploration::domain::DependencyGraph;
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use std::collections::HashMap;

const WIDTH: i64 = 800;
const HEIGHT: i64 = 600;
const BOX_WIDTH: i64 = 140;
const BOX_HEIGHT: i64 = 28;
const MARGIN: i64 = 40;
const COLUMNS: i64 = 5;
const COLUMN_GAP: i64 = 50;
const ROW_GAP: i64 = 40;
const MAX_LABEL_CHARS: usize = 20;

/// SvgRenderer producing a self-contained SVG document
///
/// Nodes are laid out on a fixed grid of five columns; edges run from the
/// bottom center of the parent box to the top center of the dependency box.
/// Long names are truncated in the label, never in the graph itself.
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let head: String = name.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}…", head)
    } else {
        name.to_string()
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl GraphRenderer for SvgRenderer {
    fn render(&self, graph: &DependencyGraph) -> Result<String> {
        let root = graph.root();
        let mut nodes: Vec<&str> = if graph.packages().is_empty() {
            vec![root]
        } else {
            graph.packages().keys().map(String::as_str).collect()
        };
        if !root.is_empty() && !nodes.contains(&root) {
            nodes.insert(0, root);
        }

        let mut placed: Vec<(&str, i64, i64)> = Vec::new();
        let mut positions: HashMap<&str, (i64, i64)> = HashMap::new();
        for (i, node) in nodes.iter().enumerate() {
            let index = i as i64;
            let x = MARGIN + (index % COLUMNS) * (BOX_WIDTH + COLUMN_GAP);
            let y = MARGIN + (index / COLUMNS) * (BOX_HEIGHT + ROW_GAP);
            placed.push((node, x, y));
            positions.insert(node, (x, y));
        }

        let mut lines = vec![
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string(),
            format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\">",
                WIDTH, HEIGHT, WIDTH, HEIGHT
            ),
            "<defs><style>.node { fill: #e1f5fe; stroke: #01579b; } .edge { stroke: #37474f; fill: none; } .label { font: 12px sans-serif; }</style></defs>".to_string(),
        ];

        for (package, dependencies) in graph.packages() {
            for dependency in dependencies {
                let (Some(&(x1, y1)), Some(&(x2, y2))) = (
                    positions.get(package.as_str()),
                    positions.get(dependency.as_str()),
                ) else {
                    continue;
                };
                lines.push(format!(
                    "  <line class=\"edge\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
                    x1 + BOX_WIDTH / 2,
                    y1 + BOX_HEIGHT,
                    x2 + BOX_WIDTH / 2,
                    y2
                ));
            }
        }

        for (node, x, y) in placed {
            let label = truncate_label(node);
            lines.push(format!(
                "  <rect class=\"node\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"4\"/>",
                x, y, BOX_WIDTH, BOX_HEIGHT
            ));
            lines.push(format!(
                "  <text class=\"label\" x=\"{}\" y=\"{}\">{}</text>",
                x + 5,
                y + 18,
                escape_xml(&label)
            ));
        }

        lines.push("</svg>".to_string());
        Ok(lines.join("\n"))
    }
}
