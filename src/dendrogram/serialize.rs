use crate::core::float::AggloFloat;
use crate::dendrogram::DendrogramNode;

/// Serializes a dendrogram into the nested document format.
///
/// Each node becomes an object with three fields: `"n"` (canonical name),
/// `"d"` (merge distance, at most two fractional digits with trailing zeros
/// trimmed), and `"c"` (an empty array for a leaf, otherwise the two child
/// documents). Indentation is two spaces per nesting level.
pub fn to_document<F: AggloFloat>(node: &DendrogramNode<F>) -> String {
    let mut out = String::new();
    render(node, 0, &mut out);
    out
}

fn render<F: AggloFloat>(node: &DendrogramNode<F>, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);

    out.push_str(&indent);
    out.push_str("{\n");

    out.push_str(&indent);
    out.push_str("  \"n\": \"");
    out.push_str(&escape(&node.canonical_name()));
    out.push_str("\",\n");

    out.push_str(&indent);
    out.push_str("  \"d\": ");
    out.push_str(&format_distance(
        node.merge_distance().to_f64().unwrap_or(0.0),
    ));
    out.push_str(",\n");

    out.push_str(&indent);
    out.push_str("  \"c\": ");
    match node.children() {
        None => out.push_str("[]"),
        Some((left, right)) => {
            out.push_str("[\n");
            render(left, level + 2, out);
            out.push_str(",\n");
            render(right, level + 2, out);
            out.push('\n');
            out.push_str(&indent);
            out.push_str("  ]");
        }
    }

    out.push('\n');
    out.push_str(&indent);
    out.push('}');
}

/// Formats with up to two fractional digits, trailing zeros trimmed but at
/// least one digit kept: `0.0`, `4.0`, `7.25`.
pub(crate) fn format_distance(value: f64) -> String {
    let mut formatted = format!("{:.2}", value);
    if formatted.ends_with('0') && !formatted.ends_with(".0") {
        formatted.pop();
    }
    formatted
}

fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
