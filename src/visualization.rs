use crate::clustering::ClusterResult;
use crate::core::float::AggloFloat;
use crate::dendrogram::DendrogramNode;
use colored::Colorize;

/// Prints a console summary of a clustering run: merge statistics plus the
/// shape of the resulting tree (or partial roster).
pub fn print_cluster_analysis<F: AggloFloat>(result: &ClusterResult<F>) {
    println!("\n{}", "=== Cluster Analysis ===".bold());

    println!("\n{}", "Summary Statistics:".bold());
    println!("Roots: {}", result.roots.len());
    if !result.is_complete() {
        println!("{}", "Run halted early: result is a partial roster".red());
    }

    let leaves: usize = result.roots.iter().map(|r| r.leaf_count()).sum();
    let nodes: usize = result.roots.iter().map(|r| r.node_count()).sum();
    let height = result.roots.iter().map(|r| r.height()).max().unwrap_or(0);
    println!("Total Leaves: {}", leaves);
    println!("Total Nodes: {}", nodes);
    println!("Tree Height: {}", height);

    println!("Merges: {}", result.stats.merge_count());
    if let (Some(min), Some(max), Some(mean)) =
        (result.stats.min(), result.stats.max(), result.stats.mean())
    {
        println!("Min Merge Distance: {:.6}", min.to_f64().unwrap_or(0.0));
        println!("Max Merge Distance: {:.6}", max.to_f64().unwrap_or(0.0));
        println!("Mean Merge Distance: {:.6}", mean.to_f64().unwrap_or(0.0));
    }
}

/// Renders the tree as indented text, one node per line:
/// `(A;B) [d=1.00]`.
pub fn render_tree<F: AggloFloat>(node: &DendrogramNode<F>) -> String {
    let mut out = String::new();
    render_level(node, 0, &mut out);
    out
}

fn render_level<F: AggloFloat>(node: &DendrogramNode<F>, level: usize, out: &mut String) {
    out.push_str(&"  ".repeat(level));
    out.push_str(&node.canonical_name());
    out.push_str(&format!(
        " [d={:.2}]\n",
        node.merge_distance().to_f64().unwrap_or(0.0)
    ));

    if let Some((left, right)) = node.children() {
        render_level(left, level + 1, out);
        render_level(right, level + 1, out);
    }
}

/// Prints a cut frontier with one colored line per cluster, flagging very
/// small and very large clusters.
pub fn print_cut_summary<F: AggloFloat>(clusters: &[&DendrogramNode<F>]) {
    println!("\n{}", "Cut Frontier:".bold());
    for (idx, cluster) in clusters.iter().enumerate() {
        let info = format!(
            "Cluster {}: {} leaves, {}",
            idx,
            cluster.leaf_count(),
            cluster.canonical_name()
        );
        match cluster.leaf_count() {
            size if size < 2 => println!("{}", info.red()),
            size if size > 15 => println!("{}", info.yellow()),
            _ => println!("{}", info.green()),
        }
    }
}
