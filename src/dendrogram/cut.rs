use crate::core::float::AggloFloat;
use crate::dendrogram::DendrogramNode;
use crate::error::{AggloError, Result};

/// Cuts the tree into `k` clusters by repeatedly splitting the frontier
/// member with the largest merge distance (ties broken by first-found).
///
/// Errors if `k < 1` or `k` exceeds the leaf count. If the widest frontier
/// member is a leaf the loop stops early and fewer than `k` clusters are
/// returned.
pub fn cut_to_k<F: AggloFloat>(
    root: &DendrogramNode<F>,
    k: usize,
) -> Result<Vec<&DendrogramNode<F>>> {
    let leaves = root.leaf_count();
    if k < 1 || k > leaves {
        return Err(AggloError::InvalidClusterCount {
            requested: k,
            leaves,
        });
    }
    if k == 1 {
        return Ok(vec![root]);
    }

    let mut frontier = vec![root];
    while frontier.len() < k {
        let widest = widest_member(&frontier);
        match frontier[widest].children() {
            None => break,
            Some((left, right)) => {
                frontier.remove(widest);
                frontier.push(left);
                frontier.push(right);
            }
        }
    }
    Ok(frontier)
}

fn widest_member<F: AggloFloat>(frontier: &[&DendrogramNode<F>]) -> usize {
    let mut best = 0;
    for (idx, node) in frontier.iter().enumerate().skip(1) {
        if node.merge_distance() > frontier[best].merge_distance() {
            best = idx;
        }
    }
    best
}

/// Cuts the tree at a distance threshold: every maximal subtree whose merge
/// distance is at most `threshold` becomes one cluster. Leaves have merge
/// distance zero, so they always pass. Negative thresholds are rejected.
pub fn cut_by_distance<F: AggloFloat>(
    root: &DendrogramNode<F>,
    threshold: F,
) -> Result<Vec<&DendrogramNode<F>>> {
    if threshold < F::zero() {
        return Err(AggloError::NegativeThreshold(
            threshold.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let mut clusters = Vec::new();
    collect_below(root, threshold, &mut clusters);
    Ok(clusters)
}

fn collect_below<'a, F: AggloFloat>(
    node: &'a DendrogramNode<F>,
    threshold: F,
    clusters: &mut Vec<&'a DendrogramNode<F>>,
) {
    match node.children() {
        Some((left, right)) if node.merge_distance() > threshold => {
            collect_below(left, threshold, clusters);
            collect_below(right, threshold, clusters);
        }
        _ => clusters.push(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DendrogramNode<f64> {
        let ab = DendrogramNode::internal(DendrogramNode::leaf("A"), DendrogramNode::leaf("B"), 1.0);
        let cd = DendrogramNode::internal(DendrogramNode::leaf("C"), DendrogramNode::leaf("D"), 1.0);
        DendrogramNode::internal(ab, cd, 4.0)
    }

    #[test]
    fn test_cut_to_one_is_root() {
        let root = sample_tree();
        let clusters = cut_to_k(&root, 1).unwrap();
        assert_eq!(clusters.len(), 1);
        assert!(std::ptr::eq(clusters[0], &root));
    }

    #[test]
    fn test_cut_to_two_splits_widest() {
        let root = sample_tree();
        let clusters = cut_to_k(&root, 2).unwrap();
        let names: Vec<String> = clusters.iter().map(|c| c.canonical_name()).collect();
        assert_eq!(names, vec!["(A;B)", "(C;D)"]);
    }

    #[test]
    fn test_cut_to_leaf_count_yields_leaves() {
        let root = sample_tree();
        let clusters = cut_to_k(&root, 4).unwrap();
        assert_eq!(clusters.len(), 4);
        assert!(clusters.iter().all(|c| c.is_leaf()));
    }

    #[test]
    fn test_cut_to_k_rejects_out_of_range() {
        let root = sample_tree();
        assert!(matches!(
            cut_to_k(&root, 0),
            Err(AggloError::InvalidClusterCount {
                requested: 0,
                leaves: 4
            })
        ));
        assert!(matches!(
            cut_to_k(&root, 5),
            Err(AggloError::InvalidClusterCount {
                requested: 5,
                leaves: 4
            })
        ));
    }

    #[test]
    fn test_cut_by_distance_threshold() {
        let root = sample_tree();

        let clusters = cut_by_distance(&root, 2.0).unwrap();
        let names: Vec<String> = clusters.iter().map(|c| c.canonical_name()).collect();
        assert_eq!(names, vec!["(A;B)", "(C;D)"]);

        let all = cut_by_distance(&root, f64::INFINITY).unwrap();
        assert_eq!(all.len(), 1);
        assert!(std::ptr::eq(all[0], &root));

        let leaves = cut_by_distance(&root, 0.5).unwrap();
        assert_eq!(leaves.len(), 4);
    }

    #[test]
    fn test_cut_by_distance_rejects_negative() {
        let root = sample_tree();
        assert!(matches!(
            cut_by_distance(&root, -1e-9),
            Err(AggloError::NegativeThreshold(_))
        ));
    }
}
