#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use agglo::clustering::{cluster, ClusterResult, Linkage};
    use agglo::distances::{
        CosineDistance, DistanceMatrixBuilder, EuclideanDistance, LabeledVector,
    };

    fn reference_points() -> Vec<LabeledVector<f64>> {
        vec![
            LabeledVector::from_slice("A", &[0.0]),
            LabeledVector::from_slice("B", &[1.0]),
            LabeledVector::from_slice("C", &[5.0]),
            LabeledVector::from_slice("D", &[6.0]),
        ]
    }

    fn assert_tree_invariants(result: &ClusterResult<f64>, n: usize) {
        assert!(result.is_complete());
        let root = result.root().unwrap();
        assert_eq!(root.leaf_count(), n);
        assert_eq!(root.node_count(), 2 * n - 1);
        assert_eq!(result.stats.merge_count(), n - 1);

        // Leaf labels are globally unique.
        let labels: Vec<&str> = root.leaf_labels().collect();
        let unique: BTreeSet<&str> = labels.iter().copied().collect();
        assert_eq!(labels.len(), unique.len());
    }

    #[test]
    fn test_reference_scenario() {
        let vectors = reference_points();
        let result = cluster(&vectors, Arc::new(EuclideanDistance), Linkage::Single).unwrap();

        assert_tree_invariants(&result, 4);
        assert_eq!(result.stats.distances(), &[1.0, 1.0, 4.0]);
        assert_eq!(result.stats.min(), Some(1.0));
        assert_eq!(result.stats.max(), Some(4.0));
        assert_eq!(result.stats.mean(), Some(2.0));
    }

    #[test]
    fn test_all_linkages_produce_valid_trees() {
        let vectors = reference_points();
        for linkage in [
            Linkage::Single,
            Linkage::Complete,
            Linkage::Average,
            Linkage::Centroid,
        ] {
            let result = cluster(&vectors, Arc::new(EuclideanDistance), linkage).unwrap();
            assert_tree_invariants(&result, 4);
        }
    }

    #[test]
    fn test_children_partition_leaf_set() {
        let vectors = reference_points();
        let result = cluster(&vectors, Arc::new(EuclideanDistance), Linkage::Average).unwrap();
        let root = result.root().unwrap();

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if let Some((left, right)) = node.children() {
                let left_set: BTreeSet<&str> = left.leaf_labels().collect();
                let right_set: BTreeSet<&str> = right.leaf_labels().collect();
                assert!(left_set.is_disjoint(&right_set));
                let union: BTreeSet<&str> = left_set.union(&right_set).copied().collect();
                let own: BTreeSet<&str> = node.leaf_labels().collect();
                assert_eq!(union, own);
                stack.push(left);
                stack.push(right);
            }
        }
    }

    #[test]
    fn test_matrix_symmetry_and_zero_diagonal() {
        let vectors = reference_points();
        let matrix = DistanceMatrixBuilder::new(Arc::new(EuclideanDistance))
            .build(&vectors)
            .unwrap();

        assert!(matrix.is_symmetric());
        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_two_dimensional_cosine_run() {
        let vectors = vec![
            LabeledVector::from_slice("right", &[1.0, 0.0]),
            LabeledVector::from_slice("right2", &[2.0, 0.0]),
            LabeledVector::from_slice("up", &[0.0, 1.0]),
        ];
        let result = cluster(&vectors, Arc::new(CosineDistance), Linkage::Complete).unwrap();

        assert_tree_invariants(&result, 3);
        // The two collinear vectors merge first at distance 0.
        assert_eq!(result.stats.distances()[0], 0.0);
    }

    #[test]
    fn test_centroid_linkage_inversion_is_preserved() {
        // An equilateral-ish configuration where centroid linkage produces a
        // merge distance below the previous one.
        let vectors = vec![
            LabeledVector::from_slice("A", &[0.0, 0.0]),
            LabeledVector::from_slice("B", &[1.0, 0.0]),
            LabeledVector::from_slice("C", &[0.5, 0.866]),
        ];
        let result = cluster(&vectors, Arc::new(EuclideanDistance), Linkage::Centroid).unwrap();

        assert_tree_invariants(&result, 3);
        let distances = result.stats.distances();
        assert!(
            distances[1] < distances[0],
            "expected an inversion, got {:?}",
            distances
        );
    }
}
