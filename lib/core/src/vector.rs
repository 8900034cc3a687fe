use serde::{Deserialize, Serialize};

/// A sparse vector over a shared vocabulary
///
/// `indices` are strictly increasing; `values[i]` is the weight at `indices[i]`.
/// Absent indices are zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Build from `(index, weight)` pairs in any order.
    /// Zero weights are dropped; repeated indices are summed.
    #[must_use]
    pub fn from_pairs(mut pairs: Vec<(u32, f32)>) -> Self {
        pairs.sort_by_key(|(index, _)| *index);

        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f32> = Vec::with_capacity(pairs.len());
        for (index, value) in pairs {
            if indices.last() == Some(&index) {
                if let Some(last) = values.last_mut() {
                    *last += value;
                }
            } else {
                indices.push(index);
                values.push(value);
            }
        }

        let mut v = Self { indices, values };
        v.prune_zeros();
        v
    }

    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of non-zero entries
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Weight at `index`, zero when absent
    pub fn get(&self, index: u32) -> f32 {
        self.indices
            .binary_search(&index)
            .map(|pos| self.values[pos])
            .unwrap_or(0.0)
    }

    /// Dot product by merging the two sorted index lists
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Cosine similarity; 0.0 when either vector is all-zero, never above 1.0
    pub fn cosine_similarity(&self, other: &SparseVector) -> f32 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        // f32 rounding can push parallel vectors just past 1.0
        (self.dot(other) / (norm_a * norm_b)).min(1.0)
    }

    /// Scale to unit length; all-zero vectors are left as is
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for x in &mut self.values {
                *x *= inv_norm;
            }
        }
    }

    fn prune_zeros(&mut self) {
        if self.values.iter().all(|v| *v != 0.0) {
            return;
        }
        let (indices, values): (Vec<u32>, Vec<f32>) = self
            .iter()
            .filter(|(_, value)| *value != 0.0)
            .unzip();
        self.indices = indices;
        self.values = values;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_sorts_and_merges() {
        let v = SparseVector::from_pairs(vec![(5, 1.0), (1, 2.0), (5, 0.5), (3, 0.0)]);
        assert_eq!(v.indices(), &[1, 5]);
        assert_eq!(v.values(), &[2.0, 1.5]);
        assert_eq!(v.get(3), 0.0);
    }

    #[test]
    fn test_dot_only_counts_shared_indices() {
        let a = SparseVector::from_pairs(vec![(0, 1.0), (2, 3.0)]);
        let b = SparseVector::from_pairs(vec![(1, 4.0), (2, 2.0)]);
        assert!((a.dot(&b) - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity() {
        let a = SparseVector::from_pairs(vec![(0, 1.0)]);
        let b = SparseVector::from_pairs(vec![(0, 3.0)]);
        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-6);

        let c = SparseVector::from_pairs(vec![(1, 1.0)]);
        assert_eq!(a.cosine_similarity(&c), 0.0);
    }

    #[test]
    fn test_cosine_with_zero_vector() {
        let a = SparseVector::from_pairs(vec![(0, 1.0)]);
        assert_eq!(a.cosine_similarity(&SparseVector::empty()), 0.0);
        assert_eq!(SparseVector::empty().cosine_similarity(&SparseVector::empty()), 0.0);
    }

    #[test]
    fn test_self_similarity_never_exceeds_one() {
        for values in [
            vec![0.1f32, 0.2, 0.3, 0.7],
            vec![1.287_682, 1.287_682],
            vec![0.577_350_3, 0.577_350_3, 0.577_350_3],
            vec![1.693_147, 2.012_186, 1.451_985],
        ] {
            let pairs = values
                .into_iter()
                .enumerate()
                .map(|(i, x)| (i as u32, x))
                .collect();
            let mut v = SparseVector::from_pairs(pairs);
            v.normalize();
            let sim = v.cosine_similarity(&v.clone());
            assert!(sim <= 1.0, "{sim}");
            assert!((sim - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_normalize() {
        let mut v = SparseVector::from_pairs(vec![(0, 3.0), (7, 4.0)]);
        v.normalize();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert!((v.get(7) - 0.8).abs() < 1e-6);
    }
}
