use ndarray::{concatenate, Array1, Array2, ArrayView2, Axis};
use rand::{seq::SliceRandom, Rng};

use crate::data::DataError;

/// Feature rows paired with 0/1 labels. Row `i` of `features`
/// belongs to `labels[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    labels:   Array1<f64>,
}

impl Dataset {
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> Result<Self, DataError> {
        if features.nrows() != labels.len() {
            return Err(DataError::SizeMismatch {
                features: features.nrows(),
                labels:   labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    /// Stack positive rows (label 1) on top of negative rows (label 0).
    ///
    /// Panics if the two pools have different widths.
    pub fn from_classes<'a>(pos: ArrayView2<'a, f64>, neg: ArrayView2<'a, f64>) -> Self {
        let features = concatenate(Axis(0), &[pos, neg])
            .expect("positive and negative pools must share a feature width");
        let labels = Array1::from_iter(
            std::iter::repeat(1.0)
                .take(pos.nrows())
                .chain(std::iter::repeat(0.0).take(neg.nrows())),
        );
        Self { features, labels }
    }

    /// Reorder rows and labels with one shared random permutation.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(rng);
        self.select(&order)
    }

    /// Rows at `indices`, in that order, with their labels.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), indices),
            labels:   self.labels.select(Axis(0), indices),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature width K
    pub fn dim(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn labels(&self) -> &Array1<f64> {
        &self.labels
    }

    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&y| y == 1.0).count()
    }

    pub fn negatives(&self) -> usize {
        self.labels.iter().filter(|&&y| y == 0.0).count()
    }

    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.features, self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_rejects_mismatched_lengths() {
        let err = Dataset::new(Array2::zeros((3, 2)), Array1::zeros(2)).unwrap_err();
        assert_eq!(err, DataError::SizeMismatch { features: 3, labels: 2 });
    }

    #[test]
    fn test_from_classes_labels() {
        let pos = array![[1.0, 1.0], [1.0, 0.0]];
        let neg = array![[0.0, 0.0]];
        let ds = Dataset::from_classes(pos.view(), neg.view());
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.labels().to_vec(), vec![1.0, 1.0, 0.0]);
        assert_eq!(ds.positives(), 2);
        assert_eq!(ds.negatives(), 1);
    }

    #[test]
    fn test_from_classes_with_sliced_views() {
        let pool = Array2::from_shape_fn((5, 3), |(i, _)| i as f64);
        let (top, rest) = pool.view().split_at(Axis(0), 2);
        let other = Array2::<f64>::zeros((1, 3));
        let ds = Dataset::from_classes(top, other.view());
        assert_eq!(ds.features().nrows(), 3);
        assert_eq!(ds.labels().to_vec(), vec![1.0, 1.0, 0.0]);

        let ds = Dataset::from_classes(rest, top);
        assert_eq!(ds.positives(), 3);
        assert_eq!(ds.features()[[3, 0]], 0.0);
    }

    #[test]
    fn test_shuffle_keeps_pairs_together() {
        // column 0 encodes the label, column 1 a unique id
        let features = Array2::from_shape_fn((20, 2), |(i, j)| {
            if j == 0 { (i % 2) as f64 } else { i as f64 }
        });
        let labels = Array1::from_shape_fn(20, |i| (i % 2) as f64);
        let ds = Dataset::new(features, labels).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = ds.shuffled(&mut rng);

        assert_eq!(shuffled.len(), 20);
        for (row, &y) in shuffled.features().rows().into_iter().zip(shuffled.labels()) {
            assert_eq!(row[0], y);
        }
        let mut ids: Vec<f64> = shuffled.features().column(1).to_vec();
        ids.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(ids, (0..20).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_order() {
        let ds = Dataset::new(
            Array2::from_shape_fn((10, 1), |(i, _)| i as f64),
            Array1::zeros(10),
        )
        .unwrap();
        let a = ds.shuffled(&mut StdRng::seed_from_u64(42));
        let b = ds.shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
