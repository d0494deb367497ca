// ============================================================
// Layer 4: Mini-Batch Iterator
// ============================================================
// Cuts a feature matrix and its label vector into mini-batches
// for one training epoch.
//
// Each call to `epoch()`:
//   1. reshuffles a single index permutation shared by rows and
//      labels, so pairs stay together
//   2. returns a lazy iterator over (features, labels) batches
//      of `batch_size` rows; the last one is shorter when the
//      row count is not a multiple of the batch size
//
// Calling `epoch()` again starts over with a new order. The
// caller owns the generator: seed it for reproducible epochs
// or build it from entropy for a different order every run.

use ndarray::{Array1, Array2, Axis};
use rand::{seq::SliceRandom, Rng};

use crate::data::{dataset::Dataset, DataError};

/// One mini-batch: `features` has as many rows as `labels` has entries.
pub type Batch = (Array2<f64>, Array1<f64>);

pub struct BatchIterator<'a> {
    features:   &'a Array2<f64>,
    labels:     &'a Array1<f64>,
    batch_size: usize,
    order:      Vec<usize>,
}

impl<'a> BatchIterator<'a> {
    /// Fails with `SizeMismatch` when the row and label counts differ.
    pub fn new(
        features:   &'a Array2<f64>,
        labels:     &'a Array1<f64>,
        batch_size: usize,
    ) -> Result<Self, DataError> {
        if features.nrows() != labels.len() {
            return Err(DataError::SizeMismatch {
                features: features.nrows(),
                labels:   labels.len(),
            });
        }
        if batch_size == 0 {
            return Err(DataError::ZeroBatchSize);
        }
        Ok(Self {
            features,
            labels,
            batch_size,
            order: (0..labels.len()).collect(),
        })
    }

    /// Iterate a whole dataset; cannot fail the size check.
    pub fn over(dataset: &'a Dataset, batch_size: usize) -> Result<Self, DataError> {
        Self::new(dataset.features(), dataset.labels(), batch_size)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        self.len().div_ceil(self.batch_size)
    }

    /// Reshuffle and start a new pass over the data.
    pub fn epoch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Batches<'_> {
        self.order.shuffle(rng);
        Batches {
            features: self.features,
            labels:   self.labels,
            chunks:   self.order.chunks(self.batch_size),
        }
    }
}

/// Lazy batches of one epoch, produced by [`BatchIterator::epoch`].
pub struct Batches<'e> {
    features: &'e Array2<f64>,
    labels:   &'e Array1<f64>,
    chunks:   std::slice::Chunks<'e, usize>,
}

impl Iterator for Batches<'_> {
    type Item = Batch;

    fn next(&mut self) -> Option<Batch> {
        let idx = self.chunks.next()?;
        Some((
            self.features.select(Axis(0), idx),
            self.labels.select(Axis(0), idx),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}
