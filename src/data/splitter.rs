// ============================================================
// Layer 4: Train/Validation/Test Splitter
// ============================================================
// Builds the three labelled datasets from featurized class
// pools:
//
//   train/pos ─┐ shuffle, first train_size/2 → train
//              └─ remainder                  → validation
//   train/neg ─┐ shuffle, first train_size/2 → train
//              └─ remainder                  → validation
//   test/pos + test/neg                      → test
//
// Both classes contribute the same number of rows to the
// training set, so the training labels are half 1, half 0.
// Validation is balanced whenever the two pools are the same
// size (true for the IMDB corpus).
//
// Each combined split is then shuffled with a single shared
// permutation so rows and labels stay paired.
//
// All randomness comes from the generator the caller passes
// in. Seeding it with the same value reproduces the same
// split on every run.
//
// Reference: rand crate documentation (SliceRandom)

use ndarray::{Array2, Axis};
use rand::{seq::SliceRandom, Rng};

use crate::data::dataset::Dataset;

/// Shuffle rows of `pool` into a new matrix.
fn shuffle_rows<R: Rng + ?Sized>(pool: &Array2<f64>, rng: &mut R) -> Array2<f64> {
    let mut order: Vec<usize> = (0..pool.nrows()).collect();
    order.shuffle(rng);
    pool.select(Axis(0), &order)
}

/// Split the training pools into `(train, validation)`.
///
/// # Arguments
/// * `train_pos`  - featurized positive training reviews
/// * `train_neg`  - featurized negative training reviews
/// * `train_size` - total rows wanted in the training split
///                  (half from each class, clamped to the pool size)
/// * `rng`        - seeded generator controlling the shuffles
pub fn split_train_val<R: Rng + ?Sized>(
    train_pos:  &Array2<f64>,
    train_neg:  &Array2<f64>,
    train_size: usize,
    rng:        &mut R,
) -> (Dataset, Dataset) {
    let pos = shuffle_rows(train_pos, rng);
    let neg = shuffle_rows(train_neg, rng);

    let half = train_size / 2;
    let pos_cut = half.min(pos.nrows());
    let neg_cut = half.min(neg.nrows());
    if pos_cut < half || neg_cut < half {
        tracing::warn!(
            "Requested {} training rows per class but pools hold {} positive / {} negative",
            half,
            pos.nrows(),
            neg.nrows()
        );
    }

    let (pos_train, pos_val) = pos.view().split_at(Axis(0), pos_cut);
    let (neg_train, neg_val) = neg.view().split_at(Axis(0), neg_cut);

    let train = Dataset::from_classes(pos_train, neg_train).shuffled(rng);
    let val   = Dataset::from_classes(pos_val, neg_val).shuffled(rng);

    tracing::debug!(
        "Dataset split: {} training, {} validation",
        train.len(),
        val.len()
    );

    (train, val)
}

/// Combine the test pools into one shuffled, labelled dataset.
pub fn make_test<R: Rng + ?Sized>(
    test_pos: &Array2<f64>,
    test_neg: &Array2<f64>,
    rng:      &mut R,
) -> Dataset {
    Dataset::from_classes(test_pos.view(), test_neg.view()).shuffled(rng)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Pool of `n` rows; column 0 is the class marker, column 1 a unique id.
    fn pool(n: usize, class: f64, id_offset: usize) -> Array2<f64> {
        Array2::from_shape_fn((n, 2), |(i, j)| {
            if j == 0 { class } else { (i + id_offset) as f64 }
        })
    }

    #[test]
    fn test_correct_split_sizes() {
        let mut rng = StdRng::seed_from_u64(42);
        let (train, val) = split_train_val(&pool(50, 1.0, 0), &pool(50, 0.0, 100), 80, &mut rng);
        assert_eq!(train.len(), 80);
        assert_eq!(val.len(), 20);
        assert_eq!(train.features().nrows(), train.labels().len());
        assert_eq!(val.features().nrows(), val.labels().len());
    }

    #[test]
    fn test_splits_are_balanced() {
        let mut rng = StdRng::seed_from_u64(1);
        let (train, val) = split_train_val(&pool(30, 1.0, 0), &pool(30, 0.0, 100), 40, &mut rng);
        assert_eq!(train.positives(), 20);
        assert_eq!(train.negatives(), 20);
        assert_eq!(val.positives(), 10);
        assert_eq!(val.negatives(), 10);
    }

    #[test]
    fn test_labels_match_rows_after_shuffle() {
        let mut rng = StdRng::seed_from_u64(3);
        let (train, val) = split_train_val(&pool(25, 1.0, 0), &pool(25, 0.0, 100), 30, &mut rng);
        for ds in [&train, &val] {
            for (row, &y) in ds.features().rows().into_iter().zip(ds.labels()) {
                assert_eq!(row[0], y);
            }
        }
    }

    #[test]
    fn test_all_rows_preserved() {
        let mut rng = StdRng::seed_from_u64(9);
        let (train, val) = split_train_val(&pool(12, 1.0, 0), &pool(12, 0.0, 100), 10, &mut rng);
        let mut ids: Vec<f64> = train
            .features()
            .column(1)
            .iter()
            .chain(val.features().column(1).iter())
            .copied()
            .collect();
        ids.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (0..12).chain(100..112).map(|i| i as f64).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_same_seed_reproduces_split() {
        let pos = pool(20, 1.0, 0);
        let neg = pool(20, 0.0, 100);
        let a = split_train_val(&pos, &neg, 16, &mut StdRng::seed_from_u64(42));
        let b = split_train_val(&pos, &neg, 16, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_train_size_clamped_to_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        let (train, val) = split_train_val(&pool(5, 1.0, 0), &pool(5, 0.0, 100), 100, &mut rng);
        assert_eq!(train.len(), 10);
        assert!(val.is_empty());
    }

    #[test]
    fn test_make_test_combines_pools() {
        let mut rng = StdRng::seed_from_u64(5);
        let test = make_test(&pool(7, 1.0, 0), &pool(4, 0.0, 100), &mut rng);
        assert_eq!(test.len(), 11);
        assert_eq!(test.positives(), 7);
        assert_eq!(test.negatives(), 4);
    }
}
