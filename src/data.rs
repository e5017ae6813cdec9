use std::error::Error;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Dataset;

/// Samples for the identity task: targets drawn uniformly from (0,1),
/// each input equal to its target, shuffled and split 80/20 into
/// train and eval partitions. Everything derives from the one seed.
pub fn identity_xy(size: usize, seed: u64) -> Result<(Dataset, Dataset), Box<dyn Error>> {
    if size == 0 {
        return Err("sample count must be positive".into());
    }

    let mut rng = StdRng::seed_from_u64(seed);

    let mut pairs: Vec<(Vec<f64>, Vec<f64>)> = Vec::with_capacity(size);
    for _ in 0..size {
        let v = loop {
            // gen_range samples the half-open [0,1); redraw the
            // measure-zero 0.0 so every input is strictly positive.
            let v: f64 = rng.gen_range(0.0..1.0);
            if v > 0. {
                break v;
            }
        };
        pairs.push((vec![v], vec![v]));
    }

    pairs.shuffle(&mut rng);

    let split = (pairs.len() * 4) / 5;
    let eval = pairs.split_off(split);

    let (train_x, train_y): Dataset = pairs.into_iter().unzip();
    let (eval_x, eval_y): Dataset = eval.into_iter().unzip();

    Ok(((train_x, train_y), (eval_x, eval_y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_partitions() {
        let a = identity_xy(200, 42).unwrap();
        let b = identity_xy(200, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_order() {
        let ((ax, _), _) = identity_xy(200, 42).unwrap();
        let ((bx, _), _) = identity_xy(200, 43).unwrap();
        assert_ne!(ax, bx);
    }

    #[test]
    fn splits_eighty_twenty() {
        let ((train_x, train_y), (eval_x, eval_y)) = identity_xy(2000, 7).unwrap();
        assert_eq!(train_x.len(), 1600);
        assert_eq!(train_y.len(), 1600);
        assert_eq!(eval_x.len(), 400);
        assert_eq!(eval_y.len(), 400);
    }

    #[test]
    fn targets_equal_inputs_in_open_interval() {
        let ((train_x, train_y), (eval_x, eval_y)) = identity_xy(500, 3).unwrap();
        let xs = train_x.iter().chain(eval_x.iter());
        let ys = train_y.iter().chain(eval_y.iter());

        for (x, y) in xs.zip(ys) {
            assert_eq!(x, y);
            assert!(x[0] > 0. && x[0] < 1.);
        }
    }

    #[test]
    fn rejects_zero_samples() {
        let err = identity_xy(0, 1).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }
}
