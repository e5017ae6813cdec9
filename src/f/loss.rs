pub fn mean_absolute_error(pred: &[f64], actual: &[f64]) -> f64 {
    let diff = actual
        .iter()
        .enumerate()
        .map(|(i, e)| (e - pred[i]).abs())
        .collect::<Vec<f64>>();

    diff.into_iter().fold(0. as f64, |a, e| a + e) / pred.len() as f64
}

pub fn mean_squared_error(pred: &[f64], actual: &[f64]) -> f64 {
    let diff = actual
        .iter()
        .enumerate()
        .map(|(i, e)| (e - pred[i]).powi(2))
        .collect::<Vec<f64>>();

    diff.into_iter().fold(0. as f64, |a, e| a + e) / pred.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mae_over_slices() {
        let pred = [0.5, 1.0, 2.0];
        let actual = [0.0, 1.0, 1.0];
        assert!((mean_absolute_error(&pred, &actual) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mse_over_slices() {
        let pred = [1.0, 3.0];
        let actual = [0.0, 1.0];
        assert!((mean_squared_error(&pred, &actual) - 2.5).abs() < 1e-12);
    }
}
