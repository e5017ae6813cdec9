use std::fmt::Debug;
use std::rc::Rc;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

pub trait Loss {
    fn a(&self, pred: Array1<f64>, target: Array1<f64>) -> f64;
    fn d(&self, pred: Array1<f64>, target: Array1<f64>) -> Array1<f64>;
}

impl Debug for dyn Loss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LossFn")
    }
}

pub struct MAE;

impl MAE {
    pub fn new() -> Rc<MAE> {
        Rc::new(MAE)
    }
}

impl Loss for MAE {
    fn a(&self, pred: Array1<f64>, target: Array1<f64>) -> f64 {
        let len = pred.len();
        let diff = pred - target;
        let abs = diff.mapv_into(|x| x.abs());
        abs.sum() / len as f64
    }

    // Sign of the residual, zero when the residual is zero.
    fn d(&self, pred: Array1<f64>, target: Array1<f64>) -> Array1<f64> {
        let len = pred.len();
        let diff = pred - target;
        diff.mapv_into(|x| {
            if x == 0. {
                return 0.;
            }
            x.signum() / len as f64
        })
    }
}

pub struct MSE;

impl MSE {
    pub fn new() -> Rc<MSE> {
        Rc::new(MSE)
    }
}

impl Loss for MSE {
    fn a(&self, pred: Array1<f64>, target: Array1<f64>) -> f64 {
        let len = pred.len();
        let diff = pred - target;
        let exp = diff.mapv_into(|x| x.powi(2));
        let sum = exp.sum();
        sum / len as f64
    }

    fn d(&self, pred: Array1<f64>, target: Array1<f64>) -> Array1<f64> {
        let len = pred.len();
        let diff = pred - target;
        let dx = diff.mapv_into(|x| (x * 2.) / len as f64);
        dx
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Losses {
    MeanAbsoluteError,
    MeanSquaredError,
}

impl Losses {
    pub fn wake(&self) -> Rc<dyn Loss> {
        match self {
            Losses::MeanAbsoluteError => MAE::new(),
            Losses::MeanSquaredError => MSE::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn mae_of_known_residuals() {
        let pred = array![0.5, 1.0, -1.0];
        let target = array![0.0, 1.0, 1.0];
        let loss = Losses::MeanAbsoluteError.wake().a(pred, target);
        assert!((loss - (0.5 + 0.0 + 2.0) / 3.).abs() < 1e-12);
    }

    #[test]
    fn mae_derivative_is_signed() {
        let pred = array![0.5, 1.0, -1.0];
        let target = array![0.0, 1.0, 1.0];
        let d = Losses::MeanAbsoluteError.wake().d(pred, target);
        assert_eq!(d, array![1. / 3., 0., -1. / 3.]);
    }

    #[test]
    fn mse_of_known_residuals() {
        let pred = array![1.0, 2.0];
        let target = array![0.0, 0.0];
        let loss = Losses::MeanSquaredError.wake().a(pred, target);
        assert!((loss - 2.5).abs() < 1e-12);
    }
}
