use std::fmt::Debug;
use std::rc::Rc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub trait Activation {
    fn a(&self, x: Array2<f64>) -> Array2<f64>;
    fn d(&self, x: Array2<f64>) -> Array2<f64>;
}

impl Debug for dyn Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActivationFn")
    }
}

pub struct Relu;

impl Relu {
    pub fn new() -> Rc<Relu> {
        Rc::new(Relu)
    }
}

impl Activation for Relu {
    fn a(&self, x: Array2<f64>) -> Array2<f64> {
        x.map(|v| {
            if *v < 0. {
                return 0.;
            }
            *v
        })
    }

    // Derivative is 0 at the origin. A fully clamped layer therefore
    // passes exactly zero gradient, which is the stall under study.
    fn d(&self, x: Array2<f64>) -> Array2<f64> {
        x.map(|v| {
            if *v <= 0. {
                return 0.;
            }
            1.
        })
    }
}

pub struct Linear;

impl Linear {
    pub fn new() -> Rc<Linear> {
        Rc::new(Linear)
    }
}

impl Activation for Linear {
    fn a(&self, x: Array2<f64>) -> Array2<f64> {
        x
    }

    fn d(&self, x: Array2<f64>) -> Array2<f64> {
        x.map(|_| 1.)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activations {
    Relu,
    Linear,
}

impl Activations {
    pub fn wake(&self) -> Rc<dyn Activation> {
        match self {
            Activations::Relu => Relu::new(),
            Activations::Linear => Linear::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn relu_clamps_negatives() {
        let z = array![[-3., -0.5, 0., 0.5, 3.]];
        let a = Activations::Relu.wake().a(z);
        assert_eq!(a, array![[0., 0., 0., 0.5, 3.]]);
    }

    #[test]
    fn relu_derivative_is_a_mask() {
        let z = array![[-3., -0.5, 0., 0.5, 3.]];
        let d = Activations::Relu.wake().d(z);
        assert_eq!(d, array![[0., 0., 0., 1., 1.]]);
    }

    #[test]
    fn linear_passes_through() {
        let z = array![[-3., 0., 3.]];
        let a = Activations::Linear.wake().a(z.clone());
        assert_eq!(a, z);

        let d = Activations::Linear.wake().d(z);
        assert_eq!(d, array![[1., 1., 1.]]);
    }
}
