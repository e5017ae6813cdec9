use std::error::Error;
use std::rc::Rc;

use ndarray::{array, Array1, Array2, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use serde::{self, Deserialize, Serialize};

use crate::activation::Activations;
use crate::loss::{Loss, Losses};

pub const D_IN: usize = 1;
pub const D_HIDDEN: usize = 2;
pub const D_OUT: usize = 1;

/// The four parameters of the 1-2-1 network, row-vector convention:
/// `w1` is (1,2), `b1` is (2,), `w2` is (2,1), `b2` is (1,).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeightBundle {
    pub w1: Array2<f64>,
    pub b1: Array1<f64>,
    pub w2: Array2<f64>,
    pub b2: Array1<f64>,
}

impl WeightBundle {
    /// Weights from Uniform(-1,1) under an explicit seed, biases zero.
    pub fn seeded(seed: u64) -> WeightBundle {
        let mut rng = StdRng::seed_from_u64(seed);

        WeightBundle {
            w1: Array2::random_using((D_IN, D_HIDDEN), Uniform::new(-1., 1.), &mut rng),
            b1: Array1::zeros(D_HIDDEN),
            w2: Array2::random_using((D_HIDDEN, D_OUT), Uniform::new(-1., 1.), &mut rng),
            b2: Array1::zeros(D_OUT),
        }
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let checks = [
            ("first layer weights", self.w1.shape(), vec![D_IN, D_HIDDEN]),
            ("first layer bias", self.b1.shape(), vec![D_HIDDEN]),
            ("second layer weights", self.w2.shape(), vec![D_HIDDEN, D_OUT]),
            ("second layer bias", self.b2.shape(), vec![D_OUT]),
        ];

        for (name, got, want) in checks {
            if got != want.as_slice() {
                return Err(format!(
                    "{} shape mismatch: expected {:?}, got {:?}",
                    name, want, got
                )
                .into());
            }
        }

        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Layer {
    pub x: Array2<f64>,
    pub w: Array2<f64>,
    pub b: Array1<f64>,
    pub d_z: Array2<f64>,
    pub grad_w: Array2<f64>,
    pub grad_b: Array1<f64>,
    pub activation: Activations,
}

impl Layer {
    pub fn new(w: Array2<f64>, b: Array1<f64>, activation: Activations) -> Layer {
        let x_shape = (1, w.shape()[0]);
        let z_shape = (1, w.shape()[1]);

        Layer {
            x: Array2::zeros(x_shape),
            d_z: Array2::zeros(z_shape),
            grad_w: Array2::zeros(w.raw_dim()),
            grad_b: Array1::zeros(b.raw_dim()),
            w,
            b,
            activation,
        }
    }

    pub fn forward(&mut self, x: Array2<f64>) -> Array2<f64> {
        self.x = x.clone();
        let z = x.dot(&self.w) + &self.b;
        let a_z = self.activation.wake().a(z.clone());
        let d_z = self.activation.wake().d(z);
        self.d_z = d_z;
        a_z
    }

    pub fn backward(&mut self, grad_output: Array2<f64>) -> Array2<f64> {
        let grad_z = grad_output * &self.d_z;
        let grad_input = grad_z.dot(&self.w.t());
        let grad_w = self.x.t().dot(&grad_z);
        let grad_b = grad_z.sum_axis(Axis(0));

        self.grad_w += &grad_w;
        self.grad_b += &grad_b;

        grad_input
    }

    pub fn apply(&mut self, learning_rate: f64, retention: &GradientRetention) {
        self.w -= &(&self.grad_w * learning_rate);
        self.b -= &(&self.grad_b * learning_rate);

        match retention {
            GradientRetention::Zero => {
                self.grad_w = Array2::zeros(self.grad_w.raw_dim());
                self.grad_b = Array1::zeros(self.grad_b.raw_dim());
            }
            GradientRetention::Roll => (),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum GradientRetention {
    Roll,
    Zero,
}

/// The 1-2-1 network. Both affine layers run under the same activation
/// policy, so the rectified-linear run clamps the output as well as the
/// hidden units.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Network {
    hidden: Layer,
    output: Layer,
    policy: Activations,
    gradient_retention: GradientRetention,
    pub loss: Losses,
}

impl Network {
    pub fn from_bundle(
        bundle: WeightBundle,
        policy: Activations,
    ) -> Result<Network, Box<dyn Error>> {
        bundle.validate()?;
        let WeightBundle { w1, b1, w2, b2 } = bundle;

        Ok(Network {
            hidden: Layer::new(w1, b1, policy),
            output: Layer::new(w2, b2, policy),
            policy,
            gradient_retention: GradientRetention::Zero,
            loss: Losses::MeanAbsoluteError,
        })
    }

    pub fn seeded(policy: Activations, seed: u64) -> Network {
        let WeightBundle { w1, b1, w2, b2 } = WeightBundle::seeded(seed);

        Network {
            hidden: Layer::new(w1, b1, policy),
            output: Layer::new(w2, b2, policy),
            policy,
            gradient_retention: GradientRetention::Zero,
            loss: Losses::MeanAbsoluteError,
        }
    }

    pub fn set_loss(&mut self, loss: Losses) -> &mut Self {
        self.loss = loss;
        self
    }

    pub fn set_gradient_retention(&mut self, method: GradientRetention) -> &mut Self {
        self.gradient_retention = method;
        self
    }

    pub fn policy(&self) -> Activations {
        self.policy
    }

    pub fn bundle(&self) -> WeightBundle {
        WeightBundle {
            w1: self.hidden.w.clone(),
            b1: self.hidden.b.clone(),
            w2: self.output.w.clone(),
            b2: self.output.b.clone(),
        }
    }

    fn prepare(&self, x: Vec<f64>) -> Array2<f64> {
        Array1::from(x).insert_axis(Axis(0))
    }

    pub fn forward(&mut self, xv: Vec<f64>) -> Array1<f64> {
        let mut x = self.prepare(xv);
        x = self.hidden.forward(x);
        x = self.output.forward(x);
        x.remove_axis(Axis(0))
    }

    /// Forward pass at a single scalar input, without touching any training
    /// state. Returns the post-activation hidden vector alongside the final
    /// output, so a caller can see both hidden units saturate rather than
    /// only the end-to-end scalar.
    pub fn trace(&self, x: f64) -> (Array1<f64>, Array1<f64>) {
        let activation = self.policy.wake();

        let x = array![[x]];
        let z1 = x.dot(&self.hidden.w) + &self.hidden.b;
        let hidden = activation.a(z1);

        let z2 = hidden.dot(&self.output.w) + &self.output.b;
        let out = activation.a(z2);

        (hidden.remove_axis(Axis(0)), out.remove_axis(Axis(0)))
    }

    pub fn backwards(
        &mut self,
        y_pred: Array1<f64>,
        y: Vec<f64>,
        loss: Rc<dyn Loss>,
        learning_rate: f64,
    ) {
        let y_target = Array1::from(y);
        let grad_output_i = loss.d(y_pred, y_target);
        let grad_output = grad_output_i.insert_axis(Axis(0));

        let grad_hidden = self.output.backward(grad_output);
        self.hidden.backward(grad_hidden);

        self.output.apply(learning_rate, &self.gradient_retention);
        self.hidden.apply(learning_rate, &self.gradient_retention);
    }
}
