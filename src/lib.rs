mod activation;
mod loss;
pub mod data;
pub mod f;
pub mod nn;
pub mod optimizers;

pub use activation::Activations;
pub use loss::Losses;
pub use nn::fc::{GradientRetention, Network, WeightBundle};

pub type Dataset = (Vec<Vec<f64>>, Vec<Vec<f64>>);
