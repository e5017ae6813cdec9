pub mod fc;

pub use fc::{GradientRetention, Layer, Network, WeightBundle};
