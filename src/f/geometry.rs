pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine of the angle between two vectors. With b2 near zero the linear
/// network's output factors as x * |W1| * |W2| * cosine(W1, W2).
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    dot(a, b) / (norm(a) * norm(b))
}

pub fn angle_between(a: &[f64], b: &[f64]) -> f64 {
    cosine(a, b).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::WeightBundle;
    use crate::{Activations, Network};
    use ndarray::{array, Array1};

    #[test]
    fn dot_and_norm_on_known_vectors() {
        assert!((dot(&[1., 2.], &[3., 4.]) - 11.).abs() < 1e-12);
        assert!((norm(&[3., 4.]) - 5.).abs() < 1e-12);
    }

    #[test]
    fn cosine_of_axes() {
        assert!((cosine(&[1., 0.], &[0., 1.])).abs() < 1e-12);
        assert!((cosine(&[1., 0.], &[2., 0.]) - 1.).abs() < 1e-12);
        assert!((angle_between(&[1., 0.], &[0., 1.]) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn linear_output_factors_into_norms_and_cosine() {
        let w1 = [-0.1699, -1.1390];
        let w2 = [1.2554, -0.4568];

        let bundle = WeightBundle {
            w1: array![[w1[0], w1[1]]],
            b1: Array1::zeros(2),
            w2: array![[w2[0]], [w2[1]]],
            b2: Array1::zeros(1),
        };
        let nn = Network::from_bundle(bundle, Activations::Linear).unwrap();

        for x in [0.1, 0.5, 0.9] {
            let (_, out) = nn.trace(x);
            let expected = x * norm(&w1) * norm(&w2) * cosine(&w1, &w2);
            assert!((out[0] - expected).abs() < 1e-9);
        }
    }
}
