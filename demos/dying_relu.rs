use std::error::Error;

use ndarray::{array, Array1};

use dying_relu::data::identity_xy;
use dying_relu::f;
use dying_relu::optimizers::MiniBatchGradientDescent;
use dying_relu::{Activations, Network, WeightBundle};

const PROBE: f64 = 0.5;

// Initial draw recorded from a seeded run where both first-layer weights
// landed negative. Kept verbatim so the stall reproduces on every run.
fn initial_bundle() -> WeightBundle {
    WeightBundle {
        w1: array![[-0.1699, -1.1390]],
        b1: Array1::zeros(2),
        w2: array![[1.2554], [-0.4568]],
        b2: Array1::zeros(1),
    }
}

fn eval_mae(nn: &mut Network, eval_x: &[Vec<f64>], eval_y: &[Vec<f64>]) -> f64 {
    let preds = eval_x
        .iter()
        .map(|x| nn.forward(x.clone())[0])
        .collect::<Vec<f64>>();
    let targets = eval_y.iter().map(|y| y[0]).collect::<Vec<f64>>();

    f::mean_absolute_error(&preds, &targets)
}

fn explain(bundle: &WeightBundle) -> Result<(), Box<dyn Error>> {
    let x = PROBE;
    let w1 = [bundle.w1[[0, 0]], bundle.w1[[0, 1]]];
    let w2 = [bundle.w2[[0, 0]], bundle.w2[[1, 0]]];

    println!("=== forward pass by hand, initial weights, x = {} ===", x);

    for (i, w) in w1.iter().enumerate() {
        let z = w * x;
        println!(
            "hidden unit {}: z = {} * {} = {:.5} -> relu(z) = {}, relu'(z) = {}",
            i,
            w,
            x,
            z,
            f::relu(z),
            f::relu_prime(z)
        );
    }
    println!("both first-layer weights are negative and every input is positive,");
    println!("so both hidden units clamp to zero regardless of x. The output is");
    println!("relu(0 . w2 + 0) = 0, and relu'(z) = 0 at every unit: each gradient");
    println!("step is a no-op and the rectified-linear run cannot learn.");
    println!();

    let relu_net = Network::from_bundle(bundle.clone(), Activations::Relu)?;
    let (hidden, out) = relu_net.trace(x);
    println!("evaluator, relu policy:   hidden = {}, final = {}", hidden, out);

    let linear_net = Network::from_bundle(bundle.clone(), Activations::Linear)?;
    let (hidden, out) = linear_net.trace(x);
    println!("evaluator, linear policy: hidden = {}, final = {}", hidden, out);
    println!();

    let d = f::dot(&w1, &w2);
    println!(
        "linear closed form: final = x * (w1 . w2) = {} * {:.5} = {:.5}",
        x,
        d,
        x * d
    );
    println!(
        "geometrically: |w1| = {:.5}, |w2| = {:.5}, cos(theta) = {:.5} (theta = {:.3} rad)",
        f::norm(&w1),
        f::norm(&w2),
        f::cosine(&w1, &w2),
        f::angle_between(&w1, &w2)
    );
    println!(
        "so final = x * |w1| * |w2| * cos(theta) = {:.5}",
        x * f::norm(&w1) * f::norm(&w2) * f::cosine(&w1, &w2)
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let ((train_x, train_y), (eval_x, eval_y)) = identity_xy(2000, 12)?;

    for policy in [Activations::Relu, Activations::Linear] {
        println!("=== {:?} policy ===", policy);

        let mut nn = Network::from_bundle(initial_bundle(), policy)?;
        println!("initial weights:\n{:#?}\n", nn.bundle());

        let mut trainer = MiniBatchGradientDescent::new(&mut nn);
        trainer
            .set_learning_rate(0.01)
            .set_decay(0.999)
            .set_epochs(20)
            .set_sample_size(32)
            .set_seed(7)
            .verbose()
            .train(train_x.clone(), train_y.clone());

        println!("loss trace: {}", serde_json::to_string(&trainer.losses)?);

        let mae = eval_mae(&mut nn, &eval_x, &eval_y);
        println!("held-out MAE after training: {}\n", mae);
    }

    explain(&initial_bundle())
}
