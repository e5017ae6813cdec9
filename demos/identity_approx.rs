use std::error::Error;

use dying_relu::data::identity_xy;
use dying_relu::optimizers::MiniBatchGradientDescent;
use dying_relu::{Activations, GradientRetention, Network};

fn main() -> Result<(), Box<dyn Error>> {
    let ((train_x, train_y), (eval_x, eval_y)) = identity_xy(10000, 99)?;

    let mut nn = Network::seeded(Activations::Linear, 4);
    nn.set_gradient_retention(GradientRetention::Zero);

    let mut trainer = MiniBatchGradientDescent::new(&mut nn);
    trainer
        .set_learning_rate(0.01)
        .set_decay(0.999)
        .set_epochs(500)
        .set_sample_size(100)
        .set_patience(100)
        .set_min_delta(0.0001)
        .set_seed(2)
        .until()
        .verbose()
        .train(train_x, train_y)
        .loss_graph();

    let testxy = eval_x.into_iter().zip(eval_y.into_iter()).take(10);

    for (x, y) in testxy {
        let y_pred = nn.forward(x.clone());
        let v = y_pred.to_vec();

        println!("{:?} =?= {:?}", v, y);
    }

    Ok(())
}
