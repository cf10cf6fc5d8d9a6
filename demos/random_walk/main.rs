use std::{error::Error, fs, path::Path};

use env::{Pos, RandomWalk, TERMINAL};
use td_prediction::{
    algo::{
        tabular::{self, ValueTable},
        EveryVisitMC, StepConfig, TDLambda, TD0,
    },
    schedule::{InverseTime, StepSchedule},
    trajectory::{Episode, Transition},
};

mod env;

const NUM_EPISODES: u16 = 200;

type Walk = RandomWalk<5>;

fn rms_error(values: &ValueTable<Pos>) -> f32 {
    let (sum, n) = Walk::states().fold((0.0, 0), |(sum, n), s| {
        (sum + (values[&s] - Walk::true_value(s)).powi(2), n + 1)
    });
    (sum / n as f32).sqrt()
}

/// Run one episode under the random policy, recording each transition
fn rollout(env: &mut Walk) -> Vec<Transition<Pos>> {
    let mut transitions = vec![];
    let mut next_state = Some(env.reset());
    while let Some(state) = next_state {
        let (next, reward) = env.step(env.random_action());
        next_state = next;
        transitions.push(Transition::new(state, reward, next.unwrap_or(TERMINAL)));
    }
    transitions
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = Path::new("demos/random_walk");
    let domain = || Walk::states().chain([TERMINAL]);

    let mut env = Walk::new();
    let alpha = InverseTime::new(0.1, 50.0)?;

    let mut td0_values = tabular::filled(domain(), 0.5);
    let mut mc_values = tabular::filled(domain(), 0.5);
    let mut lambda_values = tabular::filled(domain(), 0.5);
    let mut traces = tabular::zeros(domain());
    for v in [&mut td0_values, &mut mc_values, &mut lambda_values] {
        v.insert(TERMINAL, 0.0);
    }

    fs::create_dir_all(path.join("out"))?;

    let mut wtr = csv::Writer::from_path(path.join("out/data.csv"))?;
    wtr.write_record(["episode", "steps", "td0", "mc", "td_lambda"])?;

    for i in 0..NUM_EPISODES {
        let config = StepConfig::default().with_alpha(alpha.evaluate(i as f32));
        let td0 = TD0::new(config);
        let mc = EveryVisitMC::new(config);
        let td_lambda = TDLambda::new(0.8, config);

        let transitions = rollout(&mut env);

        TDLambda::reset_traces(&mut traces);
        for t in &transitions {
            td0.update_transition(t, &mut td0_values)?;
            td_lambda.update_transition(t, &mut lambda_values, &mut traces)?;
        }
        let episode: Episode<Pos> = transitions.into_iter().collect();
        mc.update_episode(&episode, &mut mc_values)?;

        wtr.write_record(&[
            i.to_string(),
            env.steps.to_string(),
            rms_error(&td0_values).to_string(),
            rms_error(&mc_values).to_string(),
            rms_error(&lambda_values).to_string(),
        ])?;
    }

    wtr.flush()?;

    println!(
        "RMS error after {NUM_EPISODES} episodes: TD(0) {:.3}, MC {:.3}, TD(λ) {:.3}",
        rms_error(&td0_values),
        rms_error(&mc_values),
        rms_error(&lambda_values),
    );

    Ok(())
}
