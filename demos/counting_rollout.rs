//! Rollout demo: plays rounds with a fixed threshold policy and prints
//! the reward and running count per round.

use std::time::{SystemTime, UNIX_EPOCH};

use bjgym::{Action, Env, EnvOptions};

const ROUNDS: usize = 20;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    println!("Playing {ROUNDS} rounds (seed {seed})");

    let options = EnvOptions::default().with_natural(true);
    let mut env = Env::new(options, seed);

    let mut total_return = 0.0;
    for round in 1..=ROUNDS {
        let mut obs = env.reset();
        let reward = loop {
            // Hit below 17, otherwise stand.
            let action = if obs.player_total < 17 {
                Action::Hit
            } else {
                Action::Stand
            };
            let transition = env.step(action).expect("round is in progress");
            if transition.done {
                break transition.reward;
            }
            obs = transition.observation;
        };

        total_return += reward;
        println!(
            "round {round:>2}: player {:>2} vs dealer {:>2} | reward {reward:+.1} | count {:+} | {} cards left",
            env.player.total(),
            env.dealer.total(),
            env.running_count(),
            env.cards_remaining(),
        );
    }

    println!("total return over {ROUNDS} rounds: {total_return:+.1}");
}
