use chargen_dice::{DiceEvaluate, DiceLimits, RngIndexGenerator};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::convert::TryFrom;

/// Largest face of any supported die.
const MAX_FACE: usize = 100;

fn main() -> std::io::Result<()> {
    let (dice, num) = {
        let mut args = std::env::args().skip(1);
        let dice = args
            .next()
            .and_then(|a| chargen_dice::parse(&a))
            .expect("first arg should be dice notation");
        (
            dice,
            args.next()
                .and_then(|a| u32::from_str_radix(&a, 10).ok())
                .unwrap_or(1),
        )
    };
    let mut master_rng = ChaCha20Rng::from_entropy();

    let (result_min, result_max) = (dice.min(), dice.max());
    let width = usize::try_from(result_max - result_min + 2).expect("too many distinct totals");

    // index 0 holds the smallest value, index i counts value min + i - 1
    let mut results: Vec<i64> = vec![0; width];
    results[0] = result_min;
    let mut throws: Vec<i64> = vec![0; MAX_FACE + 1];
    throws[0] = 1;

    for (total, rolled) in (0..num)
        .map(|_| {
            let mut seed: <Xoshiro256PlusPlus as SeedableRng>::Seed = Default::default();
            master_rng.fill(&mut seed);
            RngIndexGenerator::new(Xoshiro256PlusPlus::from_seed(seed))
        })
        .map(|mut r| dice.evaluate(&mut r))
    {
        results[(total - result_min) as usize + 1] += 1;
        for face in rolled {
            throws[face as usize] += 1;
        }
    }

    npy::to_file("throws.npy", throws)?;
    npy::to_file("rolls.npy", results)?;
    Ok(())
}
