mod config;
mod error;

use chargen_dice::{Dice, DiceEvaluate, RandomIndexGenerator};
use config::Config;
use error::RollError;
use std::io::Write;
use std::path::Path;

fn main() {
    pretty_env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), RollError> {
    let (config, arguments) = match args.split_first() {
        Some((path, rest)) if path.ends_with(".toml") => (Config::load(Path::new(path))?, rest),
        _ => (Config::default(), args),
    };
    if arguments.is_empty() {
        log::warn!("nothing to roll");
        return Ok(());
    }
    // resolve everything up front so a typo fails before anything is rolled
    let rolls = arguments
        .iter()
        .map(|argument| config.resolve(argument).map(|dice| (argument.as_str(), dice)))
        .collect::<Result<Vec<_>, _>>()?;
    let mut generator = config.generator()?;
    let stdout = std::io::stdout();
    roll_all(&rolls, config.repeat, &mut *generator, &mut stdout.lock())
}

/// Rolls drawing more dice than this print only their total.
const MAX_LISTED_DRAWS: u64 = 1000;

/// Rolls every entry `repeat` times, one output line per roll.
fn roll_all<G, W>(
    rolls: &[(&str, Dice)],
    repeat: u32,
    generator: &mut G,
    out: &mut W,
) -> Result<(), RollError>
where
    G: RandomIndexGenerator + ?Sized,
    W: Write,
{
    for (label, dice) in rolls {
        log::debug!("rolling {} as {}", label, dice);
        let listed = dice.draws() <= MAX_LISTED_DRAWS;
        for _ in 0..repeat {
            let written = if listed {
                let (total, results) = dice.evaluate(generator);
                writeln!(out, "{}: {} {:?}", label, total, results)
            } else {
                writeln!(out, "{}: {}", label, dice.roll(generator))
            };
            written.map_err(RollError::Output)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargen_dice::{parse, SequenceIndexGenerator};

    fn output(rolls: &[(&str, Dice)], repeat: u32) -> String {
        let mut out = Vec::new();
        roll_all(rolls, repeat, &mut SequenceIndexGenerator::new(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_roll_all_shares_generator() {
        let rolls = vec![
            ("stats", parse("4d6-L").unwrap()),
            ("2d4+3", parse("2d4+3").unwrap()),
        ];
        assert_eq!(
            output(&rolls, 1),
            "stats: 9 [1, 2, 3, 4]\n2d4+3: 6 [1, 2]\n"
        );
    }

    #[test]
    fn test_roll_all_repeats() {
        let rolls = vec![("d4", parse("d4").unwrap())];
        assert_eq!(output(&rolls, 3), "d4: 1 [1]\nd4: 2 [2]\nd4: 3 [3]\n");
        assert_eq!(output(&rolls, 0), "");
    }

    #[test]
    fn test_roll_all_skips_long_listings() {
        let rolls = vec![("1001d4", parse("1001d4").unwrap()), ("d6", parse("d6").unwrap())];
        // 250 rounds of 1 2 3 4 and a final 1, then the d6 draws the 1002nd index
        assert_eq!(output(&rolls, 1), "1001d4: 2501\nd6: 6 [6]\n");
    }

    #[test]
    fn test_run_rejects_unknown_notation() {
        let args = vec!["2d6".to_string(), "2d7".to_string()];
        assert!(matches!(run(&args), Err(RollError::InvalidNotation(n)) if n == "2d7"));
    }

    #[test]
    fn test_run_reports_missing_config() {
        let args = vec!["/nonexistent/roll.toml".to_string(), "d6".to_string()];
        assert!(matches!(run(&args), Err(RollError::Io { .. })));
    }
}
