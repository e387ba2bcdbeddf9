use crate::error::RollError;
use chargen_dice::{parse, Dice, EntropyIndexGenerator, RandomIndexGenerator, RngIndexGenerator, SequenceIndexGenerator};
use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Entropy,
    Sequence,
    Seeded,
}

impl Default for GeneratorKind {
    fn default() -> Self {
        GeneratorKind::Entropy
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    generator: GeneratorKind,
    seed: Option<u64>,
    repeat: u32,
    alias: HashMap<String, String>,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            generator: GeneratorKind::default(),
            seed: None,
            repeat: 1,
            alias: HashMap::new(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub generator: GeneratorKind,
    pub seed: Option<u64>,
    pub repeat: u32,
    pub alias: HashMap<String, Dice>,
}

impl Default for Config {
    fn default() -> Self {
        let RawConfig {
            generator,
            seed,
            repeat,
            ..
        } = RawConfig::default();
        Config {
            generator,
            seed,
            repeat,
            alias: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Config, RollError> {
        let raw: RawConfig = toml::from_str(content)?;
        if raw.generator == GeneratorKind::Seeded && raw.seed.is_none() {
            return Err(RollError::MissingSeed);
        }
        if raw.generator != GeneratorKind::Seeded && raw.seed.is_some() {
            log::warn!("seed is ignored by the {:?} generator", raw.generator);
        }
        let alias = raw
            .alias
            .into_iter()
            .map(|(name, notation)| match parse(&notation) {
                Some(dice) => Ok((name, dice)),
                None => Err(RollError::InvalidAlias { name, notation }),
            })
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Config {
            generator: raw.generator,
            seed: raw.seed,
            repeat: raw.repeat,
            alias,
        })
    }

    pub fn load(path: &Path) -> Result<Config, RollError> {
        let content = std::fs::read_to_string(path).map_err(|source| RollError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Config::from_toml(&content)?;
        log::info!(
            "loaded {} aliases from {:?}, using the {:?} generator",
            config.alias.len(),
            path,
            config.generator
        );
        Ok(config)
    }

    /// Looks `argument` up as an alias first, then as notation.
    pub fn resolve(&self, argument: &str) -> Result<Dice, RollError> {
        match self.alias.get(argument) {
            Some(dice) => Ok(dice.clone()),
            None => parse(argument).ok_or_else(|| RollError::InvalidNotation(argument.to_string())),
        }
    }

    pub fn generator(&self) -> Result<Box<dyn RandomIndexGenerator>, RollError> {
        Ok(match self.generator {
            GeneratorKind::Entropy => Box::new(EntropyIndexGenerator),
            GeneratorKind::Sequence => Box::new(SequenceIndexGenerator::new()),
            GeneratorKind::Seeded => {
                let seed = self.seed.ok_or(RollError::MissingSeed)?;
                Box::new(RngIndexGenerator::new(ChaCha20Rng::seed_from_u64(seed)))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chargen_dice::{DiceEvaluate, Die, Dropping};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator, GeneratorKind::Entropy);
        assert_eq!(config.seed, None);
        assert_eq!(config.repeat, 1);
        assert!(config.alias.is_empty());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_toml("repeat = 3").unwrap();
        assert_eq!(config.repeat, 3);
        assert_eq!(config.generator, Config::default().generator);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            generator = "seeded"
            seed = 42
            repeat = 6

            [alias]
            stats = "4d6-L"
            "#,
        )
        .unwrap();
        assert_eq!(config.generator, GeneratorKind::Seeded);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.repeat, 6);
        assert_eq!(
            config.alias.get("stats"),
            Some(&Dice::dropping(Die::D6, 4, Dropping::Low).unwrap())
        );
    }

    #[test]
    fn test_bad_alias_is_rejected() {
        match Config::from_toml("[alias]\nbroken = \"3d7\"") {
            Err(RollError::InvalidAlias { name, notation }) => {
                assert_eq!(name, "broken");
                assert_eq!(notation, "3d7");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_seeded_needs_seed() {
        assert!(matches!(
            Config::from_toml("generator = \"seeded\""),
            Err(RollError::MissingSeed)
        ));
    }

    #[test]
    fn test_unknown_generator() {
        assert!(matches!(
            Config::from_toml("generator = \"dice-tower\""),
            Err(RollError::Toml(_))
        ));
    }

    #[test]
    fn test_resolve() {
        let config = Config::from_toml("[alias]\nhp = \"d10+2\"").unwrap();
        assert_eq!(config.resolve("hp").unwrap(), parse("d10+2").unwrap());
        assert_eq!(config.resolve("2d6").unwrap(), parse("2d6").unwrap());
        assert!(matches!(
            config.resolve("mp"),
            Err(RollError::InvalidNotation(n)) if n == "mp"
        ));
    }

    #[test]
    fn test_seeded_generator_repeats() {
        let config = Config::from_toml("generator = \"seeded\"\nseed = 7").unwrap();
        let dice = parse("10d20").unwrap();
        let mut generator = config.generator().unwrap();
        let first = dice.evaluate(&mut *generator);
        let mut generator = config.generator().unwrap();
        let second = dice.evaluate(&mut *generator);
        assert_eq!(first, second);
    }
}
