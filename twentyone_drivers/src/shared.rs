use serde::{Deserialize, Serialize};
use std::fs;

use twentyone::Rule;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rule: ConfigRule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRule {
    pub decks_amount: u8,
    pub chips_multiplier: u32,
}

impl TryInto<Rule> for ConfigRule {
    type Error = String;

    fn try_into(self) -> Result<Rule, Self::Error> {
        if self.decks_amount < 1 {
            return Err(String::from("decks_amount must be at least 1"));
        }
        if self.chips_multiplier < 1 {
            return Err(String::from("chips_multiplier must be at least 1"));
        }
        Ok(Rule {
            decks_amount: self.decks_amount,
            chips_multiplier: self.chips_multiplier,
        })
    }
}

/// Reads the content of a given config file and parses it to a Config.
///
/// Panics if any error occurs.
pub fn parse_config_from_file(filename: &str) -> Config {
    let file_content = fs::read_to_string(filename).unwrap();
    serde_yaml::from_str(&file_content).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_typical_config_rule() -> ConfigRule {
        ConfigRule {
            decks_amount: 2,
            chips_multiplier: 3,
        }
    }

    #[test]
    fn can_convert_rule() {
        let config_rule = get_typical_config_rule();
        let converted_rule: Rule = config_rule.try_into().unwrap();
        assert_eq!(converted_rule.decks_amount, 2);
        assert_eq!(converted_rule.chips_multiplier, 3);
    }

    #[test]
    fn should_return_error_when_decks_amount_is_zero() {
        let mut config_rule = get_typical_config_rule();
        config_rule.decks_amount = 0;
        let convert_result: Result<Rule, String> = config_rule.try_into();
        assert!(convert_result.is_err());
    }

    #[test]
    fn should_return_error_when_multiplier_is_zero() {
        let mut config_rule = get_typical_config_rule();
        config_rule.chips_multiplier = 0;
        let convert_result: Result<Rule, String> = config_rule.try_into();
        assert!(convert_result.is_err());
    }

    #[test]
    fn parses_a_full_config_document() {
        let yaml = "rule:\n  decks_amount: 2\n  chips_multiplier: 3\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.rule.decks_amount, 2);
        assert_eq!(config.rule.chips_multiplier, 3);
    }
}
