use std::str::FromStr;
use thiserror::Error;

/// One-way RPC invocation: a method name and the on/off state to apply.
/// The method name is forwarded to the platform as-is.
#[derive(Debug, PartialEq)]
pub struct Command {
    method: String,
    param: bool,
}

impl Command {
    pub fn new(method: impl Into<String>, param: bool) -> Self {
        Command {
            method: method.into(),
            param,
        }
    }

    pub fn led(on: bool) -> Self {
        Command::new("setLED", on)
    }

    pub fn fan(on: bool) -> Self {
        Command::new("setFan", on)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn param(&self) -> bool {
        self.param
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_whitespace().collect::<Vec<_>>();
        let [actuator, state] = parts.as_slice() else {
            return Err(ParseCommandError(s.to_string()));
        };

        let param = match *state {
            "on" => true,
            "off" => false,
            _ => return Err(ParseCommandError(s.to_string())),
        };

        match *actuator {
            "led" => Ok(Command::led(param)),
            "fan" => Ok(Command::fan(param)),
            _ => Err(ParseCommandError(s.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown command '{0}', expected 'led on|off' or 'fan on|off'")]
pub struct ParseCommandError(String);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("led on", Command::new("setLED", true))]
    #[case("led off", Command::new("setLED", false))]
    #[case("fan on", Command::new("setFan", true))]
    #[case("fan off", Command::new("setFan", false))]
    #[case("  led   on  ", Command::new("setLED", true))]
    fn parses_an_actuator_command(#[case] input: &str, #[case] expected: Command) -> Result<(), ParseCommandError> {
        assert_eq!(input.parse::<Command>()?, expected);
        Ok(())
    }

    #[rstest]
    #[case("led")]
    #[case("led maybe")]
    #[case("heater on")]
    #[case("led on now")]
    #[case("")]
    fn rejects_anything_else(#[case] input: &str) {
        assert!(input.parse::<Command>().is_err());
    }
}
