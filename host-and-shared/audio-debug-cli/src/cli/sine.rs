use crate::sine::SineTable;
use anyhow::anyhow;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Sample rate in Hz
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Tone frequency in Hz, must divide the sample rate evenly
    #[arg(long, default_value = "1000")]
    frequency: u32,

    /// Name of the generated C array
    #[arg(long, default_value = "samples", value_parser(parse_identifier))]
    name: String,
}

fn parse_identifier(s: &str) -> Result<String, anyhow::Error> {
    let mut chars = s.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(s.to_owned())
    } else {
        Err(anyhow!("{s:?} is not a valid C identifier"))
    }
}

impl Args {
    pub fn run(self) -> anyhow::Result<()> {
        let table = SineTable::generate(self.sample_rate, self.frequency)?.with_name(self.name);
        print!("{table}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier() {
        assert_eq!(parse_identifier("samples").unwrap(), "samples");
        assert_eq!(parse_identifier("_sine_1k").unwrap(), "_sine_1k");
        assert!(parse_identifier("").is_err());
        assert!(parse_identifier("1k").is_err());
        assert!(parse_identifier("sine-1k").is_err());
    }
}
