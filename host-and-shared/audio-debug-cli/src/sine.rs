//! Single-period sine tables for embedding in firmware as test tones.

use std::f64::consts::PI;
use std::fmt;

/// Peak sample value, `u16::MAX >> 5`, keeping the tone well below full scale.
pub const AMPLITUDE: i16 = (u16::MAX >> 5) as i16;

pub const DEFAULT_NAME: &str = "samples";

#[derive(Debug, Eq, PartialEq, Clone, thiserror::Error)]
pub enum SineError {
    #[error("Sample rate must be positive")]
    ZeroSampleRate,
    #[error("Frequency must be positive")]
    ZeroFrequency,
    #[error("Frequency {frequency}Hz must not exceed the sample rate {sample_rate}Hz")]
    FrequencyAboveSampleRate { sample_rate: u32, frequency: u32 },
    #[error("Frequency {frequency}Hz doesn't divide the sample rate {sample_rate}Hz, the table wouldn't loop cleanly")]
    UnevenPeriod { sample_rate: u32, frequency: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineTable {
    name: String,
    samples: Vec<i16>,
}

impl SineTable {
    /// One period of a `frequency` tone at `sample_rate`: `sample_rate / frequency`
    /// samples of `AMPLITUDE * sin(2πi/N)`, truncated toward zero.
    pub fn generate(sample_rate: u32, frequency: u32) -> Result<Self, SineError> {
        if sample_rate == 0 {
            return Err(SineError::ZeroSampleRate);
        }
        if frequency == 0 {
            return Err(SineError::ZeroFrequency);
        }
        if frequency > sample_rate {
            return Err(SineError::FrequencyAboveSampleRate {
                sample_rate,
                frequency,
            });
        }
        if sample_rate % frequency != 0 {
            return Err(SineError::UnevenPeriod {
                sample_rate,
                frequency,
            });
        }

        let n = sample_rate / frequency;
        let samples = (0..n)
            .map(|i| {
                let phase = 2.0 * PI * f64::from(i) / f64::from(n);
                // `as` truncates toward zero, which is what the firmware tables expect
                (f64::from(AMPLITUDE) * phase.sin()) as i16
            })
            .collect();

        Ok(Self {
            name: DEFAULT_NAME.to_owned(),
            samples,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }
}

impl fmt::Display for SineTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "int16_t {}[] = {{", self.name)?;
        for sample in &self.samples {
            writeln!(f, "    {sample},")?;
        }
        writeln!(f, "}};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude() {
        assert_eq!(AMPLITUDE, 2047);
    }

    #[test]
    fn test_default_table() {
        let table = SineTable::generate(48_000, 1_000).unwrap();
        let samples = table.samples();
        assert_eq!(samples.len(), 48);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[12], AMPLITUDE, "quarter period is the positive peak");
        assert_eq!(samples[24], 0, "sin(pi) truncates to zero");
        assert_eq!(samples[36], -AMPLITUDE, "three quarters is the negative peak");
    }

    #[test]
    fn test_truncates_toward_zero() {
        let table = SineTable::generate(48_000, 1_000).unwrap();
        // 2047 * sin(2pi/48) = 267.19..., 2047 * sin(2pi*25/48) = -267.19...
        assert_eq!(table.samples()[1], 267);
        assert_eq!(table.samples()[25], -267);
    }

    #[test]
    fn test_samples_in_range() {
        for (rate, freq) in [(48_000, 1_000), (44_100, 441), (8_000, 2_000), (96_000, 3)] {
            let table = SineTable::generate(rate, freq).unwrap();
            assert_eq!(table.samples().len(), (rate / freq) as usize);
            assert!(table
                .samples()
                .iter()
                .all(|s| (-AMPLITUDE..=AMPLITUDE).contains(s)));
        }
    }

    #[test]
    fn test_table_is_one_period() {
        let table = SineTable::generate(48_000, 500).unwrap();
        let samples = table.samples();
        let n = samples.len();
        // the next period would start over at sin(2pi) == sin(0)
        let wrapped = (f64::from(AMPLITUDE) * (2.0 * PI * n as f64 / n as f64).sin()) as i16;
        assert_eq!(wrapped, samples[0]);
        // odd symmetry around the half period
        for i in 1..n / 2 {
            assert_eq!(samples[i], -samples[n - i]);
        }
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert_eq!(SineTable::generate(0, 1_000), Err(SineError::ZeroSampleRate));
        assert_eq!(SineTable::generate(48_000, 0), Err(SineError::ZeroFrequency));
        assert_eq!(
            SineTable::generate(1_000, 48_000),
            Err(SineError::FrequencyAboveSampleRate {
                sample_rate: 1_000,
                frequency: 48_000
            })
        );
        assert_eq!(
            SineTable::generate(44_100, 1_000),
            Err(SineError::UnevenPeriod {
                sample_rate: 44_100,
                frequency: 1_000
            })
        );
    }

    #[test]
    fn test_render() {
        let table = SineTable::generate(4, 1).unwrap().with_name("tone");
        assert_eq!(
            table.to_string(),
            "int16_t tone[] = {\n    0,\n    2047,\n    0,\n    -2047,\n};\n"
        );
    }

    #[test]
    fn test_render_default_shape() {
        let text = SineTable::generate(48_000, 1_000).unwrap().to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 48 + 2);
        assert_eq!(lines[0], "int16_t samples[] = {");
        assert_eq!(lines[1], "    0,");
        assert_eq!(lines[49], "};");
    }
}
