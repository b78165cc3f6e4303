use crate::config::Config;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

/// Convert every value of `config` in order, writing one line each to `writer`.
///
/// Stops at the first value that fails to parse; lines for the values before it
/// have already been written. Returns the number of lines written.
pub fn convert(config: &Config, writer: Box<dyn Write>) -> Result<usize> {
    let mode = config.validate()?;
    info!("converting {} value(s) as {:?}", config.values.len(), mode);

    let mut output = OutputWriter::new(writer);

    for (index, text) in config.values.iter().enumerate() {
        let value = mode
            .parse(text)
            .with_context(|| format!("Failed to convert argument {} ('{}')", index + 1, text))?;
        debug!("{:?} -> {:?}", text, value);

        output
            .write_value(&value)
            .context("Failed to write output")?;
    }

    Ok(output.lines_written())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseMode;
    use crate::error::{ConvError, UsageError};

    fn config(mode: Option<ParseMode>, values: &[&str]) -> Config {
        Config {
            mode,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_counts_lines() {
        let written = convert(
            &config(Some(ParseMode::Human), &["1K", "2Mi", "3"]),
            Box::new(std::io::sink()),
        )
        .unwrap();
        assert_eq!(written, 3);
    }

    #[test]
    fn test_usage_error_surfaces() {
        let err = convert(&config(None, &["1"]), Box::new(std::io::sink())).unwrap_err();
        assert_eq!(err.downcast_ref::<UsageError>(), Some(&UsageError::NoMode));
    }

    #[test]
    fn test_first_failure_stops() {
        let err = convert(
            &config(Some(ParseMode::Long), &["1", "x", "2"]),
            Box::new(std::io::sink()),
        )
        .unwrap_err();

        assert!(err.to_string().contains("argument 2"));
        assert!(matches!(
            err.downcast_ref::<ConvError>(),
            Some(ConvError::NoDigits { .. })
        ));
    }
}
