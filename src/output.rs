use std::fmt;
use std::io::Write;

/// A converted argument, kept only until it is printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedValue {
    Float(f64),
    Integer(i64),
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Float(value) if value.is_nan() => {
                f.write_str(if value.is_sign_negative() { "-nan" } else { "nan" })
            }
            // Same shape as printf("%Lf"): fixed-point, six decimals
            ParsedValue::Float(value) => write!(f, "{:.6}", value),
            ParsedValue::Integer(value) => write!(f, "{}", value),
        }
    }
}

pub struct OutputWriter {
    writer: Box<dyn Write>,
    lines_written: usize,
}

impl OutputWriter {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Write one value per line, flushing so earlier values survive a later failure.
    pub fn write_value(&mut self, value: &ParsedValue) -> std::io::Result<()> {
        writeln!(self.writer, "{}", value)?;
        self.writer.flush()?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared buffer so the test can read back what the boxed writer received.
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_float_format() {
        assert_eq!(ParsedValue::Float(1000.0).to_string(), "1000.000000");
        assert_eq!(ParsedValue::Float(-0.5).to_string(), "-0.500000");
        assert_eq!(ParsedValue::Float(1.0 / 3.0).to_string(), "0.333333");
    }

    #[test]
    fn test_non_finite_format() {
        assert_eq!(ParsedValue::Float(f64::NAN).to_string(), "nan");
        assert_eq!(ParsedValue::Float(-f64::NAN).to_string(), "-nan");
        assert_eq!(ParsedValue::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(ParsedValue::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_integer_format() {
        assert_eq!(ParsedValue::Integer(-42).to_string(), "-42");
        assert_eq!(
            ParsedValue::Integer(i64::MAX).to_string(),
            "9223372036854775807"
        );
    }

    #[test]
    fn test_writer_one_line_per_value() {
        let buf = SharedBuf::default();
        let mut output = OutputWriter::new(Box::new(buf.clone()));

        output.write_value(&ParsedValue::Float(3.0)).unwrap();
        output.write_value(&ParsedValue::Integer(7)).unwrap();

        assert_eq!(output.lines_written(), 2);
        let written = String::from_utf8(buf.0.borrow().clone()).unwrap();
        assert_eq!(written, "3.000000\n7\n");
    }
}
