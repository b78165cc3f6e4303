/// Why a single argument could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvError {
    /// The value does not fit the target representation.
    Range { input: String },
    /// No numeric prefix at all.
    NoDigits { input: String },
    /// Unconsumed text after the number (and suffix).
    TrailingCharacters { rest: String },
    /// Human mode found a letter outside K/M/G/T/P.
    InvalidSuffix { suffix: char },
}

impl std::fmt::Display for ConvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvError::Range { input } => {
                write!(f, "conversion of '{}' failed: numerical result out of range", input)
            }
            ConvError::NoDigits { input } => write!(f, "No digits were found in '{}'", input),
            ConvError::TrailingCharacters { rest } => {
                write!(f, "Extra characters found: '{}'", rest)
            }
            ConvError::InvalidSuffix { suffix } => {
                write!(f, "Invalid suffix '{}' (expected one of K, M, G, T, P)", suffix)
            }
        }
    }
}

impl std::error::Error for ConvError {}

/// Command-line misuse detected after flag parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    NoMode,
    NoValues,
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageError::NoMode => write!(f, "no type specified (-d/-l/-h)"),
            UsageError::NoValues => write!(f, "no values specified"),
        }
    }
}

impl std::error::Error for UsageError {}
