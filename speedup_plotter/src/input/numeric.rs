//!
//! A numeric value that may be written either as a JSON number or a string.
//!

///
/// A numeric value that may be written either as a JSON number or a string.
///
/// The benchmarking tool writes parameter values as strings, e.g. `"threads": "4"`.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// A JSON number.
    Number(serde_json::Number),
    /// A string holding a number.
    Text(String),
}

impl Numeric {
    /// The smallest floating-point number that does not fit into `u64`.
    const U64_UPPER_BOUND: f64 = 18_446_744_073_709_551_616.0;

    ///
    /// Converts the value to a floating-point number.
    ///
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    ///
    /// Converts the value to an unsigned integer.
    ///
    /// Integral floating-point numbers such as `4.0` are accepted, fractional ones are rejected.
    ///
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(number) => number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| {
                        value.fract() == 0.0 && *value >= 0.0 && *value < Self::U64_UPPER_BOUND
                    })
                    .map(|value| value as u64)
            }),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Numeric;

    fn parse(text: &str) -> Numeric {
        serde_json::from_str(text).expect("Valid numeric")
    }

    #[test]
    fn number() {
        assert_eq!(parse("2.5").as_f64(), Some(2.5));
        assert_eq!(parse("4").as_u64(), Some(4));
        assert_eq!(parse("4").as_f64(), Some(4.0));
    }

    #[test]
    fn text() {
        assert_eq!(parse(r#""2.5""#).as_f64(), Some(2.5));
        assert_eq!(parse(r#"" 8 ""#).as_u64(), Some(8));
    }

    #[test]
    fn integral_float() {
        assert_eq!(parse("4.0").as_u64(), Some(4));
        assert_eq!(parse("1e3").as_u64(), Some(1000));
        assert_eq!(parse("1e20").as_u64(), None);
    }

    #[test]
    fn rejected() {
        assert_eq!(parse("4.5").as_u64(), None);
        assert_eq!(parse("-2.0").as_u64(), None);
        assert_eq!(parse(r#""4.0""#).as_u64(), None);
        assert_eq!(parse("-1").as_u64(), None);
        assert_eq!(parse(r#""four""#).as_u64(), None);
        assert_eq!(parse(r#""fast""#).as_f64(), None);
    }

    #[test]
    fn not_numeric() {
        assert!(serde_json::from_str::<Numeric>("true").is_err());
        assert!(serde_json::from_str::<Numeric>("null").is_err());
    }
}
