/// How a `/api/circuits/{param}` segment is resolved. Decided once in the
/// router and handed to the handler as is.
#[derive(Debug, Clone, PartialEq)]
pub enum CircuitLookup {
    ById(f64),
    ByRef(String),
}

impl CircuitLookup {
    /// Numeric-looking parameters are always ids, even when some circuit's
    /// reference happens to look like a number.
    pub fn from_param(param: &str) -> Self {
        match parse_numeric(param) {
            Some(id) => Self::ById(id),
            None => Self::ByRef(param.to_owned()),
        }
    }
}

// accepts decimal floats ("12", "007", "-3", "1.5", "1e3") and 0x/0o/0b integers
fn parse_numeric(param: &str) -> Option<f64> {
    let text = param.trim();
    if text.is_empty() {
        return None;
    }

    let radix = match text.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix).ok().map(|n| n as f64);
    }

    text.parse::<f64>().ok().filter(|n| n.is_finite())
}
