use ehpc_core::UnitError;

/// Converts a scheduler time literal to seconds.
///
/// Accepted shapes: `M` (minutes), `H:M`, `HH:MM:SS`, `DD-HH`, `DD-HH:MM`,
/// `DD-HH:MM:SS`. The bare two-field form is hours:minutes, not
/// minutes:seconds; this is the legacy convention and is relied upon by
/// existing scripts, so it is kept verbatim.
pub fn parse_time(raw: &str) -> Result<u64, UnitError> {
    let text = raw.trim();
    let fail = || UnitError::Time(raw.to_string());

    let (days, clock) = match text.split_once('-') {
        Some((d, rest)) => (Some(digits(d).ok_or_else(fail)?), rest),
        None => (None, text),
    };

    let fields = clock
        .split(':')
        .map(digits)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(fail)?;

    let secs = match (days, fields.as_slice()) {
        (None, [m]) => m.saturating_mul(60),
        (None, [h, m]) => h.saturating_mul(3600).saturating_add(m.saturating_mul(60)),
        (None, [h, m, s]) => h
            .saturating_mul(3600)
            .saturating_add(m.saturating_mul(60))
            .saturating_add(*s),
        (Some(d), [h]) => d.saturating_mul(86400).saturating_add(h.saturating_mul(3600)),
        (Some(d), [h, m]) => d
            .saturating_mul(86400)
            .saturating_add(h.saturating_mul(3600))
            .saturating_add(m.saturating_mul(60)),
        (Some(d), [h, m, s]) => d
            .saturating_mul(86400)
            .saturating_add(h.saturating_mul(3600))
            .saturating_add(m.saturating_mul(60))
            .saturating_add(*s),
        _ => return Err(fail()),
    };

    Ok(secs)
}

/// Converts a memory literal to megabytes. Optional case-insensitive unit
/// suffix: `K` rounds up to whole megabytes, `M` (or none) passes through,
/// `G` multiplies by 1024.
pub fn parse_memory(raw: &str) -> Result<u64, UnitError> {
    let text = raw.trim();
    let fail = || UnitError::Memory(raw.to_string());

    let (number, unit) = match text.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => {
            (&text[..text.len() - 1], Some(c.to_ascii_uppercase()))
        }
        Some(_) => (text, None),
        None => return Err(fail()),
    };

    let value = digits(number).ok_or_else(fail)?;
    match unit {
        None | Some('M') => Ok(value),
        Some('K') => Ok(value.div_ceil(1024)),
        Some('G') => Ok(value.saturating_mul(1024)),
        Some(_) => Err(fail()),
    }
}

/// Strict non-empty all-digit parse; rejects signs, whitespace and overflow.
fn digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
