/// A naive wall-clock token, parsed but deliberately not range-checked:
/// manually produced spreadsheets contain values like `25:10`, and the
/// minutes-from-midnight arithmetic stays total either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn minutes_from_midnight(&self) -> i32 {
        self.hour as i32 * 60 + self.minute as i32
    }
}

/// Parse a free-form clock-time token.
///
/// Layouts tried in order: `H:MM`/`HH:MM`, exactly four digits (`HHMM`),
/// exactly three digits (`HMM`).  Any other shape, an empty token, or a
/// numeric parse failure yields `None` ("no time") — callers treat it the
/// same as a missing check-in/out, never as an error.
pub fn parse_clock_time(token: &str) -> Option<ClockTime> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if let Some((hour_part, minute_part)) = token.split_once(':') {
        let hour = hour_part.parse().ok()?;
        let minute = minute_part.parse().ok()?;
        return Some(ClockTime { hour, minute });
    }
    if !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let split_at = match token.len() {
        4 => 2,
        3 => 1,
        _ => return None,
    };
    let hour = token[..split_at].parse().ok()?;
    let minute = token[split_at..].parse().ok()?;
    Some(ClockTime { hour, minute })
}

/// Worked hours between a check-in and a check-out token.
///
/// Returns 0.0 when either side yields no time.  An out-time earlier than
/// the in-time clamps to 0.0 rather than going negative; shifts crossing
/// midnight are out of scope.
pub fn worked_hours(in_token: Option<&str>, out_token: Option<&str>) -> f32 {
    let (Some(in_token), Some(out_token)) = (in_token, out_token) else {
        return 0.0;
    };
    let (Some(check_in), Some(check_out)) = (parse_clock_time(in_token), parse_clock_time(out_token))
    else {
        return 0.0;
    };
    let minutes = check_out.minutes_from_midnight() - check_in.minutes_from_midnight();
    (minutes as f32 / 60.0).max(0.0)
}
