//! Resolución de una hora de reloj a la franja horaria (columna) correspondiente.
//!
//! Los encabezados de la planilla no traen AM/PM y a veces incluyen anotaciones
//! como "(inc. 10 min. break)". Regla de inferencia por extremo: hora en [8,12)
//! => AM, cualquier otra => PM. Asume que no hay sesiones antes de las 8:00 ni
//! después de las 11:59 PM; cada extremo se infiere por separado porque una
//! franja puede cruzar el mediodía (11:00AM-1:30PM).

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, TimetableError};
use crate::models::RegionKind;

/// Franja normalizada: texto "<inicio><AM|PM>-<fin><AM|PM>" y sus horas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInterval {
    pub text: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

fn meridiem(hour: u32) -> &'static str {
    if (8..12).contains(&hour) { "AM" } else { "PM" }
}

/// Etiqueta sin la anotación entre paréntesis.
fn strip_annotation(label: &str) -> &str {
    match label.find('(') {
        Some(pos) => label[..pos].trim(),
        None => label.trim(),
    }
}

fn endpoint_with_meridiem(raw: &str) -> Option<(String, NaiveTime)> {
    let clock: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == ':').collect();
    let hour = clock.split(':').next()?.parse::<u32>().ok()?;
    let text = format!("{}{}", clock, meridiem(hour));
    let time = NaiveTime::parse_from_str(&text, "%I:%M%p").ok()?;
    Some((text, time))
}

/// Normaliza una etiqueta como "11:00 - 1:30 (inc. 10 min. break)" a "11:00AM-1:30PM".
pub fn normalize_label(label: &str) -> Option<NormalizedInterval> {
    let parts: Vec<&str> = strip_annotation(label).split('-').collect();
    if parts.len() != 2 {
        return None;
    }
    let (start_text, start) = endpoint_with_meridiem(parts[0].trim())?;
    let (end_text, end) = endpoint_with_meridiem(parts[1].trim())?;
    Some(NormalizedInterval { text: format!("{}-{}", start_text, end_text), start, end })
}

/// Clave compacta de una etiqueta: sin anotación y sólo dígitos, ':' y '-'.
pub fn compact_label(label: &str) -> String {
    strip_annotation(label)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':' || *c == '-')
        .collect()
}

/// Interpreta una hora de reloj ("12:15PM", "12:15 pm", "12:15:30 PM", "14:05").
/// Los segundos se descartan.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_uppercase();
    let formats = ["%I:%M%p", "%I:%M:%S%p", "%H:%M", "%H:%M:%S"];
    formats
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(&compact, f).ok())
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .ok_or_else(|| TimetableError::InvalidTime(s.to_string()))
}

fn same_minute(a: NaiveTime, b: NaiveTime) -> bool {
    a.hour() == b.hour() && a.minute() == b.minute()
}

/// Índice de la primera etiqueta que contiene `query` (extremos incluidos).
pub fn find_matching_index(query: NaiveTime, labels: &[String]) -> Option<usize> {
    for (i, label) in labels.iter().enumerate() {
        let interval = match normalize_label(label) {
            Some(n) => n,
            None => {
                log::debug!("skipping timeslot label '{}': cannot normalize", label);
                continue;
            }
        };
        if interval.start <= query && query <= interval.end {
            return Some(i);
        }
        if same_minute(query, interval.end) {
            return Some(i);
        }
    }
    None
}

/// Devuelve la etiqueta original completa que corresponde a `query_time`.
pub fn match_timeslot_label<'a>(query_time: &str, labels: &'a [String], kind: RegionKind) -> Result<Option<&'a str>> {
    let query = parse_clock_time(query_time)?;
    let found = find_matching_index(query, labels).map(|i| labels[i].as_str());
    match found {
        Some(l) => log::debug!("{} {} falls within '{}'", kind, query.format("%I:%M %p"), l),
        None => log::debug!("{} {} does not fall within any interval", kind, query.format("%I:%M %p")),
    }
    Ok(found)
}

/// Franja que contiene `query_time`, como clave compacta ("11:00-1:30"), o `None`
/// si la hora queda fuera de todas (fuera de horario, sin sesión).
pub fn match_timeslot(query_time: &str, labels: &[String], kind: RegionKind) -> Result<Option<String>> {
    Ok(match_timeslot_label(query_time, labels, kind)?.map(compact_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_label_cross_noon() {
        let n = normalize_label("11:00 - 1:30 (inc. 10 min. break)").unwrap();
        assert_eq!(n.text, "11:00AM-1:30PM");
        assert_eq!(n.start, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(n.end, NaiveTime::from_hms_opt(13, 30, 0).unwrap());
    }

    #[test]
    fn test_normalize_label_afternoon_and_noon() {
        assert_eq!(normalize_label("05:20 - 08:05 (inc. 10 min. break)  ").unwrap().text, "05:20PM-08:05AM");
        assert_eq!(normalize_label("12:30-1:50").unwrap().text, "12:30PM-1:50PM");
        assert!(normalize_label("Room").is_none());
        assert!(normalize_label("13:00-14:20").is_none());
    }

    #[test]
    fn test_match_timeslot_inside_and_outside() {
        let l = labels(&["11:00 - 1:30 (inc. 10 min. break)"]);
        assert_eq!(match_timeslot("12:15PM", &l, RegionKind::Lab).unwrap(), Some("11:00-1:30".to_string()));
        assert_eq!(match_timeslot("2:00PM", &l, RegionKind::Lab).unwrap(), None);
    }

    #[test]
    fn test_match_timeslot_first_candidate_wins_on_boundary() {
        let l = labels(&["8:00-9:20", "9:20-10:40"]);
        assert_eq!(match_timeslot("9:20 AM", &l, RegionKind::Class).unwrap(), Some("8:00-9:20".to_string()));
        assert_eq!(match_timeslot("9:21AM", &l, RegionKind::Class).unwrap(), Some("9:20-10:40".to_string()));
    }

    #[test]
    fn test_match_timeslot_ignores_seconds() {
        let l = labels(&["8:00-9:20"]);
        assert_eq!(match_timeslot("9:20:45 AM", &l, RegionKind::Class).unwrap(), Some("8:00-9:20".to_string()));
    }

    #[test]
    fn test_match_timeslot_invalid_query() {
        let l = labels(&["8:00-9:20"]);
        assert!(matches!(match_timeslot("noon", &l, RegionKind::Class), Err(TimetableError::InvalidTime(_))));
    }

    #[test]
    fn test_match_timeslot_label_returns_original() {
        let l = labels(&["8:00-9:20", "11:00 - 1:30 (inc. 10 min. break)"]);
        assert_eq!(
            match_timeslot_label("1:00 pm", &l, RegionKind::Lab).unwrap(),
            Some("11:00 - 1:30 (inc. 10 min. break)")
        );
    }

    #[test]
    fn test_compact_label() {
        assert_eq!(compact_label("11:00 - 1:30 (inc. 10 min. break)"), "11:00-1:30");
        assert_eq!(compact_label("8:00-9:20"), "8:00-9:20");
    }
}
