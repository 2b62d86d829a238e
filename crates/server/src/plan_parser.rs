use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// One exercise parsed out of a numbered plan line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExercise {
    pub name: String,
    pub reps: u32,
}

/// All exercises listed under one day heading, in text order. The day is
/// kept as written; resolving it to a weekday happens at import time
#[derive(Debug, Clone, PartialEq)]
pub struct DaySection {
    pub day: String,
    pub exercises: Vec<ParsedExercise>,
}

// e.g. "2. Bench Press: 4 sets of 6 reps;"
fn item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\d+\.\s*(.+?):\s*(\d+)\s*sets\s*of\s*(\d+)\s*reps")
            .expect("item regex is valid")
    })
}

// e.g. "3. Plank" with no sets/reps part the model was asked for
fn fallback_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*(.+)").expect("fallback regex is valid"))
}

/// Best-effort parse of free-form AI plan text into day sections.
///
/// The expected shape is day headings ending in a colon followed by
/// numbered exercise lines. Generated text drifts, so this degrades per
/// line instead of failing: a numbered line without the sets/reps pattern
/// keeps its text as the exercise name with reps 0, anything before the
/// first day heading is dropped, and blank lines are skipped
pub fn parse_plan(text: &str) -> Vec<DaySection> {
    let mut sections: Vec<DaySection> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(day) = line.strip_suffix(':') {
            sections.push(DaySection { day: day.trim().to_string(), exercises: Vec::new() });
            continue;
        }

        let Some(section) = sections.last_mut() else {
            warn!(line, "Skipping plan line before any day heading");
            continue;
        };

        if let Some(captures) = item_regex().captures(line) {
            let name = captures[1].trim().to_string();
            // capture 3 is the rep count; capture 2 (sets) is unused here
            let reps = captures[3].parse().unwrap_or(0);
            section.exercises.push(ParsedExercise { name, reps });
        } else if let Some(captures) = fallback_regex().captures(line) {
            section
                .exercises
                .push(ParsedExercise { name: captures[1].trim().to_string(), reps: 0 });
        }
        // Non-numbered prose between items is ignored
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Monday:
1. Bench Press: 4 sets of 6 reps;
2. Incline Dumbbell Press: 3 sets of 10 reps

Wednesday:
1. Squat: 5 sets of 5 reps
2. Walking Lunges

Funday:
1. Anything: 2 sets of 12 reps
";

    #[test]
    fn parses_days_and_numbered_exercises() {
        let sections = parse_plan(SAMPLE);
        assert_eq!(sections.len(), 3);

        assert_eq!(sections[0].day, "Monday");
        assert_eq!(
            sections[0].exercises,
            vec![
                ParsedExercise { name: "Bench Press".to_string(), reps: 6 },
                ParsedExercise { name: "Incline Dumbbell Press".to_string(), reps: 10 },
            ]
        );
    }

    #[test]
    fn unnumbered_pattern_falls_back_to_zero_reps() {
        let sections = parse_plan(SAMPLE);
        assert_eq!(
            sections[1].exercises[1],
            ParsedExercise { name: "Walking Lunges".to_string(), reps: 0 }
        );
    }

    #[test]
    fn day_names_are_kept_verbatim_even_when_unknown() {
        // "Funday" is not a weekday; rejecting it is the importer's call
        let sections = parse_plan(SAMPLE);
        assert_eq!(sections[2].day, "Funday");
        assert_eq!(sections[2].exercises.len(), 1);
    }

    #[test]
    fn lines_before_the_first_heading_are_dropped() {
        let sections = parse_plan("1. Orphan Exercise: 3 sets of 8 reps\nFriday:\n1. Curl: 3 sets of 12 reps\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].day, "Friday");
        assert_eq!(sections[0].exercises.len(), 1);
    }

    #[test]
    fn empty_text_parses_to_no_sections() {
        assert!(parse_plan("").is_empty());
        assert!(parse_plan("\n  \n").is_empty());
    }

    #[test]
    fn case_insensitive_sets_of_reps() {
        let sections = parse_plan("Tuesday:\n1. Deadlift: 3 Sets Of 5 Reps");
        assert_eq!(
            sections[0].exercises[0],
            ParsedExercise { name: "Deadlift".to_string(), reps: 5 }
        );
    }
}
