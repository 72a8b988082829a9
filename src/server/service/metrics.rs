//! Metrics computed over aggregated records.
//!
//! Every function here is pure: it works on records that were already fetched
//! and never touches a regional store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use dioxus_logger::tracing;

use crate::model::{
    ausencia::Ausencia,
    metrics::{AbsenceMetricsDto, CategoryCountDto, DayCountDto, EventMetricsDto},
    novedad::Novedad,
    range::DateRange,
    record::Dated,
};

/// Rounds to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Share of `count` in `total` in percent, 0 when there is nothing to share
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    round1(count as f64 * 100.0 / total as f64)
}

/// Counts records per category value
///
/// Every `known` category is listed even when no record carries it. The result
/// is sorted by count, highest first, then by label.
pub fn count_by<T, F, S>(records: &[T], key: F, known: &[S]) -> Vec<CategoryCountDto>
where
    F: Fn(&T) -> &str,
    S: AsRef<str>,
{
    let mut counts: BTreeMap<&str, u64> = known.iter().map(|label| (label.as_ref(), 0)).collect();

    for record in records {
        *counts.entry(key(record)).or_insert(0) += 1;
    }

    let total = records.len() as u64;
    let mut categories: Vec<CategoryCountDto> = counts
        .into_iter()
        .map(|(label, count)| CategoryCountDto {
            label: label.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect();

    categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

    categories
}

/// Category with the highest count, smallest label on ties
///
/// Returns `None` when no category has a single record.
pub fn most_frequent(categories: &[CategoryCountDto]) -> Option<CategoryCountDto> {
    categories
        .iter()
        .filter(|category| category.count > 0)
        .min_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)))
        .cloned()
}

/// Events per day for every day of `range`, ascending, days without events included
///
/// Events whose date can't be read, or that fall outside `range`, are left out
/// of the series and logged.
pub fn events_per_day(events: &[Novedad], range: &DateRange) -> Vec<DayCountDto> {
    let mut counts: BTreeMap<NaiveDate, u64> = range.dates().map(|day| (day, 0)).collect();

    let mut uncounted = 0;
    for event in events {
        let count = match event.day() {
            Some(day) => counts.get_mut(&day),
            None => None,
        };

        match count {
            Some(count) => *count += 1,
            None => {
                tracing::warn!(
                    "{} event {} dated {:?} left out of the per-day series",
                    event.project,
                    event.id,
                    event.date
                );
                uncounted += 1;
            }
        }
    }

    if uncounted > 0 {
        tracing::warn!(
            "{} of {} events are missing from the per-day series",
            uncounted,
            events.len()
        );
    }

    counts
        .into_iter()
        .map(|(day, count)| DayCountDto {
            date: day.format("%Y-%m-%d").to_string(),
            count,
        })
        .collect()
}

/// Day with the most events, earliest day on ties
///
/// Returns `None` when no day has a single event.
pub fn busiest_day(days: &[DayCountDto]) -> Option<DayCountDto> {
    days.iter()
        .filter(|day| day.count > 0)
        .min_by(|a, b| b.count.cmp(&a.count).then_with(|| a.date.cmp(&b.date)))
        .cloned()
}

/// Average absence duration in days rounded to one decimal, 0 without absences
pub fn average_duration(absences: &[Ausencia]) -> f64 {
    if absences.is_empty() {
        return 0.0;
    }

    let days: i64 = absences.iter().map(|absence| absence.duration_days).sum();

    round1(days as f64 / absences.len() as f64)
}

/// Absences per position among those of one client
///
/// Percentages are relative to the client's absences, not to every absence.
pub fn positions_for_client(absences: &[Ausencia], client: &str) -> Vec<CategoryCountDto> {
    let of_client: Vec<&Ausencia> = absences
        .iter()
        .filter(|absence| absence.client == client)
        .collect();

    count_by(&of_client, |absence| absence.position.as_str(), &[] as &[&str])
}

/// Statistics of an aggregated event list over `range`
///
/// # Arguments
/// - `events` - Deduplicated events of every region
/// - `range` - Range the events were requested for
/// - `known_projects` - Projects listed even when they have no events
pub fn event_metrics<S>(events: &[Novedad], range: &DateRange, known_projects: &[S]) -> EventMetricsDto
where
    S: AsRef<str>,
{
    let by_type = count_by(events, |event| event.event_type.as_str(), &[] as &[&str]);
    let by_day = events_per_day(events, range);

    EventMetricsDto {
        total: events.len() as u64,
        days_analyzed: range.days(),
        critical: events.iter().filter(|event| event.critical).count() as u64,
        top_type: most_frequent(&by_type),
        busiest_day: busiest_day(&by_day),
        by_project: count_by(events, |event| event.project.as_str(), known_projects),
        by_client: count_by(events, |event| event.client.as_str(), &[] as &[&str]),
        by_type,
        by_day,
    }
}

/// Statistics of an aggregated absence list
///
/// # Arguments
/// - `absences` - Deduplicated absences of every region
/// - `known_types` - Absence types listed even when no absence has them
/// - `known_projects` - Projects listed even when they have no absences
pub fn absence_metrics<S, P>(absences: &[Ausencia], known_types: &[S], known_projects: &[P]) -> AbsenceMetricsDto
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    AbsenceMetricsDto {
        total: absences.len() as u64,
        average_duration_days: average_duration(absences),
        by_type: count_by(absences, |absence| absence.absence_type.as_str(), known_types),
        by_project: count_by(absences, |absence| absence.project.as_str(), known_projects),
        by_client: count_by(absences, |absence| absence.client.as_str(), &[] as &[&str]),
        by_position: count_by(absences, |absence| absence.position.as_str(), &[] as &[&str]),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::server::util::test::factory;

    fn range(from: &str, to: &str) -> DateRange {
        let parse = |day: &str| NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap();
        DateRange::new(parse(from), parse(to)).unwrap()
    }

    fn count<'a>(categories: &'a [CategoryCountDto], label: &str) -> Option<&'a CategoryCountDto> {
        categories.iter().find(|category| category.label == label)
    }

    mod absences {
        use super::*;

        /// Expect known types without absences to be listed with a zero count
        #[test]
        fn zero_fills_known_types() {
            let absences = vec![
                factory::ausencia(1, "CARTAGENA", "Enfermedad", 2),
                factory::ausencia(2, "CARTAGENA", "Enfermedad", 1),
                factory::ausencia(3, "BARRANQUILLA", "Incumplimiento de horario", 1),
            ];
            let known = ["Enfermedad", "Incumplimiento de horario", "Accidente laboral"];

            let metrics = absence_metrics(&absences, &known, &["BARRANQUILLA", "CARTAGENA"]);

            assert_eq!(metrics.total, 3);

            let enfermedad = count(&metrics.by_type, "Enfermedad").unwrap();
            assert_eq!(enfermedad.count, 2);
            assert_eq!(enfermedad.percentage, 66.7);

            let horario = count(&metrics.by_type, "Incumplimiento de horario").unwrap();
            assert_eq!(horario.count, 1);
            assert_eq!(horario.percentage, 33.3);

            let accidente = count(&metrics.by_type, "Accidente laboral").unwrap();
            assert_eq!(accidente.count, 0);
            assert_eq!(accidente.percentage, 0.0);
        }

        /// Expect zero percentages and average rather than a division by zero
        #[test]
        fn empty_list_has_zero_metrics() {
            let metrics = absence_metrics(&[], &["Enfermedad"], &["CARTAGENA"]);

            assert_eq!(metrics.total, 0);
            assert_eq!(metrics.average_duration_days, 0.0);
            assert_eq!(metrics.by_type[0].count, 0);
            assert_eq!(metrics.by_type[0].percentage, 0.0);
            assert_eq!(metrics.by_project[0].percentage, 0.0);
        }

        /// Expect the average duration rounded to one decimal
        #[test]
        fn averages_duration() {
            let absences = vec![
                factory::ausencia(1, "CARTAGENA", "Enfermedad", 1),
                factory::ausencia(2, "CARTAGENA", "Enfermedad", 2),
                factory::ausencia(3, "CARTAGENA", "Enfermedad", 2),
            ];

            assert_eq!(average_duration(&absences), 1.7);
        }

        /// Expect positions counted only among the selected client's absences
        #[test]
        fn positions_for_selected_client() {
            let mut other = factory::ausencia(3, "CARTAGENA", "Enfermedad", 1);
            other.client = "Cliente B".to_string();
            let mut reception = factory::ausencia(2, "CARTAGENA", "Enfermedad", 1);
            reception.position = "Recepción".to_string();
            let absences = vec![
                factory::ausencia(1, "CARTAGENA", "Enfermedad", 1),
                reception,
                other,
            ];

            let positions = positions_for_client(&absences, "Cliente A");

            assert_eq!(positions.len(), 2);
            assert_eq!(positions[0].label, "Portería");
            assert_eq!(positions[0].percentage, 50.0);
            assert_eq!(positions[1].label, "Recepción");
        }
    }

    mod events {
        use super::*;

        /// Expect every day of the range listed, days without events at zero
        #[test]
        fn zero_fills_days_of_range() {
            let events = vec![
                factory::novedad(1, "CARTAGENA", "2024-01-02", "Ronda"),
                factory::novedad(2, "CARTAGENA", "2024-01-02", "Ronda"),
                factory::novedad(3, "CARTAGENA", "2024-01-03T10:00:00", "Ronda"),
            ];

            let days = events_per_day(&events, &range("2024-01-01", "2024-01-03"));

            let counts: Vec<(&str, u64)> = days.iter().map(|d| (d.date.as_str(), d.count)).collect();
            assert_eq!(
                counts,
                vec![("2024-01-01", 0), ("2024-01-02", 2), ("2024-01-03", 1)]
            );
        }

        /// Expect an event with an unreadable date in the total but not in the per-day series
        #[test]
        fn unreadable_date_is_left_out_of_series() {
            let events = vec![
                factory::novedad(1, "CARTAGENA", "2024-01-01", "Ronda"),
                factory::novedad(2, "CARTAGENA", "01/01/2024", "Ronda"),
            ];

            let metrics = event_metrics(&events, &range("2024-01-01", "2024-01-01"), &["CARTAGENA"]);

            assert_eq!(metrics.total, 2);
            assert_eq!(metrics.by_day[0].count, 1);
            assert_eq!(metrics.busiest_day.unwrap().count, 1);
        }

        /// Expect the earliest day to win a tie for busiest day
        #[test]
        fn busiest_day_tie_picks_earliest() {
            let events = vec![
                factory::novedad(1, "CARTAGENA", "2024-01-03", "Ronda"),
                factory::novedad(2, "CARTAGENA", "2024-01-02", "Ronda"),
            ];

            let metrics = event_metrics(&events, &range("2024-01-01", "2024-01-03"), &["CARTAGENA"]);

            assert_eq!(metrics.busiest_day.unwrap().date, "2024-01-02");
        }

        /// Expect the lexicographically smallest type to win a tie for most frequent
        #[test]
        fn top_type_tie_picks_smallest_label() {
            let events = vec![
                factory::novedad(1, "CARTAGENA", "2024-01-01", "Ronda"),
                factory::novedad(2, "CARTAGENA", "2024-01-01", "Alarma"),
            ];

            let metrics = event_metrics(&events, &range("2024-01-01", "2024-01-01"), &["CARTAGENA"]);

            assert_eq!(metrics.top_type.unwrap().label, "Alarma");
        }

        /// Expect totals, critical count and zero-filled projects
        #[test]
        fn summarizes_events() {
            let mut critical = factory::novedad(2, "CARTAGENA", "2024-01-01", "Alarma");
            critical.critical = true;
            let events = vec![
                factory::novedad(1, "CARTAGENA", "2024-01-01", "Ronda"),
                critical,
            ];

            let metrics = event_metrics(
                &events,
                &range("2024-01-01", "2024-01-07"),
                &["BARRANQUILLA", "CARTAGENA"],
            );

            assert_eq!(metrics.total, 2);
            assert_eq!(metrics.critical, 1);
            assert_eq!(metrics.days_analyzed, 7);
            assert_eq!(metrics.by_day.len(), 7);
            assert_eq!(count(&metrics.by_project, "CARTAGENA").unwrap().percentage, 100.0);
            assert_eq!(count(&metrics.by_project, "BARRANQUILLA").unwrap().count, 0);
        }

        /// Expect no top type nor busiest day without events
        #[test]
        fn empty_list_has_no_extremes() {
            let metrics = event_metrics(&[], &range("2024-01-01", "2024-01-02"), &["CARTAGENA"]);

            assert_eq!(metrics.total, 0);
            assert!(metrics.top_type.is_none());
            assert!(metrics.busiest_day.is_none());
            assert_eq!(metrics.by_day.len(), 2);
        }
    }
}
