//! Turn rotation over the event history.
//!
//! The queue is computed fresh from the full participant list and the full
//! event history; nothing here is persisted or mutated. Events must be
//! supplied newest-first; the resolver does not re-sort them.

use std::collections::{HashMap, VecDeque};

use crate::database::models::{Event, Participant};

/// Resolves the turn queue: index 0 is the participant who pays next.
///
/// Walking the history newest-to-oldest, each participant is decided by the
/// most recent real payment we see for them and pushed onto the front of the
/// queue, so whoever paid longest ago ends up first. Holiday placeholders
/// never decide anyone. Participants with no payment at all outrank everyone
/// else and are ordered by join date, then display name.
pub fn resolve_turn_order(participants: &[Participant], events_desc: &[Event]) -> Vec<String> {
    let mut undecided: HashMap<i64, &Participant> = participants
        .iter()
        .map(|p| (p.participant_id, p))
        .collect();
    let mut decided: VecDeque<&Participant> = VecDeque::with_capacity(participants.len());

    for event in events_desc {
        if undecided.is_empty() {
            break;
        }
        if event.not_available {
            continue;
        }
        let Some(participant_id) = event.participant_id else {
            continue;
        };
        if let Some(participant) = undecided.remove(&participant_id) {
            decided.push_front(participant);
        }
    }

    let mut never_paid: Vec<&Participant> = undecided.into_values().collect();
    never_paid.sort_by(|a, b| {
        a.join_date
            .cmp(&b.join_date)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });

    never_paid
        .into_iter()
        .chain(decided)
        .map(|p| p.display_name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn participant(id: i64, name: &str, joined: (i32, u32, u32)) -> Participant {
        Participant {
            participant_id: id,
            display_name: name.to_string(),
            join_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap(),
        }
    }

    fn payment(id: i64, participant_id: i64, date: (i32, u32, u32)) -> Event {
        Event {
            event_id: id,
            participant_id: Some(participant_id),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            not_available: false,
        }
    }

    fn holiday(id: i64, date: (i32, u32, u32)) -> Event {
        Event {
            event_id: id,
            participant_id: None,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            not_available: true,
        }
    }

    #[test]
    fn test_empty_participants_yield_empty_queue() {
        let events = vec![payment(1, 1, (2024, 5, 10))];
        assert!(resolve_turn_order(&[], &events).is_empty());
        assert!(resolve_turn_order(&[], &[]).is_empty());
    }

    #[test]
    fn test_least_recent_payer_goes_first() {
        let participants = vec![
            participant(1, "Alice", (2024, 1, 1)),
            participant(2, "Bob", (2024, 1, 1)),
            participant(3, "Carol", (2024, 1, 1)),
        ];
        let events = vec![
            payment(3, 3, (2024, 5, 10)),
            payment(2, 2, (2024, 5, 3)),
            payment(1, 1, (2024, 4, 26)),
        ];
        assert_eq!(
            resolve_turn_order(&participants, &events),
            vec!["Alice", "Bob", "Carol"]
        );
    }

    #[test]
    fn test_never_paid_outranks_any_payer() {
        let participants = vec![
            participant(1, "Alice", (2024, 1, 1)),
            participant(2, "Bob", (2024, 2, 1)),
        ];
        let events = vec![payment(1, 1, (2024, 5, 10))];
        assert_eq!(resolve_turn_order(&participants, &events), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_never_paid_tie_break_is_join_date_then_name() {
        let participants = vec![
            participant(1, "Zoe", (2024, 3, 1)),
            participant(2, "Ana", (2024, 3, 1)),
            participant(3, "Max", (2024, 1, 15)),
        ];
        assert_eq!(
            resolve_turn_order(&participants, &[]),
            vec!["Max", "Ana", "Zoe"]
        );
    }

    #[test]
    fn test_holidays_are_skipped_everywhere() {
        let participants = vec![
            participant(1, "Alice", (2024, 1, 1)),
            participant(2, "Bob", (2024, 1, 1)),
        ];
        let without_holidays = vec![
            payment(2, 2, (2024, 5, 10)),
            payment(1, 1, (2024, 5, 3)),
        ];
        let with_holidays = vec![
            holiday(4, (2024, 5, 17)),
            payment(2, 2, (2024, 5, 10)),
            holiday(3, (2024, 5, 4)),
            payment(1, 1, (2024, 5, 3)),
        ];
        assert_eq!(
            resolve_turn_order(&participants, &without_holidays),
            resolve_turn_order(&participants, &with_holidays)
        );
    }

    #[test]
    fn test_only_most_recent_payment_counts() {
        let participants = vec![
            participant(1, "Alice", (2024, 1, 1)),
            participant(2, "Bob", (2024, 1, 1)),
        ];
        // Alice paid twice; her older payment must not move her again.
        let events = vec![
            payment(3, 1, (2024, 5, 10)),
            payment(2, 2, (2024, 5, 3)),
            payment(1, 1, (2024, 4, 26)),
        ];
        assert_eq!(resolve_turn_order(&participants, &events), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_full_history_is_a_permutation() {
        let participants: Vec<Participant> = (1..=6)
            .map(|i| participant(i, &format!("P{i}"), (2024, 1, i as u32)))
            .collect();
        let events: Vec<Event> = (1..=6)
            .rev()
            .map(|i| payment(i, i, (2024, 5, i as u32)))
            .collect();
        let mut queue = resolve_turn_order(&participants, &events);
        assert_eq!(queue.len(), participants.len());
        queue.sort();
        queue.dedup();
        assert_eq!(queue.len(), participants.len());
    }

    #[test]
    fn test_events_for_unknown_participants_are_ignored() {
        let participants = vec![participant(1, "Alice", (2024, 1, 1))];
        let events = vec![payment(2, 99, (2024, 5, 10)), payment(1, 1, (2024, 5, 3))];
        assert_eq!(resolve_turn_order(&participants, &events), vec!["Alice"]);
    }
}
