//! Property-based tests for queue, shuffle and history behavior

mod common;

use common::{ids, seeded_config, tracks, Harness};
use proptest::prelude::*;

fn id_list(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,3}", 1..max)
}

fn as_refs(ids: &[String]) -> Vec<&str> {
    ids.iter().map(String::as_str).collect()
}

proptest! {
    #[test]
    fn queue_is_suffix_after_first_occurrence(list in id_list(30), pick in any::<prop::sample::Index>()) {
        let mut h = Harness::new();
        let context = tracks(&as_refs(&list));
        let index = pick.index(context.len());
        let first = list.iter().position(|id| *id == list[index]).unwrap();

        h.engine.play_track(context[index].clone(), &context, true);

        prop_assert_eq!(h.queue_ids(), list[first + 1..].to_vec());
    }

    #[test]
    fn shuffle_round_trip_restores_queue(list in id_list(40), seed in any::<u64>()) {
        let mut h = Harness::with_config(seeded_config(seed));
        h.engine.set_queue(tracks(&as_refs(&list)));

        h.engine.toggle_shuffle();
        let mut shuffled = h.queue_ids();
        shuffled.sort();
        let mut sorted = list.clone();
        sorted.sort();
        prop_assert_eq!(shuffled, sorted);

        h.engine.toggle_shuffle();
        prop_assert_eq!(h.queue_ids(), list);
    }

    #[test]
    fn history_never_exceeds_bound(count in 1usize..120) {
        let mut h = Harness::new();
        let names: Vec<String> = (0..count).map(|i| format!("t{}", i)).collect();
        let context = tracks(&as_refs(&names));
        h.engine.play_track(context[0].clone(), &context, true);

        for _ in 0..count {
            h.engine.skip_to_next();
            prop_assert!(h.engine.history().len() <= 50);
        }

        prop_assert_eq!(h.engine.history().len(), (count - 1).min(50));
        prop_assert_eq!(ids(&h.engine.history()).first().cloned(), count.checked_sub(2).map(|i| format!("t{}", i)));
    }
}
