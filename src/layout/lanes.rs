use crate::record::TimelineEntry;

/// Greedy first-fit lane assignment within one kind partition. Entries are
/// taken chronologically (a stable ascending sort over `sort_key`, so slice
/// order never changes the result and ties keep their arrival order); each
/// one goes into the lowest-index lane whose last occupant ended more than
/// `gap_years` before it starts, otherwise a new lane opens. Not globally
/// optimal, but deterministic and O(n * lanes), which is fine at
/// campaign-timeline sizes.
pub fn assign_lanes(entries: &mut [TimelineEntry], gap_years: i32) {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&index| entries[index].sort_key);

    // Scratch state: per-lane end year of the last placed entry.
    let mut lane_ends: Vec<i32> = Vec::new();

    for index in order {
        let entry = &mut entries[index];
        let start_year = entry.start_year;
        let end_year = entry.effective_end_year();

        let slot = lane_ends.iter().position(|&lane_end| lane_end < start_year - gap_years);
        match slot {
            Some(lane) => {
                lane_ends[lane] = lane_ends[lane].max(end_year);
                entry.lane = lane;
            }
            None => {
                entry.lane = lane_ends.len();
                lane_ends.push(end_year);
            }
        }
    }
}

/// Lanes used by a partition: highest lane index plus one, 0 when empty.
pub fn lane_count(entries: &[TimelineEntry]) -> usize {
    entries.iter().map(|e| e.lane + 1).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EntryKind;

    fn span(id: i64, start_year: i32, end_year: Option<i32>) -> TimelineEntry {
        TimelineEntry {
            id,
            name: format!("span {id}"),
            description: String::new(),
            kind: EntryKind::Period,
            start_year,
            end_year,
            duration: end_year.map(|e| e - start_year),
            sort_key: i64::from(start_year) * 366,
            display_date: String::new(),
            lane: 0,
        }
    }

    fn assert_no_same_lane_overlap(entries: &[TimelineEntry], gap: i32) {
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                if a.lane != b.lane {
                    continue;
                }
                let separated = a.effective_end_year() < b.start_year - gap
                    || b.effective_end_year() < a.start_year - gap;
                assert!(
                    separated,
                    "entries {} and {} share lane {} but are within the gap",
                    a.id, b.id, a.lane
                );
            }
        }
    }

    #[test]
    fn single_entry_gets_lane_zero() {
        let mut entries = vec![span(1, 1000, Some(1100))];
        assign_lanes(&mut entries, 5);
        assert_eq!(entries[0].lane, 0);
        assert_eq!(lane_count(&entries), 1);
    }

    #[test]
    fn overlapping_pair_splits_lanes() {
        let mut entries = vec![span(1, 1000, Some(1100)), span(2, 1050, Some(1150))];
        assign_lanes(&mut entries, 5);
        assert_eq!(entries[0].lane, 0);
        assert_eq!(entries[1].lane, 1);
    }

    #[test]
    fn disjoint_entries_share_a_lane() {
        let mut entries = vec![span(1, 1000, Some(1100)), span(2, 1200, Some(1300))];
        assign_lanes(&mut entries, 5);
        assert_eq!(entries[0].lane, 0);
        assert_eq!(entries[1].lane, 0);
        assert_eq!(lane_count(&entries), 1);
    }

    #[test]
    fn gap_boundary_is_strict() {
        // Ends 1100; next starts 1105: 1100 < 1105 - 5 is false, so new lane.
        let mut entries = vec![span(1, 1000, Some(1100)), span(2, 1105, None)];
        assign_lanes(&mut entries, 5);
        assert_eq!(entries[1].lane, 1);

        // Starts 1106: 1100 < 1101 holds, so it reuses lane 0.
        let mut entries = vec![span(1, 1000, Some(1100)), span(2, 1106, None)];
        assign_lanes(&mut entries, 5);
        assert_eq!(entries[1].lane, 0);
    }

    #[test]
    fn slice_order_does_not_change_assignment() {
        // Latest-first input: assignment still walks chronologically, so the
        // disjoint entries share lane 0 instead of opening one lane each.
        let mut entries = vec![span(3, 1400, Some(1450)), span(2, 1200, Some(1300)), span(1, 1000, Some(1100))];
        assign_lanes(&mut entries, 5);
        assert!(entries.iter().all(|e| e.lane == 0));
        assert_eq!(lane_count(&entries), 1);

        // And overlap handling matches the ascending-input result.
        let mut entries = vec![span(2, 1050, Some(1150)), span(1, 1000, Some(1100))];
        assign_lanes(&mut entries, 5);
        assert_eq!(entries[0].lane, 1);
        assert_eq!(entries[1].lane, 0);
    }

    #[test]
    fn pairwise_overlapping_entries_use_distinct_lanes() {
        let mut entries: Vec<TimelineEntry> =
            (0..6).map(|i| span(i, 1000 + i as i32, Some(2000))).collect();
        assign_lanes(&mut entries, 5);
        let mut lanes: Vec<usize> = entries.iter().map(|e| e.lane).collect();
        lanes.sort();
        assert_eq!(lanes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn pairwise_disjoint_entries_all_land_in_lane_zero() {
        let mut entries: Vec<TimelineEntry> =
            (0..6).map(|i| span(i, i as i32 * 200, Some(i as i32 * 200 + 50))).collect();
        assign_lanes(&mut entries, 5);
        assert!(entries.iter().all(|e| e.lane == 0));
    }

    #[test]
    fn freed_lanes_are_reused_first_fit() {
        let mut entries = vec![
            span(1, 1000, Some(1100)),
            span(2, 1050, Some(1070)),
            span(3, 1090, Some(1200)), // lane 0 still busy, lane 1 ended 1070 < 1085
            span(4, 1210, None),
        ];
        assign_lanes(&mut entries, 5);
        assert_eq!(entries[0].lane, 0);
        assert_eq!(entries[1].lane, 1);
        assert_eq!(entries[2].lane, 1);
        assert_eq!(entries[3].lane, 0);
        assert_no_same_lane_overlap(&entries, 5);
    }

    #[test]
    fn identical_sort_keys_take_first_fit_in_arrival_order() {
        let mut entries = vec![span(1, 1000, None), span(2, 1000, None), span(3, 1000, None)];
        assign_lanes(&mut entries, 5);
        assert_eq!(entries[0].lane, 0);
        assert_eq!(entries[1].lane, 1);
        assert_eq!(entries[2].lane, 2);
    }

    #[test]
    fn mixed_crowd_keeps_the_non_overlap_invariant() {
        let mut entries = vec![
            span(1, -3000, Some(-500)),
            span(2, -2500, Some(-2400)),
            span(3, -490, Some(0)),
            span(4, -10, None),
            span(5, 0, Some(900)),
            span(6, 850, Some(1100)),
            span(7, 1200, None),
        ];
        assign_lanes(&mut entries, 5);
        assert_no_same_lane_overlap(&entries, 5);
    }
}
