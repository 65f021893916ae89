// Victim selection tests for FIFO, LRU and Optimal
#[cfg(test)]
mod tests {
    use crate::core::{
        event::AccessEvent,
        execution::config::{Algorithm, SimulationConfig},
        execution::simulation_engine::{simulate, ReplacementEngine},
        trace::Trace,
        types::{Address, PageNumber},
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn trace_of(pages: &[PageNumber]) -> Trace {
        Trace::from_addresses(pages.iter().map(|&page| Address::new(u16::from(page) << 8 | 0x10)))
            .unwrap()
    }

    fn faults(algorithm: Algorithm, frames: usize, trace: &Trace) -> u64 {
        let config = SimulationConfig::try_new(algorithm, frames).unwrap();
        simulate(&config, trace).1.faults
    }

    fn victims(algorithm: Algorithm, frames: usize, pages: &[PageNumber]) -> Vec<(PageNumber, usize)> {
        let config = SimulationConfig::try_new(algorithm, frames).unwrap();
        simulate(&config, &trace_of(pages))
            .0
            .into_iter()
            .filter_map(|event| match event {
                AccessEvent::FaultReplaced { victim_page, frame, .. } => Some((victim_page, frame)),
                _ => None,
            })
            .collect()
    }

    const TEXTBOOK: [PageNumber; 20] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];

    #[test]
    fn test_textbook_reference_string() {
        let trace = trace_of(&TEXTBOOK);
        assert_eq!(faults(Algorithm::Fifo, 3, &trace), 15);
        assert_eq!(faults(Algorithm::Lru, 3, &trace), 12);
        assert_eq!(faults(Algorithm::Optimal, 3, &trace), 9);
    }

    #[test]
    fn test_fifo_evicts_first_loaded() {
        assert_eq!(victims(Algorithm::Fifo, 3, &[4, 5, 6, 7]), vec![(4, 0)]);
    }

    #[test]
    fn test_fifo_ignores_hits() {
        // Page 1 is hit right before the fault but was still loaded first
        assert_eq!(victims(Algorithm::Fifo, 3, &[1, 2, 3, 1, 4]), vec![(1, 0)]);
    }

    #[test]
    fn test_fifo_round_robin_over_frames() {
        let evicted = victims(Algorithm::Fifo, 3, &[1, 2, 3, 4, 5, 6, 7]);
        let frames: Vec<usize> = evicted.iter().map(|&(_, frame)| frame).collect();
        assert_eq!(frames, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_fifo_belady_anomaly() {
        let trace = trace_of(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        assert_eq!(faults(Algorithm::Fifo, 3, &trace), 9);
        assert_eq!(faults(Algorithm::Fifo, 4, &trace), 10);
    }

    #[test]
    fn test_lru_evicts_least_recently_used() {
        // Hit on page 1 makes page 2 the oldest reference
        assert_eq!(victims(Algorithm::Lru, 3, &[1, 2, 3, 1, 4]), vec![(2, 1)]);
    }

    #[test]
    fn test_lru_without_hits_matches_fill_order() {
        assert_eq!(victims(Algorithm::Lru, 2, &[8, 9, 10]), vec![(8, 0)]);
    }

    #[test]
    fn test_lru_never_evicts_most_recent_page() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let pages: Vec<PageNumber> = (0..120).map(|_| rng.gen_range(0..10)).collect();
            let frames = rng.gen_range(2..=6);
            let config = SimulationConfig::try_new(Algorithm::Lru, frames).unwrap();
            let trace = trace_of(&pages);
            let mut previous: Option<PageNumber> = None;
            for event in ReplacementEngine::new(&config, &trace) {
                if let (Some(victim), Some(last)) = (event.victim_page(), previous) {
                    assert_ne!(victim, last);
                }
                previous = Some(event.page());
            }
        }
    }

    #[test]
    fn test_optimal_prefers_page_never_used_again() {
        assert_eq!(victims(Algorithm::Optimal, 3, &[1, 2, 3, 4, 1, 2]), vec![(3, 2)]);
    }

    #[test]
    fn test_optimal_evicts_furthest_next_use() {
        // At page 3: page 1 is next needed at position 4, page 2 at position 3
        assert_eq!(
            victims(Algorithm::Optimal, 2, &[1, 2, 3, 2, 1]),
            vec![(1, 0), (3, 0)]
        );
    }

    #[test]
    fn test_optimal_never_used_ties_take_lowest_frame() {
        assert_eq!(victims(Algorithm::Optimal, 3, &[1, 2, 3, 4]), vec![(1, 0)]);
    }

    #[test]
    fn test_optimal_cursor_advances_on_hits() {
        // Page 1's reference at position 2 is a hit; it must not count as a future use
        assert_eq!(victims(Algorithm::Optimal, 2, &[1, 2, 1, 3, 2]), vec![(1, 0)]);
    }

    #[test]
    fn test_optimal_never_worse_than_fifo_or_lru() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..300 {
            let len = rng.gen_range(1..=200);
            let distinct = rng.gen_range(1..=16);
            let pages: Vec<PageNumber> = (0..len).map(|_| rng.gen_range(0..distinct)).collect();
            let trace = trace_of(&pages);
            let frames = rng.gen_range(1..=8);

            let optimal = faults(Algorithm::Optimal, frames, &trace);
            let fifo = faults(Algorithm::Fifo, frames, &trace);
            let lru = faults(Algorithm::Lru, frames, &trace);
            assert!(optimal <= fifo, "optimal {} > fifo {} on {:?}", optimal, fifo, pages);
            assert!(optimal <= lru, "optimal {} > lru {} on {:?}", optimal, lru, pages);
        }
    }
}
