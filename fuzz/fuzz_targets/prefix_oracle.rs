#![no_main]
use kraft::prefix::{find_prefix_violation, find_prefix_violation_pairwise};
use kraft::{analyze, AnalysisOptions, Code};
use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;

fuzz_target!(|data: (String, u8)| {
    let (text, n) = data;
    let code = Code::from_text(&text);

    // The trie must agree with the quadratic reference.
    let trie = find_prefix_violation(code.words());
    let pairwise = find_prefix_violation_pairwise(code.words());
    assert_eq!(trie.is_some(), pairwise.is_some());

    let options = AnalysisOptions {
        message_length: Some(n as usize),
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let report = match analyze(&code, &options, &mut rng) {
        Ok(r) => r,
        Err(_) => return,
    };
    if !report.is_kraft_valid() {
        assert!(report.compactness.is_none());
        assert!(report.metrics.is_none());
    }
});
