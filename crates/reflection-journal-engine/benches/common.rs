// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use chrono::{Duration, TimeZone, Utc};
use reflection_journal_engine::Comment;
use uuid::Uuid;

#[allow(dead_code)]
pub fn generate_entry_body(sections: usize) -> String {
    let base = "I keep coming back to Romans 8:28 and **what it does not promise**.\n\nWhy I agree:\n- Gen 50:20 shows the pattern\n- 2 Corinthians 4:17 names the weight\n\nWhy I wrestle:\n- Job 1:21 – 2:10 is not tidy\n- **Lament** is allowed, see Psalm 13\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_comments(count: usize) -> Vec<Comment> {
    const BODIES: [&str; 7] = [
        "[Agree] This matches my reading of James 1:2-4.",
        "[Disagree] I think Matt 5:4 points the other way.",
        "[Question] How does this square with Ecc 3:1?",
        "[Insight] The Hebrew behind Ps 23:4 is closer to 'deep darkness'.",
        "[Resource] Worth reading: https://example.org/lament",
        "[Prayer] Praying for everyone in a long season.",
        "No tag here, just a thank you.",
    ];
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    (0..count)
        .map(|i| Comment {
            id: Uuid::new_v4(),
            entry_id: Uuid::nil(),
            body: BODIES[i % BODIES.len()].to_string(),
            display_name: None,
            created_at: Some(start + Duration::minutes(i as i64)),
            approved: true,
        })
        .collect()
}
