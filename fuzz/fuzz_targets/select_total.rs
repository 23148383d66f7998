use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let text = String::from_utf8_lossy(data);
            let solution = cezar::select(&text);
            assert_eq!(solution.candidates.len(), 26);
            assert_eq!(solution.best_text, solution.candidates[solution.best_shift as usize]);
            for (shift, candidate) in solution.candidates.iter().enumerate() {
                assert_eq!(cezar::encrypt(candidate, shift as i64), text);
            }
        });
    }
}
