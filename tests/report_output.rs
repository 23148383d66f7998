use std::fs;

use cezar::{save_solution, select, write_report, Solution, Verdict};

fn render(solution: &Solution) -> String {
    let mut out = Vec::new();
    write_report(&mut out, solution).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn lists_every_candidate_and_the_shift() {
    let solution = select("epomj ezno yudndve");
    let text = render(&solution);
    for candidate in &solution.candidates {
        assert!(text.contains(candidate.as_str()));
    }
    assert!(text.contains("Odszyfrowana wiadomość: jutro jest dzisiaj"));
    assert!(text.contains("Ilość przesunięć: 21"));
    assert!(!text.contains("Email:"));
}

#[test]
fn prints_extracted_email() {
    let solution = select("Napisz do mnie: test@example.com");
    let text = render(&solution);
    assert!(text.contains("Email: test@example.com"));
}

#[test]
fn empty_best_text_reports_failure() {
    let solution = Solution {
        best_text: String::new(),
        best_shift: 0,
        candidates: Vec::new(),
        evaluations: Vec::new(),
        verdict: Verdict::Default,
    };
    let text = render(&solution);
    assert!(text.contains("Nie udało się znaleźć rozwiązania."));
    assert!(!text.contains("Odszyfrowana"));
}

#[test]
fn saves_text_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solution.txt");
    let best = "Zażółć gęślą jaźń, napisz: jan@poczta.pl";
    assert!(save_solution(&path, best).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), best);
}

#[test]
fn empty_text_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solution.txt");
    assert!(!save_solution(&path, "").unwrap());
    assert!(!path.exists());
}
