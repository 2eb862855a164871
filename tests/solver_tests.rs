use wordle_minimax::{
    evaluate, ColorCode, Corpus, Error, GuessCache, KeyMode, Solver, Word, DEFAULT_OPENING,
};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn corpus(list: &[&str]) -> Corpus {
    Corpus::from_lines(list).unwrap()
}

fn get_test_words() -> Corpus {
    corpus(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

fn get_test_guesses() -> Corpus {
    corpus(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
        "salet", "lints", "cobra", "moist", "feast",
    ])
}

#[test]
fn test_solver_creation() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let solver = Solver::new(&guesses, &answers).unwrap();
    assert_eq!(solver.answers().len(), 10);
    assert!(solver.cache().is_empty());
}

#[test]
fn test_rejects_incompatible_corpora() {
    let guesses = corpus(&["cat", "dog"]);
    let answers = get_test_words();
    assert!(matches!(
        Solver::new(&guesses, &answers),
        Err(Error::LengthMismatch { .. })
    ));
    let empty = Corpus::default();
    assert!(matches!(
        Solver::new(&empty, &answers),
        Err(Error::EmptyGuessCorpus)
    ));
}

#[test]
fn test_single_answer_opening_is_answer() {
    let guesses = get_test_guesses();
    let answers = corpus(&["crane"]);
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    let guesses = solver.solve(&word("crane"), &word("crane")).unwrap();
    assert_eq!(guesses, vec![word("crane")]);
}

#[test]
fn test_single_answer_other_opening() {
    let guesses = get_test_guesses();
    let answers = corpus(&["crane"]);
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    let guesses = solver.solve(&word("crane"), &word("toast")).unwrap();
    assert_eq!(guesses, vec![word("toast"), word("crane")]);
}

#[test]
fn test_solve_various_targets() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    let opening = word(DEFAULT_OPENING);

    for target in &answers {
        let played = solver.solve(target, &opening).unwrap();
        assert_eq!(played[0], opening);
        assert_eq!(played.last(), Some(target), "didn't finish on {target}");
        assert!(played.len() <= answers.len() + 1, "too many guesses for {target}");
        for guess in &played[1..] {
            assert!(guesses.contains(guess));
        }
    }
}

#[test]
fn test_rounds_narrow_until_solved() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    let secret = word("toast");

    let rounds = solver
        .solve_with_feedback(&word("crane"), |guess| evaluate(&secret, guess))
        .unwrap();

    let (last, earlier) = rounds.split_last().unwrap();
    assert!(last.code.is_solved());
    assert_eq!(last.guess, secret);
    assert_eq!(last.remaining, 1);
    for round in earlier {
        assert!(!round.code.is_solved());
    }
    for pair in rounds.windows(2) {
        assert!(pair[1].remaining <= pair[0].remaining);
    }
}

#[test]
fn test_cache_does_not_change_guesses() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let opening = word(DEFAULT_OPENING);

    let mut warm = Solver::new(&guesses, &answers).unwrap();
    let mut exact = Solver::with_key_mode(&guesses, &answers, KeyMode::Exact).unwrap();
    for secret in &answers {
        let mut cold = Solver::new(&guesses, &answers).unwrap();
        let expected = cold.solve(secret, &opening).unwrap();
        assert_eq!(warm.solve(secret, &opening).unwrap(), expected);
        assert_eq!(exact.solve(secret, &opening).unwrap(), expected);
    }

    // a second pass is answered entirely from the cache
    let before = warm.cache_stats();
    let mut replay = Solver::with_cache(&guesses, &answers, warm.into_cache()).unwrap();
    for secret in &answers {
        let mut cold = Solver::new(&guesses, &answers).unwrap();
        assert_eq!(
            replay.solve(secret, &opening).unwrap(),
            cold.solve(secret, &opening).unwrap()
        );
    }
    let after = replay.cache_stats();
    assert_eq!(after.misses, before.misses);
    assert_eq!(after.entries, before.entries);
    assert!(after.hits > before.hits);
}

#[test]
fn test_clear_cache() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    solver.solve(&word("beast"), &word("crane")).unwrap();
    assert!(!solver.cache().is_empty());

    solver.clear_cache();
    assert!(solver.cache().is_empty());
    assert_eq!(solver.cache_stats().hits, 0);
}

#[test]
fn test_shared_cache_can_be_handed_over() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let mut cache = GuessCache::new(KeyMode::Exact);
    {
        let mut solver = Solver::with_cache(&guesses, &answers, cache).unwrap();
        solver.solve(&word("roast"), &word("crane")).unwrap();
        cache = solver.into_cache();
    }
    assert_eq!(cache.mode(), KeyMode::Exact);
    assert!(!cache.is_empty());
}

#[test]
fn test_secret_outside_answers() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    assert!(matches!(
        solver.solve(&word("zzzzz"), &word("crane")),
        Err(Error::NoCandidates)
    ));
}

#[test]
fn test_feedback_length_checked() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    let result = solver.solve_with_feedback(&word("crane"), |_| ColorCode::parse("gg"));
    assert!(matches!(result, Err(Error::InvalidCode { .. })));
}

#[test]
fn test_recommend() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let solver = Solver::new(&guesses, &answers).unwrap();
    let secret = word("toast");
    let opening = word("crane");
    let code = evaluate(&secret, &opening).unwrap();

    let recommendation = solver.recommend(&[(opening, code)]).unwrap();
    assert!(recommendation.candidates.contains(&secret));
    assert!(guesses.contains(&recommendation.guess));
    assert!(solver.cache().is_empty());
}

#[test]
fn test_recommend_without_feedback() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let solver = Solver::new(&guesses, &answers).unwrap();
    let recommendation = solver.recommend(&[]).unwrap();
    assert_eq!(recommendation.candidates.len(), answers.len());
}

#[test]
fn test_wrong_length_opening() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    let result = solver.solve_with_feedback(&word("cat"), |_| ColorCode::parse("bbb"));
    assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    assert!(matches!(
        solver.solve(&word("toast"), &word("cat")),
        Err(Error::LengthMismatch { .. })
    ));
}

#[test]
fn test_recommend_wrong_length_guess() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let solver = Solver::new(&guesses, &answers).unwrap();
    let played = [(word("cat"), ColorCode::parse("bbb").unwrap())];
    assert!(matches!(
        solver.recommend(&played),
        Err(Error::LengthMismatch { .. })
    ));
}

#[test]
fn test_recommend_contradiction() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let solver = Solver::new(&guesses, &answers).unwrap();
    let played = [(word("crane"), ColorCode::parse("bbbbb").unwrap())];
    assert!(matches!(solver.recommend(&played), Err(Error::NoCandidates)));
}

#[test]
fn test_benchmark() {
    let guesses = get_test_guesses();
    let answers = get_test_words();
    let mut solver = Solver::new(&guesses, &answers).unwrap();
    let opening = word(DEFAULT_OPENING);

    let mut seen = Vec::new();
    let report = solver
        .benchmark(&opening, |record, running| {
            assert_eq!(running.solved, seen.len() + 1);
            seen.push(record.secret.clone());
        })
        .unwrap();

    assert_eq!(seen, answers.words());
    assert_eq!(report.solved, answers.len());
    assert_eq!(report.distribution.values().sum::<usize>(), answers.len());
    assert_eq!(
        report.distribution.iter().map(|(n, c)| n * c).sum::<usize>(),
        report.total_guesses
    );
    let (_, worst) = report.worst.clone().unwrap();
    assert_eq!(Some(&worst), report.distribution.keys().last());
    assert!(report.average() >= 1.0);
}
