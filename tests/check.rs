#![cfg(feature = "check")]

use palinshrink::{
    check::{Check, CheckError},
    generators as g, is_palindrome, is_palindrome_with, shrinkers as s, Context, DeliberateBug,
    Generate,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn check() -> Check {
    let mut check = Check::new();
    check.start_size(20);
    check
}

fn palindromic(introduce_bug: bool) -> impl FnMut(&Vec<i32>) -> Result<(), &'static str> {
    move |xs| {
        if is_palindrome(xs, introduce_bug) {
            Ok(())
        } else {
            Err("not a palindrome")
        }
    }
}

/// Generates the context's current size, so that a property can observe it.
struct CurrentSize;

impl Generate<usize> for CurrentSize {
    fn generate(&mut self, ctx: &mut Context) -> palinshrink::Result<usize> {
        Ok(ctx.current_size())
    }
}

fn observed_sizes(check: &mut Check) -> Vec<usize> {
    let mut sizes = vec![];
    check
        .run(CurrentSize, |size: &usize| {
            sizes.push(*size);
            Ok::<(), String>(())
        })
        .unwrap();
    sizes
}

#[test]
fn passing() -> anyhow::Result<()> {
    init_logging();
    check().run(g::palindrome(g::i32()), palindromic(false))?;
    check().run_with_shrinker(g::palindrome(g::i32()), s::palindrome(), palindromic(false))?;
    Ok(())
}

#[test]
fn failing_with_default_shrinking() {
    init_logging();
    let failure = check()
        .run(g::palindrome(g::i32()), palindromic(true))
        .unwrap_err()
        .unwrap_failed();

    assert!(!is_palindrome(&failure.value, true));
    assert!(failure.shrinks > 0);
    assert!(failure.value.len() < failure.original.len());
}

#[test]
fn failing_without_shrinking() {
    init_logging();
    let failure = check()
        .run_with_shrinker(g::palindrome(g::i32()), s::none(), palindromic(true))
        .unwrap_err()
        .unwrap_failed();

    assert_eq!(failure.value, failure.original);
    assert_eq!(failure.shrinks, 0);
    assert_eq!(failure.message, "not a palindrome");
    assert_eq!(failure.value.len() % 2, 1);
    assert!(is_palindrome(&failure.value, false));
}

#[test]
fn failing_with_zero_shrink_iters() {
    init_logging();
    let failure = check()
        .shrink_iters(0)
        .run_with_shrinker(g::palindrome(g::i32()), s::palindrome(), palindromic(true))
        .unwrap_err()
        .unwrap_failed();

    assert_eq!(failure.value, failure.original);
    assert_eq!(failure.shrinks, 0);
}

#[test]
fn failing_with_palindrome_shrinking() {
    init_logging();
    let failure = check()
        .run_with_shrinker(g::palindrome(g::i32()), s::palindrome(), palindromic(true))
        .unwrap_err()
        .unwrap_failed();

    // The smallest palindrome that the bug rejects: `[a, b, a]` with `a != b`.
    let xs = &failure.value;
    assert!(is_palindrome(xs, false));
    assert_eq!(xs.len(), 3);
    assert_eq!(xs[0], xs[2]);
    assert_ne!(xs[0], xs[1]);
    assert_eq!(failure.shrinks, (failure.original.len() - 3) / 2);
}

#[test]
fn failing_with_bug_at_every_level() {
    init_logging();
    let failure = check()
        .run_with_shrinker(g::palindrome(g::i32()), s::palindrome(), |xs: &Vec<i32>| {
            if is_palindrome_with(xs, Some(DeliberateBug::EveryLevel)) {
                Ok(())
            } else {
                Err("not a palindrome")
            }
        })
        .unwrap_err()
        .unwrap_failed();

    assert_eq!(failure.value.len(), 3);
}

#[test]
fn failing_with_shrinker_from_fn() {
    init_logging();

    // The same middle-out reduction, written as a closure over indices.
    let shrinker = s::from_fn(|xs: &Vec<i32>| {
        let mut xs = xs.clone();
        std::iter::from_fn(move || {
            if xs.len() <= 1 {
                return None;
            }
            xs.remove((xs.len() - 1) / 2);
            Some(xs.clone())
        })
    });

    let failure = check()
        .run_with_shrinker(g::palindrome(g::i32()), shrinker, palindromic(true))
        .unwrap_err()
        .unwrap_failed();
    assert_eq!(failure.value.len(), 3);
}

#[test]
fn never_reports_a_passing_candidate() {
    init_logging();

    // Only length five fails, so no candidate of `[1, 2, 3, 2, 1]` does.
    let failure = check()
        .run_with_shrinker(g::just(vec![1, 2, 3, 2, 1]), s::palindrome(), |xs: &Vec<i32>| {
            if xs.len() == 5 {
                Err("length five")
            } else {
                Ok(())
            }
        })
        .unwrap_err()
        .unwrap_failed();

    assert_eq!(failure.value, [1, 2, 3, 2, 1]);
    assert_eq!(failure.shrinks, 0);
}

#[test]
fn stops_at_single_element() {
    init_logging();
    let failure = check()
        .run_with_shrinker(g::just(vec![7, 7]), s::palindrome(), |_: &Vec<i32>| {
            Err("always fails")
        })
        .unwrap_err()
        .unwrap_failed();

    assert_eq!(failure.value, [7]);
    assert_eq!(failure.shrinks, 1);
}

#[test]
fn reports_empty_when_empty_fails() {
    init_logging();
    let failure = check()
        .run_with_shrinker(g::just(vec![7, 7]), s::palindrome(), |xs: &Vec<i32>| {
            if xs.len() % 2 == 0 {
                Err("even length")
            } else {
                Ok(())
            }
        })
        .unwrap_err()
        .unwrap_failed();

    assert!(failure.value.is_empty());
    assert_eq!(failure.original, [7, 7]);
}

#[test]
fn shrink_iters_bounds_candidate_evaluations() {
    init_logging();
    let mut evaluations = 0;
    let failure = check()
        .shrink_iters(2)
        .run_with_shrinker(g::just(vec![1, 2, 3, 2, 1]), s::palindrome(), |_: &Vec<i32>| {
            evaluations += 1;
            Err("always fails")
        })
        .unwrap_err()
        .unwrap_failed();

    // One evaluation of the original, then two shrink candidates.
    assert_eq!(evaluations, 3);
    assert_eq!(failure.value, [1, 2, 1]);
    assert_eq!(failure.shrinks, 2);
}

#[test]
fn panics_are_failures() {
    init_logging();
    let failure = check()
        .run_with_shrinker(g::just(vec![1, 2, 1]), s::palindrome(), |xs: &Vec<i32>| {
            assert!(xs.len() < 3, "too long");
            Ok::<(), String>(())
        })
        .unwrap_err()
        .unwrap_failed();

    assert_eq!(failure.value, [1, 2, 1]);
    assert!(failure.message.contains("too long"));
}

#[test]
fn generator_errors_are_errors() {
    init_logging();
    let err = check()
        .run(g::palindrome(g::i32()).weights(0, 0), palindromic(false))
        .unwrap_err();
    assert!(matches!(err, CheckError::Error(ref e) if e.is_invalid_weights()));

    #[allow(clippy::reversed_empty_ranges)]
    let err = check()
        .run(g::vec(g::range(10..=1)), |_: &Vec<i32>| Ok::<(), String>(()))
        .unwrap_err()
        .unwrap_error();
    assert!(err.is_invalid_range());
}

#[test]
fn failure_display_names_the_shrunken_value() {
    let err = check()
        .run_with_shrinker(g::just(vec![4, 4]), s::none(), |_: &Vec<i32>| Err("nope"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "property failed on input [4, 4]: nope (shrunk 0 times from [4, 4])",
    );
}

#[test]
fn seeds_are_deterministic() {
    let run = |seed| {
        check()
            .seed(seed)
            .run_with_shrinker(g::palindrome(g::i32()), s::none(), palindromic(true))
            .unwrap_err()
            .unwrap_failed()
            .value
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn size_grows_linearly() {
    init_logging();
    let sizes = observed_sizes(Check::new().iters(11).start_size(0).end_size(10));
    assert_eq!(sizes, (0..=10).collect::<Vec<_>>());

    let sizes = observed_sizes(Check::new().iters(5).start_size(20).end_size(100));
    assert_eq!(sizes, [20, 40, 60, 80, 100]);
}

#[test]
fn size_stays_put_when_end_is_not_larger() {
    let sizes = observed_sizes(Check::new().iters(4).start_size(20).end_size(5));
    assert_eq!(sizes, [20; 4]);

    let sizes = observed_sizes(Check::new().iters(1).start_size(3).end_size(50));
    assert_eq!(sizes, [3]);
}

#[test]
fn size_does_not_overflow_with_huge_end_size() {
    let sizes = observed_sizes(Check::new().iters(3).start_size(0).end_size(usize::MAX));
    assert_eq!(sizes, [0, usize::MAX / 2, usize::MAX]);
}

#[test]
fn palindrome_lengths_follow_the_size() {
    init_logging();
    let k = 8;
    let mut lens = vec![];
    Check::new()
        .iters(200)
        .start_size(0)
        .end_size(k)
        .run(g::palindrome(g::u8()), |xs: &Vec<u8>| {
            lens.push(xs.len());
            Ok::<(), String>(())
        })
        .unwrap();

    assert_eq!(lens.len(), 200);
    assert!(lens[0] <= 1);
    assert!(lens.iter().all(|&len| len <= 2 * k + 1));
}
