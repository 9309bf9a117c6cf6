#![cfg(feature = "check")]

use palinshrink::{
    check::Check, generators as g, is_palindrome, is_palindrome_with, shrinkers as s, Context,
    DeliberateBug, Generate, Shrink,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn all_candidates(xs: &[i32]) -> Vec<Vec<i32>> {
    s::palindrome().shrink(&xs.to_vec()).collect()
}

#[test]
fn trivial_sequences_are_palindromes() {
    for bug in [None, Some(DeliberateBug::Outermost), Some(DeliberateBug::EveryLevel)] {
        assert!(is_palindrome_with::<i32>(&[], bug));
        assert!(is_palindrome_with(&[42], bug));
    }
    assert!(is_palindrome::<char>(&[], true));
    assert!(is_palindrome(&['x'], true));
}

#[test]
fn normal_mode() {
    assert!(is_palindrome(&[1, 2, 3, 2, 1], false));
    assert!(is_palindrome(&[1, 2, 2, 1], false));
    assert!(is_palindrome(&[7, 7], false));
    assert!(is_palindrome(&"racecar".chars().collect::<Vec<_>>(), false));

    assert!(!is_palindrome(&[1, 2], false));
    assert!(!is_palindrome(&[1, 2, 3], false));
    assert!(!is_palindrome(&[1, 2, 3, 1], false));
    assert!(!is_palindrome(&[1, 2, 3, 4, 1], false));
}

#[test]
fn deliberate_bug_on_odd_lengths() {
    // The outer comparison is `2 == 1`.
    assert!(!is_palindrome(&[1, 2, 1], true));
    assert!(!is_palindrome_with(&[1, 2, 1], Some(DeliberateBug::EveryLevel)));

    // Not a palindrome, but the outer comparison is `1 == 1`.
    assert!(!is_palindrome(&[2, 1, 1], false));
    assert!(is_palindrome(&[2, 1, 1], true));

    // All elements equal: the bug cannot be observed.
    assert!(is_palindrome(&[5, 5, 5, 5, 5], true));
}

#[test]
fn deliberate_bug_depth() {
    // Outer pair (buggy): `xs[1] == xs[4]`, i.e. `2 == 2`.
    // Inner pair: `xs[1] == xs[3]` normally, `xs[2] == xs[3]` with the bug.
    let xs = [1, 2, 3, 2, 2];
    assert!(is_palindrome(&xs, true));
    assert!(is_palindrome_with(&xs, Some(DeliberateBug::Outermost)));
    assert!(!is_palindrome_with(&xs, Some(DeliberateBug::EveryLevel)));

    // A true palindrome whose outer buggy comparison is `xs[1] == xs[6]`,
    // but whose inner buggy comparison is `xs[2] == xs[5]`.
    let ys = [9, 9, 1, 2, 1, 9, 9];
    assert!(is_palindrome(&ys, false));
    assert!(is_palindrome_with(&ys, Some(DeliberateBug::Outermost)));
    assert!(!is_palindrome_with(&ys, Some(DeliberateBug::EveryLevel)));
}

#[test]
fn deliberate_bug_is_a_no_op_on_even_lengths() {
    for xs in [
        &[1, 2][..],
        &[1, 1][..],
        &[1, 2, 2, 1][..],
        &[1, 2, 1, 2][..],
        &[3, 1, 2, 3][..],
    ] {
        let normal = is_palindrome(xs, false);
        assert_eq!(is_palindrome(xs, true), normal);
        assert_eq!(is_palindrome_with(xs, Some(DeliberateBug::EveryLevel)), normal);
    }
}

#[test]
fn reversal_does_not_change_the_answer() {
    init_logging();
    Check::new()
        .iters(500)
        .run(g::vec(g::range(0..=2_u8)), |xs: &Vec<u8>| {
            let mut reversed = xs.clone();
            reversed.reverse();
            if is_palindrome(xs, false) == is_palindrome(&reversed, false) {
                Ok(())
            } else {
                Err("reversal changed the answer")
            }
        })
        .unwrap();
}

#[test]
fn bug_is_a_no_op_on_even_lengths_property() {
    init_logging();
    Check::new()
        .iters(500)
        .run(
            g::vec(g::range(0..=2_u8)).map(|mut xs: Vec<u8>| {
                if xs.len() % 2 == 1 {
                    xs.pop();
                }
                xs
            }),
            |xs: &Vec<u8>| {
                if is_palindrome(xs, true) == is_palindrome(xs, false) {
                    Ok(())
                } else {
                    Err("bug changed the answer on an even length")
                }
            },
        )
        .unwrap();
}

#[test]
fn shrink_odd_palindrome() {
    assert_eq!(
        all_candidates(&[1, 2, 3, 2, 1]),
        [
            vec![1, 2, 2, 1],
            vec![1, 2, 1],
            vec![1, 1],
            vec![1],
            vec![],
        ]
    );
}

#[test]
fn shrink_even_palindrome() {
    assert_eq!(all_candidates(&[1, 2, 2, 1]), [vec![1, 2, 1], vec![1, 1], vec![1], vec![]]);
    assert_eq!(all_candidates(&[7, 7]), [vec![7], vec![]]);
}

#[test]
fn shrink_minimal_palindromes() {
    assert!(all_candidates(&[5]).is_empty());
    assert!(all_candidates(&[]).is_empty());
}

#[test]
fn shrink_candidates_are_independent() {
    let mut candidates = s::palindrome().shrink(&vec![1, 2, 3, 2, 1]);
    let first = candidates.next().unwrap();
    let second = candidates.next().unwrap();
    let rest: Vec<_> = candidates.collect();

    // Holding on to earlier candidates does not see later removals.
    assert_eq!(first, [1, 2, 2, 1]);
    assert_eq!(second, [1, 2, 1]);
    assert_eq!(rest.len(), 3);
}

#[test]
fn shrink_is_lazy_and_fused() {
    let mut candidates = s::palindrome().shrink(&vec![7, 7]);
    assert_eq!(candidates.next(), Some(vec![7]));
    assert_eq!(candidates.next(), Some(vec![]));
    assert_eq!(candidates.next(), None);
    assert_eq!(candidates.next(), None);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "not a palindrome")]
fn shrink_rejects_non_palindromes_in_debug_builds() {
    let _ = s::palindrome().shrink(&vec![1, 2, 3]);
}

#[test]
fn shrink_candidates_are_palindromes() {
    init_logging();
    Check::new()
        .iters(300)
        .run(g::palindrome(g::range(0..=3_i32)), |xs: &Vec<i32>| {
            for (i, candidate) in s::palindrome().shrink(xs).enumerate() {
                if !is_palindrome(&candidate, false) {
                    return Err(format!("candidate {i} is not a palindrome: {candidate:?}"));
                }
                if candidate.len() + i + 1 != xs.len() {
                    return Err(format!("candidate {i} has the wrong length: {candidate:?}"));
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn repeated_shrinking_terminates() {
    init_logging();
    Check::new()
        .iters(300)
        .run(g::palindrome(g::i32()), |xs: &Vec<i32>| {
            // Always take the first candidate and shrink again.
            let mut current = xs.clone();
            let mut steps = 0;
            while let Some(next) = s::palindrome().shrink(&current).next() {
                steps += 1;
                if steps > xs.len() {
                    return Err("too many shrink steps");
                }
                current = next;
            }
            if current.len() <= 1 {
                Ok(())
            } else {
                Err("stopped shrinking above length one")
            }
        })
        .unwrap();
}

fn sample_lens<G>(mut generator: G, size: usize) -> Vec<usize>
where
    G: Generate<Vec<u8>>,
{
    let mut ctx = Context::new().seed(42).size(size);
    (0..1000)
        .map(|_| generator.generate(&mut ctx).unwrap().len())
        .collect()
}

#[test]
fn vec_lengths_cover_zero_through_size() {
    let lens = sample_lens(g::vec(g::u8()), 5);
    assert!(lens.iter().all(|&len| len <= 5));
    for len in 0..=5 {
        assert!(lens.contains(&len), "never generated length {len}");
    }
}

#[test]
fn even_palindrome_lengths() {
    let lens = sample_lens(g::even_palindrome(g::u8()), 5);
    assert!(lens.iter().all(|&len| len % 2 == 0 && len <= 10));
    assert!(lens.contains(&0));
    assert!(lens.contains(&10));
}

#[test]
fn odd_palindrome_lengths() {
    let lens = sample_lens(g::odd_palindrome(g::u8()), 5);
    assert!(lens.iter().all(|&len| len % 2 == 1 && len <= 11));
    assert!(lens.contains(&1));
    assert!(lens.contains(&11));
}

#[test]
fn palindrome_generates_both_parities() {
    let lens = sample_lens(g::palindrome(g::u8()), 5);
    assert!(lens.iter().all(|&len| len <= 11));
    assert!(lens.iter().any(|len| len % 2 == 0));
    assert!(lens.iter().any(|len| len % 2 == 1));

    let lens = sample_lens(g::palindrome(g::u8()).weights(1, 0), 5);
    assert!(lens.iter().all(|len| len % 2 == 0));
}

#[test]
fn generated_palindromes_are_palindromes() {
    let mut ctx = Context::new().seed(7).size(6);
    let mut generator = g::palindrome(g::range(0..=3_u8));
    for _ in 0..500 {
        let xs = generator.generate(&mut ctx).unwrap();
        assert!(is_palindrome(&xs, false), "{xs:?} is not a palindrome");
    }
}
