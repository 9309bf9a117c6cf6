/*!

# Shrinking Palindromes

When a property fails, the first failing input is usually large and noisy.
Shrinking repeatedly replaces it with a smaller input that *still* fails, until
no smaller candidate fails anymore.

A general-purpose shrinker for vectors, like
[`shrinkers::elements`][crate::shrinkers::elements], tries removing each
element in turn. That is a poor fit when the property is only meaningful for
palindromes: removing an element from anywhere but the center breaks the
symmetry, so almost every candidate is a non-palindrome, and the final
"minimal" input is not an instance of the structure under test at all.

The [`shrinkers::palindrome`][crate::shrinkers::palindrome()] shrinker only ever
removes from the center, so every candidate it produces from a palindrome is
itself a palindrome:

```text
[1, 2, 3, 2, 1]   remove the middle `3`
[1, 2, 2, 1]      remove the left `2` of the central pair
[1, 2, 1]         remove the right `2`, which is now in the middle
[1, 1]
[1]
[]
```

Each candidate is exactly one element shorter than the one before it, so a
stream never has more candidates than its input has elements. A single-element
palindrome is already minimal and produces no candidates.

## Example

```rust
use palinshrink::{check::Check, generators as g, shrinkers as s};

// A property that only holds for short palindromes.
let failure = Check::new()
    .run_with_shrinker(
        g::palindrome(g::range(0..=9_u8)),
        s::palindrome(),
        |xs: &Vec<u8>| {
            if xs.len() < 4 {
                Ok(())
            } else {
                Err(format!("too long: {}", xs.len()))
            }
        },
    )
    .unwrap_err()
    .unwrap_failed();

// The shrunken input is the shortest failing palindrome.
assert_eq!(failure.value.len(), 4);
assert_eq!(failure.value, failure.value.iter().rev().copied().collect::<Vec<_>>());
```

## The Shrinking Loop

The [`Check`][crate::check::Check] engine drives shrinking:

1. Ask the shrinker for the candidates of the current failing value.

2. Evaluate the property on each candidate in order, and throw away the ones
   that pass.

3. As soon as a candidate fails, it becomes the current failing value; go back
   to step 1.

4. If every candidate passes, or the
   [`shrink_iters`][crate::check::Check::shrink_iters] budget runs out, report
   the current failing value.

The reported value is always one that failed. In particular, the empty
sequence is only reported when it genuinely fails the property.

 */
