/*!

# The Deliberate Bug

To see shrinking in action you need a property that fails. The palindrome
predicate can manufacture one: with the deliberate bug enabled, odd-length
sequences compare their *second* element to their last one, instead of their
first.

Even-length sequences are unaffected, as are sequences with fewer than two
elements, so the bug is only observable on odd-length sequences of at least
three elements:

```rust
use palinshrink::is_palindrome;

assert!(is_palindrome(&[1, 2, 1], false));
assert!(!is_palindrome(&[1, 2, 1], true));

assert_eq!(is_palindrome(&[4, 5, 5, 4], true), is_palindrome(&[4, 5, 5, 4], false));
```

## Bug Depth

Checking a palindrome peels a pair of elements off both ends, and then checks
the remainder. Because peeling a pair preserves parity, the remainder of an
odd-length sequence is also odd-length, which raises the question of whether
the bug applies again at the inner levels. Both answers are available through
[`DeliberateBug`][crate::DeliberateBug]:

* [`DeliberateBug::Outermost`][crate::DeliberateBug::Outermost]: only the first
  comparison is wrong. This is what
  [`is_palindrome(xs, true)`][crate::is_palindrome] uses.

* [`DeliberateBug::EveryLevel`][crate::DeliberateBug::EveryLevel]: every
  comparison on an odd-length sequence is wrong.

```rust
use palinshrink::{is_palindrome_with, DeliberateBug};

let xs = [1, 2, 3, 2, 2];
assert!(is_palindrome_with(&xs, Some(DeliberateBug::Outermost)));
assert!(!is_palindrome_with(&xs, Some(DeliberateBug::EveryLevel)));
assert!(!is_palindrome_with(&xs, None));
```

 */
