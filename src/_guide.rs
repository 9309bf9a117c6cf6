/*!

Tutorials, overviews, and etc... for the `palinshrink` crate.

All the documentation that isn't API reference.

# Table of Contents

* [Shrinking Palindromes][shrinking]
* [The Deliberate Bug][deliberate_bug]
* [Cargo Features and MSRV][cargo_features]

 */

pub mod cargo_features;
pub mod deliberate_bug;
pub mod shrinking;
