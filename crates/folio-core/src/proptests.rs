//! Property-based tests for the reveal sequencing math.
