//! Tests for the three compositor stages and the full pass

mod scanline_limit_tests;
