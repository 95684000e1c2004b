//! Save file round trips, load validation and the preset catalog

mod load_tests;
mod preset_tests;
