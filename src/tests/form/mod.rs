mod history_tests;
mod placement_tests;
