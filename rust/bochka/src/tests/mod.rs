mod capacity_tests;
mod property_tests;
