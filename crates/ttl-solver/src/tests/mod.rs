mod intern_tests;
mod relate_tests;
