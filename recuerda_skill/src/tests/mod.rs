mod test_utils;

mod response_tests;
