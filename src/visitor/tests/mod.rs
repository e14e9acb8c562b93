mod each_tests;
