mod property_based_tests;
