mod key_provider_tests;
