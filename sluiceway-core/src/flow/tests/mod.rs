mod flow_file_tests;
