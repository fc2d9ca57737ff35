mod credential_repository_tests;
