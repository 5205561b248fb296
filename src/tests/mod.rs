mod support;

mod app {
    mod prompt_tests;
}

mod field {
    mod controller_tests;
}
