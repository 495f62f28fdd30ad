mod court_test;
mod middleware_test;
mod reservation_test;
