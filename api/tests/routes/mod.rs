mod health_test;
mod user;
