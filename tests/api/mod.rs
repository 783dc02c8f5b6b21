mod publications_test;
mod publishers_test;
mod server_test;
