pub mod raceclient_interface;
