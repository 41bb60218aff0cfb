pub mod companion_client;
