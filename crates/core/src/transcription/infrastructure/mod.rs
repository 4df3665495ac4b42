pub mod assemblyai_client;
