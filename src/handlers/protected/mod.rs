// handlers/protected/mod.rs - Protected handlers (credential cookie required)
//
// Security Level: Verified JWT from the credential cookie
// Route Prefix: /api/*
// Middleware: middleware::authenticated

pub mod auth;

pub use auth::whoami as session_whoami;
