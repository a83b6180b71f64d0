// handlers/elevated/mod.rs - Elevated handlers (admin role required)
//
// Security Level: Verified JWT whose role claim is "admin"
// Route Prefix: /api/admin/*
// Middleware: middleware::admin_only (verifier, then role gate)

pub mod admin;

pub use admin::status as admin_status;
