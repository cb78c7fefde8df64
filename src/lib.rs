//! Atlas Partners contact service.
//!
//! Backend for the landing page's lead-capture form: a single endpoint that
//! validates a submission and relays it as an email, plus the form controller
//! that prepares and posts the submission.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error types and their HTTP mapping.
//! - `form`: Client-side form state, validation and submit flow.
//! - `handlers`: HTTP request handlers.
//! - `mailer`: Email provider abstraction and the SendGrid client.
//! - `message`: Inquiry email rendering.
//! - `models`: Wire payloads and form option enums.
//! - `reveal`: Scroll-reveal viewport intersection helper.
//! - `server`: Router assembly.
//! - `validation`: Email and Chilean phone format checks.

pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod mailer;
pub mod message;
pub mod models;
pub mod reveal;
pub mod server;
pub mod validation;
