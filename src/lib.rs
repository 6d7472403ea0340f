//! SDG-X - Municipal sustainability self-assessment core
//!
//! A commune fills an identity sheet and answers a questionnaire whose
//! questions are tagged with sustainable development goals. This crate keeps
//! several saved profiles with isolated answers, scores them per goal, and
//! keeps a board of citizen ideas.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
