//! ReviewGuard command-line front-end
//!
//! The binary is a thin shell over [`commands`]: argument parsing lives in
//! [`cli`], and everything that touches the model goes through
//! `reviewguard-classifiers`.

pub mod cli;
pub mod commands;
