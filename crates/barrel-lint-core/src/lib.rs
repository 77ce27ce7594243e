//! # barrel-lint-core
//!
//! Core framework for linting barrel-file imports in monorepos.
//!
//! This crate provides the pieces every import rule builds on:
//!
//! - [`utils::paths`] for lexical import-path analysis
//! - [`AliasTable`] for mapping project aliases to barrel entry files
//! - [`Workspace`] plus the [`ProjectLocator`] / [`SourceRoots`] seams
//! - [`ImportRule`] trait and the [`Analyzer`] that runs rules per file
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use barrel_lint_core::{Analyzer, Config};
//!
//! let analyzer = Analyzer::builder()
//!     .config(Config::from_file("barrel-lint.toml".as_ref())?)
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze(&files)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alias;
mod analyzer;
mod config;
mod context;
mod error;
mod rule;
mod types;
mod workspace;

/// Utility modules for rule implementations.
pub mod utils;

pub use alias::{AliasEntry, AliasTable};
pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::{FileContext, ImportContext, ImportDecl, ProjectLocator, SourceImports, SourceRoots};
pub use error::ClassifyError;
pub use rule::{ImportRule, ImportRuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
pub use workspace::{Project, Workspace};
