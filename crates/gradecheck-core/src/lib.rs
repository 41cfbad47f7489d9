//! # gradecheck-core
//!
//! The deterministic grading engine for Gradecheck - THE LOGIC.
//!
//! Two stages, run in sequence:
//!
//! ```text
//!   text (BufRead)
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │   reader    │  header count + N lines → Row, Row, ...
//!   └─────────────┘
//!        │  one row at a time
//!        ▼
//!   ┌─────────────┐
//!   │ classifier  │  Row → StudentRecord → Verdict (PASS X.Y | FAIL)
//!   └─────────────┘
//! ```
//!
//! ## Architectural Constraints
//!
//! - No async, no network, no logging: callers own all side effects
//! - Classification is a pure function of one row and the policy
//! - Every failure is a [`GradeError`]; nothing here panics

// =============================================================================
// MODULES
// =============================================================================

pub mod classifier;
pub mod policy;
pub mod primitives;
pub mod reader;
pub mod report;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{GradeError, Row, Table, Verdict, round_tenths};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use classifier::{Classifier, StudentRecord, classify, final_grade};
pub use policy::GradingPolicy;
pub use reader::{TableReader, parse_count, parse_row, read_table};
pub use report::{ReportLine, Summary};
