//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer guards the transforms: every builder and every entry point
//! runs its inputs and parameters through the `Validator` before any
//! arithmetic happens.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Algorithms
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;
