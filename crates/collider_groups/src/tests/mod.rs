//! Cross-module tests: collector, reconciler and gizmo renderer together

mod grouping_integration;
