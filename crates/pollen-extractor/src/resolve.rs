//! Proximity-based severity lookup
//!
//! The page carries no identifiers tying a label to its value. The layout
//! looks like this, and the only stable relation is the shared grandparent:
//!
//! ```text
//! <div>                  ← ancestor
//!     <div>              ← parent
//!         <h4>Tree Pollen</h4>
//!     </div>
//!     <div>              ← sibling holding the value
//!         <span>Absent</span>
//!     </div>
//! </div>
//! ```

use pollen_domain::traits::DocumentNode;
use pollen_domain::Severity;

/// Severity tokens in scan order; longer tokens come before their substrings
pub const SEVERITY_PRIORITY: [Severity; 5] = [
    Severity::VeryHigh,
    Severity::High,
    Severity::Moderate,
    Severity::Low,
    Severity::Absent,
];

/// Find the first severity token (in priority order) inside `text`
pub fn scan_severity(text: &str) -> Option<Severity> {
    SEVERITY_PRIORITY
        .iter()
        .copied()
        .find(|s| text.contains(s.label()))
}

/// Resolve the severity paired with a category label node
///
/// Returns `None` when the node has no parent or grandparent, or when the
/// grandparent's text holds no severity token.
pub fn resolve_severity<N: DocumentNode>(label: &N) -> Option<Severity> {
    let ancestor = label.parent()?.parent()?;
    scan_severity(&ancestor.joined_text(" "))
}
