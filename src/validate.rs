//! Document invariant checking.
//!
//! The reducer maintains these invariants by construction; collaborators that
//! deserialize documents from elsewhere (project files, messages) can check
//! them here before dispatching against the result. Violations are reported
//! as warnings, never panics.

use crate::color::is_valid_cell;
use crate::models::Document;

/// A warning generated during document validation
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validate a document against the frames-store invariants.
///
/// Returns warnings for:
/// - Zero columns or rows
/// - An empty frame list
/// - An out-of-range active index
/// - A frame whose grid length does not match `columns * rows`
/// - A frame interval outside (0, 100]
/// - A last frame whose interval is not exactly 100
/// - A non-empty cell that is not a hex color string
pub fn validate_document(doc: &Document) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if doc.columns == 0 || doc.rows == 0 {
        warnings.push(Warning::new(format!(
            "document has degenerate dimensions {}x{}",
            doc.columns, doc.rows
        )));
    }

    if doc.list.is_empty() {
        warnings.push(Warning::new("document has no frames"));
        return warnings;
    }

    if doc.active_index >= doc.list.len() {
        warnings.push(Warning::new(format!(
            "active index {} is out of bounds (document has {} frames)",
            doc.active_index,
            doc.list.len()
        )));
    }

    let expected_cells = doc.columns * doc.rows;
    for (i, frame) in doc.list.iter().enumerate() {
        if frame.grid.len() != expected_cells {
            warnings.push(Warning::new(format!(
                "frame {} has {} cells, expected {} ({}x{})",
                i,
                frame.grid.len(),
                expected_cells,
                doc.columns,
                doc.rows
            )));
        }

        if !(frame.interval > 0.0 && frame.interval <= 100.0) {
            warnings.push(Warning::new(format!(
                "frame {} interval {} is outside (0, 100]",
                i, frame.interval
            )));
        }

        for (id, cell) in frame.grid.iter().enumerate() {
            if !is_valid_cell(cell) {
                warnings.push(Warning::new(format!(
                    "frame {} cell {} holds '{}', expected empty or hex color",
                    i, id, cell
                )));
            }
        }
    }

    // The timeline must end exactly at 100
    if let Some(last) = doc.list.last() {
        if last.interval != 100.0 {
            warnings.push(Warning::new(format!(
                "last frame interval is {}, expected 100",
                last.interval
            )));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::reducer::reduce;

    #[test]
    fn test_fresh_document_is_valid() {
        assert!(validate_document(&Document::default()).is_empty());
    }

    #[test]
    fn test_reduced_documents_stay_valid() {
        let mut doc = Document::new(3, 3);
        for action in [
            Action::CreateNewFrame,
            Action::DuplicateFrame { id: 0 },
            Action::ChangeDimensions {
                property: crate::actions::GridProperty::Rows,
                delta: 1,
            },
            Action::DeleteFrame { id: 1 },
        ] {
            doc = reduce(Some(doc), &action);
            assert!(
                validate_document(&doc).is_empty(),
                "invariants broken after {:?}",
                action
            );
        }
    }

    #[test]
    fn test_empty_list_warns() {
        let mut doc = Document::new(2, 2);
        doc.list.clear();
        let warnings = validate_document(&doc);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no frames"));
    }

    #[test]
    fn test_grid_length_mismatch_warns() {
        let mut doc = Document::new(2, 2);
        doc.list[0].grid.pop();
        let warnings = validate_document(&doc);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("has 3 cells, expected 4")));
    }

    #[test]
    fn test_active_index_out_of_bounds_warns() {
        let mut doc = Document::new(2, 2);
        doc.active_index = 4;
        let warnings = validate_document(&doc);
        assert!(warnings.iter().any(|w| w.message.contains("out of bounds")));
    }

    #[test]
    fn test_bad_interval_warns() {
        let mut doc = Document::new(2, 2);
        doc.list[0].interval = 0.0;
        let warnings = validate_document(&doc);
        assert!(warnings.iter().any(|w| w.message.contains("(0, 100]")));
        assert!(warnings.iter().any(|w| w.message.contains("expected 100")));
    }

    #[test]
    fn test_bad_cell_color_warns() {
        let mut doc = Document::new(2, 2);
        doc.list[0].grid[1] = "magenta".to_string();
        let warnings = validate_document(&doc);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("cell 1"));
    }
}
