//! Pure projection of the record collection into a renderable view model.
//!
//! Rendering is split in two: this module computes what should be shown
//! (rows, visibility of the table and the clear/export controls, the
//! actions available on each row) and a platform renderer decides how to
//! show it. The view model is rebuilt from the store after every mutation;
//! nothing here is cached or diffed.

use crate::sample::Sample;

/// Shown by renderers when the collection is empty and the table is hidden.
pub const EMPTY_MESSAGE: &str = "No samples recorded yet. Add one to get started.";

/// Actions available on a rendered row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    ViewOnMap,
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::ViewOnMap => "map",
            RowAction::Edit => "modify",
            RowAction::Delete => "remove",
        }
    }
}

/// One table row: the record's id, its eight data cells in display order,
/// and the actions a renderer should offer for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub cells: [String; 8],
    pub actions: Vec<RowAction>,
}

impl Row {
    fn new(sample: &Sample) -> Self {
        Self {
            id: sample.id.clone(),
            cells: [
                sample.number.clone(),
                sample.collector.clone(),
                sample.locality.clone(),
                sample.country.clone(),
                sample.mineralogy.clone(),
                sample.paleontology.clone(),
                sample.latitude.clone().unwrap_or_default(),
                sample.longitude.clone().unwrap_or_default(),
            ],
            actions: vec![RowAction::ViewOnMap, RowAction::Edit, RowAction::Delete],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub rows: Vec<Row>,
    pub table_visible: bool,
    pub clear_visible: bool,
    pub export_visible: bool,
}

/// Project the collection into a [ViewModel]. Row order is collection
/// order; an empty collection hides the table and the global controls.
pub fn render(samples: &[Sample]) -> ViewModel {
    let visible = !samples.is_empty();
    ViewModel {
        rows: samples.iter().map(Row::new).collect(),
        table_visible: visible,
        clear_visible: visible,
        export_visible: visible,
    }
}
