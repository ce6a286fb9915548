//! Seams to the host UI.
//!
//! The controller never renders anything itself. A host (a DOM binding, a
//! terminal UI, a test double) implements [`SelectableList`] for its
//! dropdown widget and [`FieldScope`] for whatever groups three of them.

use crate::options::OptionList;

/// How a control presents its list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSettings {
    /// Whether the user may clear the selection back to the placeholder
    pub allow_clear: bool,
    /// Text shown while nothing is selected
    pub placeholder: Option<String>,
}

/// A dropdown-like control holding an ordered option list.
pub trait SelectableList {
    /// Reads a named attribute of the control, e.g. a preset value.
    fn attribute(&self, name: &str) -> Option<String>;

    /// The control's own placeholder text.
    fn placeholder(&self) -> Option<String>;

    /// Replaces the entire option set.
    fn populate(&mut self, options: &OptionList, settings: &ListSettings);

    /// Id of the current selection; the empty id when nothing is selected.
    fn value(&self) -> String;

    /// Selects the entry with `id` and fires the control's change
    /// notification. The empty id clears the selection.
    fn set_value(&mut self, id: &str);

    /// Starts forwarding select and unselect events to the controller.
    fn attach(&mut self);

    /// Stops forwarding events.
    fn detach(&mut self);
}

/// A container in which the three controls of one field group are found.
pub trait FieldScope {
    type Control: SelectableList;

    /// Returns the control matching `selector`, if the scope has one.
    fn find(&self, selector: &str) -> Option<Self::Control>;
}
