//! In-memory controls for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::FieldSelectors;
use crate::control::{FieldScope, ListSettings, SelectableList};
use crate::options::OptionList;
use crate::types::Field;

#[derive(Debug, Default)]
struct ListState {
    attributes: HashMap<String, String>,
    placeholder: Option<String>,
    options: Option<OptionList>,
    settings: Option<ListSettings>,
    value: String,
    select_first: bool,
    attached: bool,
    populate_calls: usize,
    detach_calls: usize,
    changes: Vec<String>,
}

/// Shared handle to a fake dropdown; clones observe the same control.
#[derive(Debug, Clone, Default)]
pub struct MockList(Rc<RefCell<ListState>>);

impl MockList {
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    pub fn set_placeholder(&self, text: &str) {
        self.0.borrow_mut().placeholder = Some(text.to_owned());
    }

    /// Makes `populate` select the first real choice instead of the placeholder.
    pub fn select_first_on_populate(&self) {
        self.0.borrow_mut().select_first = true;
    }

    /// User interaction: selects `id` without a programmatic change event.
    pub fn choose(&self, id: &str) {
        self.0.borrow_mut().value = id.to_owned();
    }

    pub fn options(&self) -> Option<OptionList> {
        self.0.borrow().options.clone()
    }

    pub fn settings(&self) -> Option<ListSettings> {
        self.0.borrow().settings.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().attached
    }

    pub fn populate_calls(&self) -> usize {
        self.0.borrow().populate_calls
    }

    pub fn detach_calls(&self) -> usize {
        self.0.borrow().detach_calls
    }

    /// Ids passed to `set_value`, in order
    pub fn changes(&self) -> Vec<String> {
        self.0.borrow().changes.clone()
    }
}

impl SelectableList for MockList {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn placeholder(&self) -> Option<String> {
        self.0.borrow().placeholder.clone()
    }

    fn populate(&mut self, options: &OptionList, settings: &ListSettings) {
        let mut state = self.0.borrow_mut();
        state.value = if state.select_first {
            options
                .choices()
                .first()
                .map(|e| e.id.clone())
                .unwrap_or_default()
        } else {
            String::new()
        };
        state.options = Some(options.clone());
        state.settings = Some(settings.clone());
        state.populate_calls += 1;
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&mut self, id: &str) {
        let mut state = self.0.borrow_mut();
        state.value = id.to_owned();
        state.changes.push(id.to_owned());
    }

    fn attach(&mut self) {
        self.0.borrow_mut().attached = true;
    }

    fn detach(&mut self) {
        let mut state = self.0.borrow_mut();
        state.attached = false;
        state.detach_calls += 1;
    }
}

/// A field group whose controls are keyed by selector.
#[derive(Debug, Default)]
pub struct MockScope {
    selectors: FieldSelectors,
    controls: RefCell<HashMap<String, MockList>>,
}

impl MockScope {
    pub fn with_default_selectors() -> Self {
        Self::with_selectors(&FieldSelectors::default())
    }

    pub fn with_selectors(selectors: &FieldSelectors) -> Self {
        let controls = Field::ALL
            .iter()
            .map(|&field| (selectors.selector(field).to_owned(), MockList::default()))
            .collect();
        Self {
            selectors: selectors.clone(),
            controls: RefCell::new(controls),
        }
    }

    pub fn control(&self, field: Field) -> MockList {
        self.control_at(self.selectors.selector(field))
    }

    pub fn control_at(&self, selector: &str) -> MockList {
        self.controls
            .borrow()
            .get(selector)
            .cloned()
            .unwrap_or_else(|| panic!("no control at {selector}"))
    }

    pub fn remove(&self, field: Field) {
        self.controls
            .borrow_mut()
            .remove(self.selectors.selector(field));
    }
}

impl FieldScope for MockScope {
    type Control = MockList;

    fn find(&self, selector: &str) -> Option<MockList> {
        self.controls.borrow().get(selector).cloned()
    }
}
