use super::expansion::ExpansionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    LoadError,
}

/// The one dialog a page may show at a time
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<R> {
    Closed,
    Viewing(R),
    /// `None` creates a new record
    Editing(Option<R>),
    ConfirmingDisable(R),
}

impl<R> ModalState<R> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState<R> {
    pub phase: LoadPhase,
    pub items: Vec<R>,
    pub modal: ModalState<R>,
    pub loading: bool,
    pub submitting: bool,
    /// A detail fetch is pending
    pub fetching: bool,
    pub expanded: ExpansionSet,
}

impl<R> Default for PageState<R> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            items: Vec::new(),
            modal: ModalState::Closed,
            loading: false,
            submitting: false,
            fetching: false,
            expanded: ExpansionSet::default(),
        }
    }
}

impl<R> PageState<R> {
    /// Returns false when a load is already in flight
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Replace the list. Expanded rows do not survive a reload.
    pub fn finish_load(&mut self, items: Vec<R>) {
        self.items = items;
        self.phase = LoadPhase::Ready;
        self.loading = false;
        self.expanded.clear();
    }

    /// A failed first load leaves an empty list; a failed reload keeps the
    /// rows already shown.
    pub fn fail_load(&mut self) {
        self.loading = false;
        if self.phase != LoadPhase::Ready {
            self.phase = LoadPhase::LoadError;
            self.items.clear();
        }
    }

    /// Returns false when a submit is already in flight
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Returns false when a detail fetch is already in flight
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetching {
            return false;
        }
        self.fetching = true;
        true
    }

    pub fn finish_fetch(&mut self) {
        self.fetching = false;
    }

    /// Open a dialog once the first load has settled and no other dialog is open
    pub fn open(&mut self, modal: ModalState<R>) -> bool {
        if self.phase == LoadPhase::Loading || self.modal.is_open() || self.submitting {
            return false;
        }
        self.modal = modal;
        true
    }

    /// Cancel the open dialog; ignored while its submit is pending
    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.modal = ModalState::Closed;
        true
    }
}
