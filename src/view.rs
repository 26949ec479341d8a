#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewState {
    Loading,
    Portfolio,
    Contact,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewEvent {
    LoadComplete,
    ShowContact,
    Back,
}

impl ViewState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    /// Loading only ever moves forward; portfolio and contact swap freely.
    /// Events that do not apply to the current view leave it unchanged.
    pub fn next(self, event: ViewEvent) -> Self {
        match (self, event) {
            (Self::Loading, ViewEvent::LoadComplete) => Self::Portfolio,
            (Self::Portfolio, ViewEvent::ShowContact) => Self::Contact,
            (Self::Contact, ViewEvent::Back) => Self::Portfolio,
            (current, _) => current,
        }
    }
}
